//! Multi-realization geometric object graph.
//!
//! A configuration (loose objects plus constructions) is drawn N times with
//! independent random inputs. The contextual picture combines the N drawings
//! into one incidence graph and accepts a relation only if every drawing
//! agrees on it.
//!
//! Layers, bottom-up
//! - `analytic`: numeric points, lines, circles; rounded equality.
//! - `configuration`: symbolic objects and constructions.
//! - `picture`: drawings of a configuration and the constructor producing them.
//! - `contextual`: the incidence graph with its old/new partition.
//!
//! API Policy
//! - The graph is read-only once built; extending it always yields a new graph
//!   (`ContextualPicture::construct_by_cloning`).
//! - Inconsistent drawings are recoverable errors; broken invariants panic.

pub mod analytic;
pub mod configuration;
pub mod contextual;
pub mod picture;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analytic::rand::{Bounds2, ReplayToken};
    pub use crate::analytic::{are_collinear, lies_on, AnalyticObject, Circle, Line, Point};
    pub use crate::configuration::{
        Configuration, ConfigurationError, ConfigurationObject, Construction, ObjectId, ObjectKind,
    };
    pub use crate::contextual::{
        ConstructionMetrics, ContextualPicture, DefinableByPoints, Filter, GeomId, GeometricObject,
        InconsistentPicturesError, InconstructibleContextualPicture,
    };
    pub use crate::picture::{
        ConstructionData, GeometryConstructionError, GeometryConstructor, Picture, PicturesCfg,
        PicturesOfConfiguration,
    };
}
