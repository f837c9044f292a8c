//! Contextual picture: the incidence graph of a configuration.
//!
//! Purpose
//! - Turn a bundle of N pictures into one symbolic graph of points, lines and
//!   circles, including lines through every two points and circles through
//!   every three non-collinear points that the configuration never names.
//! - Accept a relation only if all N pictures agree on it; any split verdict
//!   aborts construction with an `InconsistentPicturesError`.
//! - Mark which nodes the newest configuration object introduced (old/new
//!   partition), so theorem search can restrict itself to new facts.
//! - Extend a graph by one object via `construct_by_cloning`, with the same
//!   result as a rebuild from scratch.
//!
//! Layout
//! - `objects`: arena nodes and `GeomId` handles.
//! - `types`: the graph and its read-only queries.
//! - `build`: from-scratch construction, cloning, resolution of implicit lines
//!   and circles.
//!
//! Code cross-refs: `picture::PicturesOfConfiguration`, `analytic::lies_on`.

mod build;
mod error;
mod map;
mod metrics;
mod objects;
mod types;

pub use error::{InconsistentPicturesError, InconstructibleContextualPicture};
pub use metrics::ConstructionMetrics;
pub use objects::{
    CircleObject, DefinableByPoints, GeomId, GeometricObject, LineObject, ObjectTrace, PointObject,
};
pub use types::{ContextualPicture, Filter};
