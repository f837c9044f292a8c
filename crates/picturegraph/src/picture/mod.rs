//! Pictures: numeric realizations of a configuration.
//!
//! Purpose
//! - `Picture`: one realization, a bijection `ObjectId ↔ AnalyticObject`
//!   with add-time duplicate detection. No numeric logic lives here.
//! - `PicturesOfConfiguration`: N independent pictures of the same
//!   configuration, the unit of redundancy against accidental coincidences.
//! - `GeometryConstructor`: draws and extends bundles (see `constructor`).
//!
//! Code cross-refs: `analytic::AnalyticObject`, `contextual::ContextualPicture`.

pub mod constructions;
mod constructor;
mod types;

pub use constructor::{
    ConstructionData, GeometryConstructionError, GeometryConstructor, PicturesCfg,
};
pub use types::{Picture, PicturesOfConfiguration};

#[cfg(test)]
mod tests;
