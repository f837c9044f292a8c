//! Analytic geometry (floating point, grid-rounded equality).
//!
//! Purpose
//! - Provide the concrete realizations pictures are made of: points, lines and
//!   circles with `f64` data, plus the two predicates the incidence graph needs
//!   (`lies_on`, `are_collinear`).
//! - Keep tolerance handling in one place (`cfg`), so equality, hashing and the
//!   predicates use the same grid.
//!
//! Code cross-refs: `picture::Picture`, `contextual::ContextualPicture`.

pub mod cfg;
pub mod rand;
mod types;
mod util;

pub use types::{AnalyticObject, Circle, Line, Point};
pub use util::{are_collinear, lies_on};

#[cfg(test)]
mod tests;
