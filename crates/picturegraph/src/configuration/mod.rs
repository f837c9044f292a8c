//! Symbolic configurations: loose objects and constructions applied to them.
//!
//! A `Configuration` is an append-only list of `ConfigurationObject`s in
//! dependency order. The position of an object is its identity (`ObjectId`);
//! extending a configuration never renumbers, so ids stay valid for every
//! descendant configuration of the generation search.

mod construction;
mod types;

pub use construction::Construction;
pub use types::{Configuration, ConfigurationError, ConfigurationObject, ObjectId, ObjectKind};
