use std::collections::BTreeSet;

use thiserror::Error;

use super::objects::ObjectTrace;
use crate::configuration::ObjectId;

fn list<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The pictures of a bundle disagree on a geometric fact.
///
/// Carries configuration-level identities only, so it stays meaningful after
/// the partially built graph has been dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InconsistentPicturesError {
    #[error("pictures disagree on whether {} are collinear", list(.points))]
    Collinearity { points: BTreeSet<ObjectId> },
    #[error("pictures disagree on whether {} are concyclic", list(.points))]
    Concyclity { points: BTreeSet<ObjectId> },
    #[error("pictures disagree on whether {point} lies on {object}")]
    Incidence { point: ObjectId, object: ObjectTrace },
    #[error("pictures disagree on what {object} equals (candidates: {})", list(.equal_objects))]
    Equality {
        object: ObjectId,
        equal_objects: Vec<ObjectTrace>,
    },
    #[error("no line through {} in some picture", list(.points))]
    UnconstructibleLine { points: [ObjectId; 2] },
    #[error("no circle through {} in some picture", list(.points))]
    UnconstructibleCircle { points: [ObjectId; 3] },
}

/// Building a contextual picture from scratch failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("contextual picture cannot be constructed: {inner}")]
pub struct InconstructibleContextualPicture {
    #[from]
    pub inner: InconsistentPicturesError,
}
