//! Geometric objects: symbolic-level nodes of the incidence graph.
//!
//! Nodes live in an arena owned by `ContextualPicture` and refer to each other
//! through `GeomId` handles. A line or circle knows the points on it; a point
//! knows the lines and circles through it. Both directions are kept in sync by
//! the contextual picture, never by the nodes themselves.

use std::collections::BTreeSet;
use std::fmt;

use crate::configuration::{ObjectId, ObjectKind};

/// Handle of a node in a contextual picture's arena.
///
/// Handles are only meaningful for the picture that issued them (and for
/// pictures cloned from it, which copy the arena slot by slot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeomId(pub usize);

/// A point. Points always stem from a configuration object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointObject {
    configuration_object: ObjectId,
    lines: BTreeSet<GeomId>,
    circles: BTreeSet<GeomId>,
}

impl PointObject {
    pub(crate) fn new(configuration_object: ObjectId) -> Self {
        Self {
            configuration_object,
            lines: BTreeSet::new(),
            circles: BTreeSet::new(),
        }
    }
    #[inline]
    pub fn configuration_object(&self) -> ObjectId {
        self.configuration_object
    }
    /// Lines through this point.
    #[inline]
    pub fn lines(&self) -> &BTreeSet<GeomId> {
        &self.lines
    }
    /// Circles through this point.
    #[inline]
    pub fn circles(&self) -> &BTreeSet<GeomId> {
        &self.circles
    }
}

/// Lines and circles: objects known through the points on them.
pub trait DefinableByPoints {
    /// Points needed to determine the object (2 for lines, 3 for circles).
    fn needed_points(&self) -> usize;
    /// All points known to lie on the object.
    fn points(&self) -> &BTreeSet<GeomId>;
    /// The explicit configuration object, if the object was constructed directly
    /// rather than only implied by its points.
    fn configuration_object(&self) -> Option<ObjectId>;

    #[inline]
    fn contains_point(&self, point: GeomId) -> bool {
        self.points().contains(&point)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineObject {
    configuration_object: Option<ObjectId>,
    points: BTreeSet<GeomId>,
}

impl LineObject {
    pub(crate) fn explicit(configuration_object: ObjectId) -> Self {
        Self {
            configuration_object: Some(configuration_object),
            points: BTreeSet::new(),
        }
    }
    pub(crate) fn implicit(a: GeomId, b: GeomId) -> Self {
        Self {
            configuration_object: None,
            points: BTreeSet::from([a, b]),
        }
    }
}

impl DefinableByPoints for LineObject {
    fn needed_points(&self) -> usize {
        2
    }
    fn points(&self) -> &BTreeSet<GeomId> {
        &self.points
    }
    fn configuration_object(&self) -> Option<ObjectId> {
        self.configuration_object
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CircleObject {
    configuration_object: Option<ObjectId>,
    points: BTreeSet<GeomId>,
}

impl CircleObject {
    pub(crate) fn explicit(configuration_object: ObjectId) -> Self {
        Self {
            configuration_object: Some(configuration_object),
            points: BTreeSet::new(),
        }
    }
    pub(crate) fn implicit(a: GeomId, b: GeomId, c: GeomId) -> Self {
        Self {
            configuration_object: None,
            points: BTreeSet::from([a, b, c]),
        }
    }
}

impl DefinableByPoints for CircleObject {
    fn needed_points(&self) -> usize {
        3
    }
    fn points(&self) -> &BTreeSet<GeomId> {
        &self.points
    }
    fn configuration_object(&self) -> Option<ObjectId> {
        self.configuration_object
    }
}

/// Closed set of node types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometricObject {
    Point(PointObject),
    Line(LineObject),
    Circle(CircleObject),
}

impl GeometricObject {
    #[inline]
    pub fn kind(&self) -> ObjectKind {
        match self {
            GeometricObject::Point(_) => ObjectKind::Point,
            GeometricObject::Line(_) => ObjectKind::Line,
            GeometricObject::Circle(_) => ObjectKind::Circle,
        }
    }

    pub fn configuration_object(&self) -> Option<ObjectId> {
        match self {
            GeometricObject::Point(p) => Some(p.configuration_object),
            GeometricObject::Line(l) => l.configuration_object,
            GeometricObject::Circle(c) => c.configuration_object,
        }
    }

    #[inline]
    pub fn as_point(&self) -> Option<&PointObject> {
        match self {
            GeometricObject::Point(p) => Some(p),
            _ => None,
        }
    }
    #[inline]
    pub fn as_line(&self) -> Option<&LineObject> {
        match self {
            GeometricObject::Line(l) => Some(l),
            _ => None,
        }
    }
    #[inline]
    pub fn as_circle(&self) -> Option<&CircleObject> {
        match self {
            GeometricObject::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Lines and circles as `DefinableByPoints`; `None` for points.
    pub fn as_definable(&self) -> Option<&dyn DefinableByPoints> {
        match self {
            GeometricObject::Point(_) => None,
            GeometricObject::Line(l) => Some(l),
            GeometricObject::Circle(c) => Some(c),
        }
    }

    /// Attach an explicit configuration object to an implicit line/circle.
    pub(crate) fn attach(&mut self, id: ObjectId) {
        match self {
            GeometricObject::Line(LineObject {
                configuration_object: slot @ None,
                ..
            })
            | GeometricObject::Circle(CircleObject {
                configuration_object: slot @ None,
                ..
            }) => *slot = Some(id),
            other => panic!("cannot attach {id} to {:?}", other.kind()),
        }
    }

    /// Record `point` on this line/circle.
    pub(crate) fn add_point(&mut self, point: GeomId) {
        match self {
            GeometricObject::Line(l) => l.points.insert(point),
            GeometricObject::Circle(c) => c.points.insert(point),
            GeometricObject::Point(_) => panic!("a point cannot contain point {point:?}"),
        };
    }

    /// Record that this point lies on the line/circle `object` of kind `kind`.
    pub(crate) fn add_incident(&mut self, object: GeomId, kind: ObjectKind) {
        let GeometricObject::Point(p) = self else {
            panic!("only points have incident lines and circles");
        };
        match kind {
            ObjectKind::Line => p.lines.insert(object),
            ObjectKind::Circle => p.circles.insert(object),
            ObjectKind::Point => panic!("points are never incident to points"),
        };
    }
}

/// Snapshot of a node in terms of configuration objects, for error reports.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectTrace {
    pub kind: ObjectKind,
    pub configuration_object: Option<ObjectId>,
    /// Configuration objects of the points on a line/circle (empty for points).
    pub points: BTreeSet<ObjectId>,
}

impl fmt::Display for ObjectTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        match self.configuration_object {
            Some(id) => write!(f, " {id}")?,
            None => write!(f, " (implicit)")?,
        }
        if !self.points.is_empty() {
            let ids: Vec<String> = self.points.iter().map(ToString::to_string).collect();
            write!(f, " through {}", ids.join(", "))?;
        }
        Ok(())
    }
}
