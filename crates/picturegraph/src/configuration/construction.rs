//! Catalogue of predefined constructions with typed signatures.

use super::types::ObjectKind::{self, Circle, Line, Point};

/// A construction whose numeric formula is implemented in `picture::constructions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Construction {
    /// Line through points A, B.
    LineFromPoints,
    /// Circle through points A, B, C.
    Circumcircle,
    /// Circle with center A through point B.
    CircleWithCenterThroughPoint,
    /// Center of circle c.
    CenterOfCircle,
    /// Intersection of lines l, m.
    IntersectionOfLines,
    /// Internal bisector of angle BAC (arguments A, B, C).
    InternalAngleBisector,
    /// Reflection of A about point B.
    PointReflection,
    /// Midpoint of segment AB.
    Midpoint,
    /// Foot of the perpendicular from A to line l.
    PerpendicularProjection,
    /// Line through A perpendicular to l.
    PerpendicularLine,
    /// Line through A parallel to l.
    ParallelLine,
    /// Perpendicular bisector of segment AB.
    PerpendicularBisector,
}

impl Construction {
    pub const ALL: [Construction; 12] = [
        Construction::LineFromPoints,
        Construction::Circumcircle,
        Construction::CircleWithCenterThroughPoint,
        Construction::CenterOfCircle,
        Construction::IntersectionOfLines,
        Construction::InternalAngleBisector,
        Construction::PointReflection,
        Construction::Midpoint,
        Construction::PerpendicularProjection,
        Construction::PerpendicularLine,
        Construction::ParallelLine,
        Construction::PerpendicularBisector,
    ];

    /// Ordered kinds of the arguments.
    pub fn signature(self) -> &'static [ObjectKind] {
        match self {
            Construction::LineFromPoints => &[Point, Point],
            Construction::Circumcircle => &[Point, Point, Point],
            Construction::CircleWithCenterThroughPoint => &[Point, Point],
            Construction::CenterOfCircle => &[Circle],
            Construction::IntersectionOfLines => &[Line, Line],
            Construction::InternalAngleBisector => &[Point, Point, Point],
            Construction::PointReflection => &[Point, Point],
            Construction::Midpoint => &[Point, Point],
            Construction::PerpendicularProjection => &[Point, Line],
            Construction::PerpendicularLine => &[Point, Line],
            Construction::ParallelLine => &[Point, Line],
            Construction::PerpendicularBisector => &[Point, Point],
        }
    }

    /// Kind of the constructed object.
    pub fn output_kind(self) -> ObjectKind {
        match self {
            Construction::LineFromPoints
            | Construction::InternalAngleBisector
            | Construction::PerpendicularLine
            | Construction::ParallelLine
            | Construction::PerpendicularBisector => Line,
            Construction::Circumcircle | Construction::CircleWithCenterThroughPoint => Circle,
            Construction::CenterOfCircle
            | Construction::IntersectionOfLines
            | Construction::PointReflection
            | Construction::Midpoint
            | Construction::PerpendicularProjection => Point,
        }
    }
}
