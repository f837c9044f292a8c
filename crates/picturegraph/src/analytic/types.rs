//! Points, lines and circles with grid-rounded equality.
//!
//! - `Point`: a position in R².
//! - `Line`: `n · x = c` with unit normal `n` in a canonical orientation, so two
//!   descriptions of the same line compare equal.
//! - `Circle`: center and positive radius.
//! - `AnalyticObject`: closed union of the three, the value type stored in pictures.
//!
//! `PartialEq`/`Hash` are implemented on rounded keys (see `cfg::rounded_key`),
//! which keeps `Eq` and `Hash` consistent for use as map keys.

use std::hash::{Hash, Hasher};

use nalgebra::{Matrix2, Vector2};

use super::cfg::{is_zero, rounded_key};
use crate::configuration::ObjectKind;

/// A point in the plane.
#[derive(Clone, Copy, Debug)]
pub struct Point(pub Vector2<f64>);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.0 - other.0).norm()
    }
    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point((self.0 + other.0) * 0.5)
    }
    fn key(&self) -> (i64, i64) {
        (rounded_key(self.0.x), rounded_key(self.0.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Point {}
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Line `n · x = c` with `|n| = 1`.
///
/// Invariants:
/// - `n` is normalized and oriented so that its first nonzero (rounded)
///   coordinate is positive.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Line {
    /// Normalize `(n, c)` into canonical form. `None` if `n` vanishes or the data is not finite.
    pub fn from_normal(n: Vector2<f64>, c: f64) -> Option<Self> {
        let norm = n.norm();
        if !norm.is_finite() || norm <= 0.0 || !c.is_finite() {
            return None;
        }
        let (mut n, mut c) = (n / norm, c / norm);
        let flip = match rounded_key(n.x) {
            0 => n.y < 0.0,
            k => k < 0,
        };
        if flip {
            n = -n;
            c = -c;
        }
        Some(Self { n, c })
    }

    /// Line through two points; `None` if they coincide.
    pub fn through(p: Point, q: Point) -> Option<Self> {
        if p == q {
            return None;
        }
        let d = q.0 - p.0;
        let n = Vector2::new(-d.y, d.x);
        Self::from_normal(n, n.dot(&p.0))
    }

    /// Line through `p` with direction `d`; `None` if `d` vanishes.
    pub fn through_with_direction(p: Point, d: Vector2<f64>) -> Option<Self> {
        let n = Vector2::new(-d.y, d.x);
        Self::from_normal(n, n.dot(&p.0))
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(-self.n.y, self.n.x)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        is_zero(self.n.dot(&p.0) - self.c)
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn project(&self, p: Point) -> Point {
        Point(p.0 - self.n * (self.n.dot(&p.0) - self.c))
    }

    pub fn is_parallel_to(&self, other: &Line) -> bool {
        is_zero(self.n.perp(&other.n))
    }

    /// Unique intersection point; `None` for parallel (or equal) lines.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        if self.is_parallel_to(other) {
            return None;
        }
        let m = Matrix2::new(self.n.x, self.n.y, other.n.x, other.n.y);
        let inv = m.try_inverse()?;
        let p = Point(inv * Vector2::new(self.c, other.c));
        p.is_finite().then_some(p)
    }

    fn key(&self) -> (i64, i64, i64) {
        (rounded_key(self.n.x), rounded_key(self.n.y), rounded_key(self.c))
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Line {}
impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Circle with `radius > 0` (after rounding).
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Circle with a given center and radius; `None` for a (rounded) zero or non-finite radius.
    pub fn new(center: Point, radius: f64) -> Option<Self> {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 || is_zero(radius) {
            return None;
        }
        Some(Self { center, radius })
    }

    /// Circle with center `center` passing through `p`.
    pub fn with_center_through(center: Point, p: Point) -> Option<Self> {
        Self::new(center, center.distance_to(p))
    }

    /// Circumcircle of three points; `None` if they are collinear or two coincide.
    pub fn through(a: Point, b: Point, c: Point) -> Option<Self> {
        if super::util::are_collinear(&[a, b, c]) {
            return None;
        }
        // 2(b-a)·x = |b|²-|a|², 2(c-a)·x = |c|²-|a|²
        let ab = b.0 - a.0;
        let ac = c.0 - a.0;
        let m = Matrix2::new(2.0 * ab.x, 2.0 * ab.y, 2.0 * ac.x, 2.0 * ac.y);
        let rhs = Vector2::new(
            b.0.norm_squared() - a.0.norm_squared(),
            c.0.norm_squared() - a.0.norm_squared(),
        );
        let center = Point(m.try_inverse()? * rhs);
        Self::with_center_through(center, a)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        is_zero(self.center.distance_to(p) - self.radius)
    }

    fn key(&self) -> (i64, i64, i64) {
        let (x, y) = self.center.key();
        (x, y, rounded_key(self.radius))
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for Circle {}
impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Any analytic object a picture can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnalyticObject {
    Point(Point),
    Line(Line),
    Circle(Circle),
}

impl AnalyticObject {
    #[inline]
    pub fn kind(&self) -> ObjectKind {
        match self {
            AnalyticObject::Point(_) => ObjectKind::Point,
            AnalyticObject::Line(_) => ObjectKind::Line,
            AnalyticObject::Circle(_) => ObjectKind::Circle,
        }
    }
    #[inline]
    pub fn as_point(&self) -> Option<Point> {
        match *self {
            AnalyticObject::Point(p) => Some(p),
            _ => None,
        }
    }
    #[inline]
    pub fn as_line(&self) -> Option<Line> {
        match *self {
            AnalyticObject::Line(l) => Some(l),
            _ => None,
        }
    }
    #[inline]
    pub fn as_circle(&self) -> Option<Circle> {
        match *self {
            AnalyticObject::Circle(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Point> for AnalyticObject {
    fn from(p: Point) -> Self {
        AnalyticObject::Point(p)
    }
}
impl From<Line> for AnalyticObject {
    fn from(l: Line) -> Self {
        AnalyticObject::Line(l)
    }
}
impl From<Circle> for AnalyticObject {
    fn from(c: Circle) -> Self {
        AnalyticObject::Circle(c)
    }
}
