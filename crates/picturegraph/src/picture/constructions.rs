//! Numeric formulas of the predefined constructions.
//!
//! Every formula returns `None` when the object cannot be constructed from the
//! given input (coinciding points, parallel lines, collinear triples, ...).
//! That is an expected outcome reported upstream as "inconstructible", not an error.

use crate::analytic::{AnalyticObject, Circle, Line, Point};
use crate::configuration::Construction;

/// Apply `construction` to realized `inputs` (ordered as in its signature).
pub fn construct(construction: Construction, inputs: &[AnalyticObject]) -> Option<AnalyticObject> {
    let point = |i: usize| inputs.get(i).and_then(AnalyticObject::as_point);
    let line = |i: usize| inputs.get(i).and_then(AnalyticObject::as_line);
    let result: AnalyticObject = match construction {
        Construction::LineFromPoints => Line::through(point(0)?, point(1)?)?.into(),
        Construction::Circumcircle => Circle::through(point(0)?, point(1)?, point(2)?)?.into(),
        Construction::CircleWithCenterThroughPoint => {
            Circle::with_center_through(point(0)?, point(1)?)?.into()
        }
        Construction::CenterOfCircle => {
            let circle = inputs.first().and_then(AnalyticObject::as_circle)?;
            circle.center.into()
        }
        Construction::IntersectionOfLines => line(0)?.intersection_with(&line(1)?)?.into(),
        Construction::InternalAngleBisector => {
            internal_angle_bisector(point(0)?, point(1)?, point(2)?)?.into()
        }
        Construction::PointReflection => {
            let (a, b) = (point(0)?, point(1)?);
            Point(b.0 * 2.0 - a.0).into()
        }
        Construction::Midpoint => point(0)?.midpoint(point(1)?).into(),
        Construction::PerpendicularProjection => line(1)?.project(point(0)?).into(),
        Construction::PerpendicularLine => {
            let l = line(1)?;
            Line::through_with_direction(point(0)?, l.n)?.into()
        }
        Construction::ParallelLine => {
            let l = line(1)?;
            Line::through_with_direction(point(0)?, l.direction())?.into()
        }
        Construction::PerpendicularBisector => {
            let (a, b) = (point(0)?, point(1)?);
            if a == b {
                return None;
            }
            let n = b.0 - a.0;
            Line::from_normal(n, n.dot(&a.midpoint(b).0))?.into()
        }
    };
    match result {
        AnalyticObject::Point(p) if !p.is_finite() => None,
        other => Some(other),
    }
}

/// Internal bisector of angle BAC, as line AX with X on BC and BX/XC = AB/AC.
fn internal_angle_bisector(a: Point, b: Point, c: Point) -> Option<Line> {
    let ab = a.distance_to(b);
    let ac = a.distance_to(c);
    let sum = ab + ac;
    if sum <= 0.0 {
        return None;
    }
    let x = Point(b.0 + (c.0 - b.0) * (ab / sum));
    Line::through(a, x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> AnalyticObject {
        Point::new(x, y).into()
    }

    #[test]
    fn midpoint_and_reflection() {
        let m = construct(Construction::Midpoint, &[p(0.0, 0.0), p(2.0, 4.0)]).unwrap();
        assert_eq!(m, p(1.0, 2.0));
        let r = construct(Construction::PointReflection, &[p(0.0, 0.0), p(1.0, 2.0)]).unwrap();
        assert_eq!(r, p(2.0, 4.0));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = construct(Construction::LineFromPoints, &[p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
        let l2 = construct(Construction::ParallelLine, &[p(0.0, 1.0), l1]).unwrap();
        assert!(construct(Construction::IntersectionOfLines, &[l1, l2]).is_none());
        let l3 = construct(Construction::PerpendicularLine, &[p(0.0, 1.0), l1]).unwrap();
        let x = construct(Construction::IntersectionOfLines, &[l1, l3]).unwrap();
        assert_eq!(x, p(0.5, 0.5));
        let foot = construct(Construction::PerpendicularProjection, &[p(0.0, 1.0), l1]).unwrap();
        assert_eq!(foot, x);
    }

    #[test]
    fn circles_and_centers() {
        let c = construct(
            Construction::Circumcircle,
            &[p(1.0, 0.0), p(-1.0, 0.0), p(0.0, 1.0)],
        )
        .unwrap();
        let center = construct(Construction::CenterOfCircle, &[c]).unwrap();
        assert_eq!(center, p(0.0, 0.0));
        let c2 = construct(
            Construction::CircleWithCenterThroughPoint,
            &[p(0.0, 0.0), p(0.0, -1.0)],
        )
        .unwrap();
        assert_eq!(c, c2);
        assert!(construct(
            Construction::Circumcircle,
            &[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]
        )
        .is_none());
    }

    #[test]
    fn bisectors() {
        // Isosceles: the angle bisector at the apex is the perpendicular bisector of the base.
        let (a, b, c) = (p(0.0, 2.0), p(-1.0, 0.0), p(1.0, 0.0));
        let bis = construct(Construction::InternalAngleBisector, &[a, b, c]).unwrap();
        let perp = construct(Construction::PerpendicularBisector, &[b, c]).unwrap();
        assert_eq!(bis, perp);
        assert!(construct(Construction::PerpendicularBisector, &[b, b]).is_none());
    }

    #[test]
    fn wrong_input_kinds_are_inconstructible() {
        let l = construct(Construction::LineFromPoints, &[p(0.0, 0.0), p(1.0, 1.0)]).unwrap();
        assert!(construct(Construction::Midpoint, &[p(0.0, 0.0), l]).is_none());
        assert!(construct(Construction::Midpoint, &[p(0.0, 0.0)]).is_none());
    }
}
