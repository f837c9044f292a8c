use super::types::{AnalyticObject, Point};

/// Does `point` lie on a line or circle?
///
/// Returns `None` when `object` is itself a point (the question is meaningless).
#[inline]
pub fn lies_on(object: &AnalyticObject, point: Point) -> Option<bool> {
    match object {
        AnalyticObject::Line(line) => Some(line.contains(point)),
        AnalyticObject::Circle(circle) => Some(circle.contains(point)),
        AnalyticObject::Point(_) => None,
    }
}

/// True if all points lie on one line.
///
/// Fewer than three points, or coinciding first two points, count as collinear.
pub fn are_collinear(points: &[Point]) -> bool {
    if points.len() < 3 {
        return true;
    }
    match super::types::Line::through(points[0], points[1]) {
        Some(line) => points[2..].iter().all(|&p| line.contains(p)),
        None => true,
    }
}
