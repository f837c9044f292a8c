//! Random layouts for loose objects (replay tokens + scalene acute triangles).
//!
//! Model
//! - Each picture draws its loose objects from its own RNG. The RNG is derived
//!   from a replay token `(seed, index)` so a bundle is reproducible and every
//!   picture (and every redraw attempt) gets an independent stream.
//! - Three loose points are placed as a random scalene acute triangle that is
//!   neither flat, nearly right-angled nor nearly isosceles; this keeps
//!   accidental coincidences rare.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Circle, Line, Point};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Minimal pairwise gap (degrees) between the triangle's angles, and between the largest angle and 90°.
const ANGLE_GAP_DEG: f64 = 5.0;

/// Random scalene acute triangle with `A = (0,0)`, `B = (1,0)`.
///
/// Draw `α ∈ (60+d, 90-d)` and `β ∈ ((180+d-α)/2, α-d)`; then every two angles
/// differ by at least `d`, the smallest is at least `d` and the largest at most `90-d`.
/// `C` is the intersection of the rays from `A` and `B` with slopes `α` and `180-β`.
pub fn random_scalene_acute_triangle<R: Rng>(rng: &mut R) -> [Point; 3] {
    let d = ANGLE_GAP_DEG;
    // `gen::<f64>()` is in [0, 1), so α lands in (60+d, 90-d] and the β range is never empty.
    let alpha = (90.0 - d) - rng.gen::<f64>() * (30.0 - 2.0 * d);
    let beta: f64 = rng.gen_range(((180.0 + d - alpha) / 2.0)..(alpha - d));
    let tan_alpha = alpha.to_radians().tan();
    let tan_beta_sup = (180.0 - beta).to_radians().tan();
    // Denominator vanishes only for α + β = 180 or α - β = 90, both excluded above.
    let denom = tan_beta_sup - tan_alpha;
    let x = tan_beta_sup / denom;
    let y = tan_alpha * tan_beta_sup / denom;
    [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(x, y)]
}

/// Axis-aligned box loose objects are drawn from.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Vector2::new(-1.0, -1.0),
            max: Vector2::new(2.0, 2.0),
        }
    }
}

/// Uniform point in `bounds`.
pub fn random_point<R: Rng>(rng: &mut R, bounds: Bounds2) -> Point {
    Point::new(
        rng.gen_range(bounds.min.x..bounds.max.x),
        rng.gen_range(bounds.min.y..bounds.max.y),
    )
}

/// Line through two independent uniform points (redrawn on the null-probability coincidence).
pub fn random_line<R: Rng>(rng: &mut R, bounds: Bounds2) -> Line {
    loop {
        let p = random_point(rng, bounds);
        let q = random_point(rng, bounds);
        if let Some(line) = Line::through(p, q) {
            return line;
        }
    }
}

/// Circle with a uniform center and radius in `[0.5, 1.5]` times the box half-diagonal / 2.
pub fn random_circle<R: Rng>(rng: &mut R, bounds: Bounds2) -> Circle {
    let scale = 0.25 * (bounds.max - bounds.min).norm();
    loop {
        let center = random_point(rng, bounds);
        let radius = scale * rng.gen_range(0.5..1.5);
        if let Some(circle) = Circle::new(center, radius) {
            return circle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::are_collinear;

    #[test]
    fn replay_token_is_reproducible() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let t1 = random_scalene_acute_triangle(&mut tok.to_std_rng());
        let t2 = random_scalene_acute_triangle(&mut tok.to_std_rng());
        assert_eq!(t1, t2);
        let other = ReplayToken { seed: 42, index: 8 };
        let t3 = random_scalene_acute_triangle(&mut other.to_std_rng());
        assert_ne!(t1[2], t3[2]);
    }

    #[test]
    fn triangle_is_scalene_and_acute() {
        for index in 0..200 {
            let mut rng = ReplayToken { seed: 3, index }.to_std_rng();
            let [a, b, c] = random_scalene_acute_triangle(&mut rng);
            assert!(!are_collinear(&[a, b, c]));
            let (ab, bc, ca) = (a.distance_to(b), b.distance_to(c), c.distance_to(a));
            let mut sides = [ab, bc, ca];
            sides.sort_by(|x, y| x.partial_cmp(y).unwrap());
            // acute: longest² < sum of the other two squared
            assert!(sides[2] * sides[2] < sides[0] * sides[0] + sides[1] * sides[1]);
            // scalene with a visible gap
            assert!(sides[1] - sides[0] > 1e-3 && sides[2] - sides[1] > 1e-3);
        }
    }
}
