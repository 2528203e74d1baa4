//! Basic 2D types and the tolerance configuration shared by all predicates.
//!
//! - `GeomCfg`: the single absolute tolerance used for every comparison.
//! - `Segment2`: raw endpoint pair `(p, q)`, possibly degenerate.
//!
//! Code cross-refs: `kernel::{orientation, lex_le, point_on_segment}`

use nalgebra::{Point2 as NPoint2, Vector2};

/// Point in the plane (named fields `x`, `y`).
pub type Point2 = NPoint2<f64>;
/// Displacement between two points.
pub type Vec2 = Vector2<f64>;

/// Geometry configuration (tolerance).
///
/// `eps` is absolute. It bounds coordinate differences in `lex_le`,
/// `points_coincide` and the bounding-box padding, and it also bounds the
/// orientation determinant and crossing products, which scale with the square
/// of the coordinate magnitude. Inputs far from unit scale should pick `eps`
/// accordingly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-12 }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }
}

/// Closed segment between the raw endpoints `p` and `q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub p: Point2,
    pub q: Point2,
}

impl Segment2 {
    #[inline]
    pub fn new(p: Point2, q: Point2) -> Self {
        Self { p, q }
    }

    /// Build from raw coordinate pairs, normalizing every coordinate to `f64`.
    pub fn from_coords<T: Into<f64>>(p: (T, T), q: (T, T)) -> Self {
        Self {
            p: Point2::new(p.0.into(), p.1.into()),
            q: Point2::new(q.0.into(), q.1.into()),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p.x.is_finite() && self.p.y.is_finite() && self.q.x.is_finite() && self.q.y.is_finite()
    }

    /// True when both endpoints coincide within `eps` (the segment is a point).
    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        super::kernel::points_coincide(self.p, self.q, eps)
    }

    /// Endpoints as `(left, right)` in tolerant lexicographic order (x, then y).
    pub fn left_right(&self, eps: f64) -> (Point2, Point2) {
        if super::kernel::lex_le(self.p, self.q, eps) {
            (self.p, self.q)
        } else {
            (self.q, self.p)
        }
    }

    /// Height of the segment's supporting line at the vertical line `x`.
    ///
    /// Vertical segments report their lower endpoint's y so that callers
    /// ordering segments along a sweep line get a stable representative.
    pub fn y_at(&self, x: f64, eps: f64) -> f64 {
        let (a, b) = (self.p, self.q);
        if (a.x - b.x).abs() <= eps {
            return a.y.min(b.y);
        }
        let t = (x - a.x) / (b.x - a.x);
        a.y + t * (b.y - a.y)
    }

    /// Same segment with endpoints in `f64::total_cmp` order.
    ///
    /// Unlike `left_right` this ignores the tolerance, so the result is a
    /// strict function of the bit patterns.
    pub(crate) fn canonical(&self) -> Segment2 {
        if super::kernel::total_cmp_points(&self.p, &self.q).is_le() {
            *self
        } else {
            Segment2 {
                p: self.q,
                q: self.p,
            }
        }
    }
}

impl<T: Into<f64>> From<((T, T), (T, T))> for Segment2 {
    fn from(raw: ((T, T), (T, T))) -> Self {
        Segment2::from_coords(raw.0, raw.1)
    }
}

impl From<[[f64; 2]; 2]> for Segment2 {
    fn from(raw: [[f64; 2]; 2]) -> Self {
        Segment2::new(
            Point2::new(raw[0][0], raw[0][1]),
            Point2::new(raw[1][0], raw[1][1]),
        )
    }
}
