//! Tolerance-aware predicates on points and segments.
//!
//! Conventions
//! - Segments are closed (endpoints included).
//! - `orientation(a, b, c) > 0` means `a, b, c` turn counterclockwise.
//! - Every comparison against the tolerance is inclusive (`<= eps` is "equal").
//!
//! Code cross-refs: `types::{Point2, Vec2, Segment2}`, `pairwise::resolve`

use std::cmp::Ordering;

use super::types::{Point2, Segment2, Vec2};

#[inline]
pub fn subtract(a: Point2, b: Point2) -> Vec2 {
    a - b
}

/// Scalar 2D cross product `u.x * v.y - u.y * v.x`.
#[inline]
pub fn cross(u: Vec2, v: Vec2) -> f64 {
    u.perp(&v)
}

#[inline]
pub fn dot(u: Vec2, v: Vec2) -> f64 {
    u.dot(&v)
}

/// Twice the signed area of the triangle `a, b, c`: `(b - a) × (c - a)`.
///
/// Sign
/// - `> 0`: `c` lies left of `a -> b` (counterclockwise)
/// - `< 0`: `c` lies right of `a -> b` (clockwise)
/// - `|o| <= eps`: treated as collinear by callers
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    cross(subtract(b, a), subtract(c, a))
}

#[inline]
pub fn is_collinear(a: Point2, b: Point2, c: Point2, eps: f64) -> bool {
    orientation(a, b, c).abs() <= eps
}

/// Coordinate-wise coincidence within `eps`.
#[inline]
pub fn points_coincide(a: Point2, b: Point2, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Lexicographic `a <= b` by x, then y, with ties inside `eps`.
///
/// This is a total preorder, not a strict order: two points closer than `eps`
/// on both axes compare `<=` in both directions.
#[inline]
pub fn lex_le(a: Point2, b: Point2, eps: f64) -> bool {
    if a.x < b.x - eps {
        return true;
    }
    if a.x > b.x + eps {
        return false;
    }
    a.y <= b.y + eps
}

#[inline]
pub fn lex_min(a: Point2, b: Point2, eps: f64) -> Point2 {
    if lex_le(a, b, eps) {
        a
    } else {
        b
    }
}

#[inline]
pub fn lex_max(a: Point2, b: Point2, eps: f64) -> Point2 {
    if lex_le(a, b, eps) {
        b
    } else {
        a
    }
}

/// Bounding-box containment of `p` in `[a, b]`, each axis padded by `eps`.
///
/// Pre: `p` is collinear with `a, b` (within tolerance).
#[inline]
pub fn is_on_segment(a: Point2, b: Point2, p: Point2, eps: f64) -> bool {
    in_range(a.x, b.x, p.x, eps) && in_range(a.y, b.y, p.y, eps)
}

#[inline]
fn in_range(a: f64, b: f64, v: f64, eps: f64) -> bool {
    a.min(b) - eps <= v && v <= a.max(b) + eps
}

/// Collinearity plus bounding-box containment.
#[inline]
pub fn point_on_segment(p: Point2, seg: &Segment2, eps: f64) -> bool {
    if orientation(seg.p, seg.q, p).abs() > eps {
        return false;
    }
    is_on_segment(seg.p, seg.q, p, eps)
}

/// Intersection of the infinite lines through `(p1, p2)` and `(q1, q2)`.
///
/// Returns `None` when the direction cross product is within `eps` of zero
/// (parallel or collinear lines); callers handle that case separately.
pub fn line_intersection(p1: Point2, p2: Point2, q1: Point2, q2: Point2, eps: f64) -> Option<Point2> {
    let r = subtract(p2, p1);
    let s = subtract(q2, q1);
    let denom = cross(r, s);
    if denom.abs() <= eps {
        return None;
    }
    // p1 + t r = q1 + u s
    let t = cross(subtract(q1, p1), s) / denom;
    Some(p1 + r * t)
}

/// Strict lexicographic order on the bit-level values (`f64::total_cmp`).
#[inline]
pub(crate) fn total_cmp_points(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
