//! Pairwise segment intersection: classify one pair and report its points.
//!
//! Purpose
//! - Resolve a single pair of closed segments into 0..=2 intersection points
//!   (more only when several endpoints fall inside the tolerance band).
//! - Handle every degeneracy without errors: zero-length segments, verticals,
//!   shared endpoints, T-junctions and collinear overlaps.
//!
//! Collinear overlap policy
//! - An overlap is reported by its two endpoints (one point when the overlap
//!   collapses to a touch). There is no "infinitely many points" signal.
//!
//! Symmetry
//! - Both segments and the pair itself are put into `f64::total_cmp` order
//!   before any arithmetic, so `resolve(a, b)` and `resolve(b, a)` run the
//!   same floating-point operations and agree bit for bit.
//!
//! Code cross-refs: `geom2::{orientation, is_on_segment, line_intersection}`, `solver::solve`

use crate::geom2::{
    is_on_segment, lex_le, lex_max, lex_min, line_intersection, orientation, point_on_segment,
    points_coincide, total_cmp_points, GeomCfg, Point2, Segment2,
};

/// How two segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Contact {
    /// No common point.
    Disjoint,
    /// Interiors cross at a single point.
    Crossing,
    /// The segments share boundary points (an endpoint lies on the other
    /// segment) but do not overlap along a stretch.
    Touching,
    /// Collinear segments sharing a stretch; reported by its two endpoints.
    Overlap,
    /// At least one segment is a point lying on the other.
    PointOnSegment,
}

/// Result of resolving one pair: its classification and the reported points,
/// sorted lexicographically and free of exact duplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct PairHits {
    pub contact: Contact,
    pub points: Vec<Point2>,
}

impl PairHits {
    #[inline]
    fn disjoint() -> Self {
        Self {
            contact: Contact::Disjoint,
            points: Vec::new(),
        }
    }

    #[inline]
    fn single(contact: Contact, p: Point2) -> Self {
        Self {
            contact,
            points: vec![p],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Resolve the intersection of two closed segments.
pub fn resolve(s1: &Segment2, s2: &Segment2, cfg: GeomCfg) -> PairHits {
    let (a, b) = canonical_pair(s1, s2);
    resolve_ordered(&a, &b, cfg.eps)
}

fn canonical_pair(s1: &Segment2, s2: &Segment2) -> (Segment2, Segment2) {
    let a = s1.canonical();
    let b = s2.canonical();
    let ord = total_cmp_points(&a.p, &b.p).then_with(|| total_cmp_points(&a.q, &b.q));
    if ord.is_le() {
        (a, b)
    } else {
        (b, a)
    }
}

fn resolve_ordered(s1: &Segment2, s2: &Segment2, eps: f64) -> PairHits {
    let d1 = s1.is_degenerate(eps);
    let d2 = s2.is_degenerate(eps);
    if d1 || d2 {
        return resolve_degenerate(s1, s2, d1, d2, eps);
    }

    let (p1, p2) = (s1.p, s1.q);
    let (q1, q2) = (s2.p, s2.q);
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);

    // Strictly opposite signs on both sides; touching and collinear fall through.
    if o1 * o2 < -eps && o3 * o4 < -eps {
        return match line_intersection(p1, p2, q1, q2, eps) {
            Some(p) => PairHits::single(Contact::Crossing, p),
            None => PairHits::disjoint(),
        };
    }

    let mut points: Vec<Point2> = Vec::with_capacity(4);
    if o1.abs() <= eps && is_on_segment(p1, p2, q1, eps) {
        points.push(q1);
    }
    if o2.abs() <= eps && is_on_segment(p1, p2, q2, eps) {
        points.push(q2);
    }
    if o3.abs() <= eps && is_on_segment(q1, q2, p1, eps) {
        points.push(p1);
    }
    if o4.abs() <= eps && is_on_segment(q1, q2, p2, eps) {
        points.push(p2);
    }

    let collinear = [o1, o2, o3, o4].iter().all(|o| o.abs() <= eps);
    if collinear {
        points.extend(collinear_overlap(s1, s2, eps));
    }
    sort_dedup(&mut points);

    let contact = match points.len() {
        0 => Contact::Disjoint,
        1 => Contact::Touching,
        _ if collinear => Contact::Overlap,
        _ => Contact::Touching,
    };
    PairHits { contact, points }
}

fn resolve_degenerate(s1: &Segment2, s2: &Segment2, d1: bool, d2: bool, eps: f64) -> PairHits {
    let hit = match (d1, d2) {
        (true, true) => points_coincide(s1.p, s2.p, eps).then_some(s1.p),
        (true, false) => point_on_segment(s1.p, s2, eps).then_some(s1.p),
        (false, true) => point_on_segment(s2.p, s1, eps).then_some(s2.p),
        (false, false) => None,
    };
    match hit {
        Some(p) => PairHits::single(Contact::PointOnSegment, p),
        None => PairHits::disjoint(),
    }
}

/// Endpoints of the shared stretch of two collinear segments (0, 1 or 2 points).
fn collinear_overlap(s1: &Segment2, s2: &Segment2, eps: f64) -> Vec<Point2> {
    let (a_lo, a_hi) = s1.left_right(eps);
    let (b_lo, b_hi) = s2.left_right(eps);

    let lo = lex_max(a_lo, b_lo, eps);
    let hi = lex_min(a_hi, b_hi, eps);
    if !lex_le(lo, hi, eps) {
        return Vec::new();
    }
    if points_coincide(lo, hi, eps) {
        vec![lo]
    } else {
        vec![lo, hi]
    }
}

fn sort_dedup(points: &mut Vec<Point2>) {
    points.sort_by(total_cmp_points);
    points.dedup();
}
