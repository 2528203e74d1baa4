//! Solver configuration, error and the output set.

use std::cmp::Ordering;
use std::collections::{btree_set, BTreeSet};
use std::fmt;

use crate::geom2::{points_coincide, total_cmp_points, GeomCfg, Point2, Segment2};

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    pub geom: GeomCfg,
    /// Round reported coordinates to this many decimal digits before dedup.
    /// `None` keeps full `f64` precision.
    pub round_digits: Option<u32>,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            round_digits: None,
        }
    }
}

impl SolveCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self {
            geom: GeomCfg::with_eps(eps),
            ..Self::default()
        }
    }

    /// Clean one output coordinate: optional rounding, then `-0.0`/near-zero to `+0.0`.
    pub(crate) fn clean(&self, v: f64) -> f64 {
        let v = match self.round_digits {
            Some(d) => round_to(v, d),
            None => v,
        };
        if v.abs() <= self.geom.eps {
            0.0
        } else {
            v
        }
    }
}

/// Beyond this many decimals `10^digits` overflows `f64` and rounding is a no-op.
const MAX_ROUND_DIGITS: u32 = 308;

/// Round half away from zero at `digits` decimal places. Zero results are `+0.0`.
pub(crate) fn round_to(v: f64, digits: u32) -> f64 {
    if digits > MAX_ROUND_DIGITS {
        return v + 0.0;
    }
    // digits <= 308 fits in i32
    let scale = 10f64.powi(digits as i32);
    let r = (v * scale).round() / scale;
    if !r.is_finite() {
        v
    } else if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Errors reported by `solve`.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// A segment has a NaN or infinite coordinate.
    InvalidGeometry { index: usize, segment: Segment2 },
    /// `GeomCfg::eps` is negative, NaN or infinite.
    InvalidTolerance { eps: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { index, segment } => write!(
                f,
                "invalid geometry: segment {index} has a non-finite coordinate \
                 (({}, {}) -> ({}, {}))",
                segment.p.x, segment.p.y, segment.q.x, segment.q.y
            ),
            Self::InvalidTolerance { eps } => write!(
                f,
                "invalid tolerance: eps must be finite and non-negative, got {eps}"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// Point keyed by `f64::total_cmp`, so it can live in an ordered set.
#[derive(Clone, Copy, Debug)]
struct Key(Point2);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Key {}
impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        total_cmp_points(&self.0, &other.0)
    }
}

/// Set of intersection points with exact membership.
///
/// Iteration is lexicographic by (x, y); the order carries no meaning beyond
/// being deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntersectionSet {
    pts: BTreeSet<Key>,
}

impl IntersectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point; returns `false` if an identical point was present.
    pub fn insert(&mut self, p: Point2) -> bool {
        self.pts.insert(Key(p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Exact membership (`-0.0` and `+0.0` are distinct keys; solver output
    /// only ever holds `+0.0`).
    pub fn contains(&self, p: &Point2) -> bool {
        self.pts.contains(&Key(*p))
    }

    /// Membership up to `eps` per coordinate.
    pub fn contains_approx(&self, p: &Point2, eps: f64) -> bool {
        self.iter().any(|q| points_coincide(q, *p, eps))
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2> + '_ {
        self.pts.iter().map(|k| k.0)
    }

    pub fn to_vec(&self) -> Vec<Point2> {
        self.iter().collect()
    }

    /// Copy with every coordinate rounded to `digits` decimal places
    /// (points that collapse together are merged).
    pub fn rounded(&self, digits: u32) -> IntersectionSet {
        self.iter()
            .map(|p| Point2::new(round_to(p.x, digits), round_to(p.y, digits)))
            .collect()
    }
}

impl FromIterator<Point2> for IntersectionSet {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            pts: iter.into_iter().map(Key).collect(),
        }
    }
}

impl Extend<Point2> for IntersectionSet {
    fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        self.pts.extend(iter.into_iter().map(Key));
    }
}

/// Owning iterator over an `IntersectionSet`, in lexicographic order.
pub struct IntoIter(btree_set::IntoIter<Key>);

impl Iterator for IntoIter {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        self.0.next().map(|k| k.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl IntoIterator for IntersectionSet {
    type Item = Point2;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self.pts.into_iter())
    }
}
