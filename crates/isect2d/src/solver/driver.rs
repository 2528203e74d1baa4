use std::collections::HashSet;

use crate::geom2::{Point2, Segment2};
use crate::pairwise::resolve;

use super::types::{IntersectionSet, SolveCfg, SolveError};

/// Intersection points of all unordered segment pairs.
///
/// Pre: none. A negative or non-finite `eps` is rejected with
/// `SolveError::InvalidTolerance`; non-finite coordinates are rejected with
/// `SolveError::InvalidGeometry` naming the first offending segment.
/// Post: every returned point lies within tolerance of at least two input
/// segments; coordinates are cleaned per `SolveCfg`.
///
/// Exact duplicates (same endpoints in either order) are resolved once, so
/// repeating input segments never adds points. Segments that merely overlap
/// still report their overlap endpoints.
pub fn solve(segments: &[Segment2], cfg: SolveCfg) -> Result<IntersectionSet, SolveError> {
    validate_eps(cfg.geom.eps)?;
    validate(segments)?;

    let unique = dedup_exact(segments);
    let raw = collect_hits(&unique, cfg);
    let raw_len = raw.len();
    let out: IntersectionSet = raw
        .into_iter()
        .map(|p| Point2::new(cfg.clean(p.x), cfg.clean(p.y)))
        .collect();

    let n = segments.len();
    tracing::debug!(
        segments = n,
        unique = unique.len(),
        pairs = unique.len() * unique.len().saturating_sub(1) / 2,
        raw_hits = raw_len,
        points = out.len(),
        eps = cfg.geom.eps,
        "solve"
    );
    Ok(out)
}

/// `solve` with `SolveCfg::default()`.
pub fn solve_with_defaults(segments: &[Segment2]) -> Result<IntersectionSet, SolveError> {
    solve(segments, SolveCfg::default())
}

fn validate_eps(eps: f64) -> Result<(), SolveError> {
    if eps.is_finite() && eps >= 0.0 {
        Ok(())
    } else {
        tracing::warn!(eps, "rejecting tolerance");
        Err(SolveError::InvalidTolerance { eps })
    }
}

fn validate(segments: &[Segment2]) -> Result<(), SolveError> {
    match segments.iter().position(|s| !s.is_finite()) {
        Some(index) => {
            tracing::warn!(index, "rejecting segment with non-finite coordinate");
            Err(SolveError::InvalidGeometry {
                index,
                segment: segments[index],
            })
        }
        None => Ok(()),
    }
}

/// Drop exact repeats, keeping first occurrences in input order.
fn dedup_exact(segments: &[Segment2]) -> Vec<Segment2> {
    fn unsigned_zero(p: Point2) -> Point2 {
        // -0.0 + 0.0 == +0.0
        Point2::new(p.x + 0.0, p.y + 0.0)
    }
    let mut seen: HashSet<[u64; 4]> = HashSet::with_capacity(segments.len());
    segments
        .iter()
        .filter(|s| {
            let c = Segment2::new(unsigned_zero(s.p), unsigned_zero(s.q)).canonical();
            seen.insert([c.p.x.to_bits(), c.p.y.to_bits(), c.q.x.to_bits(), c.q.y.to_bits()])
        })
        .copied()
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_hits(segments: &[Segment2], cfg: SolveCfg) -> Vec<Point2> {
    collect_hits_seq(segments, cfg)
}

#[cfg(feature = "parallel")]
fn collect_hits(segments: &[Segment2], cfg: SolveCfg) -> Vec<Point2> {
    collect_hits_par(segments, cfg)
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(super) fn collect_hits_seq(segments: &[Segment2], cfg: SolveCfg) -> Vec<Point2> {
    (0..segments.len())
        .flat_map(|i| row_hits(segments, i, cfg))
        .collect()
}

#[cfg(feature = "parallel")]
pub(super) fn collect_hits_par(segments: &[Segment2], cfg: SolveCfg) -> Vec<Point2> {
    use rayon::prelude::*;
    (0..segments.len())
        .into_par_iter()
        .flat_map_iter(|i| row_hits(segments, i, cfg))
        .collect()
}

/// Hits of segment `i` against every later segment `j > i`.
fn row_hits(segments: &[Segment2], i: usize, cfg: SolveCfg) -> Vec<Point2> {
    let si = &segments[i];
    let mut out = Vec::new();
    for (j, sj) in segments.iter().enumerate().skip(i + 1) {
        let hits = resolve(si, sj, cfg.geom);
        if hits.is_empty() {
            continue;
        }
        tracing::trace!(i, j, contact = ?hits.contact, points = hits.points.len(), "pair");
        out.extend(hits.points);
    }
    out
}
