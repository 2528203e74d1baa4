//! Random segment soups in 2D (uniform endpoints + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of segment sets for benchmarks,
//!   experiments and the CLI `generate` command.
//! - Optionally inject the configurations the resolver must handle exactly:
//!   zero-length segments, axis-aligned segments and endpoints snapped to an
//!   integer grid (shared endpoints, T-junctions, collinear overlaps).
//!
//! Model
//! - Each segment starts at a uniform point in the square `[-extent, extent]²`
//!   and extends in a uniform direction by a length in `[0, max_len]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::geom2::{Point2, Segment2};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SegmentCfg {
    pub count: usize,
    /// Half-width of the square that contains all start points.
    pub extent: f64,
    /// Maximum segment length.
    pub max_len: f64,
    /// Probability that a segment collapses to a single point.
    pub degenerate_frac: f64,
    /// Probability that a segment is horizontal or vertical.
    pub axis_aligned_frac: f64,
    /// Snap endpoints to the integer grid.
    pub snap_to_grid: bool,
}

impl Default for SegmentCfg {
    fn default() -> Self {
        Self {
            count: 100,
            extent: 100.0,
            max_len: 40.0,
            degenerate_frac: 0.0,
            axis_aligned_frac: 0.0,
            snap_to_grid: false,
        }
    }
}

/// Largest accepted `extent` / `max_len`; keeps every drawn coordinate finite.
pub const MAX_EXTENT: f64 = 1e300;

impl SegmentCfg {
    /// Reject parameters that `draw_segments` would otherwise clamp.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.extent.is_finite() && self.extent > 0.0 && self.extent <= MAX_EXTENT) {
            return Err(GeneratorError::invalid(format!(
                "extent must be in (0, {MAX_EXTENT:e}], got {}",
                self.extent
            )));
        }
        if !(self.max_len.is_finite() && self.max_len >= 0.0 && self.max_len <= MAX_EXTENT) {
            return Err(GeneratorError::invalid(format!(
                "max_len must be in [0, {MAX_EXTENT:e}], got {}",
                self.max_len
            )));
        }
        for (name, v) in [
            ("degenerate_frac", self.degenerate_frac),
            ("axis_aligned_frac", self.axis_aligned_frac),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(GeneratorError::invalid(format!("{name} must be in [0, 1], got {v}")));
            }
        }
        Ok(())
    }
}

/// Error reported by `SegmentCfg::validate`.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
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

/// Draw `cfg.count` segments. The same `(cfg, tok)` always yields the same set.
///
/// Never panics: out-of-range parameters are clamped (NaN fractions count as
/// 0, infinite lengths as `MAX_EXTENT`). Call `SegmentCfg::validate` first to
/// reject them instead.
pub fn draw_segments(cfg: SegmentCfg, tok: ReplayToken) -> Vec<Segment2> {
    let mut rng = tok.to_std_rng();
    let extent = clamp_or_lo(cfg.extent.abs(), 1e-9, MAX_EXTENT);
    let max_len = clamp_or_lo(cfg.max_len, 0.0, MAX_EXTENT);
    let p_degenerate = clamp_or_lo(cfg.degenerate_frac, 0.0, 1.0);
    let p_axis = clamp_or_lo(cfg.axis_aligned_frac, 0.0, 1.0);

    (0..cfg.count)
        .map(|_| {
            let p = Point2::new(rng.gen_range(-extent..=extent), rng.gen_range(-extent..=extent));
            let q = if rng.gen_bool(p_degenerate) {
                p
            } else if rng.gen_bool(p_axis) {
                let len = rng.gen::<f64>() * max_len;
                match rng.gen_range(0..4u8) {
                    0 => Point2::new(p.x + len, p.y),
                    1 => Point2::new(p.x, p.y + len),
                    2 => Point2::new(p.x - len, p.y),
                    _ => Point2::new(p.x, p.y - len),
                }
            } else {
                let len = rng.gen::<f64>() * max_len;
                let theta = rng.gen::<f64>() * std::f64::consts::TAU;
                Point2::new(p.x + len * theta.cos(), p.y + len * theta.sin())
            };
            if cfg.snap_to_grid {
                Segment2::new(snap(p), snap(q))
            } else {
                Segment2::new(p, q)
            }
        })
        .collect()
}

/// `v.clamp(lo, hi)`, with NaN mapped to `lo`.
#[inline]
fn clamp_or_lo(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

#[inline]
fn snap(p: Point2) -> Point2 {
    Point2::new(p.x.round() + 0.0, p.y.round() + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = SegmentCfg {
            count: 20,
            ..SegmentCfg::default()
        };
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_segments(cfg, tok), draw_segments(cfg, tok));
        let other = draw_segments(cfg, ReplayToken { seed: 7, index: 4 });
        assert_ne!(draw_segments(cfg, tok), other);
    }

    #[test]
    fn respects_extent_and_length() {
        let cfg = SegmentCfg {
            count: 200,
            extent: 10.0,
            max_len: 3.0,
            ..SegmentCfg::default()
        };
        for s in draw_segments(cfg, ReplayToken { seed: 1, index: 0 }) {
            assert!(s.p.x.abs() <= 10.0 && s.p.y.abs() <= 10.0);
            assert!((s.q - s.p).norm() <= 3.0 + 1e-9);
        }
    }

    #[test]
    fn degenerate_and_axis_aligned_injection() {
        let all_points = SegmentCfg {
            count: 50,
            degenerate_frac: 1.0,
            ..SegmentCfg::default()
        };
        assert!(draw_segments(all_points, ReplayToken { seed: 2, index: 0 })
            .iter()
            .all(|s| s.p == s.q));

        let all_axis = SegmentCfg {
            count: 50,
            axis_aligned_frac: 1.0,
            ..SegmentCfg::default()
        };
        assert!(draw_segments(all_axis, ReplayToken { seed: 2, index: 0 })
            .iter()
            .all(|s| s.p.x == s.q.x || s.p.y == s.q.y));
    }

    #[test]
    fn non_finite_params_are_clamped_not_panicking() {
        let cfg = SegmentCfg {
            count: 40,
            extent: f64::INFINITY,
            max_len: f64::NAN,
            degenerate_frac: f64::NAN,
            axis_aligned_frac: f64::NAN,
            snap_to_grid: false,
        };
        let segs = draw_segments(cfg, ReplayToken { seed: 3, index: 0 });
        assert_eq!(segs.len(), 40);
        // NaN max_len clamps to 0, so every segment is a point
        assert!(segs.iter().all(|s| s.is_finite() && s.p == s.q));

        let wide = SegmentCfg {
            count: 40,
            extent: f64::MAX,
            max_len: f64::INFINITY,
            ..SegmentCfg::default()
        };
        assert!(draw_segments(wide, ReplayToken { seed: 3, index: 1 })
            .iter()
            .all(Segment2::is_finite));
    }

    #[test]
    fn validate_rejects_out_of_range_params() {
        assert!(SegmentCfg::default().validate().is_ok());
        let bad = [
            SegmentCfg { extent: f64::INFINITY, ..SegmentCfg::default() },
            SegmentCfg { extent: 0.0, ..SegmentCfg::default() },
            SegmentCfg { max_len: -1.0, ..SegmentCfg::default() },
            SegmentCfg { max_len: f64::NAN, ..SegmentCfg::default() },
            SegmentCfg { degenerate_frac: f64::NAN, ..SegmentCfg::default() },
            SegmentCfg { axis_aligned_frac: 1.5, ..SegmentCfg::default() },
        ];
        for cfg in bad {
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().starts_with("invalid generator params"), "{cfg:?}");
        }
    }

    #[test]
    fn grid_snapping() {
        let cfg = SegmentCfg {
            count: 30,
            snap_to_grid: true,
            ..SegmentCfg::default()
        };
        for s in draw_segments(cfg, ReplayToken { seed: 9, index: 1 }) {
            for v in [s.p.x, s.p.y, s.q.x, s.q.y] {
                assert_eq!(v, v.round());
            }
        }
    }
}
