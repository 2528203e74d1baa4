//! 2D geometry kernel: points, segments and tolerance-aware predicates.
//!
//! Purpose
//! - Provide the numeric primitives the pairwise resolver is built from:
//!   orientation, collinearity, containment, tolerant lexicographic order and
//!   line-line intersection.
//! - Keep every tolerance explicit (`GeomCfg::eps` is passed in, never read
//!   from a global).
//!
//! Code cross-refs: `pairwise::resolve`, `solver::solve`

mod kernel;
mod types;

pub use kernel::{
    cross, dot, is_collinear, is_on_segment, lex_le, lex_max, lex_min, line_intersection,
    orientation, point_on_segment, points_coincide, subtract,
};
pub(crate) use kernel::total_cmp_points;
pub use types::{GeomCfg, Point2, Segment2, Vec2};

#[cfg(test)]
mod tests;
