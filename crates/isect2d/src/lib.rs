//! Planar segment intersections with explicit tolerances.
//!
//! Layout
//! - `geom2`: points, segments and tolerance-aware predicates.
//! - `pairwise`: classify one pair of segments and report its points.
//! - `solver`: all-pairs driver with output cleanup and deduplication.
//! - `rand2`: reproducible random segment sets for benches and experiments.
//!
//! Collinear overlaps are reported by their endpoints. Non-finite input is
//! the only error.

pub mod api;
pub mod geom2;
pub mod pairwise;
pub mod rand2;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Point2, Segment2};
pub use solver::{solve, solve_with_defaults, IntersectionSet, SolveCfg, SolveError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        lex_le, orientation, point_on_segment, points_coincide, GeomCfg, Point2, Segment2, Vec2,
    };
    pub use crate::pairwise::{resolve, Contact, PairHits};
    pub use crate::rand2::{draw_segments, GeneratorError, ReplayToken, SegmentCfg};
    pub use crate::solver::{solve, solve_with_defaults, IntersectionSet, SolveCfg, SolveError};
}
