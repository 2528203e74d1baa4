//! Call shapes for callers that hand over raw coordinate pairs.
//!
//! `bentley_ottmann` keeps its historical name: the solver is an exhaustive
//! pairwise one, not a sweep. `find_intersections` and `compute_intersections`
//! are aliases of the same function.

use crate::geom2::Segment2;
use crate::solver::{solve, IntersectionSet, SolveCfg, SolveError};

/// Intersection points of `[((x1, y1), (x2, y2)), ...]` with default settings.
pub fn bentley_ottmann<I, S>(segments: I) -> Result<IntersectionSet, SolveError>
where
    I: IntoIterator<Item = S>,
    S: Into<Segment2>,
{
    bentley_ottmann_with(segments, SolveCfg::default())
}

/// `bentley_ottmann` with an explicit configuration.
pub fn bentley_ottmann_with<I, S>(segments: I, cfg: SolveCfg) -> Result<IntersectionSet, SolveError>
where
    I: IntoIterator<Item = S>,
    S: Into<Segment2>,
{
    let segments: Vec<Segment2> = segments.into_iter().map(Into::into).collect();
    solve(&segments, cfg)
}

pub use self::bentley_ottmann as find_intersections;
pub use self::bentley_ottmann as compute_intersections;
