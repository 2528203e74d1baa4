//! Solver driver: all-pairs resolution, output cleanup and deduplication.
//!
//! Purpose
//! - `solve` resolves every unordered pair `{i, j}` (`i < j`) with
//!   `pairwise::resolve` and unions the results into one `IntersectionSet`.
//! - Reported coordinates are cleaned before insertion: values within `eps` of
//!   zero become `+0.0`, and `SolveCfg::round_digits` optionally rounds to a
//!   fixed number of decimal digits. Deduplication is exact equality after
//!   cleanup, so `round_digits` is the dedup granularity.
//!
//! Complexity is O(n²) in the number of segments. With the `parallel` feature
//! the rows of the pair matrix are spread over rayon workers; the set is
//! ordered, so the result does not depend on scheduling.
//!
//! Code cross-refs: `pairwise::{resolve, PairHits}`, `geom2::GeomCfg`

mod driver;
mod types;

pub use driver::{solve, solve_with_defaults};
pub use types::{IntersectionSet, IntoIter, SolveCfg, SolveError};
