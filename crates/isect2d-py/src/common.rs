use isect2d::{GeomCfg, IntersectionSet, Segment2, SolveCfg, SolveError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PySet;

pub type PySegment = ((f64, f64), (f64, f64));

pub fn solve_py(segments: Vec<PySegment>, eps: f64) -> PyResult<IntersectionSet> {
    if !(eps.is_finite() && eps >= 0.0) {
        return Err(PyValueError::new_err(format!(
            "eps must be a finite non-negative number, got {eps}"
        )));
    }
    let segments: Vec<Segment2> = segments.into_iter().map(Segment2::from).collect();
    let cfg = SolveCfg {
        geom: GeomCfg::with_eps(eps),
        round_digits: None,
    };
    isect2d::solve(&segments, cfg).map_err(map_solve_err)
}

pub fn map_solve_err(err: SolveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// `set[tuple[float, float]]` view of the solved points.
pub fn to_py_set<'py>(py: Python<'py>, points: &IntersectionSet) -> PyResult<Bound<'py, PySet>> {
    let items: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    PySet::new_bound(py, &items)
}
