//! PyO3 bindings for the `isect2d` solver.
//!
//! Notes
//! - Input is a sequence of `((x1, y1), (x2, y2))`; ints and floats both work.
//! - Output is a `set` of `(x, y)` tuples, matching the pure-Python callers.
//! - Non-finite coordinates raise `ValueError` naming the segment index.

use pyo3::prelude::*;
use pyo3::types::PySet;

mod common;

use common::{solve_py, to_py_set, PySegment};

/// All intersection points of the given segments.
#[pyfunction]
#[pyo3(signature = (segments, eps = 1e-12))]
fn bentley_ottmann(py: Python<'_>, segments: Vec<PySegment>, eps: f64) -> PyResult<Bound<'_, PySet>> {
    let points = solve_py(segments, eps)?;
    to_py_set(py, &points)
}

/// Alias of `bentley_ottmann`.
#[pyfunction]
#[pyo3(signature = (segments, eps = 1e-12))]
fn find_intersections(py: Python<'_>, segments: Vec<PySegment>, eps: f64) -> PyResult<Bound<'_, PySet>> {
    bentley_ottmann(py, segments, eps)
}

/// Alias of `bentley_ottmann`.
#[pyfunction]
#[pyo3(signature = (segments, eps = 1e-12))]
fn compute_intersections(py: Python<'_>, segments: Vec<PySegment>, eps: f64) -> PyResult<Bound<'_, PySet>> {
    bentley_ottmann(py, segments, eps)
}

#[pymodule]
fn isect2d_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bentley_ottmann, m)?)?;
    m.add_function(wrap_pyfunction!(find_intersections, m)?)?;
    m.add_function(wrap_pyfunction!(compute_intersections, m)?)?;
    m.add("__version__", isect2d::VERSION)?;
    Ok(())
}
