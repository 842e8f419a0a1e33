//! # restables-python
//!
//! Python bindings for the restables grid table / list table converter,
//! built with PyO3.
//!
//! Exposes the following functions to Python as the `_native` module:
//!
//! - `grid_to_list_table(text)` -- grid table -> list table
//! - `list_table_to_grid(text)` -- list table -> grid table
//! - `convert(text, target=None, fit_widths=False)` -- either direction
//! - `detect_notation(text)` -- "grid", "list-table" or None

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use restables::{ConversionError, ConvertOptions, Notation};

fn to_py_err(err: ConversionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Convert a grid table to a list table.
///
/// Raises:
///     ValueError: If the input is not a well-formed grid table.
#[pyfunction]
fn grid_to_list_table(text: &str) -> PyResult<String> {
    restables::grid_to_list_table(text).map_err(to_py_err)
}

/// Convert a list table to a grid table.
///
/// Raises:
///     ValueError: If the input is not a well-formed list table.
#[pyfunction]
fn list_table_to_grid(text: &str) -> PyResult<String> {
    restables::list_table_to_grid(text).map_err(to_py_err)
}

/// Convert a table, detecting its notation.
///
/// Args:
///     text: A grid table or list table, possibly indented.
///     target: "grid", "list" or None for the other notation.
///     fit_widths: Widen grid columns to fit their content.
///
/// Returns:
///     The converted table.
///
/// Raises:
///     ValueError: If the input is not a table or `target` is unknown.
#[pyfunction]
#[pyo3(signature = (text, target=None, fit_widths=false))]
fn convert(text: &str, target: Option<&str>, fit_widths: bool) -> PyResult<String> {
    let target = match target {
        None => None,
        Some("grid") => Some(Notation::Grid),
        Some("list") | Some("list-table") => Some(Notation::ListTable),
        Some(other) => {
            return Err(PyValueError::new_err(format!(
                "unknown target notation {:?}",
                other
            )))
        }
    };
    let options = ConvertOptions {
        target,
        keep_notation: false,
        fit_widths,
    };
    restables::convert_table(text, &options)
        .map(|out| out.content)
        .map_err(to_py_err)
}

/// Detect the notation of a table: "grid", "list-table" or None.
#[pyfunction]
fn detect_notation(text: &str) -> Option<&'static str> {
    restables::detect_notation(text).map(|n| n.name())
}

/// The `_native` Python module, implemented in Rust via PyO3.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(grid_to_list_table, m)?)?;
    m.add_function(wrap_pyfunction!(list_table_to_grid, m)?)?;
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(detect_notation, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
