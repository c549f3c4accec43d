//! Python bindings for the amount normalizer
//!
//! Thin wrapper around `amount-core` — ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Normalize free-form amount text to canonical form.
///
/// Args:
///     text: Raw amount text ("1.234,56", "€ 10,50", "1 234,56", ...)
///
/// Returns:
///     Canonical dot-separated decimal string, or "" when the input
///     cannot be confidently resolved to a number
#[pyfunction]
fn sanitize(text: &str) -> String {
    amount_core::normalize(text)
}

/// Normalize free-form amount text, raising on failure.
///
/// Args:
///     text: Raw amount text
///
/// Returns:
///     Canonical dot-separated decimal string ("" for blank input)
///
/// Raises:
///     ValueError: If non-blank input cannot be resolved to a number
#[pyfunction]
fn try_sanitize(text: &str) -> PyResult<String> {
    amount_core::try_normalize(text).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Check whether amount text would be rewritten by sanitization.
///
/// Advisory pre-check for live-typing hosts; commit paths should always
/// call `sanitize` regardless.
///
/// Args:
///     text: Raw amount text
///
/// Returns:
///     True if the text contains a currency marker, whitespace-separated
///     digits, a comma decimal, or a thousands grouping pattern
#[pyfunction]
fn needs_sanitization(text: &str) -> bool {
    amount_core::needs_sanitization(text)
}

/// Amount Python module — locale-agnostic currency amount normalization
#[pymodule]
fn amount(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sanitize, m)?)?;
    m.add_function(wrap_pyfunction!(try_sanitize, m)?)?;
    m.add_function(wrap_pyfunction!(needs_sanitization, m)?)?;
    Ok(())
}
