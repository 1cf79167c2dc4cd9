//! Shared helpers for the cross-crate tests.

/// Returns `n` evenly spaced values covering `[start, end]`.
///
/// # Panics
///
/// Panics if `n < 2`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "linspace needs at least two points");
    (0..n)
        .map(|i| start + (end - start) * (i as f64) / ((n - 1) as f64))
        .collect()
}
