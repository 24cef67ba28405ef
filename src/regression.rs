//! Ordinary least-squares fit of a line `y = slope * x + intercept`.
//!
//! # Examples
//!
//! ```
//! use anscombe_regression::regression::fit;
//! use approx::assert_abs_diff_eq;
//!
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [3.0, 5.0, 7.0, 9.0];
//! let line = fit(&x, &y).unwrap();
//! assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);
//! assert_abs_diff_eq!(line.intercept, 1.0, epsilon = 1e-12);
//! ```

use serde::Serialize;

use crate::error::{RegressionError, Result};

/// A fitted regression line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fit {
    /// Coefficient of `x`.
    pub slope: f64,
    /// Value of the line at `x = 0`.
    pub intercept: f64,
}

impl Fit {
    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Arithmetic mean of `values`, or `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Applies the least-squares formula without any validation.
///
/// Returns `(slope, intercept)`. When every `x` is equal the denominator is
/// zero and the slope comes out as `NaN`, following IEEE 754.
/// Only the first `min(x.len(), y.len())` pairs contribute, means included.
pub fn slope_and_intercept(x: &[f64], y: &[f64]) -> (f64, f64) {
    let (numerator, denominator, mean_x, mean_y) = sums(x, y);
    let slope = numerator / denominator;
    (slope, mean_y - slope * mean_x)
}

/// Fits a line through `(x[i], y[i])`.
///
/// # Errors
/// - `RegressionError::ShapeMismatch` if `y` and `x` differ in length.
/// - `RegressionError::InvalidInput` if there are fewer than 2 points.
/// - `RegressionError::ZeroVariance` if all `x` values are identical.
pub fn fit(x: &[f64], y: &[f64]) -> Result<Fit> {
    if x.len() != y.len() {
        return Err(RegressionError::ShapeMismatch {
            what: "y",
            got: y.len(),
            expected: x.len(),
        });
    }
    if x.len() < 2 {
        return Err(RegressionError::InvalidInput("need at least 2 points"));
    }

    if is_constant(x) {
        return Err(RegressionError::ZeroVariance);
    }

    let (numerator, denominator, mean_x, mean_y) = sums(x, y);
    if denominator == 0.0 {
        return Err(RegressionError::ZeroVariance);
    }

    let slope = numerator / denominator;
    Ok(Fit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

fn is_constant(values: &[f64]) -> bool {
    values.first().is_some_and(|&v0| values.iter().all(|&v| v == v0))
}

// (Σ dx·dy, Σ dx², x̄, ȳ) over the common prefix
fn sums(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64) {
    let n = x.len().min(y.len());
    let (x, y) = (&x[..n], &y[..n]);

    // sum/n of a repeated value may round away from it, leaving dx != 0
    let mean_x = if is_constant(x) {
        x[0]
    } else {
        mean(x).unwrap_or(f64::NAN)
    };
    let mean_y = mean(y).unwrap_or(f64::NAN);

    let (numerator, denominator) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(num, den), (&xi, &yi)| {
            let dx = xi - mean_x;
            (num + dx * (yi - mean_y), den + dx * dx)
        });

    (numerator, denominator, mean_x, mean_y)
}
