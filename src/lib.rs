//! Least-squares regression over Anscombe's quartet.
//!
//! - [`regression`] fits `y = slope * x + intercept`
//! - [`dataset`] holds the four fixed dataset pairs
//! - [`driver`] times each fit and renders the report lines

pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod regression;

pub use config::ReportConfig;
pub use dataset::{Dataset, ANSCOMBE_QUARTET};
pub use driver::{run, write_report, DatasetReport};
pub use error::RegressionError;
pub use regression::{fit, slope_and_intercept, Fit};
