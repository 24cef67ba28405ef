use serde::{Deserialize, Serialize};

/// Header printed above the per-dataset lines.
pub const DEFAULT_HEADER: &str = "Linear regression results for each dataset:";

/// Decimal places used for slope and intercept.
pub const DEFAULT_PRECISION: usize = 5;

/// Immutable formatting settings for a report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    precision: usize,
    header: String,
}

impl ReportConfig {
    /// Creates a new report configuration.
    ///
    /// # Args
    /// * `precision` - Decimal places for slope and intercept.
    /// * `header` - Line printed before the results.
    pub fn new(precision: usize, header: impl Into<String>) -> Self {
        Self {
            precision,
            header: header.into(),
        }
    }

    /// Returns the number of decimal places for slope and intercept.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns the header line.
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, DEFAULT_HEADER)
    }
}
