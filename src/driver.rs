use std::{
    fmt,
    io::{self, Write},
    time::{Duration, Instant},
};

use log::{debug, info};
use serde::Serialize;

use crate::{
    config::{ReportConfig, DEFAULT_PRECISION},
    dataset::Dataset,
    error::Result,
    regression::{self, Fit},
};

/// Outcome of fitting one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetReport {
    /// 1-based position of the dataset in the input.
    pub index: usize,
    pub fit: Fit,
    /// Wall-clock time spent inside the calculator.
    pub elapsed: Duration,
}

impl DatasetReport {
    /// Formats the report line with `precision` decimals.
    pub fn render(&self, precision: usize) -> String {
        format!(
            "Dataset {}: Slope = {:.p$}, Intercept = {:.p$}, Calculation Time = {:?}",
            self.index,
            self.fit.slope,
            self.fit.intercept,
            self.elapsed,
            p = precision,
        )
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PRECISION))
    }
}

/// Fits every dataset in order, timing each calculation.
///
/// # Errors
/// Returns the first `RegressionError` raised by the calculator.
pub fn run(datasets: &[Dataset]) -> Result<Vec<DatasetReport>> {
    let mut reports = Vec::with_capacity(datasets.len());
    let mut total = Duration::ZERO;

    for (i, ds) in datasets.iter().enumerate() {
        let start = Instant::now();
        let fit = regression::fit(ds.x, ds.y)?;
        let elapsed = start.elapsed();
        total += elapsed;

        let report = DatasetReport {
            index: i + 1,
            fit,
            elapsed,
        };

        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&report) {
                Ok(json) => debug!("{json}"),
                Err(e) => debug!("report {} not serializable: {e}", report.index),
            }
        }
        reports.push(report);
    }

    info!("fitted {} datasets in {total:?}", reports.len());
    Ok(reports)
}

/// Writes the header followed by one line per report.
pub fn write_report<W: Write>(
    out: &mut W,
    config: &ReportConfig,
    reports: &[DatasetReport],
) -> io::Result<()> {
    writeln!(out, "{}", config.header())?;
    for report in reports {
        writeln!(out, "{}", report.render(config.precision()))?;
    }
    out.flush()
}
