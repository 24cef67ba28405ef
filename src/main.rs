use std::io;

use anyhow::Context;
use log::info;

use anscombe_regression::{driver, ReportConfig, ANSCOMBE_QUARTET};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ReportConfig::default();
    info!("fitting {} datasets", ANSCOMBE_QUARTET.len());

    let reports = driver::run(&ANSCOMBE_QUARTET).context("regression failed")?;
    driver::write_report(&mut io::stdout().lock(), &config, &reports)
        .context("failed to write report")?;

    Ok(())
}
