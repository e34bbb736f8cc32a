use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

mod scenario;

use shared_config::AppConfig;
use shared_utils::init_tracing;

fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    init_tracing(&AppConfig::log_filter_from_env()).context("failed to initialise tracing")?;

    info!("Starting clinic demo");

    let config = AppConfig::from_env();
    let report = scenario::run(&config)?;

    for line in &report {
        println!("{}", line);
    }

    info!(lines = report.len(), "Clinic demo finished");
    Ok(())
}
