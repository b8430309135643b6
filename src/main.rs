use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod config;
mod detector;
mod error;
mod logging;
mod output;
mod patterns;

use cli::Cli;
use config::DetectorConfig;
use detector::{Detector, Target};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Logging, once, before anything can log
    logging::init(logging::level_for(&cli));

    // 2. Config: defaults < config file < flags
    let config = DetectorConfig::load(&cli)?;
    let patterns = config.pattern_set()?;
    debug!(
        "Timeout {}s, User-Agent {:?}, {} patterns",
        config.timeout,
        config.user_agent,
        patterns.len()
    );

    // 3. Scan
    let detector = Detector::new(Target::new(&cli.url, &config), patterns);
    let detected = detector.run().await;

    println!("{}", output::verdict_line(&detector.target().url, detected));

    Ok(())
}
