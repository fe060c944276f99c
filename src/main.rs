//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `cert_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use cert_status::initialization::init_logger_with;
use cert_status::{run_scan, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scan(config) {
        Ok(report) => {
            // One JSON line per analyzed certificate
            for record in &report.reports {
                match serde_json::to_string(record) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        log::warn!("Failed to serialize report for {}: {e}", record.path.display())
                    }
                }
            }

            println!(
                "Processed {} certificate{} ({} analyzed, {} failed) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.succeeded,
                report.failed,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("cert_status error: {:#}", e);
            process::exit(1);
        }
    }
}
