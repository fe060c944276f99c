//! cert_status library: certificate metadata extraction
//!
//! This library extracts structured metadata from X.509 certificate files by
//! invoking the external `openssl x509` inspection tool and parsing its
//! textual output into a typed record: validity window, subject/issuer
//! distinguished-name fields, purpose flags, OCSP responder URI, public-key
//! algorithm and length, signature algorithm, and the subject-alternative-name
//! list.
//!
//! The analysis never lets a failure for one certificate escape to the
//! caller: an unreadable or malformed file yields an absent result and a log
//! entry, so an agent scanning many certificates keeps going.
//!
//! # Example
//!
//! ```no_run
//! use cert_status::{analyze, ShellCommandRunner};
//! use std::path::Path;
//!
//! let runner = ShellCommandRunner;
//! if let Some(report) = analyze(Path::new("/etc/ssl/certs/example.pem"), &runner) {
//!     println!("expires at {:?}", report.validity.and_then(|v| v.end));
//! }
//! ```

#![warn(missing_docs)]

mod cert;
pub mod command;
pub mod config;
mod error_handling;
pub mod initialization;

// Re-export public API
pub use cert::{analyze, CertificateReport, Validity};
pub use command::{CommandRunner, ShellCommandRunner};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ScanStats, WarningKind};
pub use run::{run_scan, run_scan_with, ScanRecord, ScanReport};

// Internal run module (contains the batch scanning logic)
mod run {
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use log::{info, warn};
    use serde::{Deserialize, Serialize};

    use crate::cert::{analyze, CertificateReport};
    use crate::command::{CommandRunner, ShellCommandRunner};
    use crate::config::{Config, PROGRESS_LOG_INTERVAL};
    use crate::error_handling::ScanStats;

    /// One successfully analyzed certificate, keyed by its path.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ScanRecord {
        /// Path of the analyzed certificate file
        pub path: PathBuf,
        /// The extracted metadata
        pub certificate: CertificateReport,
    }

    /// Results of a certificate scanning run.
    ///
    /// Contains summary statistics and the per-certificate reports.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Total number of certificate paths processed
        pub total: usize,
        /// Number of certificates successfully analyzed
        pub succeeded: usize,
        /// Number of certificates whose analysis failed
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Reports for the successfully analyzed certificates
        pub reports: Vec<ScanRecord>,
    }

    /// Runs a certificate scan with the provided configuration.
    ///
    /// Reads certificate paths from the configured listing file (one per
    /// line; blank lines and `#` comments skipped) and analyzes each with
    /// the production [`ShellCommandRunner`]. A certificate that fails
    /// analysis is counted and logged but never aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns an error only for setup problems -- the listing file itself
    /// cannot be opened. Per-certificate failures are reported through the
    /// returned [`ScanReport`] counts.
    pub fn run_scan(config: Config) -> Result<ScanReport> {
        run_scan_with(config, &ShellCommandRunner)
    }

    /// Runs a certificate scan with a caller-provided command runner.
    ///
    /// This is the seam used by tests and by embedders that want to control
    /// how the inspection tool is invoked (sandboxing, timeouts, fakes).
    pub fn run_scan_with(config: Config, runner: &dyn CommandRunner) -> Result<ScanReport> {
        let file = File::open(&config.file).context("Failed to open certificate list file")?;

        let stats = ScanStats::new();
        let start = std::time::Instant::now();
        let mut total = 0usize;
        let mut reports = Vec::new();

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read line from input: {e}");
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            total += 1;
            let path = Path::new(trimmed);
            match analyze(path, runner) {
                Some(certificate) => {
                    stats.record_success(&certificate);
                    reports.push(ScanRecord {
                        path: path.to_path_buf(),
                        certificate,
                    });
                }
                None => stats.record_failure(),
            }

            if total % PROGRESS_LOG_INTERVAL == 0 {
                info!("processed {total} certificates so far");
            }
        }

        stats.log_summary();

        Ok(ScanReport {
            total,
            succeeded: stats.analyzed(),
            failed: stats.failed(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
            reports,
        })
    }
}
