//! Certificate analysis.
//!
//! This module drives the external inspection tool (`openssl x509`) through
//! six separate invocations, merges their parsed output into one
//! [`CertificateReport`], and guarantees that no failure for a single
//! certificate ever reaches the caller: a monitoring agent scanning many
//! certificates on disk must not crash because one file is malformed or
//! unreadable.

mod extract;
mod patterns;
mod types;

pub use types::{CertificateReport, Validity};

use std::collections::HashSet;
use std::fs::{self, File};
use std::path::Path;
use std::time::{Instant, UNIX_EPOCH};

use crate::command::CommandRunner;
use crate::error_handling::AnalysisError;

/// Analyzes one certificate file and returns its metadata record.
///
/// The analysis runs in stages: a readability pre-check (no tool is invoked
/// for a file that cannot be opened), six sequential tool invocations, and a
/// final assembly pass that coerces the key length and reconciles the SAN
/// list with the subject common name.
///
/// Returns `None` on total failure -- an unreadable file or any unexpected
/// internal fault. Failure detail is captured in logs only; individual
/// fields the tool produced no output for are simply absent from the report
/// and do not fail the analysis.
///
/// # Arguments
///
/// * `path` - Path to a PEM-encoded certificate file
/// * `runner` - Command runner used for the tool invocations
pub fn analyze(path: &Path, runner: &dyn CommandRunner) -> Option<CertificateReport> {
    log::info!("analyzing certificate {}", path.display());

    let start = Instant::now();

    if let Err(e) = File::open(path) {
        log::info!("could not read {} (maybe permissions?): {e}", path.display());
        return None;
    }

    let result = try_analyze(path, runner);
    log::debug!(
        "certificate analysis took {:.3}s for {}",
        start.elapsed().as_secs_f64(),
        path.display()
    );

    match result {
        Ok(report) => Some(report),
        Err(e) => {
            log::debug!("failed to analyze certificate {}: {e}", path.display());
            None
        }
    }
}

/// Runs extraction and assembly. Any error returned here is converted into
/// an absent result by [`analyze`]; nothing below this boundary surfaces a
/// failure to the caller.
fn try_analyze(path: &Path, runner: &dyn CommandRunner) -> Result<CertificateReport, AnalysisError> {
    let mut report = CertificateReport {
        modified: modification_time(path)?,
        validity: extract::certificate_dates(path, runner),
        subject: extract::certificate_subject(path, runner),
        issuer: extract::certificate_issuer(path, runner),
        purpose: extract::certificate_purpose(path, runner),
        ocsp_uri: extract::certificate_ocsp_uri(path, runner),
        public_key_algorithm: None,
        signature_algorithm: None,
        length: None,
        names: Vec::new(),
    };

    let mut raw_length = None;
    if let Some(text) = extract::certificate_text(path, runner) {
        report.public_key_algorithm = text.public_key_algorithm;
        report.signature_algorithm = text.signature_algorithm;
        report.names = text.names;
        raw_length = text.length;
    }

    if let Some(raw) = raw_length {
        match raw.parse::<u32>() {
            Ok(bits) => report.length = Some(bits),
            Err(source) => return Err(AnalysisError::InvalidKeyLength { raw, source }),
        }
    }

    // SAN tokens can repeat across the dump; keep first appearance only.
    let mut seen = HashSet::new();
    report.names.retain(|name| seen.insert(name.clone()));

    // A certificate with no identifiable subject name is unanalyzable.
    let common_name = report
        .subject
        .as_ref()
        .and_then(|subject| subject.get("common_name"))
        .ok_or(AnalysisError::MissingCommonName)?;
    if !report.names.iter().any(|name| name == common_name) {
        report.names.push(common_name.clone());
    }

    Ok(report)
}

fn modification_time(path: &Path) -> Result<i64, AnalysisError> {
    let modified = fs::metadata(path)?.modified()?;
    let since_epoch = modified
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AnalysisError::PreEpochModificationTime)?;
    Ok(since_epoch.as_secs() as i64)
}
