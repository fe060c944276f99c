//! Scan statistics tracking.
//!
//! Tracks per-run analysis outcomes and missing-field warnings using atomic
//! counters. A missing field is not an error -- the analysis deliberately
//! degrades it to absent -- but across a large scan the aggregate counts are
//! useful observability.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::cert::CertificateReport;

/// Categories of missing optional data in an otherwise successful analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningKind {
    /// No validity window was parsed
    MissingValidity,
    /// No issuer components were parsed
    MissingIssuer,
    /// No purpose flags were parsed
    MissingPurpose,
    /// No OCSP responder URI was reported
    MissingOcspUri,
    /// No public key algorithm was found in the text dump
    MissingPublicKeyAlgorithm,
    /// No signature algorithm was found in the text dump
    MissingSignatureAlgorithm,
    /// No public key bit length was found in the text dump
    MissingKeyLength,
}

/// Thread-safe scan statistics tracker.
///
/// All counters start at zero; the tracker can be shared across threads if
/// a caller chooses to parallelize per-file analyses.
pub struct ScanStats {
    analyzed: AtomicUsize,
    failed: AtomicUsize,
    warnings: HashMap<WarningKind, AtomicUsize>,
}

impl ScanStats {
    /// Creates a tracker with every counter initialized to zero.
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for kind in WarningKind::iter() {
            warnings.insert(kind, AtomicUsize::new(0));
        }
        ScanStats {
            analyzed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            warnings,
        }
    }

    /// Records a successful analysis, counting any missing optional fields.
    pub fn record_success(&self, report: &CertificateReport) {
        self.analyzed.fetch_add(1, Ordering::Relaxed);

        if report.validity.is_none() {
            self.increment_warning(WarningKind::MissingValidity);
        }
        if report.issuer.is_none() {
            self.increment_warning(WarningKind::MissingIssuer);
        }
        if report.purpose.is_none() {
            self.increment_warning(WarningKind::MissingPurpose);
        }
        if report.ocsp_uri.is_none() {
            self.increment_warning(WarningKind::MissingOcspUri);
        }
        if report.public_key_algorithm.is_none() {
            self.increment_warning(WarningKind::MissingPublicKeyAlgorithm);
        }
        if report.signature_algorithm.is_none() {
            self.increment_warning(WarningKind::MissingSignatureAlgorithm);
        }
        if report.length.is_none() {
            self.increment_warning(WarningKind::MissingKeyLength);
        }
    }

    /// Records a failed analysis (unreadable file or internal fault).
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_warning(&self, kind: WarningKind) {
        if let Some(counter) = self.warnings.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of certificates analyzed successfully.
    pub fn analyzed(&self) -> usize {
        self.analyzed.load(Ordering::SeqCst)
    }

    /// Number of certificates whose analysis failed entirely.
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    /// Count for one warning category.
    pub fn get_warning_count(&self, kind: WarningKind) -> usize {
        self.warnings
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Logs a summary of the scan outcome and non-zero warning categories.
    pub fn log_summary(&self) {
        log::info!(
            "scan complete: {} analyzed, {} failed",
            self.analyzed(),
            self.failed()
        );
        for kind in WarningKind::iter() {
            let count = self.get_warning_count(kind);
            if count > 0 {
                log::info!("  {:?}: {}", kind, count);
            }
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
