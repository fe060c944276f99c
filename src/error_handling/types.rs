//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Internal faults during certificate analysis.
///
/// These never surface to the analysis caller: the orchestrator converts
/// every variant into an absent result and records the detail in a debug
/// log. Keeping them as a typed enum keeps the "total failure" class
/// distinct from the "degraded field" class, which is expressed as plain
/// `Option` fields on the report.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// File metadata (modification time) could not be read.
    #[error("failed to read file metadata: {0}")]
    Metadata(#[from] std::io::Error),

    /// The file's modification time predates the Unix epoch.
    #[error("file modification time predates the Unix epoch")]
    PreEpochModificationTime,

    /// The captured public-key length did not coerce to an integer.
    #[error("public key length {raw:?} is not a valid bit count: {source}")]
    InvalidKeyLength {
        /// The raw captured digit run.
        raw: String,
        /// The underlying coercion failure.
        source: std::num::ParseIntError,
    },

    /// No subject common name was recovered; without an identifiable
    /// subject name the certificate is treated as unanalyzable.
    #[error("no subject common name recovered")]
    MissingCommonName,
}
