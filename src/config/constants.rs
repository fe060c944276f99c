//! Configuration constants.

/// Name of the external certificate-inspection binary.
pub const OPENSSL_BINARY: &str = "openssl";

/// Date format the tool prints for notBefore/notAfter values, without the
/// trailing timezone token (e.g. `Jan  1 00:00:00 2020`).
pub const OPENSSL_DATE_FORMAT: &str = "%b %d %H:%M:%S %Y";

/// Timezone tokens accepted at the end of a tool-printed date. The tool
/// prints GMT; UTC is tolerated for other tool versions.
pub const OPENSSL_DATE_TIMEZONES: &[&str] = &["GMT", "UTC"];

/// How many certificates to process between progress log lines.
pub const PROGRESS_LOG_INTERVAL: usize = 100;
