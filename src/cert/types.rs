//! Certificate analysis result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Certificate validity window as Unix timestamps.
///
/// Either bound may be absent if the corresponding date line was missing or
/// unparsable in the tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    /// notBefore as a Unix timestamp
    pub start: Option<i64>,
    /// notAfter as a Unix timestamp
    pub end: Option<i64>,
}

/// Structured metadata extracted from one certificate file.
///
/// Every field except `modified` and `names` is optional: a field the
/// inspection tool produced no parseable output for is simply absent. The
/// sub-maps (`subject`, `issuer`, `purpose`) are never present empty --
/// downstream consumers test for presence, so an empty map would read as
/// "populated".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateReport {
    /// File modification time as a Unix timestamp
    pub modified: i64,
    /// Certificate validity window
    pub validity: Option<Validity>,
    /// Subject distinguished-name components, keyed by component name
    /// (`country`, `state`, `location`, `organization`, `unit`, `common_name`)
    pub subject: Option<BTreeMap<String, String>>,
    /// Issuer distinguished-name components, same keys as `subject`
    pub issuer: Option<BTreeMap<String, String>>,
    /// Purpose flags reported by the tool, label to value ("Yes"/"No")
    pub purpose: Option<BTreeMap<String, String>>,
    /// OCSP responder URI
    pub ocsp_uri: Option<String>,
    /// Public key algorithm name
    pub public_key_algorithm: Option<String>,
    /// Signature algorithm name
    pub signature_algorithm: Option<String>,
    /// Public key bit length
    pub length: Option<u32>,
    /// Subject alternative names (DNS), in order of first appearance, with
    /// the subject common name always included
    pub names: Vec<String>,
}
