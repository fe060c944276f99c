//! Field extractors driving individual inspection-tool invocations.
//!
//! Each extractor runs exactly one `openssl x509` invocation with a
//! mode-specific flag and applies its pattern set to the output lines. A
//! failed or empty invocation degrades the field to `None`; it is never a
//! fatal condition for the surrounding analysis.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::command::CommandRunner;
use crate::config::{OPENSSL_BINARY, OPENSSL_DATE_FORMAT, OPENSSL_DATE_TIMEZONES};

use super::patterns::{DN_PATTERNS, SAN_PATTERN, TEXT_PATTERNS};
use super::types::Validity;

/// Fields recovered from the full `-text` dump.
///
/// `length` stays a raw string here; coercion to an integer happens during
/// assembly so a malformed value is handled by the orchestrator's fault
/// boundary.
#[derive(Debug, Default)]
pub(crate) struct TextFields {
    pub(crate) public_key_algorithm: Option<String>,
    pub(crate) signature_algorithm: Option<String>,
    pub(crate) length: Option<String>,
    pub(crate) names: Vec<String>,
}

impl TextFields {
    fn is_empty(&self) -> bool {
        self.public_key_algorithm.is_none()
            && self.signature_algorithm.is_none()
            && self.length.is_none()
            && self.names.is_empty()
    }
}

fn x509_command(path: &Path, mode: &str) -> String {
    format!("{OPENSSL_BINARY} x509 -in {} -noout {mode}", path.display())
}

/// Extracts the validity window from `-dates` output.
///
/// Recognized lines have the form `notBefore=<date>` / `notAfter=<date>`.
/// Unparsable date values degrade the single bound rather than the whole
/// window. Returns `None` if no recognized line was found.
pub(crate) fn certificate_dates(path: &Path, runner: &dyn CommandRunner) -> Option<Validity> {
    let (stdout, _) = runner.run(&x509_command(path, "-dates"));

    let mut start = None;
    let mut end = None;
    for line in stdout.iter().filter(|line| !line.is_empty()) {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key {
            "notBefore" => {
                if let Some(timestamp) = parse_tool_date(value) {
                    start = Some(timestamp);
                }
            }
            "notAfter" => {
                if let Some(timestamp) = parse_tool_date(value) {
                    end = Some(timestamp);
                }
            }
            _ => {}
        }
    }

    if start.is_none() && end.is_none() {
        None
    } else {
        Some(Validity { start, end })
    }
}

/// Parses a tool-formatted date (`Mon DD HH:MM:SS YYYY TZ`) into a Unix
/// timestamp. The tool prints GMT; UTC is accepted for tolerance.
fn parse_tool_date(value: &str) -> Option<i64> {
    let value = value.trim();
    let stripped = OPENSSL_DATE_TIMEZONES
        .iter()
        .find_map(|tz| value.strip_suffix(tz))?;
    let naive = NaiveDateTime::parse_from_str(stripped.trim_end(), OPENSSL_DATE_FORMAT).ok()?;
    Some(naive.and_utc().timestamp())
}

/// Extracts subject distinguished-name components from `-subject` output.
pub(crate) fn certificate_subject(
    path: &Path,
    runner: &dyn CommandRunner,
) -> Option<BTreeMap<String, String>> {
    distinguished_name(path, runner, "-subject")
}

/// Extracts issuer distinguished-name components from `-issuer` output.
pub(crate) fn certificate_issuer(
    path: &Path,
    runner: &dyn CommandRunner,
) -> Option<BTreeMap<String, String>> {
    distinguished_name(path, runner, "-issuer")
}

/// Applies every DN pattern to every output line. Later matches on the same
/// field overwrite earlier ones; exactly one subject/issuer line is expected,
/// so last-match-wins is acceptable. Returns `None` instead of an empty map.
fn distinguished_name(
    path: &Path,
    runner: &dyn CommandRunner,
    mode: &str,
) -> Option<BTreeMap<String, String>> {
    let (stdout, _) = runner.run(&x509_command(path, mode));

    let mut components = BTreeMap::new();
    for line in stdout.iter().filter(|line| !line.is_empty()) {
        for pattern in DN_PATTERNS.iter() {
            if let Some(value) = pattern.capture(line) {
                components.insert(pattern.field.to_string(), value.to_string());
            }
        }
    }

    (!components.is_empty()).then_some(components)
}

/// Extracts purpose flags from `-purpose` output.
///
/// A line split on the literal `" : "` into exactly two parts contributes
/// one `{label: value}` entry; anything else (the header line, CA variants
/// with no separator) is silently skipped.
pub(crate) fn certificate_purpose(
    path: &Path,
    runner: &dyn CommandRunner,
) -> Option<BTreeMap<String, String>> {
    let (stdout, _) = runner.run(&x509_command(path, "-purpose"));

    let mut purposes = BTreeMap::new();
    for line in stdout.iter().filter(|line| !line.is_empty()) {
        let parts: Vec<&str> = line.split(" : ").collect();
        if let [label, value] = parts[..] {
            purposes.insert(label.to_string(), value.to_string());
        }
    }

    (!purposes.is_empty()).then_some(purposes)
}

/// Returns the first line of `-ocsp_uri` output verbatim, if non-empty.
/// The tool's OCSP-query mode prints the responder URI alone; no pattern
/// matching is needed.
pub(crate) fn certificate_ocsp_uri(path: &Path, runner: &dyn CommandRunner) -> Option<String> {
    let (stdout, _) = runner.run(&x509_command(path, "-ocsp_uri"));
    stdout.into_iter().next().filter(|line| !line.is_empty())
}

/// Runs the full `-text` dump and applies the algorithm/SAN patterns to
/// every line.
///
/// Per line, the three algorithm patterns take precedence: if any matches,
/// the SAN check is skipped for that line (a line describing an algorithm
/// never also carries a SAN token). SAN names are accumulated across lines
/// in order of first appearance; duplicates are not filtered at this stage.
pub(crate) fn certificate_text(path: &Path, runner: &dyn CommandRunner) -> Option<TextFields> {
    let (stdout, _) = runner.run(&x509_command(path, "-text"));

    let mut fields = TextFields::default();
    for line in &stdout {
        let mut algorithm_matched = false;
        for pattern in TEXT_PATTERNS.iter() {
            if let Some(value) = pattern.capture(line) {
                algorithm_matched = true;
                match pattern.field {
                    "public_key_algorithm" => {
                        fields.public_key_algorithm = Some(value.to_string());
                    }
                    "length" => fields.length = Some(value.to_string()),
                    "signature_algorithm" => {
                        fields.signature_algorithm = Some(value.to_string());
                    }
                    _ => {}
                }
            }
        }
        if algorithm_matched {
            continue;
        }

        for token in SAN_PATTERN.find_iter(line) {
            if let Some(name) = token.as_str().split(':').nth(1) {
                fields.names.push(name.to_string());
            }
        }
    }

    (!fields.is_empty()).then_some(fields)
}
