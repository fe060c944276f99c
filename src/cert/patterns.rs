//! Extraction pattern catalogs for the inspection tool's text output.
//!
//! The tool's output is semi-structured and varies between versions, so each
//! field has its own loosely anchored pattern. Patterns are tried
//! independently per line: any subset of fields present on a line still
//! extracts, even when the surrounding punctuation is irregular.

use std::sync::LazyLock;

use regex::Regex;

/// A labeled extraction pattern with a single named capture group.
pub(crate) struct FieldPattern {
    /// Field name, identical to the pattern's capture group name.
    pub(crate) field: &'static str,
    regex: Regex,
}

impl FieldPattern {
    fn new(field: &'static str, pattern: &str) -> Self {
        Self {
            field,
            regex: Regex::new(pattern).expect("built-in field pattern must compile"),
        }
    }

    /// Applies the pattern to one output line, returning the captured value.
    pub(crate) fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.name(self.field))
            .map(|m| m.as_str())
    }
}

/// Distinguished-name component patterns for `subject=` / `issuer=` lines.
///
/// `country` is word characters only; `state` and `location` allow embedded
/// whitespace; `organization`, `unit` and `common_name` additionally allow
/// comma, apostrophe, hyphen and period to tolerate legal entity names.
pub(crate) static DN_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new("country", r"/C=(?P<country>\w+)"),
        FieldPattern::new("state", r"/ST=(?P<state>[\w\s]+)"),
        FieldPattern::new("location", r"/L=(?P<location>[\w\s]+)"),
        FieldPattern::new("organization", r"/O=(?P<organization>[\w\s,'\-\.]+)"),
        FieldPattern::new("unit", r"/OU=(?P<unit>[\w\s,\-\.]+)"),
        FieldPattern::new("common_name", r"/CN=(?P<common_name>[\w\s'\-\.]+)"),
    ]
});

/// Algorithm and key patterns for the full `-text` dump.
pub(crate) static TEXT_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new(
            "public_key_algorithm",
            r"Public Key Algorithm: (?P<public_key_algorithm>.*)",
        ),
        FieldPattern::new("length", r"Public-Key: \((?P<length>\d+)"),
        FieldPattern::new(
            "signature_algorithm",
            r"Signature Algorithm: (?P<signature_algorithm>.*)",
        ),
    ]
});

/// Detector for `DNS:<name>` tokens on subject-alternative-name lines.
/// Applied with find-all semantics; a single line can carry several names.
pub(crate) static SAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DNS:[\w\s\-\.]+").expect("built-in SAN pattern must compile"));
