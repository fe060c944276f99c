//! End-to-end analysis tests through the public API.
//!
//! The inspection tool is replaced with a scripted command runner so these
//! tests exercise the real orchestration, pattern matching, and batch
//! behavior without depending on an openssl installation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use cert_status::{analyze, run_scan_with, CommandRunner, Config};

/// Scripted runner: maps each tool mode flag to canned stdout lines and
/// records every command it is asked to run.
struct ScriptedRunner {
    outputs: HashMap<&'static str, Vec<String>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    fn new(outputs: &[(&'static str, &[&str])]) -> Self {
        Self {
            outputs: outputs
                .iter()
                .map(|(mode, lines)| (*mode, lines.iter().map(|l| l.to_string()).collect()))
                .collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str) -> (Vec<String>, Vec<String>) {
        self.calls.borrow_mut().push(command.to_string());
        let stdout = self
            .outputs
            .iter()
            .find(|(mode, _)| command.ends_with(*mode))
            .map(|(_, lines)| lines.clone())
            .unwrap_or_default();
        (stdout, Vec::new())
    }
}

fn scripted_openssl() -> ScriptedRunner {
    ScriptedRunner::new(&[
        (
            "-dates",
            &[
                "notBefore=Jan  1 00:00:00 2020 GMT",
                "notAfter=Jan  1 00:00:00 2030 GMT",
            ][..],
        ),
        (
            "-subject",
            &["subject= /C=US/ST=California/O=Example, Inc./CN=example.com"][..],
        ),
        (
            "-issuer",
            &["issuer= /C=US/ST=Arizona/O=Example Trust Services/CN=Example Global CA"][..],
        ),
        (
            "-purpose",
            &[
                "Certificate purposes:",
                "SSL client : Yes",
                "SSL client CA : No",
                "SSL server : Yes",
                "Any Purpose",
            ][..],
        ),
        ("-ocsp_uri", &["http://ocsp.example.com"][..]),
        (
            "-text",
            &[
                "Certificate:",
                "    Data:",
                "        Version: 3 (0x2)",
                "    Signature Algorithm: sha256WithRSAEncryption",
                "        Subject Public Key Info:",
                "            Public Key Algorithm: rsaEncryption",
                "                Public-Key: (2048 bit)",
                "        X509v3 extensions:",
                "            X509v3 Subject Alternative Name:",
                "                DNS:example.com, DNS:www.example.com",
            ][..],
        ),
    ])
}

fn pem_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp cert file");
    writeln!(file, "-----BEGIN CERTIFICATE-----").unwrap();
    writeln!(file, "MIIDazCCAlOgAwIBAgIUJx0=").unwrap();
    writeln!(file, "-----END CERTIFICATE-----").unwrap();
    file
}

#[test]
fn test_analyze_produces_complete_report() {
    let file = pem_file();
    let runner = scripted_openssl();

    let report = analyze(file.path(), &runner).expect("analysis should succeed");

    // modified is always present on a successful analysis
    assert!(report.modified > 0);

    let validity = report.validity.expect("validity window");
    assert_eq!(validity.start, Some(1577836800));
    assert_eq!(validity.end, Some(1893456000));

    let subject = report.subject.expect("subject");
    assert_eq!(subject.get("country").map(String::as_str), Some("US"));
    assert_eq!(subject.get("state").map(String::as_str), Some("California"));
    assert_eq!(
        subject.get("organization").map(String::as_str),
        Some("Example, Inc.")
    );
    assert_eq!(
        subject.get("common_name").map(String::as_str),
        Some("example.com")
    );

    let issuer = report.issuer.expect("issuer");
    assert_eq!(
        issuer.get("common_name").map(String::as_str),
        Some("Example Global CA")
    );

    let purpose = report.purpose.expect("purpose");
    assert_eq!(purpose.get("SSL client").map(String::as_str), Some("Yes"));
    assert_eq!(purpose.get("SSL client CA").map(String::as_str), Some("No"));
    assert_eq!(purpose.get("SSL server").map(String::as_str), Some("Yes"));
    assert_eq!(purpose.len(), 3);

    assert_eq!(report.ocsp_uri.as_deref(), Some("http://ocsp.example.com"));
    assert_eq!(report.public_key_algorithm.as_deref(), Some("rsaEncryption"));
    assert_eq!(
        report.signature_algorithm.as_deref(),
        Some("sha256WithRSAEncryption")
    );
    assert_eq!(report.length, Some(2048));

    // Common name already appears in the SAN list: no duplicate append
    assert_eq!(report.names, vec!["example.com", "www.example.com"]);

    // One invocation per extractor, six in total
    assert_eq!(runner.call_count(), 6);
}

#[test]
fn test_analyze_unreadable_file_invokes_no_commands() {
    let runner = scripted_openssl();
    let missing = Path::new("/nonexistent/path/to/cert.pem");

    assert!(analyze(missing, &runner).is_none());
    assert_eq!(runner.call_count(), 0);
}

#[test]
fn test_analyze_is_idempotent_for_unmodified_file() {
    let file = pem_file();
    let runner = scripted_openssl();

    let first = analyze(file.path(), &runner).unwrap();
    let second = analyze(file.path(), &runner).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analyze_appends_common_name_when_absent_from_san() {
    let file = pem_file();
    let runner = ScriptedRunner::new(&[
        ("-subject", &["subject= /CN=internal.example"][..]),
        (
            "-text",
            &[
                "            X509v3 Subject Alternative Name:",
                "                DNS:alias.example",
            ][..],
        ),
    ]);

    let report = analyze(file.path(), &runner).unwrap();
    assert_eq!(report.names, vec!["alias.example", "internal.example"]);
}

#[test]
fn test_analyze_without_subject_fails_entirely() {
    let file = pem_file();
    // Degenerate tool output: nothing parseable anywhere. With no subject
    // common name the certificate is treated as unanalyzable.
    let runner = ScriptedRunner::new(&[]);

    assert!(analyze(file.path(), &runner).is_none());
    // All six invocations were still attempted before assembly failed
    assert_eq!(runner.call_count(), 6);
}

#[test]
fn test_report_serializes_to_json() {
    let file = pem_file();
    let runner = scripted_openssl();

    let report = analyze(file.path(), &runner).unwrap();
    let json = serde_json::to_string(&report).expect("report serializes");

    assert!(json.contains("\"length\":2048"));
    assert!(json.contains("\"names\":[\"example.com\",\"www.example.com\"]"));
}

#[test]
fn test_run_scan_survives_bad_entries() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.pem");
    std::fs::write(&good, "-----BEGIN CERTIFICATE-----\n").unwrap();

    let listing = dir.path().join("certs.txt");
    let mut content = String::new();
    content.push_str("# monitored certificates\n");
    content.push('\n');
    content.push_str(&format!("{}\n", good.display()));
    content.push_str("/nonexistent/one.pem\n");
    content.push_str("/nonexistent/two.pem\n");
    std::fs::write(&listing, content).unwrap();

    let runner = scripted_openssl();
    let config = Config {
        file: listing,
        ..Config::default()
    };

    let report = run_scan_with(config, &runner).expect("scan runs");

    assert_eq!(report.total, 3);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 2);
    assert_eq!(report.reports.len(), 1);
    assert_eq!(report.reports[0].path, good);
    assert_eq!(
        report.reports[0]
            .certificate
            .subject
            .as_ref()
            .unwrap()
            .get("common_name")
            .map(String::as_str),
        Some("example.com")
    );
}

#[test]
fn test_run_scan_missing_listing_file_is_fatal() {
    let runner = scripted_openssl();
    let config = Config {
        file: "/nonexistent/listing.txt".into(),
        ..Config::default()
    };
    assert!(run_scan_with(config, &runner).is_err());
}
