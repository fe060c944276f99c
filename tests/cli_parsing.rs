//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

use cert_status::{Config, LogFormat};

#[test]
fn test_cli_minimal_invocation() {
    let args = ["cert_status", "certs.txt"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse minimal invocation");

    assert_eq!(config.file, PathBuf::from("certs.txt"));
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Info
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_cli_log_level_override() {
    let args = ["cert_status", "certs.txt", "--log-level", "debug"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse log level");
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
}

#[test]
fn test_cli_json_log_format() {
    let args = ["cert_status", "certs.txt", "--log-format", "json"];
    let config = Config::try_parse_from(args.iter()).expect("Should parse log format");
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_missing_file_argument_is_an_error() {
    let args = ["cert_status"];
    assert!(Config::try_parse_from(args.iter()).is_err());
}

#[test]
fn test_cli_invalid_log_level_is_an_error() {
    let args = ["cert_status", "certs.txt", "--log-level", "loud"];
    assert!(Config::try_parse_from(args.iter()).is_err());
}
