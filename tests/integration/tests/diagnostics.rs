//! Logging behavior of the PEM resolution path.

use std::error::Error as _;

use pemseal::{encrypt_secret, resolve_public_key, PemError, SealError};
use pemseal_integration_tests::*;

#[test]
fn test_parse_failure_is_logged_with_cause() {
    let corrupt = "-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----\n";
    let (result, logs) = with_captured_logs(|| encrypt_secret(corrupt, "value"));

    assert!(matches!(result, Err(SealError::UnsupportedPemFormat(_))));
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("invalid PEM input"), "logs: {logs}");
    assert!(logs.contains("kind=public key"), "logs: {logs}");
    assert!(logs.contains("invalid subject public key info"), "logs: {logs}");
}

#[test]
fn test_cause_is_source_not_message() {
    let (result, _) = with_captured_logs(|| resolve_public_key(RSA2048_CSR));
    let err = result.unwrap_err();

    assert!(matches!(
        err.cause(),
        PemError::UnexpectedLabel { expected: "CERTIFICATE", .. }
    ));
    assert!(!err.to_string().contains("CERTIFICATE"));
    assert_eq!(
        err.source().map(|s| s.to_string()),
        Some("expected a `CERTIFICATE` PEM block, found `CERTIFICATE REQUEST`".to_string())
    );
}

#[test]
fn test_success_logs_sizes_without_plaintext() {
    let (result, logs) =
        with_captured_logs(|| encrypt_secret(RSA2048_PUBLIC, "do-not-log-me"));

    assert!(result.is_ok());
    assert!(logs.contains("encrypted secret"), "logs: {logs}");
    assert!(logs.contains("modulus_bytes=256"), "logs: {logs}");
    assert!(!logs.contains("do-not-log-me"));
    assert!(!logs.contains("WARN"));
}

#[test]
fn test_encryption_failure_is_not_logged_as_pem_error() {
    let value = "x".repeat(500);
    let (result, logs) = with_captured_logs(|| encrypt_secret(RSA2048_PUBLIC, &value));

    assert!(matches!(result, Err(SealError::Encryption(_))));
    assert!(!logs.contains("invalid PEM input"));
}
