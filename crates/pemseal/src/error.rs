//! Error types for PEM resolution and secret encryption.

use thiserror::Error;

/// Message shown to callers for every PEM parsing failure.
pub const UNSUPPORTED_PEM_MESSAGE: &str =
    "Unsupported PEM format. Please upload a valid public key or certificate.";

/// Root cause of a failed PEM resolution. Kept for diagnostics only.
#[derive(Debug, Error)]
pub enum PemError {
    #[error("no certificate or public key header found")]
    Unrecognized,

    #[error("malformed PEM armor: {0}")]
    Armor(#[from] ::pem::PemError),

    #[error("expected a `{expected}` PEM block, found `{found}`")]
    UnexpectedLabel {
        expected: &'static str,
        found: String,
    },

    #[error("invalid X.509 certificate: {0}")]
    Certificate(String),

    #[error("invalid subject public key info: {0}")]
    SubjectPublicKeyInfo(#[from] rsa::pkcs8::spki::Error),

    #[error("invalid PKCS#1 public key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),
}

/// The supplied PEM could not be turned into an RSA public key.
///
/// Display is always [`UNSUPPORTED_PEM_MESSAGE`]; the underlying
/// [`PemError`] is only reachable through [`std::error::Error::source`]
/// or [`UnsupportedPemFormat::cause`].
#[derive(Debug, Error)]
#[error("{}", UNSUPPORTED_PEM_MESSAGE)]
pub struct UnsupportedPemFormat {
    #[source]
    cause: PemError,
}

impl UnsupportedPemFormat {
    /// The parse failure that triggered this error.
    pub fn cause(&self) -> &PemError {
        &self.cause
    }
}

impl From<PemError> for UnsupportedPemFormat {
    fn from(cause: PemError) -> Self {
        Self { cause }
    }
}

/// Errors returned by [`crate::encrypt_secret`].
#[derive(Debug, Error)]
pub enum SealError {
    /// Key resolution failed; message is fixed.
    #[error(transparent)]
    UnsupportedPemFormat(#[from] UnsupportedPemFormat),

    /// Encryption failed after a key was resolved; passed through unchanged.
    #[error(transparent)]
    Encryption(#[from] rsa::Error),
}

/// Convenience result alias for sealing operations.
pub type Result<T> = std::result::Result<T, SealError>;
