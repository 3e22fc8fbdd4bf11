//! PEM detection and RSA public key resolution.
//!
//! Accepts either an X.509 certificate or a standalone public key
//! (SubjectPublicKeyInfo `PUBLIC KEY` or PKCS#1 `RSA PUBLIC KEY`). The kind
//! is decided once from the armor headers and then dispatched; any failure
//! along the way collapses into [`UnsupportedPemFormat`] after the root cause
//! has been logged.
//!
//! Armor is decoded leniently: any base64 line width, CRLF line endings and
//! single-line bodies are accepted. Only the first block in the input is
//! considered, and it must carry the label the detected kind expects.

use std::fmt;

use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;
use tracing::warn;
use x509_parser::certificate::X509Certificate;
use x509_parser::prelude::FromDer;

use crate::error::{PemError, UnsupportedPemFormat};

/// Marker that routes input to the certificate parser.
const CERTIFICATE_MARKER: &str = "BEGIN CERTIFICATE";

const CERTIFICATE_LABEL: &str = "CERTIFICATE";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";

/// The kind of PEM input, decided by header inspection alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PemKind {
    /// An X.509 certificate carrying the key in its SubjectPublicKeyInfo.
    Certificate,
    /// A bare public key, SPKI or PKCS#1.
    PublicKey,
    /// Neither of the above.
    Unrecognized,
}

impl PemKind {
    /// Classify `pem` without parsing it.
    pub fn detect(pem: &str) -> Self {
        if pem.contains(CERTIFICATE_MARKER) {
            Self::Certificate
        } else if pem.contains(&begin_line(PUBLIC_KEY_LABEL))
            || pem.contains(&begin_line(RSA_PUBLIC_KEY_LABEL))
        {
            Self::PublicKey
        } else {
            Self::Unrecognized
        }
    }
}

impl fmt::Display for PemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Certificate => write!(f, "certificate"),
            Self::PublicKey => write!(f, "public key"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

fn begin_line(label: &str) -> String {
    format!("-----BEGIN {label}-----")
}

/// Decode the first armored block in `text`.
///
/// Text before the block (bag attributes, `subject=` lines) and anything
/// after it, such as the rest of a certificate chain, is ignored.
pub fn first_block(text: &str) -> Result<::pem::Pem, PemError> {
    Ok(::pem::parse(text)?)
}

/// Resolve the RSA public key carried by `pem`.
///
/// The parse error, if any, is logged at `warn` and kept as the source of
/// the returned [`UnsupportedPemFormat`].
pub fn resolve_public_key(pem: &str) -> Result<RsaPublicKey, UnsupportedPemFormat> {
    let kind = PemKind::detect(pem);

    let resolved = match kind {
        PemKind::Certificate => key_from_certificate(pem),
        PemKind::PublicKey => key_from_public_key(pem),
        PemKind::Unrecognized => Err(PemError::Unrecognized),
    };

    resolved.map_err(|cause| {
        warn!(kind = %kind, error = %cause, "invalid PEM input");
        UnsupportedPemFormat::from(cause)
    })
}

fn unexpected_label(expected: &'static str, block: &::pem::Pem) -> PemError {
    PemError::UnexpectedLabel {
        expected,
        found: block.tag().to_string(),
    }
}

fn key_from_certificate(pem: &str) -> Result<RsaPublicKey, PemError> {
    let block = first_block(pem)?;
    if block.tag() != CERTIFICATE_LABEL {
        return Err(unexpected_label(CERTIFICATE_LABEL, &block));
    }

    let (_, cert) = X509Certificate::from_der(block.contents())
        .map_err(|e| PemError::Certificate(e.to_string()))?;

    // No trust, validity or signature checks: only the embedded key is used.
    Ok(RsaPublicKey::from_public_key_der(cert.public_key().raw)?)
}

fn key_from_public_key(pem: &str) -> Result<RsaPublicKey, PemError> {
    let block = first_block(pem)?;
    match block.tag() {
        PUBLIC_KEY_LABEL => Ok(RsaPublicKey::from_public_key_der(block.contents())?),
        RSA_PUBLIC_KEY_LABEL => Ok(RsaPublicKey::from_pkcs1_der(block.contents())?),
        _ => Err(unexpected_label(PUBLIC_KEY_LABEL, &block)),
    }
}
