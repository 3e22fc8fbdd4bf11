//! Encrypt a small secret for the holder of a PEM public key or certificate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use tracing::debug;

use crate::crypto;
use crate::error::Result;
use crate::pem::resolve_public_key;

/// Encrypt `value` for the key in `pem` and return standard base64.
///
/// `pem` may be an X.509 certificate or a public key. Parse failures are
/// reported as [`crate::SealError::UnsupportedPemFormat`]; failures after
/// the key is resolved (for instance a `value` longer than
/// [`crypto::max_plaintext_len`]) come back as
/// [`crate::SealError::Encryption`] with the RSA library's own error.
pub fn encrypt_secret(pem: &str, value: &str) -> Result<String> {
    encrypt_secret_bytes(pem, value.as_bytes())
}

/// Same as [`encrypt_secret`] for a binary plaintext.
pub fn encrypt_secret_bytes(pem: &str, value: &[u8]) -> Result<String> {
    let key = resolve_public_key(pem)?;
    Ok(encrypt_with_key(&key, value)?)
}

/// Encrypt `value` under an already resolved `key`, base64-encoding the result.
pub fn encrypt_with_key(key: &RsaPublicKey, value: &[u8]) -> rsa::Result<String> {
    let ciphertext = crypto::encrypt_oaep_sha256(key, value)?;
    debug!(
        modulus_bytes = key.size(),
        ciphertext_bytes = ciphertext.len(),
        "encrypted secret"
    );
    Ok(STANDARD.encode(ciphertext))
}
