//! RSA-OAEP encryption with SHA-256.
//!
//! Both the OAEP label digest and the MGF1 digest are SHA-256. Some libraries
//! default MGF1 to SHA-1 regardless of the main digest; decrypting parties
//! must use SHA-256 for both.

use rand::thread_rng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;

/// SHA-256 output length in bytes.
pub const SHA256_LEN: usize = 32;

/// OAEP padding with SHA-256 for the digest and MGF1.
pub fn oaep_sha256() -> Oaep {
    Oaep::new_with_mgf_hash::<Sha256, Sha256>()
}

/// Largest plaintext, in bytes, that fits a single OAEP block for `key`.
///
/// `k - 2 * hLen - 2`; zero when the modulus is too small for any message.
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(2 * SHA256_LEN + 2)
}

/// Encrypt `plaintext` under `key` with RSA-OAEP/SHA-256.
///
/// The returned ciphertext is always `key.size()` bytes. Oversized
/// plaintexts are rejected by the RSA implementation with
/// [`rsa::Error::MessageTooLong`].
pub fn encrypt_oaep_sha256(key: &RsaPublicKey, plaintext: &[u8]) -> rsa::Result<Vec<u8>> {
    let mut rng = thread_rng();
    key.encrypt(&mut rng, oaep_sha256(), plaintext)
}
