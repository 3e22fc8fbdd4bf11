//! RSA-OAEP (SHA-256) encryption of small secrets.
//!
//! Takes a PEM public key or X.509 certificate plus a plaintext and returns
//! the base64-encoded ciphertext. Certificates are only used as a container
//! for their public key; no chain, validity or signature checks are done.

pub mod crypto;
pub mod encryptor;
pub mod error;
pub mod pem;

pub use encryptor::{encrypt_secret, encrypt_secret_bytes, encrypt_with_key};
pub use error::{PemError, Result, SealError, UnsupportedPemFormat, UNSUPPORTED_PEM_MESSAGE};
pub use crate::pem::{first_block, resolve_public_key, PemKind};

pub use rsa::RsaPublicKey;
