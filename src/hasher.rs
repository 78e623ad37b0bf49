//! SHA-256 password hashing.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Hashes the UTF-8 bytes of the password with SHA-256.
///
/// Returns the digest as 64 lowercase hex characters.
pub fn hash_password(password: &SecretString) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.expose_secret().as_bytes());
    hex::encode(hasher.finalize())
}
