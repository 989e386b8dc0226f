//! Salted SHA-256 password hasher.

use crate::user::ports::PasswordHasher;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// One-way password encoder producing `salt$digest` strings.
///
/// Each call draws a fresh random salt, so encoding the same plaintext
/// twice yields different outputs. The verifying collaborator re-derives
/// the digest from the stored salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256Hasher;

impl SaltedSha256Hasher {
    /// Creates a hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasher for SaltedSha256Hasher {
    fn encode(&self, plaintext: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let mut digest = Sha256::new();
        digest.update(salt.as_bytes());
        digest.update(plaintext.as_bytes());
        format!("{salt}${}", hex::encode(digest.finalize()))
    }
}
