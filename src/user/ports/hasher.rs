//! Password hashing port.

/// One-way password transform.
///
/// The account service encodes every password through this contract before
/// persistence. Verification against a stored hash is a separate
/// collaborator in the authentication pipeline and is not part of this
/// crate.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Encodes a plaintext password into an opaque hash string.
    fn encode(&self, plaintext: &str) -> String;
}
