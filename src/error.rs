//! Shared failure classification for domain service errors.
//!
//! The presentation layer maps every service failure to a user-visible
//! outcome: a "not found" page or status, an "already exists" rejection, or
//! a generic operation failure. Each service error type exposes its
//! classification through a `kind()` accessor returning [`ErrorKind`].

/// Classification of a domain service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lookup target is absent.
    NotFound,
    /// A uniqueness constraint would be violated by the write.
    AlreadyExists,
    /// Validation or infrastructure failure outside the two domain kinds.
    Other,
}

impl ErrorKind {
    /// Returns `true` for failures caused by an absent lookup target.
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns `true` for failures caused by a uniqueness violation.
    #[must_use]
    pub const fn is_already_exists(self) -> bool {
        matches!(self, Self::AlreadyExists)
    }
}
