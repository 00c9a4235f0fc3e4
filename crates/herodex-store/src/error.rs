//! Store-boundary error taxonomy
//!
//! Two conditions only: a normalized-name collision and a missing record.
//! Both carry a user-facing message with an overridable default; the store
//! never recovers from either, they always propagate to the caller.

/// Default message for a name collision
pub const DEFAULT_NAME_ALREADY_EXISTS_MESSAGE: &str =
    "a superhero with that name already exists";

/// Default message for a missing record
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "superhero not found";

/// Failures surfaced by repository operations
///
/// Field-level input problems never reach the store; these cover the
/// cross-record invariants (uniqueness, existence) only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Normalized name collides with a different stored record
    #[error("{0}")]
    NameAlreadyExists(String),

    /// No record matches the given identifier
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    /// Name collision with the default message
    #[inline]
    #[must_use]
    pub fn name_already_exists() -> Self {
        Self::NameAlreadyExists(DEFAULT_NAME_ALREADY_EXISTS_MESSAGE.to_string())
    }

    /// Name collision with a custom message
    #[inline]
    #[must_use]
    pub fn name_already_exists_with(message: impl Into<String>) -> Self {
        Self::NameAlreadyExists(message.into())
    }

    /// Missing record with the default message
    #[inline]
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound(DEFAULT_NOT_FOUND_MESSAGE.to_string())
    }

    /// Missing record with a custom message
    #[inline]
    #[must_use]
    pub fn not_found_with(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
