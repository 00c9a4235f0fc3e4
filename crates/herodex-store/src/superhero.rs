//! Superhero domain model
//!
//! Provides the persisted [`Superhero`] record, the form-produced
//! [`SuperheroDraft`], field-level validation bounds, and the name
//! normalization used for every uniqueness and search comparison.

use serde::{Deserialize, Serialize};

/// Minimum length (after trimming) for name and real name
pub const NAME_MIN_LEN: usize = 2;
/// Maximum length (after trimming) for name and real name
pub const NAME_MAX_LEN: usize = 50;
/// Minimum length (after trimming) for the superpower description
pub const SUPERPOWER_MIN_LEN: usize = 2;
/// Maximum length (after trimming) for the superpower description
pub const SUPERPOWER_MAX_LEN: usize = 200;

/// A persisted superhero record
///
/// The `id` is assigned by the store; everything else comes from user input
/// through a validated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superhero {
    /// Store-assigned identifier
    pub id: String,
    /// Display name, unique across the collection after normalization
    pub name: String,
    /// Civilian identity
    pub real_name: Option<String>,
    /// Free-text power description
    pub superpower: Option<String>,
}

impl Superhero {
    /// Name after normalization, as used for uniqueness checks
    #[inline]
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a name for comparison: trim surrounding whitespace, lowercase
///
/// Applied at comparison time to both sides, never baked into stored values.
#[inline]
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// An unvalidated, possibly id-less record as produced by the form
///
/// A missing `id` means the record has not been persisted yet and will be
/// created; a present `id` addresses an existing record for update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperheroDraft {
    /// Identifier of the record being edited, absent for new records
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// Civilian identity
    pub real_name: Option<String>,
    /// Free-text power description
    pub superpower: Option<String>,
}

impl SuperheroDraft {
    /// Create a draft for a new record with the given name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            real_name: None,
            superpower: None,
        }
    }

    /// Create a draft pre-filled from an existing record
    #[must_use]
    pub fn from_hero(hero: &Superhero) -> Self {
        Self {
            id: Some(hero.id.clone()),
            name: hero.name.clone(),
            real_name: hero.real_name.clone(),
            superpower: hero.superpower.clone(),
        }
    }

    /// With an identifier (update mode)
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// With a real name
    #[inline]
    #[must_use]
    pub fn with_real_name(mut self, real_name: impl Into<String>) -> Self {
        self.real_name = Some(real_name.into());
        self
    }

    /// With a superpower description
    #[inline]
    #[must_use]
    pub fn with_superpower(mut self, superpower: impl Into<String>) -> Self {
        self.superpower = Some(superpower.into());
        self
    }

    /// Validate field-level constraints
    ///
    /// This is the form collaborator's responsibility; the store only
    /// enforces cross-record invariants and assumes drafts reaching it have
    /// already passed here.
    ///
    /// # Errors
    /// - [`DraftError::MissingName`] if the name is empty after trimming
    /// - [`DraftError::LengthOutOfBounds`] if any field violates its bounds
    pub fn validate(&self) -> Result<(), DraftError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            return Err(DraftError::MissingName);
        }
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
            return Err(DraftError::LengthOutOfBounds {
                field: "name",
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
            });
        }

        if let Some(real_name) = &self.real_name {
            let len = real_name.trim().chars().count();
            if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
                return Err(DraftError::LengthOutOfBounds {
                    field: "real name",
                    min: NAME_MIN_LEN,
                    max: NAME_MAX_LEN,
                });
            }
        }

        if let Some(superpower) = &self.superpower {
            let len = superpower.trim().chars().count();
            if !(SUPERPOWER_MIN_LEN..=SUPERPOWER_MAX_LEN).contains(&len) {
                return Err(DraftError::LengthOutOfBounds {
                    field: "superpower",
                    min: SUPERPOWER_MIN_LEN,
                    max: SUPERPOWER_MAX_LEN,
                });
            }
        }

        Ok(())
    }

    /// Turn the draft into a persisted record under the given identifier
    ///
    /// The name is stored trimmed; normalization for comparisons still
    /// happens at comparison time.
    #[must_use]
    pub fn into_hero(self, id: String) -> Superhero {
        Superhero {
            id,
            name: self.name.trim().to_string(),
            real_name: self.real_name,
            superpower: self.superpower,
        }
    }
}

/// Field-level validation failures on a draft
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Name is empty or whitespace-only
    #[error("name is required")]
    MissingName,

    /// A field is outside its allowed length range
    #[error("{field} must be between {min} and {max} characters")]
    LengthOutOfBounds {
        /// Offending field
        field: &'static str,
        /// Minimum length after trimming
        min: usize,
        /// Maximum length after trimming
        max: usize,
    },
}
