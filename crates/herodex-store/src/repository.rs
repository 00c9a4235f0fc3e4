//! Repository contract
//!
//! The seam between the store and everything above it. All reads and writes
//! of the collection go through this trait; implementations own the data and
//! decide how latency and failure are simulated.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::superhero::{Superhero, SuperheroDraft};

/// Asynchronous CRUD + search over the superhero collection
///
/// Success and failure semantics:
/// - uniqueness is checked on the normalized name (trimmed, lowercased), on
///   create and on update when the name actually changes;
/// - existence failures surface as [`StoreError::NotFound`], never as an
///   empty success;
/// - search never fails on a miss, it returns an empty vec.
#[async_trait]
pub trait SuperheroRepository: Send + Sync {
    /// Persist a new record, assigning a fresh identifier
    ///
    /// # Errors
    /// [`StoreError::NameAlreadyExists`] on a normalized-name collision.
    async fn create(&self, draft: SuperheroDraft) -> Result<Superhero, StoreError>;

    /// Replace an existing record wholesale
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if the identifier is unknown;
    /// [`StoreError::NameAlreadyExists`] if the name changed and the new
    /// normalized name collides with a different record.
    async fn update(&self, hero: Superhero) -> Result<Superhero, StoreError>;

    /// Remove a record by identifier
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if the identifier is unknown.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Snapshot of the full collection, insertion order preserved
    ///
    /// Repeated calls without intervening mutation are value-equal.
    ///
    /// # Errors
    /// None from the in-memory store; the signature leaves room for
    /// implementations with real transport.
    async fn get_all(&self) -> Result<Vec<Superhero>, StoreError>;

    /// Look up a single record by identifier
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if the identifier is unknown.
    async fn get_by_id(&self, id: &str) -> Result<Superhero, StoreError>;

    /// Case-insensitive substring search over the name field
    ///
    /// A miss yields an empty vec, never an error. Empty-term policy is the
    /// caller's responsibility.
    ///
    /// # Errors
    /// None from the in-memory store.
    async fn get_by_name(&self, term: &str) -> Result<Vec<Superhero>, StoreError>;
}
