//! Collaborator contracts
//!
//! The orchestrator's seams to the presentation layer. The form and the
//! notifier are black boxes behind these traits; the reimplementations in
//! tests and in the demo binary are the only ones shipped here.

use async_trait::async_trait;
use herodex_store::{Superhero, SuperheroDraft};

/// Toast/alert presentation plus the delete confirmation step
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Report a successful operation
    async fn success(&self, title: &str, message: Option<&str>);

    /// Report a failed operation; `message` is the store's message verbatim
    async fn error(&self, title: &str, message: &str);

    /// Ask the user to confirm deleting the named record
    async fn confirm_delete(&self, subject_name: &str) -> bool;
}

/// What the form hands back, exactly once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// User confirmed with a validated draft
    Submitted(SuperheroDraft),
    /// User cancelled; the orchestrator takes no further action
    Cancelled,
}

/// Modal form collecting and validating a record
///
/// `existing = None` means create mode; `Some` pre-fills for editing.
/// Implementations are responsible for field-level validation
/// ([`SuperheroDraft::validate`]) before submitting.
#[async_trait]
pub trait SuperheroForm: Send + Sync {
    /// Open the form and wait for the user's outcome
    async fn fill(&self, existing: Option<Superhero>) -> FormOutcome;
}
