//! Testing utilities for the Herodex workspace
//!
//! Shared fakes, fixtures, and instrumentation: a recording notifier, a
//! scripted form, and a fault-injecting/counting repository wrapper.

#![allow(missing_docs)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use herodex_page::{FormOutcome, Notifier, SuperheroForm};
use herodex_store::{
    InMemorySuperheroStore, StoreConfig, StoreError, Superhero, SuperheroDraft,
    SuperheroRepository,
};

/// Fixture record with only the required fields set
pub fn hero(id: &str, name: &str) -> Superhero {
    Superhero {
        id: id.to_string(),
        name: name.to_string(),
        real_name: None,
        superpower: None,
    }
}

/// Empty in-memory store with zero latency
pub fn quiet_store() -> InMemorySuperheroStore {
    InMemorySuperheroStore::with_config(StoreConfig::new().with_latency(Duration::ZERO))
}

/// Zero-latency in-memory store pre-populated with a roster
pub fn quiet_store_with(roster: Vec<Superhero>) -> InMemorySuperheroStore {
    InMemorySuperheroStore::with_roster(
        roster,
        StoreConfig::new().with_latency(Duration::ZERO),
    )
}

/// Everything a notifier was asked to present, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    Success {
        title: String,
        message: Option<String>,
    },
    Error {
        title: String,
        message: String,
    },
    ConfirmDelete {
        subject: String,
    },
}

/// Notifier fake that records every call and answers confirmations
/// with a configurable response (default: confirmed)
#[derive(Debug)]
pub struct RecordingNotifier {
    confirm_response: AtomicBool,
    events: Mutex<Vec<NotifierEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            confirm_response: AtomicBool::new(true),
            events: Mutex::new(Vec::new()),
        }
    }

    /// A notifier that declines every delete confirmation
    pub fn declining() -> Self {
        let notifier = Self::new();
        notifier.confirm_response.store(false, Ordering::SeqCst);
        notifier
    }

    pub fn set_confirm_response(&self, confirmed: bool) {
        self.confirm_response.store(confirmed, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<(String, Option<String>)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NotifierEvent::Success { title, message } => Some((title, message)),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NotifierEvent::Error { title, message } => Some((title, message)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn success(&self, title: &str, message: Option<&str>) {
        self.events.lock().unwrap().push(NotifierEvent::Success {
            title: title.to_string(),
            message: message.map(ToString::to_string),
        });
    }

    async fn error(&self, title: &str, message: &str) {
        self.events.lock().unwrap().push(NotifierEvent::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    async fn confirm_delete(&self, subject_name: &str) -> bool {
        self.events.lock().unwrap().push(NotifierEvent::ConfirmDelete {
            subject: subject_name.to_string(),
        });
        self.confirm_response.load(Ordering::SeqCst)
    }
}

/// Form fake that replays scripted outcomes and records what it was
/// pre-filled with; an exhausted script cancels
#[derive(Debug, Default)]
pub struct ScriptedForm {
    outcomes: Mutex<VecDeque<FormOutcome>>,
    prefills: Mutex<Vec<Option<Superhero>>>,
}

impl ScriptedForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form that submits the given draft once
    pub fn submitting(draft: SuperheroDraft) -> Self {
        Self::with_outcomes(vec![FormOutcome::Submitted(draft)])
    }

    /// A form that cancels once
    pub fn cancelling() -> Self {
        Self::with_outcomes(vec![FormOutcome::Cancelled])
    }

    pub fn with_outcomes(outcomes: Vec<FormOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            prefills: Mutex::new(Vec::new()),
        }
    }

    /// What the form was opened with, per invocation
    pub fn prefills(&self) -> Vec<Option<Superhero>> {
        self.prefills.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuperheroForm for ScriptedForm {
    async fn fill(&self, existing: Option<Superhero>) -> FormOutcome {
        self.prefills.lock().unwrap().push(existing);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(FormOutcome::Cancelled)
    }
}

/// Repository operations, for counting and fault injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Create,
    Update,
    Delete,
    GetAll,
    GetById,
    GetByName,
}

/// Repository wrapper that counts calls per operation and can make chosen
/// operations fail with a scripted error
#[derive(Debug)]
pub struct FaultStore<R> {
    inner: R,
    failures: Mutex<HashMap<StoreOp, StoreError>>,
    counts: Mutex<HashMap<StoreOp, usize>>,
}

impl<R> FaultStore<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failures: Mutex::new(HashMap::new()),
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Make every call to `op` fail with `error` until cleared
    pub fn fail_with(&self, op: StoreOp, error: StoreError) {
        self.failures.lock().unwrap().insert(op, error);
    }

    pub fn clear_fault(&self, op: StoreOp) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// How many times `op` was called, failures included
    pub fn count(&self, op: StoreOp) -> usize {
        self.counts.lock().unwrap().get(&op).copied().unwrap_or(0)
    }

    fn enter(&self, op: StoreOp) -> Option<StoreError> {
        *self.counts.lock().unwrap().entry(op).or_insert(0) += 1;
        self.failures.lock().unwrap().get(&op).cloned()
    }
}

#[async_trait]
impl<R: SuperheroRepository> SuperheroRepository for FaultStore<R> {
    async fn create(&self, draft: SuperheroDraft) -> Result<Superhero, StoreError> {
        if let Some(err) = self.enter(StoreOp::Create) {
            return Err(err);
        }
        self.inner.create(draft).await
    }

    async fn update(&self, hero: Superhero) -> Result<Superhero, StoreError> {
        if let Some(err) = self.enter(StoreOp::Update) {
            return Err(err);
        }
        self.inner.update(hero).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if let Some(err) = self.enter(StoreOp::Delete) {
            return Err(err);
        }
        self.inner.delete(id).await
    }

    async fn get_all(&self) -> Result<Vec<Superhero>, StoreError> {
        if let Some(err) = self.enter(StoreOp::GetAll) {
            return Err(err);
        }
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Superhero, StoreError> {
        if let Some(err) = self.enter(StoreOp::GetById) {
            return Err(err);
        }
        self.inner.get_by_id(id).await
    }

    async fn get_by_name(&self, term: &str) -> Result<Vec<Superhero>, StoreError> {
        if let Some(err) = self.enter(StoreOp::GetByName) {
            return Err(err);
        }
        self.inner.get_by_name(term).await
    }
}
