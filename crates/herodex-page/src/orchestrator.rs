//! Page orchestrator
//!
//! Mediates between the repository and the presentation layer:
//! - decides which of the two views (full list vs. search results) is
//!   authoritative at any moment
//! - drives the repository for user actions and reconciles whatever
//!   response arrives back into view state (content is trusted, arrival
//!   order never is)
//! - converts every repository failure into a notification; failures never
//!   escape these methods

use std::sync::Arc;

use tokio::sync::Mutex;

use herodex_store::{Superhero, SuperheroRepository};

use crate::collaborators::{FormOutcome, Notifier, SuperheroForm};
use crate::config::PageConfig;
use crate::debounce::Debouncer;
use crate::state::{PageState, ViewMode};

/// Notification titles, one per attempted operation
mod titles {
    pub(super) const LOAD_FAILED: &str = "load failed";
    pub(super) const SEARCH_FAILED: &str = "search failed";
    pub(super) const CREATE_FAILED: &str = "create failed";
    pub(super) const UPDATE_FAILED: &str = "update failed";
    pub(super) const DELETE_FAILED: &str = "delete failed";
    pub(super) const CREATED: &str = "superhero created";
    pub(super) const UPDATED: &str = "superhero updated";
    pub(super) const DELETED: &str = "superhero deleted";
}

/// The page-level controller over a repository and its collaborators
pub struct PageOrchestrator<R, N, F> {
    repository: Arc<R>,
    notifier: Arc<N>,
    form: Arc<F>,
    debouncer: Debouncer,
    state: Mutex<PageState>,
}

impl<R, N, F> PageOrchestrator<R, N, F>
where
    R: SuperheroRepository,
    N: Notifier,
    F: SuperheroForm,
{
    /// Create an orchestrator with default configuration
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, form: Arc<F>) -> Self {
        Self::with_config(repository, notifier, form, PageConfig::default())
    }

    /// Create an orchestrator with the given configuration
    #[must_use]
    pub fn with_config(
        repository: Arc<R>,
        notifier: Arc<N>,
        form: Arc<F>,
        config: PageConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            form,
            debouncer: Debouncer::new(config.debounce),
            state: Mutex::new(PageState::new()),
        }
    }

    /// Snapshot of the current view state
    pub async fn state(&self) -> PageState {
        self.state.lock().await.clone()
    }

    /// The collection the UI renders right now
    pub async fn visible(&self) -> Vec<Superhero> {
        self.state.lock().await.visible().to_vec()
    }

    /// Initial load of the full list
    pub async fn load(&self) {
        match self.repository.get_all().await {
            Ok(all) => {
                tracing::debug!(count = all.len(), "loaded roster");
                self.state.lock().await.all = all;
            }
            Err(err) => {
                tracing::warn!(%err, "load failed");
                self.notifier
                    .error(titles::LOAD_FAILED, &err.to_string())
                    .await;
            }
        }
    }

    /// A keystroke in the search box
    ///
    /// Records the raw term immediately; the debounced, deduplicated value
    /// drives the actual search.
    pub async fn on_search_input(&self, term: &str) {
        self.state.lock().await.search_term = term.to_string();
        if let Some(settled) = self.debouncer.submit(term).await {
            self.search(&settled).await;
        }
    }

    /// Run a search for the given term
    ///
    /// An empty (after trimming) term leaves search: back to browsing with
    /// no repository call. A failure keeps the page in searching mode with
    /// empty results. State keeps the term raw; only the repository sees it
    /// trimmed.
    pub async fn search(&self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            self.state.lock().await.enter_browsing();
            return;
        }

        {
            let mut state = self.state.lock().await;
            state.mode = ViewMode::Searching;
            state.search_term = term.to_string();
        }
        self.run_search(trimmed).await;
    }

    /// Explicit "clear search" action
    pub async fn clear_search(&self) {
        self.state.lock().await.enter_browsing();
        self.debouncer.reset().await;
    }

    /// Add a new record through the form
    pub async fn add(&self) {
        let FormOutcome::Submitted(draft) = self.form.fill(None).await else {
            tracing::debug!("add cancelled");
            return;
        };

        match self.repository.create(draft).await {
            Ok(hero) => {
                tracing::info!(id = %hero.id, name = %hero.name, "created superhero");
                self.refresh_after_mutation().await;
                self.notifier
                    .success(titles::CREATED, Some(&hero.name))
                    .await;
            }
            Err(err) => {
                tracing::warn!(%err, "create failed");
                self.notifier
                    .error(titles::CREATE_FAILED, &err.to_string())
                    .await;
            }
        }
    }

    /// Edit an existing record through the form
    pub async fn edit(&self, id: &str) {
        let Some(existing) = self.state.lock().await.find(id).cloned() else {
            tracing::warn!(%id, "edit requested for a record not in view");
            return;
        };

        let target_id = existing.id.clone();
        let FormOutcome::Submitted(draft) = self.form.fill(Some(existing)).await else {
            tracing::debug!(%id, "edit cancelled");
            return;
        };

        let hero = Superhero {
            id: draft.id.clone().unwrap_or(target_id),
            name: draft.name,
            real_name: draft.real_name,
            superpower: draft.superpower,
        };

        match self.repository.update(hero).await {
            Ok(hero) => {
                tracing::info!(id = %hero.id, name = %hero.name, "updated superhero");
                self.refresh_after_mutation().await;
                self.notifier
                    .success(titles::UPDATED, Some(&hero.name))
                    .await;
            }
            Err(err) => {
                tracing::warn!(%err, "update failed");
                self.notifier
                    .error(titles::UPDATE_FAILED, &err.to_string())
                    .await;
            }
        }
    }

    /// Delete a record after explicit confirmation
    ///
    /// A declined confirmation makes no repository call and changes nothing.
    /// On success the record is dropped from both view collections directly,
    /// with no refetch.
    pub async fn delete(&self, id: &str) {
        let Some(subject) = self.state.lock().await.find(id).cloned() else {
            tracing::warn!(%id, "delete requested for a record not in view");
            return;
        };

        if !self.notifier.confirm_delete(&subject.name).await {
            tracing::debug!(%id, "delete declined");
            return;
        }

        match self.repository.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, name = %subject.name, "deleted superhero");
                self.state.lock().await.remove_everywhere(id);
                self.notifier
                    .success(titles::DELETED, Some(&subject.name))
                    .await;
            }
            Err(err) => {
                tracing::warn!(%err, "delete failed");
                self.notifier
                    .error(titles::DELETE_FAILED, &err.to_string())
                    .await;
            }
        }
    }

    /// Issue the search and apply whatever response arrives
    async fn run_search(&self, term: &str) {
        match self.repository.get_by_name(term).await {
            Ok(results) => {
                tracing::debug!(%term, hits = results.len(), "search completed");
                self.state.lock().await.search_results = results;
            }
            Err(err) => {
                // Canonical choice: stay in searching mode, show nothing
                tracing::warn!(%term, %err, "search failed");
                self.state.lock().await.search_results.clear();
                self.notifier
                    .error(titles::SEARCH_FAILED, &err.to_string())
                    .await;
            }
        }
    }

    /// Re-fetch the full list after a successful create/update, and reissue
    /// the current search when the page is in searching mode
    async fn refresh_after_mutation(&self) {
        match self.repository.get_all().await {
            Ok(all) => self.state.lock().await.all = all,
            Err(err) => {
                tracing::warn!(%err, "refresh failed");
                self.notifier
                    .error(titles::LOAD_FAILED, &err.to_string())
                    .await;
            }
        }

        let current_term = {
            let state = self.state.lock().await;
            (state.mode == ViewMode::Searching).then(|| state.search_term.clone())
        };
        if let Some(term) = current_term {
            self.run_search(term.trim()).await;
        }
    }
}
