//! Page view state
//!
//! Explicit state struct replacing the reactive derived-signal graph: the
//! full list, the latest search results, the mode flag selecting between
//! them, and the raw search term. The visible list is always exactly one of
//! the two collections, never a merge.

use herodex_store::Superhero;

/// Which collection the page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Showing the full list (initial state)
    #[default]
    Browsing,
    /// Showing results for the current search term
    Searching,
}

/// The orchestrator's UI-visible state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// Mirror of the store's full collection
    pub all: Vec<Superhero>,
    /// Results for the most recent search term
    pub search_results: Vec<Superhero>,
    /// Selector between the two collections
    pub mode: ViewMode,
    /// Raw search term as last entered
    pub search_term: String,
}

impl PageState {
    /// Create the initial (browsing, empty) state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection the UI renders right now
    #[inline]
    #[must_use]
    pub fn visible(&self) -> &[Superhero] {
        match self.mode {
            ViewMode::Browsing => &self.all,
            ViewMode::Searching => &self.search_results,
        }
    }

    /// Leave search: back to browsing with no results and no term
    pub(crate) fn enter_browsing(&mut self) {
        self.mode = ViewMode::Browsing;
        self.search_results.clear();
        self.search_term.clear();
    }

    /// Drop a record from both collections in place
    pub(crate) fn remove_everywhere(&mut self, id: &str) {
        self.all.retain(|hero| hero.id != id);
        self.search_results.retain(|hero| hero.id != id);
    }

    /// Find a record by id in whichever collections hold it
    pub(crate) fn find(&self, id: &str) -> Option<&Superhero> {
        self.all
            .iter()
            .chain(self.search_results.iter())
            .find(|hero| hero.id == id)
    }
}
