//! Herodex Page - orchestration over the superhero store
//!
//! The page-level controller that:
//! - owns the UI-visible state (full list, search results, mode, term)
//! - debounces and deduplicates search input before it reaches the store
//! - drives the store for add/edit/delete and reconciles the responses
//! - reports every outcome through the notifier collaborator
//!
//! # Example
//!
//! ```rust,ignore
//! use herodex_page::{PageConfig, PageOrchestrator};
//! use herodex_store::InMemorySuperheroStore;
//! use std::sync::Arc;
//!
//! # async fn example(notifier: Arc<MyNotifier>, form: Arc<MyForm>) {
//! let store = Arc::new(InMemorySuperheroStore::new());
//! let page = PageOrchestrator::new(store, notifier, form);
//!
//! page.load().await;
//! page.on_search_input("bat").await;
//! println!("{} visible", page.visible().await.len());
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod collaborators;
pub mod config;
pub mod debounce;
pub mod orchestrator;
pub mod state;

pub use collaborators::{FormOutcome, Notifier, SuperheroForm};
pub use config::PageConfig;
pub use debounce::{Debouncer, DEFAULT_SETTLE};
pub use orchestrator::PageOrchestrator;
pub use state::{PageState, ViewMode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
