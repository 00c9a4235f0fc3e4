//! Herodex Store - in-memory superhero repository
//!
//! Sole owner of the canonical superhero collection:
//! - CRUD + substring search, all asynchronous with simulated latency
//! - case-insensitive, whitespace-trimmed name uniqueness on create/update
//! - existence invariants surfaced as typed errors, never empty successes
//! - store-assigned identifiers (timestamp + random suffix)
//!
//! # Example
//!
//! ```rust
//! use herodex_store::{
//!     InMemorySuperheroStore, StoreConfig, SuperheroDraft, SuperheroRepository,
//! };
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), herodex_store::StoreError> {
//! let store = InMemorySuperheroStore::with_config(
//!     StoreConfig::new().with_latency(Duration::ZERO),
//! );
//!
//! let hero = store.create(SuperheroDraft::new("Superman")).await?;
//! let hits = store.get_by_name("man").await?;
//! assert_eq!(hits, vec![hero]);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod in_memory;
pub mod repository;
pub mod seed;
pub mod superhero;

pub use config::{StoreConfig, DEFAULT_LATENCY};
pub use error::{
    StoreError, DEFAULT_NAME_ALREADY_EXISTS_MESSAGE, DEFAULT_NOT_FOUND_MESSAGE,
};
pub use in_memory::InMemorySuperheroStore;
pub use repository::SuperheroRepository;
pub use superhero::{
    normalize_name, DraftError, Superhero, SuperheroDraft, NAME_MAX_LEN, NAME_MIN_LEN,
    SUPERPOWER_MAX_LEN, SUPERPOWER_MIN_LEN,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
