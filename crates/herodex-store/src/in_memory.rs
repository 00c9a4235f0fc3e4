//! In-memory repository implementation
//!
//! Sole owner of the canonical collection. A `Vec` preserves insertion
//! order; a tokio mutex makes each check-then-act sequence atomic with
//! respect to other operations. Every operation first awaits the configured
//! simulated latency, standing in for network transport.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tokio::sync::Mutex;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::repository::SuperheroRepository;
use crate::superhero::{normalize_name, Superhero, SuperheroDraft};

/// In-memory superhero store with simulated latency
///
/// Clone-friendly via `Arc`; clones share the same collection.
#[derive(Debug, Clone)]
pub struct InMemorySuperheroStore {
    heroes: Arc<Mutex<Vec<Superhero>>>,
    config: StoreConfig,
}

impl Default for InMemorySuperheroStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySuperheroStore {
    /// Create an empty store with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            heroes: Arc::new(Mutex::new(Vec::new())),
            config,
        }
    }

    /// Create a store pre-populated with an initial roster
    #[must_use]
    pub fn with_roster(roster: Vec<Superhero>, config: StoreConfig) -> Self {
        Self {
            heroes: Arc::new(Mutex::new(roster)),
            config,
        }
    }

    /// Create a store seeded with the default roster
    #[must_use]
    pub fn seeded(config: StoreConfig) -> Self {
        Self::with_roster(crate::seed::default_roster(), config)
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    /// Generate a fresh identifier: millis timestamp plus a zero-padded
    /// 6-digit random suffix, re-rolled while it collides with a stored id.
    fn generate_id(existing: &[Superhero]) -> String {
        let mut rng = rand::rng();
        loop {
            let timestamp = Utc::now().timestamp_millis();
            let suffix: u32 = rng.random_range(1..=999_999);
            let candidate = format!("{timestamp}{suffix:06}");
            if !existing.iter().any(|hero| hero.id == candidate) {
                return candidate;
            }
        }
    }

    fn name_collides(heroes: &[Superhero], name: &str, excluding_id: Option<&str>) -> bool {
        let normalized = normalize_name(name);
        heroes.iter().any(|hero| {
            excluding_id != Some(hero.id.as_str()) && hero.normalized_name() == normalized
        })
    }
}

#[async_trait::async_trait]
impl SuperheroRepository for InMemorySuperheroStore {
    async fn create(&self, draft: SuperheroDraft) -> Result<Superhero, StoreError> {
        self.simulate_latency().await;

        let mut heroes = self.heroes.lock().await;
        if Self::name_collides(&heroes, &draft.name, None) {
            tracing::debug!(name = %draft.name, "create rejected: name collision");
            return Err(StoreError::name_already_exists());
        }

        let id = Self::generate_id(&heroes);
        let hero = draft.into_hero(id);
        heroes.push(hero.clone());
        tracing::debug!(id = %hero.id, name = %hero.name, "created superhero");
        Ok(hero)
    }

    async fn update(&self, hero: Superhero) -> Result<Superhero, StoreError> {
        self.simulate_latency().await;

        let mut heroes = self.heroes.lock().await;
        let Some(index) = heroes.iter().position(|stored| stored.id == hero.id) else {
            tracing::debug!(id = %hero.id, "update rejected: unknown id");
            return Err(StoreError::not_found());
        };

        let name_changed = heroes[index].normalized_name() != normalize_name(&hero.name);
        if name_changed && Self::name_collides(&heroes, &hero.name, Some(&hero.id)) {
            tracing::debug!(id = %hero.id, name = %hero.name, "update rejected: name collision");
            return Err(StoreError::name_already_exists());
        }

        heroes[index] = hero.clone();
        tracing::debug!(id = %hero.id, "updated superhero");
        Ok(hero)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;

        let mut heroes = self.heroes.lock().await;
        let Some(index) = heroes.iter().position(|stored| stored.id == id) else {
            tracing::debug!(%id, "delete rejected: unknown id");
            return Err(StoreError::not_found());
        };

        heroes.remove(index);
        tracing::debug!(%id, "deleted superhero");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Superhero>, StoreError> {
        self.simulate_latency().await;
        Ok(self.heroes.lock().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Superhero, StoreError> {
        self.simulate_latency().await;

        let heroes = self.heroes.lock().await;
        heroes
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
            .ok_or_else(StoreError::not_found)
    }

    async fn get_by_name(&self, term: &str) -> Result<Vec<Superhero>, StoreError> {
        self.simulate_latency().await;

        let needle = term.to_lowercase();
        let heroes = self.heroes.lock().await;
        Ok(heroes
            .iter()
            .filter(|hero| hero.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
