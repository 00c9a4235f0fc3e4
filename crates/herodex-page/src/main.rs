//! Herodex demo binary
//!
//! Runs a scripted session against the in-memory store: load, debounced
//! search, add, edit, delete, with outcomes reported on the console. No
//! interactive UI; this demonstrates the wiring.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;

use herodex_page::{FormOutcome, Notifier, PageConfig, PageOrchestrator, SuperheroForm};
use herodex_store::{InMemorySuperheroStore, StoreConfig, Superhero, SuperheroDraft};

#[derive(Parser)]
#[command(name = "herodex", about = "Superhero roster demo over an in-memory store")]
struct Args {
    /// Simulated store latency in milliseconds
    #[arg(long, default_value_t = 200)]
    latency_ms: u64,

    /// Search input settle period in milliseconds
    #[arg(long, default_value_t = 500)]
    debounce_ms: u64,

    /// Start from an empty roster instead of the seeded one
    #[arg(long)]
    empty: bool,
}

/// Notifier that prints to the console and confirms every deletion
struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn success(&self, title: &str, message: Option<&str>) {
        match message {
            Some(message) => println!("[ok] {title}: {message}"),
            None => println!("[ok] {title}"),
        }
    }

    async fn error(&self, title: &str, message: &str) {
        eprintln!("[error] {title}: {message}");
    }

    async fn confirm_delete(&self, subject_name: &str) -> bool {
        println!("[confirm] deleting {subject_name}: yes");
        true
    }
}

/// Form that validates and submits canned drafts
///
/// Create mode pops the next scripted draft; edit mode tweaks the pre-filled
/// record's superpower. Invalid drafts are rejected here, as a real form
/// would, and come back as a cancellation.
struct CannedForm {
    new_drafts: Mutex<VecDeque<SuperheroDraft>>,
}

impl CannedForm {
    fn new(new_drafts: Vec<SuperheroDraft>) -> Self {
        Self {
            new_drafts: Mutex::new(new_drafts.into()),
        }
    }

    fn submit_validated(draft: SuperheroDraft) -> FormOutcome {
        match draft.validate() {
            Ok(()) => FormOutcome::Submitted(draft),
            Err(err) => {
                eprintln!("[form] rejected draft: {err}");
                FormOutcome::Cancelled
            }
        }
    }
}

#[async_trait]
impl SuperheroForm for CannedForm {
    async fn fill(&self, existing: Option<Superhero>) -> FormOutcome {
        match existing {
            Some(hero) => {
                let mut draft = SuperheroDraft::from_hero(&hero);
                draft.superpower = Some(format!(
                    "{} (sharpened in training)",
                    hero.superpower.as_deref().unwrap_or("unknown powers")
                ));
                Self::submit_validated(draft)
            }
            None => match self.new_drafts.lock().expect("form script").pop_front() {
                Some(draft) => Self::submit_validated(draft),
                None => FormOutcome::Cancelled,
            },
        }
    }
}

fn print_roster(label: &str, heroes: &[Superhero]) {
    println!("{label} ({} heroes):", heroes.len());
    for hero in heroes {
        match &hero.superpower {
            Some(power) => println!("  - {} [{}] {power}", hero.name, hero.id),
            None => println!("  - {} [{}]", hero.name, hero.id),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let store_config =
        StoreConfig::new().with_latency(Duration::from_millis(args.latency_ms));
    let store = if args.empty {
        InMemorySuperheroStore::with_config(store_config)
    } else {
        InMemorySuperheroStore::seeded(store_config)
    };

    let form = CannedForm::new(vec![
        SuperheroDraft::new("Martian Manhunter")
            .with_real_name("J'onn J'onzz")
            .with_superpower("Shapeshifting, telepathy"),
        // Duplicate on purpose: shows the uniqueness invariant surfacing
        SuperheroDraft::new("martian manhunter"),
    ]);

    let page = PageOrchestrator::with_config(
        Arc::new(store),
        Arc::new(ConsoleNotifier),
        Arc::new(form),
        PageConfig::new().with_debounce(Duration::from_millis(args.debounce_ms)),
    );

    page.load().await;
    print_roster("loaded", &page.visible().await);

    page.on_search_input("man").await;
    print_roster("search \"man\"", &page.visible().await);
    page.clear_search().await;

    page.add().await;
    page.add().await; // rejected: name already taken

    let first = page.state().await.all.first().cloned();
    if let Some(hero) = first {
        page.edit(&hero.id).await;
        page.delete(&hero.id).await;
    }

    print_roster("final", &page.visible().await);
    Ok(())
}
