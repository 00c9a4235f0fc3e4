//! Scenario tests for the mutating-action contract: add, edit, delete,
//! and the refresh/notification behavior around them

use std::sync::Arc;
use std::time::Duration;

use herodex_page::{PageConfig, PageOrchestrator, ViewMode};
use herodex_store::{
    InMemorySuperheroStore, StoreError, Superhero, SuperheroDraft,
    DEFAULT_NAME_ALREADY_EXISTS_MESSAGE, DEFAULT_NOT_FOUND_MESSAGE,
};
use herodex_test_utils::{
    hero, quiet_store_with, FaultStore, NotifierEvent, RecordingNotifier, ScriptedForm,
    StoreOp,
};
use pretty_assertions::assert_eq;

type Page = PageOrchestrator<FaultStore<InMemorySuperheroStore>, RecordingNotifier, ScriptedForm>;

fn build(
    roster: Vec<Superhero>,
    notifier: RecordingNotifier,
    form: ScriptedForm,
) -> (
    Page,
    Arc<FaultStore<InMemorySuperheroStore>>,
    Arc<RecordingNotifier>,
    Arc<ScriptedForm>,
) {
    let store = Arc::new(FaultStore::new(quiet_store_with(roster)));
    let notifier = Arc::new(notifier);
    let form = Arc::new(form);
    let page = PageOrchestrator::with_config(
        Arc::clone(&store),
        Arc::clone(&notifier),
        Arc::clone(&form),
        PageConfig::new().with_debounce(Duration::ZERO),
    );
    (page, store, notifier, form)
}

#[tokio::test]
async fn load_populates_the_full_list() {
    let roster = vec![hero("1", "Superman"), hero("2", "Batman")];
    let (page, _, notifier, _) = build(roster.clone(), RecordingNotifier::new(), ScriptedForm::new());

    page.load().await;

    let state = page.state().await;
    assert_eq!(state.all, roster);
    assert_eq!(state.mode, ViewMode::Browsing);
    assert_eq!(state.visible(), roster.as_slice());
    assert!(notifier.events().is_empty());
}

#[tokio::test]
async fn load_failure_notifies_and_leaves_state_empty() {
    let (page, store, notifier, _) =
        build(vec![hero("1", "Superman")], RecordingNotifier::new(), ScriptedForm::new());
    store.fail_with(StoreOp::GetAll, StoreError::not_found_with("the wire is down"));

    page.load().await;

    assert!(page.state().await.all.is_empty());
    assert_eq!(
        notifier.errors(),
        vec![("load failed".to_string(), "the wire is down".to_string())]
    );
}

#[tokio::test]
async fn add_success_refreshes_list_and_notifies_with_name() {
    let (page, store, notifier, _) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::new(),
        ScriptedForm::submitting(SuperheroDraft::new("Green Lantern")),
    );
    page.load().await;

    page.add().await;

    let state = page.state().await;
    assert!(state.all.iter().any(|h| h.name == "Green Lantern"));
    assert!(state.search_results.is_empty());
    assert_eq!(state.mode, ViewMode::Browsing);
    assert_eq!(
        notifier.successes(),
        vec![(
            "superhero created".to_string(),
            Some("Green Lantern".to_string())
        )]
    );
    // Browsing mode: no search was reissued
    assert_eq!(store.count(StoreOp::GetByName), 0);
}

#[tokio::test]
async fn add_cancelled_makes_no_repository_call() {
    let (page, store, notifier, _) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::new(),
        ScriptedForm::cancelling(),
    );
    page.load().await;

    page.add().await;

    assert_eq!(store.count(StoreOp::Create), 0);
    assert!(notifier.events().is_empty());
    assert_eq!(page.state().await.all.len(), 1);
}

#[tokio::test]
async fn add_with_colliding_name_forwards_the_store_message() {
    let (page, store, notifier, _) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::new(),
        ScriptedForm::submitting(SuperheroDraft::new("superman")),
    );
    page.load().await;

    page.add().await;

    assert_eq!(
        notifier.errors(),
        vec![(
            "create failed".to_string(),
            DEFAULT_NAME_ALREADY_EXISTS_MESSAGE.to_string()
        )]
    );
    // No optimistic update to revert: the list is exactly as loaded
    assert_eq!(page.state().await.all, vec![hero("1", "Superman")]);
    assert_eq!(store.count(StoreOp::GetAll), 1);
}

#[tokio::test]
async fn edit_prefills_the_form_and_updates() {
    let superman = hero("1", "Superman");
    let draft = SuperheroDraft::from_hero(&superman).with_real_name("Clark Kent");
    let (page, _, notifier, form) = build(
        vec![superman.clone()],
        RecordingNotifier::new(),
        ScriptedForm::submitting(draft),
    );
    page.load().await;

    page.edit("1").await;

    assert_eq!(form.prefills(), vec![Some(superman)]);
    let state = page.state().await;
    assert_eq!(state.all[0].real_name, Some("Clark Kent".to_string()));
    assert_eq!(
        notifier.successes(),
        vec![("superhero updated".to_string(), Some("Superman".to_string()))]
    );
}

#[tokio::test]
async fn edit_with_unchanged_name_never_collides() {
    let superman = hero("1", "Superman");
    let draft = SuperheroDraft::from_hero(&superman).with_superpower("Flight and heat vision");
    let (page, _, notifier, _) = build(
        vec![superman, hero("2", "Batman")],
        RecordingNotifier::new(),
        ScriptedForm::submitting(draft),
    );
    page.load().await;

    page.edit("1").await;

    assert!(notifier.errors().is_empty());
    assert_eq!(
        page.state().await.all[0].superpower,
        Some("Flight and heat vision".to_string())
    );
}

#[tokio::test]
async fn edit_rename_collision_notifies_update_failed() {
    let batman = hero("2", "Batman");
    let draft = SuperheroDraft {
        name: "Superman".into(),
        ..SuperheroDraft::from_hero(&batman)
    };
    let (page, _, notifier, _) = build(
        vec![hero("1", "Superman"), batman],
        RecordingNotifier::new(),
        ScriptedForm::submitting(draft),
    );
    page.load().await;

    page.edit("2").await;

    assert_eq!(
        notifier.errors(),
        vec![(
            "update failed".to_string(),
            DEFAULT_NAME_ALREADY_EXISTS_MESSAGE.to_string()
        )]
    );
    // State untouched
    assert_eq!(page.state().await.all[1].name, "Batman");
}

#[tokio::test]
async fn edit_of_a_record_not_in_view_is_a_noop() {
    let (page, store, notifier, form) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::new(),
        ScriptedForm::submitting(SuperheroDraft::new("Ghost")),
    );
    page.load().await;

    page.edit("missing").await;

    assert!(form.prefills().is_empty());
    assert_eq!(store.count(StoreOp::Update), 0);
    assert!(notifier.events().is_empty());
}

#[tokio::test]
async fn delete_confirmed_removes_from_view_without_refetch() {
    let (page, store, notifier, _) = build(
        vec![hero("1", "Superman"), hero("2", "Batman")],
        RecordingNotifier::new(),
        ScriptedForm::new(),
    );
    page.load().await;

    page.delete("2").await;

    let state = page.state().await;
    assert_eq!(state.all, vec![hero("1", "Superman")]);
    assert_eq!(
        notifier.events(),
        vec![
            NotifierEvent::ConfirmDelete {
                subject: "Batman".to_string()
            },
            NotifierEvent::Success {
                title: "superhero deleted".to_string(),
                message: Some("Batman".to_string())
            },
        ]
    );
    // Removal is applied in place: the only get_all was the initial load
    assert_eq!(store.count(StoreOp::GetAll), 1);
}

#[tokio::test]
async fn delete_declined_calls_nothing_and_changes_nothing() {
    let (page, store, notifier, _) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::declining(),
        ScriptedForm::new(),
    );
    page.load().await;
    let before = page.state().await;

    page.delete("1").await;

    assert_eq!(store.count(StoreOp::Delete), 0);
    assert_eq!(page.state().await, before);
    assert!(notifier.successes().is_empty());
    assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn delete_failure_notifies_and_keeps_the_record() {
    let (page, store, notifier, _) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::new(),
        ScriptedForm::new(),
    );
    page.load().await;
    store.fail_with(StoreOp::Delete, StoreError::not_found());

    page.delete("1").await;

    assert_eq!(
        notifier.errors(),
        vec![(
            "delete failed".to_string(),
            DEFAULT_NOT_FOUND_MESSAGE.to_string()
        )]
    );
    assert_eq!(page.state().await.all.len(), 1);
}

#[tokio::test]
async fn delete_while_searching_prunes_both_collections() {
    let (page, _, _, _) = build(
        vec![hero("1", "Superman"), hero("2", "Batman")],
        RecordingNotifier::new(),
        ScriptedForm::new(),
    );
    page.load().await;
    page.search("bat").await;

    // Not a search hit: still leaves the full list
    page.delete("1").await;
    let state = page.state().await;
    assert_eq!(state.mode, ViewMode::Searching);
    assert_eq!(state.all, vec![hero("2", "Batman")]);
    assert_eq!(state.search_results, vec![hero("2", "Batman")]);

    // A search hit: leaves both
    page.delete("2").await;
    let state = page.state().await;
    assert!(state.all.is_empty());
    assert!(state.search_results.is_empty());
    assert!(state.visible().is_empty());
}

#[tokio::test]
async fn add_while_searching_reissues_the_current_search() {
    let (page, store, _, _) = build(
        vec![hero("1", "Superman")],
        RecordingNotifier::new(),
        ScriptedForm::submitting(SuperheroDraft::new("Batman")),
    );
    page.load().await;
    page.search("man").await;
    assert_eq!(store.count(StoreOp::GetByName), 1);

    page.add().await;

    let state = page.state().await;
    assert_eq!(state.mode, ViewMode::Searching);
    assert_eq!(store.count(StoreOp::GetByName), 2);
    assert!(state.search_results.iter().any(|h| h.name == "Batman"));
    assert!(state.all.iter().any(|h| h.name == "Batman"));
}

#[tokio::test]
async fn full_session_flow() {
    let (page, _, notifier, _) = build(
        vec![hero("1", "Superman"), hero("2", "Batman")],
        RecordingNotifier::new(),
        ScriptedForm::with_outcomes(vec![
            herodex_page::FormOutcome::Submitted(SuperheroDraft::new("Flash")),
        ]),
    );

    page.load().await;
    assert_eq!(page.visible().await.len(), 2);

    page.add().await;
    assert_eq!(page.visible().await.len(), 3);

    page.search("man").await;
    assert_eq!(page.visible().await.len(), 2);

    page.clear_search().await;
    assert_eq!(page.visible().await.len(), 3);

    page.delete("1").await;
    assert_eq!(page.visible().await.len(), 2);

    assert!(notifier.errors().is_empty());
}
