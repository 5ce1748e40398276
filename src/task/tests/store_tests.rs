//! Task store mutation rules.

use std::collections::HashSet;

use super::fixtures::{FIXED_MILLIS, Signal, StoreHarness};
use crate::task::{
    adapters::memory::{CollectingSink, InMemoryStore},
    domain::{Notification, TaskDomainError, TaskField, TaskId},
    services::{SaveOutcome, decode_tasks},
};
use rstest::{fixture, rstest};

#[fixture]
fn harness() -> StoreHarness {
    StoreHarness::new()
}

fn drained(harness: &StoreHarness) -> Vec<Notification> {
    let sink = CollectingSink::new();
    harness.notifier.drain_into(&sink);
    sink.shown()
}

#[rstest]
fn create_appends_pending_task(mut harness: StoreHarness) {
    let task = harness
        .store
        .create("  Buy milk ", " 2024-01-01 ")
        .expect("valid input should create a task");

    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.due_date(), "2024-01-01");
    assert!(!task.is_completed());
    assert_eq!(task.id(), TaskId::new(FIXED_MILLIS.unsigned_abs()));
    assert_eq!(harness.store.tasks(), [task]);
    assert_eq!(drained(&harness), vec![Notification::TaskAdded]);
}

#[rstest]
#[case("", "2024-01-01", TaskField::Title)]
#[case("Buy milk", "", TaskField::DueDate)]
#[case("   ", "2024-01-01", TaskField::Title)]
#[case("Buy milk", "\t", TaskField::DueDate)]
fn create_rejects_blank_input(
    mut harness: StoreHarness,
    #[case] title: &str,
    #[case] due_date: &str,
    #[case] field: TaskField,
) {
    let result = harness.store.create(title, due_date);

    assert_eq!(result, Err(TaskDomainError::EmptyInput(field)));
    assert!(harness.store.is_empty());
    assert_eq!(harness.observer.render_count(), 0);
    assert_eq!(harness.stored(), None);
    assert_eq!(drained(&harness), vec![Notification::EmptyInput]);
}

#[rstest]
fn ids_are_distinct_within_one_millisecond(mut harness: StoreHarness) {
    let tasks = harness.seed(&["a", "b", "c", "d", "e"]);

    let ids: HashSet<TaskId> = tasks.iter().map(|task| task.id()).collect();
    assert_eq!(ids.len(), tasks.len());
}

#[rstest]
fn ids_follow_the_clock_when_it_advances(mut harness: StoreHarness) {
    let first = harness.store.create("a", "d").expect("create");
    harness.clock.set(FIXED_MILLIS + 5_000);
    let second = harness.store.create("b", "d").expect("create");

    assert_eq!(
        second.id().value() - first.id().value(),
        5_000,
        "id should be the new clock reading"
    );
}

#[rstest]
fn every_mutation_renders_once_then_saves(mut harness: StoreHarness) {
    let task = harness.store.create("Study", "2024-05-01").expect("create");
    harness.store.complete(task.id()).expect("complete");

    let signals = harness.observer.signals();
    assert_eq!(signals.len(), 4);
    assert!(matches!(signals.first(), Some(Signal::Render(tasks)) if tasks.len() == 1));
    assert_eq!(signals.get(1), Some(&Signal::Saved));
    assert!(
        matches!(signals.get(2), Some(Signal::Render(tasks)) if tasks.iter().all(|t| t.is_completed()))
    );
    assert_eq!(signals.get(3), Some(&Signal::Saved));
    assert_eq!(harness.store.last_save(), Some(SaveOutcome::Saved));
}

#[rstest]
fn stored_copy_matches_memory_after_each_mutation(mut harness: StoreHarness) {
    let tasks = harness.seed(&["one", "two", "three"]);
    let second = tasks.get(1).map(|task| task.id()).expect("seeded task");
    harness.store.complete(second).expect("complete");

    let stored = decode_tasks(&harness.stored().expect("collection should be stored"))
        .expect("stored collection should decode");
    assert_eq!(stored, harness.store.tasks());
}

#[rstest]
fn complete_then_uncomplete_restores_task(mut harness: StoreHarness) {
    let original = harness.store.create("Study", "2024-05-01").expect("create");

    harness.store.complete(original.id()).expect("complete");
    assert_eq!(
        harness.store.find(original.id()).map(|t| t.is_completed()),
        Some(true)
    );
    harness.store.uncomplete(original.id()).expect("uncomplete");

    assert_eq!(harness.store.find(original.id()), Some(&original));
    assert_eq!(
        drained(&harness),
        vec![
            Notification::TaskAdded,
            Notification::TaskCompleted,
            Notification::TaskRestored
        ]
    );
}

#[rstest]
fn edit_overwrites_title_and_date_in_place(mut harness: StoreHarness) {
    let tasks = harness.seed(&["first", "second"]);
    let target = tasks.first().map(|task| task.id()).expect("seeded task");

    harness
        .store
        .edit(target, " renamed ", "2025-01-01")
        .expect("edit");

    let edited = harness.store.find(target).expect("task still present");
    assert_eq!(edited.title(), "renamed");
    assert_eq!(edited.due_date(), "2025-01-01");
    assert_eq!(harness.store.tasks().first().map(|t| t.id()), Some(target));
    assert_eq!(drained(&harness).last(), Some(&Notification::TaskUpdated));
}

#[rstest]
fn edit_validates_before_looking_up(mut harness: StoreHarness) {
    let result = harness.store.edit(TaskId::new(1), "", "2024-01-01");

    assert_eq!(result, Err(TaskDomainError::EmptyInput(TaskField::Title)));
    assert_eq!(drained(&harness), vec![Notification::EmptyInput]);
}

#[rstest]
fn edit_with_blank_input_leaves_task_unchanged(mut harness: StoreHarness) {
    let task = harness.store.create("keep", "2024-01-01").expect("create");
    let before = harness.stored();

    let result = harness.store.edit(task.id(), "changed", "  ");

    assert_eq!(result, Err(TaskDomainError::EmptyInput(TaskField::DueDate)));
    assert_eq!(harness.store.find(task.id()), Some(&task));
    assert_eq!(harness.stored(), before);
}

#[rstest]
fn remove_deletes_exactly_one_and_keeps_order(mut harness: StoreHarness) {
    let tasks = harness.seed(&["a", "b", "c", "d"]);
    let target = tasks.get(1).map(|task| task.id()).expect("seeded task");

    let removed = harness.store.remove(target).expect("remove");

    assert_eq!(removed.id(), target);
    assert_eq!(harness.store.len(), 3);
    assert!(harness.store.find(target).is_none());
    let remaining: Vec<&str> = harness.store.tasks().iter().map(|t| t.title()).collect();
    assert_eq!(remaining, ["a", "c", "d"]);
}

#[rstest]
fn missing_id_is_a_silent_no_op(mut harness: StoreHarness) {
    let tasks = harness.seed(&["a", "b"]);
    let first = tasks.first().map(|task| task.id()).expect("seeded task");
    harness.store.complete(first).expect("complete");
    let snapshot = harness.store.tasks().to_vec();
    let stored = harness.stored();
    let renders = harness.observer.render_count();
    drained(&harness);
    let missing = TaskId::new(1);

    assert_eq!(
        harness.store.complete(missing),
        Err(TaskDomainError::NotFound(missing))
    );
    assert_eq!(
        harness.store.uncomplete(missing),
        Err(TaskDomainError::NotFound(missing))
    );
    assert!(matches!(
        harness.store.remove(missing),
        Err(TaskDomainError::NotFound(id)) if id == missing
    ));
    assert_eq!(
        harness.store.edit(missing, "title", "date"),
        Err(TaskDomainError::NotFound(missing))
    );

    assert_eq!(harness.store.tasks(), snapshot.as_slice());
    assert_eq!(harness.stored(), stored);
    assert_eq!(harness.observer.render_count(), renders);
    assert!(drained(&harness).is_empty());
}

#[rstest]
fn load_replaces_collection_without_saving(mut harness: StoreHarness) {
    let mut donor = StoreHarness::new();
    let loaded = donor.seed(&["from", "storage"]);

    harness.store.load(loaded.clone());

    assert_eq!(harness.store.tasks(), loaded.as_slice());
    assert_eq!(harness.observer.signals(), vec![Signal::Render(loaded)]);
    assert_eq!(harness.stored(), None);
    assert_eq!(harness.store.last_save(), None);
}

#[rstest]
fn load_drops_duplicate_ids_keeping_first(mut harness: StoreHarness) {
    let mut donor = StoreHarness::new();
    let tasks = donor.seed(&["first"]);
    let first = tasks.first().cloned().expect("seeded task");
    donor.store.edit(first.id(), "second", "2024-05-02").expect("edit");
    let edited = donor.store.tasks().to_vec();

    harness.store.load(vec![first.clone()].into_iter().chain(edited).collect());

    assert_eq!(harness.store.tasks(), [first]);
}

#[rstest]
fn ids_after_load_never_reuse_stored_ids(mut harness: StoreHarness) {
    let mut donor = StoreHarness::new();
    donor.clock.set(FIXED_MILLIS + 60_000);
    let loaded = donor.seed(&["future"]);
    let loaded_id = loaded.first().map(|t| t.id()).expect("seeded task");

    harness.store.load(loaded);
    let created = harness.store.create("new", "2024-05-01").expect("create");

    assert!(created.id() > loaded_id);
}

#[test]
fn unavailable_storage_keeps_memory_and_reports_outcome() {
    let mut harness = StoreHarness::with_storage(InMemoryStore::unavailable());

    let task = harness.store.create("offline", "2024-05-01").expect("create");

    assert_eq!(harness.store.find(task.id()), Some(&task));
    assert_eq!(harness.store.last_save(), Some(SaveOutcome::StorageUnavailable));
    assert_eq!(harness.observer.saved_count(), 0);
    assert_eq!(harness.observer.render_count(), 1);
}
