//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::ensure;
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{Partition, TaskView},
    services::{DEFAULT_STORAGE_KEY, DispatchOutcome, EditState, decode_tasks},
};

fn titles(world: &BoardWorld, partition: Partition) -> Vec<String> {
    world
        .surface
        .snapshot()
        .partition(partition)
        .iter()
        .map(TaskView::title)
        .map(str::to_owned)
        .collect()
}

#[then(r#"the pending list shows "{title}""#)]
fn pending_shows(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let pending = titles(world, Partition::Pending);
    ensure!(
        pending.contains(&title),
        "expected {title:?} in pending list, found {pending:?}"
    );
    Ok(())
}

#[then(r#"the completed list shows "{title}""#)]
fn completed_shows(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let completed = titles(world, Partition::Completed);
    ensure!(
        completed.contains(&title),
        "expected {title:?} in completed list, found {completed:?}"
    );
    Ok(())
}

#[then("the pending list is empty")]
fn pending_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let pending = titles(world, Partition::Pending);
    ensure!(pending.is_empty(), "expected no pending tasks, found {pending:?}");
    Ok(())
}

#[then("the completed list is empty")]
fn completed_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let completed = titles(world, Partition::Completed);
    ensure!(
        completed.is_empty(),
        "expected no completed tasks, found {completed:?}"
    );
    Ok(())
}

#[then("the board is empty")]
fn board_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(world.board.store().is_empty(), "expected no tasks in the store");
    ensure!(world.surface.snapshot().is_empty(), "expected empty display");
    Ok(())
}

#[then(r#"the notification "{message}" is shown"#)]
fn notification_shown(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let shown: Vec<String> = world
        .sink
        .shown()
        .iter()
        .map(ToString::to_string)
        .collect();
    ensure!(
        shown.contains(&message),
        "expected notification {message:?}, shown {shown:?}"
    );
    Ok(())
}

#[then("storage holds {count:usize} saved entries")]
fn storage_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world
        .storage
        .peek(DEFAULT_STORAGE_KEY)
        .ok_or_else(|| eyre::eyre!("nothing saved under {DEFAULT_STORAGE_KEY}"))?;
    let tasks = decode_tasks(&stored)?;
    ensure!(
        tasks.len() == count,
        "expected {count} saved tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then("the edit dialog is closed")]
fn dialog_closed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let state = world.board.edit_flow().state();
    ensure!(state == EditState::Idle, "expected idle dialog, found {state:?}");
    Ok(())
}

#[then("the edit dialog is still open")]
fn dialog_open(world: &BoardWorld) -> Result<(), eyre::Report> {
    let state = world.board.edit_flow().state();
    ensure!(
        matches!(state, EditState::Editing(_)),
        "expected open dialog, found {state:?}"
    );
    Ok(())
}

#[then("the action is rejected")]
fn action_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        matches!(world.last_outcome, Some(DispatchOutcome::Rejected(_))),
        "expected a rejected action, got {:?}",
        world.last_outcome
    );
    Ok(())
}
