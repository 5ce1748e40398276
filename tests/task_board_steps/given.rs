//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::ensure;
use rstest_bdd_macros::given;
use taskboard::task::domain::{BoardAction, TaskForm};

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    ensure!(world.board.store().is_empty(), "board should start empty");
    ensure!(world.surface.snapshot().is_empty(), "display should start empty");
    Ok(())
}

#[given(r#"a task "{title}" due "{due_date}""#)]
fn existing_task(
    world: &mut BoardWorld,
    title: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    world.dispatch(BoardAction::Submit(TaskForm::new(title, due_date)));
    let shown = world.sink.take();
    ensure!(shown.len() == 1, "expected one notification, got {shown:?}");
    Ok(())
}

#[given(r#"a completed task "{title}" due "{due_date}""#)]
fn existing_completed_task(
    world: &mut BoardWorld,
    title: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    world.dispatch(BoardAction::Submit(TaskForm::new(title.as_str(), due_date)));
    let id = world.task_id(&title)?;
    world.dispatch(BoardAction::Complete(id));
    let shown = world.sink.take();
    ensure!(shown.len() == 2, "expected two notifications, got {shown:?}");
    Ok(())
}
