//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::domain::{BoardAction, TaskForm};

#[when(r#"the user adds a task "{title}" due "{due_date}""#)]
fn add_task(world: &mut BoardWorld, title: String, due_date: String) {
    world.dispatch(BoardAction::Submit(TaskForm::new(title, due_date)));
}

#[when(r#"the user completes "{title}""#)]
fn complete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.dispatch(BoardAction::Complete(id));
    Ok(())
}

#[when(r#"the user restores "{title}""#)]
fn restore_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.dispatch(BoardAction::Restore(id));
    Ok(())
}

#[when(r#"the user deletes "{title}""#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.dispatch(BoardAction::Delete(id));
    Ok(())
}

#[when(r#"the user opens the editor for "{title}""#)]
fn open_editor(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.dispatch(BoardAction::OpenEdit(id));
    Ok(())
}

#[when(r#"the user saves the edit as "{title}" due "{due_date}""#)]
fn save_edit(world: &mut BoardWorld, title: String, due_date: String) {
    world.dispatch(BoardAction::SaveEdit(TaskForm::new(title, due_date)));
}

#[when("the board restarts")]
fn restart_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.restart().wrap_err("restart board from storage")
}
