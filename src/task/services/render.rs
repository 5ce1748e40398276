//! Render synchronizer: rebuilds both display partitions on every change.

use std::sync::Arc;
use tracing::trace;

use crate::task::{
    domain::{BoardAction, BoardView, Control, ControlKind, Partition, Task, TaskView},
    ports::{DisplaySurface, StoreObserver},
};

/// Builds the board view for a collection.
///
/// Every task lands in exactly one partition, chosen by its completion flag,
/// and partitions keep collection order.
#[must_use]
pub fn build_view(tasks: &[Task]) -> BoardView {
    let (completed, pending): (Vec<TaskView>, Vec<TaskView>) = tasks
        .iter()
        .map(task_view)
        .partition(|item| item.partition() == Partition::Completed);
    BoardView::new(pending, completed)
}

fn task_view(task: &Task) -> TaskView {
    let id = task.id();
    let partition = Partition::for_completed(task.is_completed());
    let controls = match partition {
        Partition::Pending => [
            Control::new(ControlKind::Edit, BoardAction::OpenEdit(id)),
            Control::new(ControlKind::Complete, BoardAction::Complete(id)),
        ],
        Partition::Completed => [
            Control::new(ControlKind::Restore, BoardAction::Restore(id)),
            Control::new(ControlKind::Delete, BoardAction::Delete(id)),
        ],
    };
    TaskView::new(
        id,
        task.title().to_owned(),
        task.due_date().to_owned(),
        partition,
        controls,
    )
}

/// Store observer that repopulates a display surface on each render signal.
///
/// Holds no view state of its own: each signal discards the previous view
/// and builds a new one from the full collection.
#[derive(Debug)]
pub struct RenderSynchronizer<D>
where
    D: DisplaySurface,
{
    surface: Arc<D>,
}

impl<D> RenderSynchronizer<D>
where
    D: DisplaySurface,
{
    /// Creates a synchronizer for `surface`.
    #[must_use]
    pub const fn new(surface: Arc<D>) -> Self {
        Self { surface }
    }

    /// Returns the display surface.
    #[must_use]
    pub const fn surface(&self) -> &Arc<D> {
        &self.surface
    }
}

impl<D> StoreObserver for RenderSynchronizer<D>
where
    D: DisplaySurface,
{
    fn on_render(&self, tasks: &[Task]) {
        let view = build_view(tasks);
        trace!(
            pending = view.pending().len(),
            completed = view.completed().len(),
            "rendering task partitions"
        );
        self.surface.replace(view);
    }
}
