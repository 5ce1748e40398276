//! View model for the two display partitions.

use super::{BoardAction, TaskId};
use std::fmt;

/// Display partition a task appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Tasks that are not yet completed.
    Pending,
    /// Tasks that have been completed.
    Completed,
}

impl Partition {
    /// Returns the partition for a task's completion flag.
    #[must_use]
    pub const fn for_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }

    /// Returns the container identifier the partition renders into.
    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Pending => "todos",
            Self::Completed => "completed-todos",
        }
    }
}

/// Kind of action control attached to a displayed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Opens the edit flow pre-filled with the task's fields.
    Edit,
    /// Marks the task completed.
    Complete,
    /// Returns a completed task to the pending list.
    Restore,
    /// Deletes a completed task.
    Delete,
}

impl ControlKind {
    /// Returns the short label used in text output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Complete => "complete",
            Self::Restore => "restore",
            Self::Delete => "delete",
        }
    }

    /// Returns the CSS class of the button rendered for the control.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Edit => "edit-button",
            Self::Complete => "check-button",
            Self::Restore => "undo-button",
            Self::Delete => "trash-button",
        }
    }
}

/// An action control wired to the board action it dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    kind: ControlKind,
    action: BoardAction,
}

impl Control {
    /// Creates a control for a task.
    #[must_use]
    pub const fn new(kind: ControlKind, action: BoardAction) -> Self {
        Self { kind, action }
    }

    /// Returns the control kind.
    #[must_use]
    pub const fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Returns the action dispatched when the control is activated.
    #[must_use]
    pub const fn action(&self) -> &BoardAction {
        &self.action
    }
}

/// One displayed task item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    id: TaskId,
    title: String,
    due_date: String,
    partition: Partition,
    controls: [Control; 2],
}

impl TaskView {
    /// Creates a displayed item.
    #[must_use]
    pub const fn new(
        id: TaskId,
        title: String,
        due_date: String,
        partition: Partition,
        controls: [Control; 2],
    ) -> Self {
        Self {
            id,
            title,
            due_date,
            partition,
            controls,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the element identifier tagging the displayed item.
    #[must_use]
    pub fn element_id(&self) -> String {
        self.id.element_id()
    }

    /// Returns the displayed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the displayed due date.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Returns the partition the item is displayed in.
    #[must_use]
    pub const fn partition(&self) -> Partition {
        self.partition
    }

    /// Returns the item's action controls.
    #[must_use]
    pub const fn controls(&self) -> &[Control; 2] {
        &self.controls
    }

    /// Returns the control of the given kind, if the item has one.
    #[must_use]
    pub fn control(&self, kind: ControlKind) -> Option<&Control> {
        self.controls.iter().find(|control| control.kind == kind)
    }
}

/// Contents of both display containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pending: Vec<TaskView>,
    completed: Vec<TaskView>,
}

impl BoardView {
    /// Creates a view from its two partitions.
    #[must_use]
    pub const fn new(pending: Vec<TaskView>, completed: Vec<TaskView>) -> Self {
        Self { pending, completed }
    }

    /// Returns items in the pending container, in collection order.
    #[must_use]
    pub fn pending(&self) -> &[TaskView] {
        &self.pending
    }

    /// Returns items in the completed container, in collection order.
    #[must_use]
    pub fn completed(&self) -> &[TaskView] {
        &self.completed
    }

    /// Returns the items of one partition.
    #[must_use]
    pub fn partition(&self, partition: Partition) -> &[TaskView] {
        match partition {
            Partition::Pending => &self.pending,
            Partition::Completed => &self.completed,
        }
    }

    /// Returns the total number of displayed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    /// Returns `true` when both containers are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    /// Finds a displayed item by task identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&TaskView> {
        self.pending
            .iter()
            .chain(self.completed.iter())
            .find(|item| item.id == id)
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_partition(f, "Pending", &self.pending)?;
        write_partition(f, "Completed", &self.completed)
    }
}

fn write_partition(f: &mut fmt::Formatter<'_>, heading: &str, items: &[TaskView]) -> fmt::Result {
    writeln!(f, "{heading} ({})", items.len())?;
    if items.is_empty() {
        return writeln!(f, "  (none)");
    }
    for item in items {
        let [first, second] = &item.controls;
        writeln!(
            f,
            "  [{}] {} - due {}  ({} | {})",
            item.id,
            item.title,
            item.due_date,
            first.kind.label(),
            second.kind.label()
        )?;
    }
    Ok(())
}
