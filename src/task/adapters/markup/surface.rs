//! Display surface that renders both containers as HTML fragments.
//!
//! Each task becomes one `div.item.shadow` tagged `todo-{id}`, holding the
//! title in an `h2`, the due date in a `p`, and one button per control.
//! Buttons carry the task id and the control's action name so a host page
//! can route clicks back to the board.

use minijinja::{Environment, context};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::error;

use crate::task::{
    domain::{BoardView, Partition, TaskView},
    ports::DisplaySurface,
};

const CONTAINER_TEMPLATE_NAME: &str = "container.html";

const CONTAINER_TEMPLATE: &str = r#"<div id="{{ container_id }}">
{%- for item in items %}
  <div class="item shadow" id="{{ item.element_id }}">
    <div class="inner">
      <h2>{{ item.title }}</h2>
      <p>{{ item.due_date }}</p>
    </div>
    {%- for control in item.controls %}
    <button class="{{ control.class }}" data-action="{{ control.action }}" data-task-id="{{ item.id }}"></button>
    {%- endfor %}
  </div>
{%- endfor %}
</div>"#;

/// Errors raised while preparing or rendering markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The container template failed to compile or render.
    #[error("markup template error: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Debug, Serialize)]
struct ItemContext<'a> {
    id: u64,
    element_id: String,
    title: &'a str,
    due_date: &'a str,
    controls: Vec<ControlContext>,
}

#[derive(Debug, Serialize)]
struct ControlContext {
    class: &'static str,
    action: &'static str,
}

impl<'a> ItemContext<'a> {
    fn from_view(item: &'a TaskView) -> Self {
        Self {
            id: item.id().value(),
            element_id: item.element_id(),
            title: item.title(),
            due_date: item.due_date(),
            controls: item
                .controls()
                .iter()
                .map(|control| ControlContext {
                    class: control.kind().css_class(),
                    action: control.kind().label(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
struct MarkupState {
    pending: String,
    completed: String,
}

/// Display surface holding the latest rendered HTML for both containers.
///
/// Clones share the rendered output.
#[derive(Debug, Clone)]
pub struct MarkupSurface {
    env: Arc<Environment<'static>>,
    state: Arc<RwLock<MarkupState>>,
}

impl MarkupSurface {
    /// Creates a surface with empty containers.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Template`] when the container template fails to
    /// compile.
    pub fn new() -> Result<Self, MarkupError> {
        let mut env = Environment::new();
        env.add_template(CONTAINER_TEMPLATE_NAME, CONTAINER_TEMPLATE)?;
        let surface = Self {
            env: Arc::new(env),
            state: Arc::default(),
        };
        surface.render_into_state(&BoardView::default())?;
        Ok(surface)
    }

    /// Returns the rendered pending container.
    #[must_use]
    pub fn pending_html(&self) -> String {
        self.state
            .read()
            .map(|state| state.pending.clone())
            .unwrap_or_default()
    }

    /// Returns the rendered completed container.
    #[must_use]
    pub fn completed_html(&self) -> String {
        self.state
            .read()
            .map(|state| state.completed.clone())
            .unwrap_or_default()
    }

    /// Returns both containers, pending first, separated by a newline.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{}\n{}", self.pending_html(), self.completed_html())
    }

    fn render_partition(&self, view: &BoardView, partition: Partition) -> Result<String, MarkupError> {
        let items: Vec<ItemContext<'_>> = view
            .partition(partition)
            .iter()
            .map(ItemContext::from_view)
            .collect();
        let template = self.env.get_template(CONTAINER_TEMPLATE_NAME)?;
        Ok(template.render(context! {
            container_id => partition.container_id(),
            items => items,
        })?)
    }

    fn render_into_state(&self, view: &BoardView) -> Result<(), MarkupError> {
        let pending = self.render_partition(view, Partition::Pending)?;
        let completed = self.render_partition(view, Partition::Completed)?;
        if let Ok(mut state) = self.state.write() {
            state.pending = pending;
            state.completed = completed;
        }
        Ok(())
    }
}

impl DisplaySurface for MarkupSurface {
    fn replace(&self, view: BoardView) {
        if let Err(err) = self.render_into_state(&view) {
            error!(error = %err, "failed to render task containers");
        }
    }
}
