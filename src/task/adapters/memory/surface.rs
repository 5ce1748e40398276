//! In-memory display surface.

use std::sync::{Arc, RwLock};

use crate::task::{domain::BoardView, ports::DisplaySurface};

/// Display surface that keeps the latest board view in memory.
///
/// Clones share state. The surface also counts how many times it has been
/// repopulated, which lets callers check that each change rendered once.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    state: Arc<RwLock<SurfaceState>>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    view: BoardView,
    renders: usize,
}

impl InMemorySurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the currently displayed view.
    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        self.state
            .read()
            .map(|state| state.view.clone())
            .unwrap_or_default()
    }

    /// Returns the number of times the containers have been repopulated.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.state.read().map(|state| state.renders).unwrap_or_default()
    }
}

impl DisplaySurface for InMemorySurface {
    fn replace(&self, view: BoardView) {
        if let Ok(mut state) = self.state.write() {
            state.view = view;
            state.renders += 1;
        }
    }
}
