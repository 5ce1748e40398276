//! Display boundary that receives each rebuilt board view.

use crate::task::domain::BoardView;

/// The two display containers (pending and completed).
///
/// Each call replaces the full contents of both containers.
pub trait DisplaySurface {
    /// Repopulates both containers from `view`.
    fn replace(&self, view: BoardView);
}
