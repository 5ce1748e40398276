//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{CollectingSink, InMemoryStore, InMemorySurface},
    domain::{BoardAction, TaskId},
    services::{DispatchOutcome, PersistenceAdapter, PersistenceError, TaskBoard},
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryStore, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub storage: InMemoryStore,
    pub surface: Arc<InMemorySurface>,
    pub sink: CollectingSink,
    pub board: TestBoard,
    pub last_outcome: Option<DispatchOutcome>,
}

impl BoardWorld {
    /// Starts a board over empty in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the board fails to start.
    pub fn try_new() -> Result<Self, PersistenceError> {
        let storage = InMemoryStore::new();
        let surface = Arc::new(InMemorySurface::new());
        let board = start_board(&storage, &surface)?;
        Ok(Self {
            storage,
            surface,
            sink: CollectingSink::new(),
            board,
            last_outcome: None,
        })
    }

    /// Replaces the board with a fresh one reading the same storage.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if stored data cannot be read.
    pub fn restart(&mut self) -> Result<(), PersistenceError> {
        self.surface = Arc::new(InMemorySurface::new());
        self.board = start_board(&self.storage, &self.surface)?;
        Ok(())
    }

    /// Dispatches an action and records its outcome.
    pub fn dispatch(&mut self, action: BoardAction) {
        let outcome = self.board.dispatch(action, &self.sink);
        self.last_outcome = Some(outcome);
    }

    /// Finds the identifier of the first task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has the title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.board
            .store()
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

fn start_board(
    storage: &InMemoryStore,
    surface: &Arc<InMemorySurface>,
) -> Result<TestBoard, PersistenceError> {
    TaskBoard::start(
        PersistenceAdapter::with_default_key(storage.clone()),
        Arc::new(DefaultClock),
        Arc::clone(surface),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    match BoardWorld::try_new() {
        Ok(world) => world,
        Err(err) => panic!("board over empty storage failed to start: {err}"),
    }
}
