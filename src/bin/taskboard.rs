//! Command-line front end for a task board stored in a data directory.
//!
//! Usage:
//!
//! ```text
//! taskboard [--data-dir DIR] [--config FILE] [--storage-key KEY] <command>
//! ```
//!
//! Commands:
//!
//! - `add <title> <date>`: create a pending task
//! - `edit <id> <title> <date>`: change a task's title and date
//! - `complete <id>`, `restore <id>`, `delete <id>`: move or remove a task
//! - `list [--html]`: show both partitions, optionally as HTML markup
//!
//! Every command prints the notifications it raised, then the board.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use taskboard::{
    config::{BoardConfig, ConfigError},
    logging,
    task::{
        adapters::{
            fs::DirectoryStore,
            markup::{MarkupError, MarkupSurface},
            memory::{CollectingSink, InMemorySurface},
            notify::TracingSink,
        },
        domain::{BoardAction, TaskDomainError, TaskForm, TaskId},
        ports::{DisplaySurface, NotificationSink},
        services::{DispatchOutcome, PersistenceAdapter, PersistenceError, TaskBoard},
    },
};
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Manage a task list")]
struct Cli {
    /// Directory holding the stored board.
    #[arg(long, global = true)]
    data_dir: Option<Utf8PathBuf>,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Storage key the board is saved under.
    #[arg(long, global = true)]
    storage_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Create a pending task.
    Add { title: String, date: String },
    /// Change a pending task's title and date.
    Edit {
        id: TaskId,
        title: String,
        date: String,
    },
    /// Move a task to the completed list.
    Complete { id: TaskId },
    /// Move a completed task back to the pending list.
    Restore { id: TaskId },
    /// Delete a task.
    Delete { id: TaskId },
    /// Show the board.
    List {
        /// Render the containers as HTML.
        #[arg(long)]
        html: bool,
    },
}

impl Command {
    fn actions(self) -> Vec<BoardAction> {
        match self {
            Self::Add { title, date } => vec![BoardAction::Submit(TaskForm::new(title, date))],
            Self::Edit { id, title, date } => vec![
                BoardAction::OpenEdit(id),
                BoardAction::SaveEdit(TaskForm::new(title, date)),
            ],
            Self::Complete { id } => vec![BoardAction::Complete(id)],
            Self::Restore { id } => vec![BoardAction::Restore(id)],
            Self::Delete { id } => vec![BoardAction::Delete(id)],
            Self::List { .. } => Vec::new(),
        }
    }

    const fn wants_html(&self) -> bool {
        matches!(self, Self::List { html: true })
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open stored board: {0}")]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    logging::init(config.log_filter())?;
    let mut out = io::stdout().lock();
    run(cli.command, &config, &mut out)?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = &cli.data_dir {
        config = config.with_data_dir(data_dir.clone());
    }
    if let Some(storage_key) = &cli.storage_key {
        config = config.with_storage_key(storage_key.clone());
    }
    config.validate()
}

fn run(command: Command, config: &BoardConfig, out: &mut impl Write) -> Result<(), CliError> {
    let storage = DirectoryStore::open_or_unavailable(config.data_dir());
    let persistence = PersistenceAdapter::new(storage, config.storage_key());
    let surface = Arc::new(InMemorySurface::new());
    let mut board = TaskBoard::start(persistence, Arc::new(DefaultClock), Arc::clone(&surface))?;

    let wants_html = command.wants_html();
    let sink = CollectingSink::new();
    for action in command.actions() {
        let outcome = board.dispatch(action, &sink);
        report_outcome(&outcome, out)?;
    }
    for notification in sink.take() {
        TracingSink.show(notification);
        writeln!(out, "{notification}")?;
    }

    if wants_html {
        let markup = MarkupSurface::new()?;
        markup.replace(surface.snapshot());
        writeln!(out, "{}", markup.document())?;
    } else {
        write!(out, "{}", surface.snapshot())?;
    }
    Ok(())
}

fn report_outcome(outcome: &DispatchOutcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        DispatchOutcome::Created(task) => writeln!(out, "Created task {}", task.id()),
        DispatchOutcome::Rejected(TaskDomainError::NotFound(id)) => {
            writeln!(out, "No task with id {id}")
        }
        DispatchOutcome::Rejected(TaskDomainError::EmptyInput(field)) => {
            writeln!(out, "The {field} must not be empty")
        }
        DispatchOutcome::Applied
        | DispatchOutcome::EditOpened(_)
        | DispatchOutcome::EditCancelled
        | DispatchOutcome::Ignored => Ok(()),
    }
}
