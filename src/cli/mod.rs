//! Terminal front end: renders the two views and feeds user commands to the controller.

pub mod context;
pub mod output;
pub mod shell;
pub mod ui;

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::{ConfigError, PersistenceError};

pub use context::ShellContext;
pub use shell::run_cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal front-end failures; the binary reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Storage error: {0}")]
    Storage(#[from] PersistenceError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Recoverable per-command failures, reported inside the shell loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}
