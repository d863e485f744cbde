//! Interactive shell over the tracker core. Presentation only: every
//! mutation goes through the library services.

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;
mod shell;

pub use context::{CliMode, ShellContext};
pub use shell::run_cli;

use std::io;

use crate::core::ServiceError;
use crate::errors::FitnessError;

/// Failures that abort the whole shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Fitness(#[from] FitnessError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Failures scoped to a single command; reported and recovered from.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Fitness(#[from] FitnessError),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Fitness(inner) => CommandError::Fitness(inner),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

pub type CommandResult = Result<(), CommandError>;
