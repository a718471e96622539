//! Error types for the runner

use advent_solver::{RegistrationError, SolverError};
use thiserror::Error;

use crate::inputs::InputError;

/// Failures that abort the run as a whole.
///
/// Per-part failures are streamed through the result channel and reported
/// inline; only setup problems surface here.
#[derive(Debug, Error)]
pub enum CliError {
    /// The plugin table could not be assembled
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Solver lookup or creation failed
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),

    /// Puzzle input could not be resolved
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The background worker died without finishing
    #[error("the worker thread panicked")]
    WorkerPanicked,
}
