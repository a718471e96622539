//! Error types for the solver contract

use crate::solver::Part;
use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A specific input line could not be parsed
    #[error("line {line}: {message}")]
    AtLine { line: usize, message: String },
    /// Input format doesn't match the expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from the input
    #[error("missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part has no implementation yet
    #[error("part {0} is not implemented")]
    Unimplemented(Part),
    /// The computation itself failed
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry lookups and solver creation
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the requested day
    #[error("no solver registered for day {0}")]
    NotFound(u8),
    /// The requested day is outside the calendar
    #[error("day {0} is outside 1..=25")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this day
    #[error("duplicate solver registration for day {0}")]
    DuplicateDay(u8),
    /// The day is outside the calendar
    #[error("cannot register day {0}: outside 1..=25")]
    InvalidDay(u8),
}
