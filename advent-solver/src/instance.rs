//! Type-erased solver instances with parse and solve timing

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{ParseError, SolveError};
use crate::solver::{Part, Solver};

/// Answer to a single part plus when it was computed.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed, ready-to-solve instance of one day's solver.
///
/// Parsing happens once at construction and its timing is recorded; the
/// parts are pure, so the instance can be solved in any order, any number
/// of times.
pub struct SolverInstance<S: Solver> {
    day: u8,
    parsed: S::Parsed,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Parse `input` and record how long parsing took.
    pub fn new(day: u8, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let parsed = S::parse(input)?;
        let parse_end = Utc::now();
        Ok(Self {
            day,
            parsed,
            parse_start,
            parse_end,
        })
    }
}

/// Uniform interface over any day's [`SolverInstance`].
///
/// The registry hands these out so the runner can treat every day the
/// same way regardless of its parsed type.
pub trait DynSolver {
    /// Solve one part, timing the computation.
    fn solve(&self, part: Part) -> Result<SolveResult, SolveError>;

    /// The day this instance solves
    fn day(&self) -> u8;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing completed (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Convenience: parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: Solver> DynSolver for SolverInstance<S> {
    fn solve(&self, part: Part) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part(&self.parsed, part)?;
        let solve_end = Utc::now();
        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
