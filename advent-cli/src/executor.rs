//! Sequential background executor for the selected days
//!
//! The runner keeps exactly one worker: days execute in calendar order on
//! whatever thread calls [`Executor::run`], and each part's result is
//! streamed through a channel so the presentation side can print while
//! later days are still computing. Cancellation is cooperative and only
//! takes effect between whole-day invocations; a single day is never
//! interrupted mid-solve.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{SendError, Sender};

use advent_solver::{DayRegistry, Part, ParseError, SolverError};
use chrono::TimeDelta;
use itertools::Itertools;

use crate::inputs::InputLocator;

/// A day selected for execution plus the parts to run.
pub struct WorkItem {
    pub day: u8,
    pub parts: Vec<Part>,
}

/// Result of one part of one day.
pub struct RunResult {
    pub day: u8,
    pub part: Part,
    pub answer: Result<String, SolverError>,
    /// Present on the first result reported for a day.
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Runs the selected days in order, streaming results through a channel.
pub struct Executor {
    registry: DayRegistry,
    locator: InputLocator,
    days: Vec<u8>,
    part_filter: Option<Part>,
    cancelled: Arc<AtomicBool>,
}

impl Executor {
    pub fn new(
        registry: DayRegistry,
        locator: InputLocator,
        days: Vec<u8>,
        part_filter: Option<Part>,
    ) -> Self {
        Self {
            registry,
            locator,
            days,
            part_filter,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag the presentation side can set to stop the run. Checked between
    /// whole-day invocations, never inside one.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// The selected days crossed with the part filter.
    ///
    /// With no explicit selection every registered day runs. Explicitly
    /// requested days are kept even when nothing is registered for them,
    /// so the run reports the miss instead of silently skipping it.
    pub fn collect_work(&self) -> Vec<WorkItem> {
        let parts: Vec<Part> = match self.part_filter {
            Some(part) => vec![part],
            None => Part::ALL.to_vec(),
        };
        let selected: Vec<u8> = if self.days.is_empty() {
            self.registry.days().collect()
        } else {
            self.days.iter().copied().sorted().dedup().collect()
        };
        selected
            .into_iter()
            .map(|day| WorkItem {
                day,
                parts: parts.clone(),
            })
            .collect()
    }

    /// Execute all work items, sending one [`RunResult`] per part.
    ///
    /// Returns when the work list is exhausted, the cancel flag was set, or
    /// the receiving side hung up (which doubles as cancellation).
    pub fn run(&self, tx: Sender<RunResult>) {
        for work in self.collect_work() {
            if self.cancelled.load(Ordering::Relaxed) {
                break;
            }
            if self.run_day(&work, &tx).is_err() {
                break;
            }
        }
    }

    fn run_day(&self, work: &WorkItem, tx: &Sender<RunResult>) -> Result<(), SendError<RunResult>> {
        let input = match self.locator.read_day(work.day) {
            Ok(input) => input,
            Err(error) => {
                // Report the miss for every requested part, keep going.
                let message = error.to_string();
                for &part in &work.parts {
                    tx.send(error_result(
                        work.day,
                        part,
                        SolverError::Parse(ParseError::MissingData(message.clone())),
                    ))?;
                }
                return Ok(());
            }
        };

        let solver = match self.registry.create_solver(work.day, &input) {
            Ok(solver) => solver,
            Err(error) => {
                for &part in &work.parts {
                    tx.send(error_result(
                        work.day,
                        part,
                        recreate_error(&error, work.day),
                    ))?;
                }
                return Ok(());
            }
        };

        let mut parse_reported = false;
        for &part in &work.parts {
            let result = match solver.solve(part) {
                Ok(solved) => {
                    let solve_duration = solved.duration();
                    RunResult {
                        day: work.day,
                        part,
                        answer: Ok(solved.answer),
                        parse_duration: (!parse_reported).then(|| solver.parse_duration()),
                        solve_duration,
                    }
                }
                Err(error) => RunResult {
                    day: work.day,
                    part,
                    answer: Err(error.into()),
                    parse_duration: (!parse_reported).then(|| solver.parse_duration()),
                    solve_duration: TimeDelta::zero(),
                },
            };
            parse_reported = true;
            tx.send(result)?;
        }
        Ok(())
    }
}

fn error_result(day: u8, part: Part, error: SolverError) -> RunResult {
    RunResult {
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Rebuild a creation error so each part gets its own copy.
fn recreate_error(error: &SolverError, day: u8) -> SolverError {
    match error {
        SolverError::Parse(parse) => SolverError::Parse(parse.clone()),
        SolverError::NotFound(_) => SolverError::NotFound(day),
        SolverError::InvalidDay(_) => SolverError::InvalidDay(day),
        other => SolverError::Parse(ParseError::InvalidFormat(other.to_string())),
    }
}
