//! Day 2: reactor level reports.
//!
//! A report is safe when its levels move strictly in one direction with
//! steps of 1 to 3. Part two tolerates one removed level per report.

use advent_solver::{ParseError, SolveError, Solver, SolverPlugin};
use anyhow::anyhow;
use itertools::Itertools;

use crate::parse;

pub struct Day2;

inventory::submit! {
    SolverPlugin { day: 2, solver: &Day2 }
}

impl Solver for Day2 {
    type Parsed = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(index, line)| {
                parse::parse_digits(line)
                    .map_err(anyhow::Error::from)
                    .and_then(|levels| {
                        if levels.len() < 2 {
                            Err(anyhow!("a report needs at least two levels"))
                        } else {
                            Ok(levels)
                        }
                    })
                    .map_err(|e| ParseError::AtLine {
                        line: index + 1,
                        message: e.to_string(),
                    })
            })
            .collect()
    }

    fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
        let safe = parsed.iter().filter(|report| is_safe(report)).count();
        Ok(safe.to_string())
    }

    fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
        let safe = parsed
            .iter()
            .filter(|report| is_safe_damped(report))
            .count();
        Ok(safe.to_string())
    }
}

fn is_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return true;
    }
    let increasing = levels[1] > levels[0];
    levels.iter().tuple_windows().all(|(a, b)| {
        let step = (b - a).abs();
        (1..=3).contains(&step) && ((b > a) == increasing)
    })
}

fn is_safe_damped(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }
    (0..levels.len()).any(|skip| {
        let shortened: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .map(|(_, level)| *level)
            .collect();
        is_safe(&shortened)
    })
}
