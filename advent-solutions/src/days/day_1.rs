//! Day 1: historian location lists.
//!
//! Part one pairs the sorted lists and totals the distances; part two
//! scores each left entry by how often it appears on the right.

use advent_solver::{ParseError, SolveError, Solver, SolverPlugin};

use crate::parse;

pub struct Day1;

inventory::submit! {
    SolverPlugin { day: 1, solver: &Day1 }
}

#[derive(Debug)]
pub struct LocationLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Solver for Day1 {
    type Parsed = LocationLists;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let (left, right) = parse::parse_pair_columns(input.trim_end())?;
        Ok(LocationLists { left, right })
    }

    fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
        let mut left = parsed.left.clone();
        let mut right = parsed.right.clone();
        left.sort_unstable();
        right.sort_unstable();
        let distance: i64 = left.iter().zip(&right).map(|(l, r)| (l - r).abs()).sum();
        Ok(distance.to_string())
    }

    fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
        let similarity: i64 = parsed
            .left
            .iter()
            .map(|l| l * parsed.right.iter().filter(|r| *r == l).count() as i64)
            .sum();
        Ok(similarity.to_string())
    }
}
