//! Advent of Code 2024 puzzle solutions
//!
//! Each day implements [`advent_solver::Solver`] and submits a
//! [`advent_solver::SolverPlugin`]; linking this crate is what populates
//! the runner's day table. The [`parse`] module holds helpers for the
//! recurring input shapes (columns, digit rows, grids, line groups).

pub mod days;
pub mod parse;
