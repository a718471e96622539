//! Solver contract for a day-keyed Advent of Code harness
//!
//! A daily solution implements [`Solver`]: one `parse` of the raw input
//! and two pure part computations returning answer strings. The harness
//! side works through [`DynSolver`] instances handed out by a
//! [`DayRegistry`], a closed day-to-factory table assembled at startup
//! from [`SolverPlugin`] submissions (or explicit
//! [`RegistryBuilder::register`] calls).
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{Part, ParseError, RegistryBuilder, SolveError, Solver, register_day};
//!
//! struct Counting;
//!
//! impl Solver for Counting {
//!     type Parsed = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("expected an integer".into()))
//!             })
//!             .collect()
//!     }
//!
//!     fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
//!         Ok(parsed.iter().sum::<i64>().to_string())
//!     }
//!
//!     fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
//!         Ok(parsed.len().to_string())
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_day!(builder, Counting, 1);
//! let registry = builder.build();
//!
//! let solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(Part::One).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS, DayRegistry, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
};
pub use solver::{Part, Solver, input_file_name};

// Re-export inventory so plugin submissions resolve from dependent crates
pub use inventory;
