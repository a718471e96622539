//! The contract a daily solution implements

use std::fmt;

use crate::error::{ParseError, SolveError};

/// One of the two puzzle parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts, in solve order.
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub fn from_number(part: u8) -> Option<Part> {
        match part {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Conventional input file name for a day: `day3input.txt` for day 3.
///
/// The harness resolves this name against its input directories; solvers
/// themselves never touch the filesystem.
pub fn input_file_name(day: u8) -> String {
    format!("day{day}input.txt")
}

/// A daily solution: one parse, two pure part computations.
///
/// Input is parsed once into [`Solver::Parsed`]; both parts read the
/// parsed value and produce their answer as a string. Parts take the
/// parsed data by shared reference and must not rely on one another
/// having run.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, SolveError, Solver};
///
/// struct Calibration;
///
/// impl Solver for Calibration {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.parse()
///                     .map_err(|_| ParseError::InvalidFormat("expected an integer".into()))
///             })
///             .collect()
///     }
///
///     fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
///         Ok(parsed.iter().sum::<i64>().to_string())
///     }
///
///     fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
///         Ok(parsed.iter().product::<i64>().to_string())
///     }
/// }
///
/// let parsed = Calibration::parse("1\n2\n3").unwrap();
/// assert_eq!(Calibration::part_one(&parsed).unwrap(), "6");
/// assert_eq!(Calibration::part_two(&parsed).unwrap(), "6");
/// ```
pub trait Solver {
    /// Parsed form of the puzzle input, shared by both parts.
    type Parsed;

    /// Parse the raw input text.
    fn parse(input: &str) -> Result<Self::Parsed, ParseError>;

    /// Solve part one.
    fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError>;

    /// Solve part two.
    fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError>;

    /// Dispatch on a [`Part`] value.
    fn solve_part(parsed: &Self::Parsed, part: Part) -> Result<String, SolveError> {
        match part {
            Part::One => Self::part_one(parsed),
            Part::Two => Self::part_two(parsed),
        }
    }
}
