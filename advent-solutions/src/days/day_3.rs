//! Day 3: corrupted multiplication instructions.
//!
//! The input is a jumble of text containing `mul(a,b)` instructions plus
//! `do()` / `don't()` switches. Part one sums every product; part two
//! honors the switches.

use std::sync::LazyLock;

use advent_solver::{ParseError, SolveError, Solver, SolverPlugin};
use regex::Regex;

pub struct Day3;

inventory::submit! {
    SolverPlugin { day: 3, solver: &Day3 }
}

static INSTRUCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(i64, i64),
    Enable,
    Disable,
}

impl Solver for Day3 {
    type Parsed = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        INSTRUCTION
            .captures_iter(input)
            .map(|found| match &found[0] {
                "do()" => Ok(Instruction::Enable),
                "don't()" => Ok(Instruction::Disable),
                text => {
                    let overflow = |_| {
                        ParseError::InvalidFormat(format!("mul operand out of range in {text:?}"))
                    };
                    let a = found[1].parse().map_err(overflow)?;
                    let b = found[2].parse().map_err(overflow)?;
                    Ok(Instruction::Mul(a, b))
                }
            })
            .collect()
    }

    fn part_one(parsed: &Self::Parsed) -> Result<String, SolveError> {
        let total: i64 = parsed
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum();
        Ok(total.to_string())
    }

    fn part_two(parsed: &Self::Parsed) -> Result<String, SolveError> {
        let mut enabled = true;
        let mut total = 0i64;
        for instruction in parsed {
            match instruction {
                Instruction::Mul(a, b) if enabled => total += a * b,
                Instruction::Mul(..) => {}
                Instruction::Enable => enabled = true,
                Instruction::Disable => enabled = false,
            }
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_example() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let parsed = Day3::parse(input).unwrap();
        assert_eq!(Day3::part_one(&parsed).unwrap(), "161");
    }

    #[test]
    fn part_two_example() {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        let parsed = Day3::parse(input).unwrap();
        assert_eq!(Day3::part_two(&parsed).unwrap(), "48");
    }

    #[test]
    fn switch_state_carries_across_lines() {
        let parsed = Day3::parse("don't()\nmul(2,3)\ndo()\nmul(4,5)").unwrap();
        assert_eq!(Day3::part_two(&parsed).unwrap(), "20");
        assert_eq!(Day3::part_one(&parsed).unwrap(), "26");
    }

    #[test]
    fn malformed_instructions_are_ignored() {
        let parsed = Day3::parse("mul(4*, mul(6,9!, ?(12,34), mul ( 2 , 4 )").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn oversized_operands_are_a_parse_error() {
        assert!(Day3::parse("mul(99999999999999999999,2)").is_err());
    }
}
