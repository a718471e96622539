//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2024 solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code 2024 solvers", version)]
pub struct Args {
    /// Days to run, comma-separated (runs every registered day if omitted)
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=25))]
    pub days: Vec<u8>,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Directory containing puzzle input files
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
