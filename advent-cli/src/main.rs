//! Command-line runner for the Advent of Code 2024 solvers

mod cli;
mod error;
mod executor;
mod inputs;
mod output;

// Linking the solutions crate is what fills the plugin list.
use advent_solutions as _;

use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::thread;

use advent_solver::{Part, RegistryBuilder};
use clap::Parser;

use crate::cli::Args;
use crate::error::CliError;
use crate::executor::Executor;
use crate::inputs::InputLocator;
use crate::output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    let locator = InputLocator::new(args.input_dir);
    let part_filter = args.part.and_then(Part::from_number);

    let executor = Executor::new(registry, locator, args.days, part_filter);
    if executor.collect_work().is_empty() {
        println!("No solvers registered for the selected days.");
        return Ok(());
    }

    // Ctrl-C requests a cooperative stop: the current day finishes, the
    // remaining days are skipped and the summary still prints.
    let cancelled = executor.cancel_flag();
    if let Err(error) = ctrlc::set_handler(move || cancelled.store(true, Ordering::Relaxed)) {
        eprintln!("Warning: Ctrl-C handling unavailable: {error}");
    }

    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || executor.run(tx));

    // Execution is sequential, so results already arrive in day order.
    let mut formatter = OutputFormatter::new(args.quiet);
    let mut results = Vec::new();
    for result in rx {
        formatter.print_result(&result);
        results.push(result);
    }

    worker.join().map_err(|_| CliError::WorkerPanicked)?;
    formatter.print_summary(&results);
    Ok(())
}
