//! Output formatting for run results

use chrono::TimeDelta;

use crate::executor::RunResult;

/// Prints streamed results and the closing summary.
///
/// Results arrive one part at a time; a `=== Day N ===` header is emitted
/// whenever the day changes. Quiet mode drops headers and timing and
/// prints answers alone.
pub struct OutputFormatter {
    quiet: bool,
    current_day: Option<u8>,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            current_day: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result as it arrives.
    pub fn print_result(&mut self, result: &RunResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &RunResult) {
        match &result.answer {
            Ok(answer) => println!("{answer}"),
            Err(error) => eprintln!("Error: {error}"),
        }
    }

    /// Print the day header and the part line with timing
    fn print_full(&mut self, result: &RunResult) {
        if self.current_day != Some(result.day) {
            self.current_day = Some(result.day);
            println!("=== Day {} ===", result.day);
        }

        match &result.answer {
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                println!(
                    "Part {}: {} ({}solve: {})",
                    result.part,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                );
            }
            Err(error) => {
                eprintln!("Part {}: Error - {}", result.part, error);
            }
        }
    }

    /// Print a summary after all results: solved/failed counts, summed
    /// parse and solve time, and the wall-clock time of the whole run.
    pub fn print_summary(&self, results: &[RunResult]) {
        if self.quiet {
            return;
        }

        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        let failed = results.len() - solved;

        let total_parse: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {solved} solved, {failed} failed");
        println!("Total parse time: {}", format_duration(total_parse));
        println!("Total solve time: {}", format_duration(total_solve));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
