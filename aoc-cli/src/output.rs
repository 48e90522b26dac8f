//! Output formatting for run results

use aoc_harness::RunSnapshot;
use aoc_store::Part;
use std::time::Duration;

/// Formatter for harness run output
pub struct OutputFormatter {
    mask_answers: bool,
}

impl OutputFormatter {
    pub fn new(mask_answers: bool) -> Self {
        Self { mask_answers }
    }

    /// Print one part's answer with timing and expectation check
    pub fn print_part(&self, part: Part, snapshot: &RunSnapshot) {
        let (answer, expected, duration) = match part {
            Part::A => (
                snapshot.answer_a.as_deref(),
                snapshot.expected_a.as_deref(),
                snapshot.a_processing_time,
            ),
            Part::B => (
                snapshot.answer_b.as_deref(),
                snapshot.expected_b.as_deref(),
                snapshot.b_processing_time,
            ),
        };

        let Some(answer) = answer else {
            println!("Part {}: no answer", part);
            return;
        };

        let shown = self.display_answer(answer);
        let expectation = match expected {
            Some(expected) if expected == answer => " [matches expected]".to_string(),
            Some(_) if self.mask_answers => " [differs from expected]".to_string(),
            Some(expected) => format!(" [expected {expected}]"),
            None => String::new(),
        };

        println!(
            "Part {}: {} ({}){}",
            part,
            shown,
            format_duration(duration),
            expectation
        );
    }

    /// Print a failed part without blocking its sibling
    pub fn print_part_error(&self, part: Part, error: &dyn std::fmt::Display) {
        eprintln!("Part {}: Error - {}", part, error);
    }

    /// Print the per-phase and total timing summary
    pub fn print_summary(&self, snapshot: &RunSnapshot) {
        println!();
        println!("--- Timing ---");
        println!(
            "Pre-processing: {}",
            format_duration(snapshot.preprocessing_time)
        );
        println!("Part A: {}", format_duration(snapshot.a_processing_time));
        println!("Part B: {}", format_duration(snapshot.b_processing_time));
        println!(
            "Total: {}",
            format_duration(snapshot.total_processing_time)
        );
    }

    /// Answer as displayed: masked to X's of the same length when enabled
    pub fn display_answer(&self, answer: &str) -> String {
        if self.mask_answers {
            "X".repeat(answer.chars().count())
        } else {
            answer.to_string()
        }
    }
}

/// Format a duration for display
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
