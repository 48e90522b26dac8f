//! Subcommand implementations

use crate::cli::PartSelection;
use crate::error::CliError;
use crate::output::OutputFormatter;
use aoc_harness::{Harness, RegistryBuilder, RunOptions, RunSnapshot, SolverRegistry};
use aoc_store::{
    AnswerRecord, GuessRecord, InputRecord, Part, SolutionRecord, Store,
};
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Build the registry from linked plugins, keeping only solvers that carry
/// all requested tags (an empty tag list keeps everything)
pub fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

/// Options for the `run` subcommand beyond the harness flags
pub struct RunArgs {
    pub year: u16,
    pub day: u8,
    pub part: PartSelection,
    pub options: RunOptions,
    pub save: bool,
    pub show_logs: bool,
    pub tags: Vec<String>,
}

/// Execute one day's solver through its phases.
///
/// An unregistered day is a notice, not an error. A failed part is
/// reported without blocking the other part; a failed pre-processor is
/// fatal since neither part can trust its state afterwards.
pub fn run(store: &dyn Store, args: RunArgs) -> Result<(), CliError> {
    let registry = build_registry(&args.tags)?;

    let Some(solver) = registry.create(args.year, args.day)? else {
        println!(
            "No solver registered for {} day {}.",
            args.year, args.day
        );
        return Ok(());
    };

    let formatter = OutputFormatter::new(args.options.mask_answers);
    let mut harness = Harness::new(args.year, args.day, solver, args.options, store)?;

    harness.preprocess(store)?;

    if args.part.includes_a() {
        match harness.run_a(store) {
            Ok(snapshot) => {
                formatter.print_part(Part::A, &snapshot);
                persist_part(store, Part::A, &snapshot, args.save)?;
            }
            Err(e) => formatter.print_part_error(Part::A, &e),
        }
    }

    if args.part.includes_b() {
        match harness.run_b(store) {
            Ok(snapshot) => {
                formatter.print_part(Part::B, &snapshot);
                persist_part(store, Part::B, &snapshot, args.save)?;
            }
            Err(e) => formatter.print_part_error(Part::B, &e),
        }
    }

    formatter.print_summary(&harness.snapshot());

    if args.show_logs {
        print_logs(store, args.year, args.day)?;
    }

    Ok(())
}

/// Append the provisional solution record for a completed part; with
/// `save` also finalize it as the day's answer
fn persist_part(
    store: &dyn Store,
    part: Part,
    snapshot: &RunSnapshot,
    save: bool,
) -> Result<(), CliError> {
    let (answer, run_id, processing_time) = match part {
        Part::A => (
            snapshot.answer_a.as_deref(),
            snapshot.run_id_a.as_deref(),
            snapshot.a_processing_time,
        ),
        Part::B => (
            snapshot.answer_b.as_deref(),
            snapshot.run_id_b.as_deref(),
            snapshot.b_processing_time,
        ),
    };
    let (Some(answer), Some(run_id)) = (answer, run_id) else {
        return Ok(());
    };

    store.append_solution(SolutionRecord {
        executed_at: Utc::now(),
        run_id: run_id.to_string(),
        year: snapshot.year,
        day: snapshot.day,
        part,
        test_ind: snapshot.test,
        answer: answer.to_string(),
        processing_time: processing_time.as_secs_f64(),
    })?;

    if save {
        store.upsert_answer(AnswerRecord {
            year: snapshot.year,
            day: snapshot.day,
            part,
            test_ind: snapshot.test,
            solution_id: run_id.to_string(),
            answer: answer.to_string(),
        })?;
    }

    Ok(())
}

/// File inputs for the `load-input` subcommand
pub struct LoadInputArgs<'a> {
    pub year: u16,
    pub day: u8,
    pub full: Option<&'a Path>,
    pub test_a: Option<&'a Path>,
    pub expected_a: Option<String>,
    pub test_b: Option<&'a Path>,
    pub expected_b: Option<String>,
}

/// Merge the provided inputs into the day's stored record, leaving
/// unspecified fields as they were
pub fn load_input(store: &dyn Store, args: LoadInputArgs<'_>) -> Result<(), CliError> {
    let mut record = store
        .get_input(args.year, args.day)?
        .unwrap_or(InputRecord {
            year: args.year,
            day: args.day,
            ..Default::default()
        });

    if let Some(path) = args.full {
        record.full_input = fs::read_to_string(path)?;
    }
    if let Some(path) = args.test_a {
        record.input_test_a = Some(fs::read_to_string(path)?);
    }
    if let Some(expected) = args.expected_a {
        record.expected_a = Some(expected);
    }
    if let Some(path) = args.test_b {
        record.input_test_b = Some(fs::read_to_string(path)?);
    }
    if let Some(expected) = args.expected_b {
        record.expected_b = Some(expected);
    }

    store.upsert_input(record)?;
    println!("Stored inputs for {} day {}.", args.year, args.day);
    Ok(())
}

/// Record a guess for a part and report how it compares to the stored
/// answer.
///
/// Numeric answers compare by magnitude so the report says which
/// direction to adjust; anything else falls back to equality.
pub fn guess(
    store: &dyn Store,
    year: u16,
    day: u8,
    part: Part,
    guess: String,
    test: bool,
) -> Result<(), CliError> {
    let Some(answer) = store.get_answer(year, day, part, test)? else {
        println!(
            "No stored answer for {} day {} part {}; run with --save first.",
            year, day, part
        );
        return Ok(());
    };

    let comparison = compare_guess(&guess, &answer.answer);
    println!("Guess {}: {}", guess, comparison);

    store.upsert_guess(GuessRecord {
        year,
        day,
        part,
        solution_id: answer.solution_id,
        guess,
        comparison: comparison.to_string(),
    })?;

    Ok(())
}

fn compare_guess(guess: &str, answer: &str) -> &'static str {
    match (guess.trim().parse::<i64>(), answer.trim().parse::<i64>()) {
        (Ok(g), Ok(a)) if g < a => "Lower",
        (Ok(g), Ok(a)) if g > a => "Higher",
        (Ok(_), Ok(_)) => "Matches",
        _ if guess == answer => "Matches",
        _ => "Does not match",
    }
}

/// Print a day's persisted debug logs in insertion order
pub fn print_logs(store: &dyn Store, year: u16, day: u8) -> Result<(), CliError> {
    let logs = store.get_logs(year, day)?;
    if logs.is_empty() {
        println!("No logs recorded for {} day {}.", year, day);
        return Ok(());
    }
    for record in logs {
        println!("{}", record);
    }
    Ok(())
}

/// Print every registered solver as year/day with its tags
pub fn list() -> Result<(), CliError> {
    let registry = build_registry(&[])?;
    if registry.is_empty() {
        println!("No solvers registered.");
        return Ok(());
    }
    for (year, day) in registry.registered_days() {
        println!("{}/day{:02}", year, day);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_store::MemoryStore;

    #[test]
    fn test_compare_guess_numeric_direction() {
        assert_eq!(compare_guess("5", "10"), "Lower");
        assert_eq!(compare_guess("15", "10"), "Higher");
        assert_eq!(compare_guess("10", "10"), "Matches");
    }

    #[test]
    fn test_compare_guess_textual_equality() {
        assert_eq!(compare_guess("abcxyz", "abcxyz"), "Matches");
        assert_eq!(compare_guess("abcxyz", "zyxcba"), "Does not match");
    }

    #[test]
    fn test_guess_without_answer_records_nothing() {
        let store = MemoryStore::new();
        guess(&store, 2024, 1, Part::A, "42".to_string(), false).unwrap();
        assert!(store.guesses().is_empty());
    }

    #[test]
    fn test_guess_recorded_with_answer_solution_id() {
        let store = MemoryStore::new();
        store
            .upsert_answer(AnswerRecord {
                year: 2024,
                day: 1,
                part: Part::A,
                test_ind: false,
                solution_id: "feed".to_string(),
                answer: "10".to_string(),
            })
            .unwrap();

        guess(&store, 2024, 1, Part::A, "7".to_string(), false).unwrap();

        let guesses = store.guesses();
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].solution_id, "feed");
        assert_eq!(guesses[0].comparison, "Lower");
    }

    #[test]
    fn test_load_input_merges_expected_answers() {
        let store = MemoryStore::new();
        store
            .upsert_input(InputRecord {
                year: 2024,
                day: 2,
                full_input: "abc".to_string(),
                ..Default::default()
            })
            .unwrap();

        load_input(
            &store,
            LoadInputArgs {
                year: 2024,
                day: 2,
                full: None,
                test_a: None,
                expected_a: Some("7".to_string()),
                test_b: None,
                expected_b: None,
            },
        )
        .unwrap();

        let record = store.get_input(2024, 2).unwrap().unwrap();
        assert_eq!(record.full_input, "abc", "unspecified fields unchanged");
        assert_eq!(record.expected_a.as_deref(), Some("7"));
    }
}
