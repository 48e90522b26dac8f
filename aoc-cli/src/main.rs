//! AOC CLI - Command-line interface for the Advent of Code manager

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod scaffold;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_harness::RunOptions;
use aoc_store::{FileStore, Store};
use clap::Parser;
use cli::{Args, Command};
use config::Config;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_data_dir(&args.data_dir);
    let store = FileStore::new(config.data_dir);

    match args.command {
        Command::Run {
            year,
            day,
            part,
            test,
            debug,
            mask_answers,
            save,
            show_logs,
            tags,
        } => commands::run(
            &store,
            commands::RunArgs {
                year,
                day,
                part,
                options: RunOptions {
                    test,
                    debug,
                    mask_answers,
                },
                save,
                show_logs,
                tags,
            },
        ),
        Command::LoadInput {
            year,
            day,
            full,
            test_a,
            expected_a,
            test_b,
            expected_b,
        } => commands::load_input(
            &store,
            commands::LoadInputArgs {
                year,
                day,
                full: full.as_deref(),
                test_a: test_a.as_deref(),
                expected_a,
                test_b: test_b.as_deref(),
                expected_b,
            },
        ),
        Command::NewSolution { year, day, dir } => {
            let path = scaffold::new_solution(&dir, year, day)?;
            println!("Created {}", path.display());
            println!("Remember to add the module to year_{}/mod.rs.", year);
            Ok(())
        }
        Command::Guess {
            year,
            day,
            part,
            guess,
            test,
        } => commands::guess(&store, year, day, part.into(), guess, test),
        Command::Logs { year, day } => commands::print_logs(&store, year, day),
        Command::TruncateLogs => {
            store.truncate_logs()?;
            println!("Logs truncated.");
            Ok(())
        }
        Command::List => commands::list(),
    }
}
