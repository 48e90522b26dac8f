//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which parts of a day to execute
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum PartSelection {
    /// Part A only
    A,
    /// Part B only
    B,
    /// Both parts in order (default)
    #[default]
    Both,
}

impl PartSelection {
    pub fn includes_a(&self) -> bool {
        matches!(self, PartSelection::A | PartSelection::Both)
    }

    pub fn includes_b(&self) -> bool {
        matches!(self, PartSelection::B | PartSelection::Both)
    }
}

/// Puzzle part argument
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PartArg {
    A,
    B,
}

impl From<PartArg> for aoc_store::Part {
    fn from(part: PartArg) -> Self {
        match part {
            PartArg::A => aoc_store::Part::A,
            PartArg::B => aoc_store::Part::B,
        }
    }
}

/// Advent of Code solution manager
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run and manage Advent of Code solutions", version)]
pub struct Args {
    /// Data directory for inputs, answers and logs
    #[arg(long, global = true, default_value = "~/.local/share/aoc_manager")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a day's solver through its phases
    Run {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Parts to execute
        #[arg(short, long, value_enum, default_value = "both")]
        part: PartSelection,

        /// Run against test fixtures instead of the full input
        #[arg(short, long)]
        test: bool,

        /// Retain and persist log() calls made by the solver
        #[arg(long)]
        debug: bool,

        /// Mask displayed answers (stored values are unaffected)
        #[arg(long)]
        mask_answers: bool,

        /// Also upsert finalized answer records for the executed parts
        #[arg(long)]
        save: bool,

        /// Print the day's persisted debug logs after the run
        #[arg(long)]
        show_logs: bool,

        /// Only consider solvers carrying all of these tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Load or update a day's inputs and test fixtures
    LoadInput {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// File containing the full puzzle input
        #[arg(long)]
        full: Option<PathBuf>,

        /// File containing the part-A test fixture
        #[arg(long)]
        test_a: Option<PathBuf>,

        /// Expected part-A answer for the test fixture
        #[arg(long)]
        expected_a: Option<String>,

        /// File containing the part-B test fixture
        #[arg(long)]
        test_b: Option<PathBuf>,

        /// Expected part-B answer for the test fixture
        #[arg(long)]
        expected_b: Option<String>,
    },

    /// Create a new solution source file from the template
    NewSolution {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Root directory of the solutions crate source
        #[arg(long, default_value = "aoc-solutions/src")]
        dir: PathBuf,
    },

    /// Record a guess and compare it against the stored answer
    Guess {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        #[arg(short, long, value_enum)]
        part: PartArg,

        /// The guessed answer
        guess: String,

        /// Compare against the test-mode answer instead of the full one
        #[arg(short, long)]
        test: bool,
    },

    /// Print the persisted debug logs for a day
    Logs {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
    },

    /// Clear all transient debug logs
    TruncateLogs,

    /// List the registered solvers
    List,
}
