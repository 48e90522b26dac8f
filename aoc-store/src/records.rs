//! Record types for the persisted tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Puzzle part identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    A,
    B,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::A => write!(f, "a"),
            Part::B => write!(f, "b"),
        }
    }
}

/// Stored puzzle input for one year/day, keyed by `(year, day)`
///
/// Test fixtures are optional; a missing part-B fixture means part B reuses
/// part A's fixture at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub year: u16,
    pub day: u8,
    pub input_test_a: Option<String>,
    pub expected_a: Option<String>,
    pub input_test_b: Option<String>,
    pub expected_b: Option<String>,
    pub full_input: String,
}

/// Provisional record of one executed part, appended after every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub executed_at: DateTime<Utc>,
    pub run_id: String,
    pub year: u16,
    pub day: u8,
    pub part: Part,
    pub test_ind: bool,
    pub answer: String,
    /// Wall-clock processing time of the part, in seconds
    pub processing_time: f64,
}

/// Finalized answer, keyed by `(year, day, part, test_ind)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub year: u16,
    pub day: u8,
    pub part: Part,
    pub test_ind: bool,
    /// Run identifier of the execution that produced the answer
    pub solution_id: String,
    pub answer: String,
}

/// Recorded guess, keyed by `(year, day, part, guess)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub year: u16,
    pub day: u8,
    pub part: Part,
    pub solution_id: String,
    pub guess: String,
    /// Outcome of comparing the guess against the stored answer
    pub comparison: String,
}

/// One structured debug log line, appended in phase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub year: u16,
    pub day: u8,
    /// Phase label the line was emitted under
    pub context: String,
    pub data: String,
    pub label: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.context, self.label, self.data)
    }
}
