//! Persistence layer for the AOC manager
//!
//! Holds the typed records the harness and CLI persist (puzzle inputs and
//! test fixtures, per-run solutions, finalized answers, guesses, debug logs)
//! plus the [`Store`] trait they go through. Two implementations are
//! provided:
//!
//! - [`FileStore`]: one JSON-lines file per table under a data directory
//! - [`MemoryStore`]: in-memory tables, intended for tests
//!
//! Keyed tables (inputs, answers, guesses) are upserted by their primary
//! key; append-only tables (solutions, logs) keep every record in insertion
//! order.

mod error;
mod file;
mod memory;
mod records;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{AnswerRecord, GuessRecord, InputRecord, LogRecord, Part, SolutionRecord};

/// Storage contract consumed by the harness and the CLI.
///
/// Implementations must make each method a complete, blocking operation;
/// the harness performs no retries and holds no transactions across calls.
pub trait Store {
    /// Fetch the input record for a year/day, if one has been loaded.
    fn get_input(&self, year: u16, day: u8) -> Result<Option<InputRecord>, StoreError>;

    /// Insert or replace the input record keyed by `(year, day)`.
    fn upsert_input(&self, record: InputRecord) -> Result<(), StoreError>;

    /// Append one provisional per-run solution record.
    fn append_solution(&self, record: SolutionRecord) -> Result<(), StoreError>;

    /// Fetch a finalized answer keyed by `(year, day, part, test_ind)`.
    fn get_answer(
        &self,
        year: u16,
        day: u8,
        part: Part,
        test_ind: bool,
    ) -> Result<Option<AnswerRecord>, StoreError>;

    /// Insert or replace a finalized answer keyed by `(year, day, part, test_ind)`.
    fn upsert_answer(&self, record: AnswerRecord) -> Result<(), StoreError>;

    /// Insert or replace a guess keyed by `(year, day, part, guess)`.
    fn upsert_guess(&self, record: GuessRecord) -> Result<(), StoreError>;

    /// Append a batch of log records.
    fn append_logs(&self, records: &[LogRecord]) -> Result<(), StoreError>;

    /// Fetch all log records for a year/day, in insertion order.
    fn get_logs(&self, year: u16, day: u8) -> Result<Vec<LogRecord>, StoreError>;

    /// Drop all transient log records.
    fn truncate_logs(&self) -> Result<(), StoreError>;
}
