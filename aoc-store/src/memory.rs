//! In-memory store, primarily for tests

use crate::error::StoreError;
use crate::records::{AnswerRecord, GuessRecord, InputRecord, LogRecord, Part, SolutionRecord};
use crate::Store;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Tables {
    inputs: Vec<InputRecord>,
    solutions: Vec<SolutionRecord>,
    answers: Vec<AnswerRecord>,
    guesses: Vec<GuessRecord>,
    logs: Vec<LogRecord>,
}

/// Store implementation backed by in-memory tables
///
/// Interior mutability through a mutex so it satisfies the `&self` store
/// contract; nothing is persisted across the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all appended solution records, in insertion order
    pub fn solutions(&self) -> Vec<SolutionRecord> {
        self.tables.lock().expect("store mutex poisoned").solutions.clone()
    }

    /// Snapshot of all upserted guesses, in insertion order
    pub fn guesses(&self) -> Vec<GuessRecord> {
        self.tables.lock().expect("store mutex poisoned").guesses.clone()
    }
}

impl Store for MemoryStore {
    fn get_input(&self, year: u16, day: u8) -> Result<Option<InputRecord>, StoreError> {
        let tables = self.tables.lock().expect("store mutex poisoned");
        Ok(tables
            .inputs
            .iter()
            .find(|r| r.year == year && r.day == day)
            .cloned())
    }

    fn upsert_input(&self, record: InputRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables
            .inputs
            .retain(|r| !(r.year == record.year && r.day == record.day));
        tables.inputs.push(record);
        Ok(())
    }

    fn append_solution(&self, record: SolutionRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables.solutions.push(record);
        Ok(())
    }

    fn get_answer(
        &self,
        year: u16,
        day: u8,
        part: Part,
        test_ind: bool,
    ) -> Result<Option<AnswerRecord>, StoreError> {
        let tables = self.tables.lock().expect("store mutex poisoned");
        Ok(tables
            .answers
            .iter()
            .find(|r| r.year == year && r.day == day && r.part == part && r.test_ind == test_ind)
            .cloned())
    }

    fn upsert_answer(&self, record: AnswerRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables.answers.retain(|r| {
            !(r.year == record.year
                && r.day == record.day
                && r.part == record.part
                && r.test_ind == record.test_ind)
        });
        tables.answers.push(record);
        Ok(())
    }

    fn upsert_guess(&self, record: GuessRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables.guesses.retain(|r| {
            !(r.year == record.year
                && r.day == record.day
                && r.part == record.part
                && r.guess == record.guess)
        });
        tables.guesses.push(record);
        Ok(())
    }

    fn append_logs(&self, records: &[LogRecord]) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables.logs.extend_from_slice(records);
        Ok(())
    }

    fn get_logs(&self, year: u16, day: u8) -> Result<Vec<LogRecord>, StoreError> {
        let tables = self.tables.lock().expect("store mutex poisoned");
        Ok(tables
            .logs
            .iter()
            .filter(|r| r.year == year && r.day == day)
            .cloned()
            .collect())
    }

    fn truncate_logs(&self) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().expect("store mutex poisoned");
        tables.logs.clear();
        Ok(())
    }
}
