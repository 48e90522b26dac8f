//! File-backed store keeping one JSON-lines file per table

use crate::error::StoreError;
use crate::records::{AnswerRecord, GuessRecord, InputRecord, LogRecord, Part, SolutionRecord};
use crate::Store;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Store implementation persisting each table as `{data_dir}/{table}.jsonl`
///
/// One JSON object per line. Keyed upserts rewrite the whole table file;
/// the tables involved stay small (one record per puzzle day or guess), so
/// a rewrite is a few kilobytes at most.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of one table file
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.data_dir.join(format!("{table}.jsonl"))
    }

    fn read_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let path = self.table_path(table);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(StoreError::from))
            .collect()
    }

    fn write_table<T: Serialize>(&self, table: &str, records: &[T]) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let mut content = String::new();
        for record in records {
            content.push_str(&serde_json::to_string(record)?);
            content.push('\n');
        }
        fs::write(self.table_path(table), content)?;
        Ok(())
    }

    fn append_records<T: Serialize>(&self, table: &str, records: &[T]) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.table_path(table))?;
        for record in records {
            let line = serde_json::to_string(record)?;
            writeln!(file, "{line}")?;
        }
        Ok(())
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            StoreError::DirCreation(format!("Failed to create {}: {}", self.data_dir.display(), e))
        })
    }

    /// Upsert into a keyed table: drop records matching the key, append the new one
    fn upsert<T, F>(&self, table: &str, record: T, matches_key: F) -> Result<(), StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut records: Vec<T> = self.read_table(table)?;
        records.retain(|r| !matches_key(r));
        records.push(record);
        self.write_table(table, &records)
    }
}

impl Store for FileStore {
    fn get_input(&self, year: u16, day: u8) -> Result<Option<InputRecord>, StoreError> {
        let records: Vec<InputRecord> = self.read_table("input")?;
        Ok(records.into_iter().find(|r| r.year == year && r.day == day))
    }

    fn upsert_input(&self, record: InputRecord) -> Result<(), StoreError> {
        let (year, day) = (record.year, record.day);
        self.upsert("input", record, |r: &InputRecord| {
            r.year == year && r.day == day
        })
    }

    fn append_solution(&self, record: SolutionRecord) -> Result<(), StoreError> {
        self.append_records("solution", std::slice::from_ref(&record))
    }

    fn get_answer(
        &self,
        year: u16,
        day: u8,
        part: Part,
        test_ind: bool,
    ) -> Result<Option<AnswerRecord>, StoreError> {
        let records: Vec<AnswerRecord> = self.read_table("answer")?;
        Ok(records
            .into_iter()
            .find(|r| r.year == year && r.day == day && r.part == part && r.test_ind == test_ind))
    }

    fn upsert_answer(&self, record: AnswerRecord) -> Result<(), StoreError> {
        let (year, day, part, test_ind) = (record.year, record.day, record.part, record.test_ind);
        self.upsert("answer", record, |r: &AnswerRecord| {
            r.year == year && r.day == day && r.part == part && r.test_ind == test_ind
        })
    }

    fn upsert_guess(&self, record: GuessRecord) -> Result<(), StoreError> {
        let (year, day, part) = (record.year, record.day, record.part);
        let guess = record.guess.clone();
        self.upsert("guess", record, |r: &GuessRecord| {
            r.year == year && r.day == day && r.part == part && r.guess == guess
        })
    }

    fn append_logs(&self, records: &[LogRecord]) -> Result<(), StoreError> {
        self.append_records("log", records)
    }

    fn get_logs(&self, year: u16, day: u8) -> Result<Vec<LogRecord>, StoreError> {
        let records: Vec<LogRecord> = self.read_table("log")?;
        Ok(records
            .into_iter()
            .filter(|r| r.year == year && r.day == day)
            .collect())
    }

    fn truncate_logs(&self) -> Result<(), StoreError> {
        let path = self.table_path("log");
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl AsRef<Path> for FileStore {
    fn as_ref(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        (temp, store)
    }

    #[test]
    fn test_table_path_format() {
        let (temp, store) = store();
        let path = store.table_path("input");
        assert!(path.starts_with(temp.path()));
        assert!(path.to_string_lossy().ends_with("input.jsonl"));
    }

    #[test]
    fn test_input_roundtrip() {
        let (_temp, store) = store();
        assert!(store.get_input(2024, 1).unwrap().is_none());

        let record = InputRecord {
            year: 2024,
            day: 1,
            input_test_a: Some("3 4\n".to_string()),
            expected_a: Some("11".to_string()),
            input_test_b: None,
            expected_b: None,
            full_input: "3 4\n2 5\n".to_string(),
        };
        store.upsert_input(record.clone()).unwrap();
        assert_eq!(store.get_input(2024, 1).unwrap(), Some(record));
    }

    #[test]
    fn test_upsert_rewrites_single_key() {
        let (_temp, store) = store();
        for day in [1u8, 2] {
            store
                .upsert_input(InputRecord {
                    year: 2024,
                    day,
                    full_input: "v1".to_string(),
                    ..Default::default()
                })
                .unwrap();
        }
        store
            .upsert_input(InputRecord {
                year: 2024,
                day: 1,
                full_input: "v2".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.get_input(2024, 1).unwrap().unwrap().full_input, "v2");
        assert_eq!(store.get_input(2024, 2).unwrap().unwrap().full_input, "v1");
    }

    #[test]
    fn test_solutions_append_only() {
        let (_temp, store) = store();
        for (run_id, answer) in [("r1", "10"), ("r2", "11")] {
            store
                .append_solution(SolutionRecord {
                    executed_at: Utc::now(),
                    run_id: run_id.to_string(),
                    year: 2024,
                    day: 3,
                    part: Part::A,
                    test_ind: false,
                    answer: answer.to_string(),
                    processing_time: 0.5,
                })
                .unwrap();
        }

        let content = fs::read_to_string(store.table_path("solution")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("r1"));
        assert!(lines[1].contains("r2"));
    }

    #[test]
    fn test_guess_upsert_and_logs_truncate() {
        let (_temp, store) = store();
        let guess = GuessRecord {
            year: 2024,
            day: 1,
            part: Part::B,
            solution_id: "s".to_string(),
            guess: "42".to_string(),
            comparison: "Lower".to_string(),
        };
        store.upsert_guess(guess.clone()).unwrap();
        store
            .upsert_guess(GuessRecord {
                comparison: "Matches".to_string(),
                ..guess.clone()
            })
            .unwrap();

        let content = fs::read_to_string(store.table_path("guess")).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("Matches"));

        store
            .append_logs(&[LogRecord {
                year: 2024,
                day: 1,
                context: "part b".to_string(),
                data: "state".to_string(),
                label: "trace".to_string(),
            }])
            .unwrap();
        assert_eq!(store.get_logs(2024, 1).unwrap().len(), 1);
        store.truncate_logs().unwrap();
        assert!(store.get_logs(2024, 1).unwrap().is_empty());
        // Truncating an already-missing table is fine
        store.truncate_logs().unwrap();
    }
}
