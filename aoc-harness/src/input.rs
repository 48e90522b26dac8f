//! Input resolution and coercion
//!
//! Retrieves the stored input record for a year/day, selects test fixtures
//! or the full puzzle input, and coerces the raw text into the shape the
//! solver declared.

use crate::error::InputError;
use aoc_store::Store;

/// Sentinel value an empty line coerces to under [`InputFormat::IntTokens`]
pub const EMPTY_LINE_SENTINEL: i64 = -1;

/// Declared shape of a solver's input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// No format declared; coercion fails with `UnsupportedFormat`
    #[default]
    Unspecified,
    /// Raw text, returned unmodified
    Raw,
    /// Split into lines, no further transform
    Lines,
    /// Lines of single-digit integers, one per character
    DigitRows,
    /// Lines exploded into individual characters
    CharRows,
    /// One integer per non-empty line; empty lines map to the sentinel −1
    IntTokens,
}

/// Input text coerced to the declared format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    Raw(String),
    Lines(Vec<String>),
    DigitRows(Vec<Vec<u32>>),
    CharRows(Vec<Vec<char>>),
    IntTokens(Vec<i64>),
}

impl ParsedInput {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ParsedInput::Raw(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_lines(&self) -> Option<&[String]> {
        match self {
            ParsedInput::Lines(lines) => Some(lines),
            _ => None,
        }
    }

    pub fn as_digit_rows(&self) -> Option<&[Vec<u32>]> {
        match self {
            ParsedInput::DigitRows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_char_rows(&self) -> Option<&[Vec<char>]> {
        match self {
            ParsedInput::CharRows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_int_tokens(&self) -> Option<&[i64]> {
        match self {
            ParsedInput::IntTokens(tokens) => Some(tokens),
            _ => None,
        }
    }
}

/// Raw input texts selected for one run, plus expected answers in test mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedInput {
    pub input_a_text: String,
    pub input_b_text: String,
    pub expected_a: Option<String>,
    pub expected_b: Option<String>,
}

/// Select the input texts for `(year, day, test)` from the store.
///
/// In test mode the part-A fixture is used, and part B silently falls back
/// to part A's fixture when no B-specific fixture exists. Outside test mode
/// both parts get the full puzzle input and no expected answers.
///
/// A missing input record is an error; it propagates so that no phase runs
/// against input that was never loaded.
pub fn resolve(
    store: &dyn Store,
    year: u16,
    day: u8,
    test: bool,
) -> Result<ResolvedInput, InputError> {
    let record = store
        .get_input(year, day)?
        .ok_or(InputError::NotFound { year, day })?;

    if test {
        let input_a_text = record.input_test_a.unwrap_or_default();
        let input_b_text = match record.input_test_b {
            Some(text) if !text.is_empty() => text,
            _ => input_a_text.clone(),
        };
        Ok(ResolvedInput {
            input_a_text,
            input_b_text,
            expected_a: record.expected_a,
            expected_b: record.expected_b,
        })
    } else {
        Ok(ResolvedInput {
            input_a_text: record.full_input.clone(),
            input_b_text: record.full_input,
            expected_a: None,
            expected_b: None,
        })
    }
}

/// Coerce raw input text into the declared format.
pub fn coerce(text: &str, format: InputFormat) -> Result<ParsedInput, InputError> {
    match format {
        InputFormat::Unspecified => Err(InputError::UnsupportedFormat),
        InputFormat::Raw => Ok(ParsedInput::Raw(text.to_string())),
        InputFormat::Lines => Ok(ParsedInput::Lines(
            text.lines().map(str::to_string).collect(),
        )),
        InputFormat::DigitRows => text
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10).ok_or_else(|| {
                            InputError::Malformed(format!("expected digit, found {c:?}"))
                        })
                    })
                    .collect()
            })
            .collect::<Result<Vec<Vec<u32>>, _>>()
            .map(ParsedInput::DigitRows),
        InputFormat::CharRows => Ok(ParsedInput::CharRows(
            text.lines().map(|line| line.chars().collect()).collect(),
        )),
        InputFormat::IntTokens => text
            .lines()
            .map(|line| {
                if line.is_empty() {
                    Ok(EMPTY_LINE_SENTINEL)
                } else {
                    line.parse::<i64>().map_err(|e| {
                        InputError::Malformed(format!("bad integer line {line:?}: {e}"))
                    })
                }
            })
            .collect::<Result<Vec<i64>, _>>()
            .map(ParsedInput::IntTokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_store::{InputRecord, MemoryStore};

    fn store_with(record: InputRecord) -> MemoryStore {
        let store = MemoryStore::new();
        store.upsert_input(record).unwrap();
        store
    }

    #[test]
    fn test_resolve_full_input_for_both_parts() {
        let store = store_with(InputRecord {
            year: 2024,
            day: 1,
            input_test_a: Some("fixture".to_string()),
            expected_a: Some("11".to_string()),
            full_input: "real input".to_string(),
            ..Default::default()
        });

        let resolved = resolve(&store, 2024, 1, false).unwrap();
        assert_eq!(resolved.input_a_text, "real input");
        assert_eq!(resolved.input_b_text, "real input");
        assert_eq!(resolved.expected_a, None);
        assert_eq!(resolved.expected_b, None);
    }

    #[test]
    fn test_resolve_test_fixtures() {
        let store = store_with(InputRecord {
            year: 2024,
            day: 1,
            input_test_a: Some("fixture a".to_string()),
            expected_a: Some("11".to_string()),
            input_test_b: Some("fixture b".to_string()),
            expected_b: Some("31".to_string()),
            full_input: "real input".to_string(),
        });

        let resolved = resolve(&store, 2024, 1, true).unwrap();
        assert_eq!(resolved.input_a_text, "fixture a");
        assert_eq!(resolved.input_b_text, "fixture b");
        assert_eq!(resolved.expected_a.as_deref(), Some("11"));
        assert_eq!(resolved.expected_b.as_deref(), Some("31"));
    }

    #[test]
    fn test_resolve_b_falls_back_to_a_fixture() {
        let store = store_with(InputRecord {
            year: 2024,
            day: 1,
            input_test_a: Some("fixture a".to_string()),
            expected_a: Some("11".to_string()),
            full_input: "real input".to_string(),
            ..Default::default()
        });

        let resolved = resolve(&store, 2024, 1, true).unwrap();
        assert_eq!(resolved.input_b_text, resolved.input_a_text);
        assert_eq!(resolved.expected_b, None);
    }

    #[test]
    fn test_resolve_missing_record_is_not_found() {
        let store = MemoryStore::new();
        let err = resolve(&store, 2024, 9, false).unwrap_err();
        assert!(matches!(err, InputError::NotFound { year: 2024, day: 9 }));
    }

    #[test]
    fn test_coerce_raw_and_lines() {
        assert_eq!(
            coerce("a\nb\n", InputFormat::Raw).unwrap(),
            ParsedInput::Raw("a\nb\n".to_string())
        );
        assert_eq!(
            coerce("a\nb\n", InputFormat::Lines).unwrap(),
            ParsedInput::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_coerce_digit_rows() {
        assert_eq!(
            coerce("123\n456\n", InputFormat::DigitRows).unwrap(),
            ParsedInput::DigitRows(vec![vec![1, 2, 3], vec![4, 5, 6]])
        );
        assert!(matches!(
            coerce("12x\n", InputFormat::DigitRows),
            Err(InputError::Malformed(_))
        ));
    }

    #[test]
    fn test_coerce_char_rows() {
        assert_eq!(
            coerce(".@\n@.\n", InputFormat::CharRows).unwrap(),
            ParsedInput::CharRows(vec![vec!['.', '@'], vec!['@', '.']])
        );
    }

    #[test]
    fn test_coerce_int_tokens_with_sentinel() {
        assert_eq!(
            coerce("12\n\n-3\n", InputFormat::IntTokens).unwrap(),
            ParsedInput::IntTokens(vec![12, EMPTY_LINE_SENTINEL, -3])
        );
        assert!(matches!(
            coerce("twelve\n", InputFormat::IntTokens),
            Err(InputError::Malformed(_))
        ));
    }

    #[test]
    fn test_coerce_unspecified_is_unsupported() {
        assert!(matches!(
            coerce("anything", InputFormat::Unspecified),
            Err(InputError::UnsupportedFormat)
        ));
    }
}
