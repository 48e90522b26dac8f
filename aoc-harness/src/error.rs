//! Error types for the harness library

use thiserror::Error;

/// Error type for input resolution and coercion
#[derive(Debug, Error)]
pub enum InputError {
    /// No input record exists for the given year/day
    #[error("No input stored for year {year} day {day}")]
    NotFound { year: u16, day: u8 },

    /// Both input texts are empty; nothing to run a phase against
    #[error("No input text available; load inputs before preprocessing")]
    NoInput,

    /// The solver never declared an input format
    #[error("Solver declares no input format")]
    UnsupportedFormat,

    /// The input text does not fit the declared format
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// The store failed while retrieving the input record
    #[error("Store error: {0}")]
    Store(#[from] aoc_store::StoreError),
}

/// Error type raised by solver hooks
#[derive(Debug, Error)]
pub enum SolveError {
    /// The hook has not been written yet
    #[error("Part not implemented")]
    NotImplemented,

    /// The hook failed while solving
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as a hook failure
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::Failed(error.into())
    }
}

/// Error type for registry construction and solver loading
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Two plugins registered for the same year/day
    #[error("Duplicate solver registration for year {0} day {1}")]
    Duplicate(u16, u8),

    /// A solver is registered but its factory failed
    #[error("Solver for year {0} day {1} failed to load")]
    LoadFailed(u16, u8, #[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for grid construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or a first row with no cells
    #[error("Grid input is empty")]
    Empty,

    /// A row length differs from the first row's
    #[error("Grid row {row} has length {len}, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Error type surfaced by harness phase calls
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Input resolution or precondition failure
    #[error(transparent)]
    Input(#[from] InputError),

    /// The solver hook failed; earlier phases keep their results
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// The store failed while flushing logs
    #[error("Store error: {0}")]
    Store(#[from] aoc_store::StoreError),
}
