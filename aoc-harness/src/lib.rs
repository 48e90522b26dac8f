//! Execution harness for day-by-day Advent of Code solutions
//!
//! This library discovers, times and records the execution of puzzle
//! solutions, and provides the bounded 2D grid primitives those solutions
//! use to walk maps.
//!
//! # Overview
//!
//! - [`Solver`]: the three lifecycle hooks one solution implements
//!   (`preprocess`, `solve_a`, `solve_b`) plus its declared input shape
//! - [`SolverRegistry`]: explicit `(year, day)` lookup built at process
//!   start from `inventory`-collected [`SolverPlugin`] entries; an
//!   unregistered day is a valid "not implemented" state
//! - [`Harness`]: per-invocation run state; times each phase, buffers
//!   structured debug logs and flushes them to the store
//! - [`grid::Cursor`] / [`grid::Map`]: a bounded cursor and an
//!   immutable-size character grid for walking puzzle maps
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{Harness, InputFormat, RunContext, RunOptions, SolveError, Solver};
//! use aoc_store::{InputRecord, MemoryStore, Store};
//!
//! #[derive(Default)]
//! struct EchoSolver;
//!
//! impl Solver for EchoSolver {
//!     fn input_format(&self) -> InputFormat {
//!         InputFormat::Raw
//!     }
//!     fn solve_a(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
//!         Ok(ctx.input_a_text().len().to_string())
//!     }
//!     fn solve_b(&mut self, _: &mut RunContext<'_>) -> Result<String, SolveError> {
//!         Err(SolveError::NotImplemented)
//!     }
//! }
//!
//! let store = MemoryStore::new();
//! store.upsert_input(InputRecord {
//!     year: 2024,
//!     day: 1,
//!     full_input: "hello".to_string(),
//!     ..Default::default()
//! }).unwrap();
//!
//! let mut harness = Harness::new(
//!     2024, 1, Box::new(EchoSolver), RunOptions::default(), &store,
//! ).unwrap();
//! harness.preprocess(&store).unwrap();
//! let snapshot = harness.run_a(&store).unwrap();
//! assert_eq!(snapshot.answer_a.as_deref(), Some("5"));
//! ```

mod error;
pub mod grid;
mod harness;
mod input;
mod registry;
mod solver;

pub use error::{GridError, HarnessError, InputError, RegistrationError, SolveError};
pub use harness::{Harness, Phase, RunContext, RunOptions, RunSnapshot};
pub use input::{coerce, resolve, InputFormat, ParsedInput, ResolvedInput, EMPTY_LINE_SENTINEL};
pub use registry::{RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry};
pub use solver::Solver;

// Re-export inventory so plugin submission works without a separate dependency
pub use inventory;
