//! Core solver trait

use crate::error::SolveError;
use crate::harness::RunContext;
use crate::input::InputFormat;

/// The three lifecycle hooks of one puzzle solution.
///
/// A solver declares the shape its input should be coerced to and supplies
/// the phase hooks the harness runs in order: `preprocess`, then either or
/// both of `solve_a` / `solve_b`. State carried between phases lives on the
/// implementing type; the [`RunContext`] hands each hook the coerced
/// inputs and the log buffer.
///
/// # Example
///
/// ```
/// use aoc_harness::{InputFormat, RunContext, SolveError, Solver};
///
/// #[derive(Default)]
/// struct Day1 {
///     values: Vec<i64>,
/// }
///
/// impl Solver for Day1 {
///     fn input_format(&self) -> InputFormat {
///         InputFormat::IntTokens
///     }
///
///     fn preprocess(&mut self, ctx: &mut RunContext<'_>) -> Result<(), SolveError> {
///         self.values = ctx.input_a().as_int_tokens().unwrap_or_default().to_vec();
///         ctx.log(self.values.len(), "token count");
///         Ok(())
///     }
///
///     fn solve_a(&mut self, _ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
///         Ok(self.values.iter().sum::<i64>().to_string())
///     }
///
///     fn solve_b(&mut self, _ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
///         Err(SolveError::NotImplemented)
///     }
/// }
/// ```
pub trait Solver {
    /// Shape the raw input text is coerced to before any phase runs
    fn input_format(&self) -> InputFormat {
        InputFormat::Unspecified
    }

    /// Shared preparation before either part runs
    fn preprocess(&mut self, _ctx: &mut RunContext<'_>) -> Result<(), SolveError> {
        Ok(())
    }

    /// Solve part A, returning the answer
    fn solve_a(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError>;

    /// Solve part B, returning the answer
    fn solve_b(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError>;
}

impl std::fmt::Debug for dyn Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Solver")
    }
}
