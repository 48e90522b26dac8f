//! Phased, timed execution of one puzzle solution

use crate::error::{HarnessError, InputError};
use crate::input::{self, InputFormat, ParsedInput};
use crate::solver::Solver;
use aoc_store::{LogRecord, Store};
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

/// One timed lifecycle step of a puzzle run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preprocessor,
    PartA,
    PartB,
}

impl Phase {
    /// Tag used to label log entries emitted during this phase
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Preprocessor => "pre-processor",
            Phase::PartA => "part a",
            Phase::PartB => "part b",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flags selecting how a run behaves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Run against test fixtures instead of the full puzzle input
    pub test: bool,
    /// Retain `log()` calls; without it they are dropped
    pub debug: bool,
    /// Mask answers when displayed; stored values are unaffected
    pub mask_answers: bool,
}

/// Immutable snapshot of harness state, returned by every phase call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSnapshot {
    pub year: u16,
    pub day: u8,
    pub test: bool,
    pub debug: bool,
    pub mask_answers: bool,
    pub answer_a: Option<String>,
    pub answer_b: Option<String>,
    pub expected_a: Option<String>,
    pub expected_b: Option<String>,
    pub preprocessing_time: Duration,
    pub a_processing_time: Duration,
    pub b_processing_time: Duration,
    pub total_processing_time: Duration,
    pub run_id_a: Option<String>,
    pub run_id_b: Option<String>,
}

/// Per-phase view handed to solver hooks.
///
/// Exposes the coerced inputs, the raw texts, the run flags and the log
/// buffer; the hook never touches harness timing or answers directly.
pub struct RunContext<'h> {
    year: u16,
    day: u8,
    test: bool,
    debug: bool,
    phase: Phase,
    input_a: &'h ParsedInput,
    input_b: &'h ParsedInput,
    input_a_text: &'h str,
    input_b_text: &'h str,
    logs: &'h mut Vec<LogRecord>,
}

impl RunContext<'_> {
    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Whether this run uses test fixtures
    pub fn is_test(&self) -> bool {
        self.test
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Coerced input for part A (also what `preprocess` should read)
    pub fn input_a(&self) -> &ParsedInput {
        self.input_a
    }

    /// Coerced input for part B
    pub fn input_b(&self) -> &ParsedInput {
        self.input_b
    }

    pub fn input_a_text(&self) -> &str {
        self.input_a_text
    }

    pub fn input_b_text(&self) -> &str {
        self.input_b_text
    }

    /// Buffer a structured log entry tagged with the current phase.
    ///
    /// No-op unless the run has debug enabled. Entries stay in the buffer
    /// until the enclosing phase completes and flushes them to the store.
    pub fn log(&mut self, line: impl fmt::Display, label: &str) {
        if !self.debug {
            return;
        }
        self.logs.push(LogRecord {
            year: self.year,
            day: self.day,
            context: self.phase.label().to_string(),
            data: line.to_string(),
            label: label.to_string(),
        });
    }
}

/// Orchestrates the three lifecycle phases of one puzzle run.
///
/// Owns its run context exclusively: inputs, answers, per-phase wall-clock
/// durations, run identifiers and the log buffer. A fresh harness is built
/// per invocation; nothing is shared between harness instances except the
/// store they flush to.
///
/// Hook errors are propagated, never swallowed; phases that completed
/// before a failure keep their results. Re-running a phase regenerates its
/// run identifier and re-measures its duration.
#[derive(Debug)]
pub struct Harness {
    year: u16,
    day: u8,
    options: RunOptions,
    format: InputFormat,
    input_a_text: String,
    input_b_text: String,
    input_a: ParsedInput,
    input_b: ParsedInput,
    expected_a: Option<String>,
    expected_b: Option<String>,
    answer_a: Option<String>,
    answer_b: Option<String>,
    preprocessing_time: Duration,
    a_processing_time: Duration,
    b_processing_time: Duration,
    total_processing_time: Duration,
    run_id_a: Option<String>,
    run_id_b: Option<String>,
    logs: Vec<LogRecord>,
    phase: Option<Phase>,
    solver: Box<dyn Solver>,
}

impl Harness {
    /// Build a harness for one run: resolve the stored inputs for
    /// `(year, day)` and coerce them to the solver's declared format.
    ///
    /// All input and format errors surface here, before any phase timing
    /// begins.
    pub fn new(
        year: u16,
        day: u8,
        solver: Box<dyn Solver>,
        options: RunOptions,
        store: &dyn Store,
    ) -> Result<Self, InputError> {
        let format = solver.input_format();
        let resolved = input::resolve(store, year, day, options.test)?;
        let input_a = input::coerce(&resolved.input_a_text, format)?;
        let input_b = input::coerce(&resolved.input_b_text, format)?;

        Ok(Self {
            year,
            day,
            options,
            format,
            input_a_text: resolved.input_a_text,
            input_b_text: resolved.input_b_text,
            input_a,
            input_b,
            expected_a: resolved.expected_a,
            expected_b: resolved.expected_b,
            answer_a: None,
            answer_b: None,
            preprocessing_time: Duration::ZERO,
            a_processing_time: Duration::ZERO,
            b_processing_time: Duration::ZERO,
            total_processing_time: Duration::ZERO,
            run_id_a: None,
            run_id_b: None,
            logs: Vec::new(),
            phase: None,
            solver,
        })
    }

    /// Run the `preprocess` hook, timed, then flush buffered logs.
    ///
    /// Fails with [`InputError::NoInput`] before the hook runs when both
    /// input texts are empty.
    pub fn preprocess(&mut self, store: &dyn Store) -> Result<RunSnapshot, HarnessError> {
        if self.input_a_text.is_empty() && self.input_b_text.is_empty() {
            return Err(InputError::NoInput.into());
        }
        self.phase = Some(Phase::Preprocessor);

        let start = Instant::now();
        let result = self.invoke(Phase::Preprocessor, |solver, ctx| solver.preprocess(ctx));
        self.preprocessing_time = start.elapsed();
        self.recompute_total();
        // Still attempt the flush, but a hook failure takes precedence
        // over a flush failure
        let flushed = self.flush_logs(store);

        result?;
        flushed?;
        Ok(self.snapshot())
    }

    /// Run the `solve_a` hook, timed, under a fresh run identifier.
    pub fn run_a(&mut self, store: &dyn Store) -> Result<RunSnapshot, HarnessError> {
        self.phase = Some(Phase::PartA);
        self.run_id_a = Some(new_run_id());

        let start = Instant::now();
        let result = self.invoke(Phase::PartA, |solver, ctx| solver.solve_a(ctx));
        self.a_processing_time = start.elapsed();
        self.recompute_total();
        let flushed = self.flush_logs(store);

        self.answer_a = Some(result?);
        flushed?;
        Ok(self.snapshot())
    }

    /// Run the `solve_b` hook, timed, under a fresh run identifier.
    pub fn run_b(&mut self, store: &dyn Store) -> Result<RunSnapshot, HarnessError> {
        self.phase = Some(Phase::PartB);
        self.run_id_b = Some(new_run_id());

        let start = Instant::now();
        let result = self.invoke(Phase::PartB, |solver, ctx| solver.solve_b(ctx));
        self.b_processing_time = start.elapsed();
        self.recompute_total();
        let flushed = self.flush_logs(store);

        self.answer_b = Some(result?);
        flushed?;
        Ok(self.snapshot())
    }

    /// Hand the solver a context built from disjoint borrows of the run state
    fn invoke<R>(
        &mut self,
        phase: Phase,
        hook: impl FnOnce(&mut dyn Solver, &mut RunContext<'_>) -> R,
    ) -> R {
        let Self {
            year,
            day,
            options,
            solver,
            logs,
            input_a,
            input_b,
            input_a_text,
            input_b_text,
            ..
        } = self;
        let mut ctx = RunContext {
            year: *year,
            day: *day,
            test: options.test,
            debug: options.debug,
            phase,
            input_a,
            input_b,
            input_a_text,
            input_b_text,
            logs,
        };
        hook(solver.as_mut(), &mut ctx)
    }

    /// Total is the sum of executed phase durations; skipped phases
    /// contribute zero, so it can never be negative.
    fn recompute_total(&mut self) {
        self.total_processing_time =
            self.preprocessing_time + self.a_processing_time + self.b_processing_time;
    }

    fn flush_logs(&mut self, store: &dyn Store) -> Result<(), HarnessError> {
        if self.logs.is_empty() {
            return Ok(());
        }
        store.append_logs(&self.logs)?;
        self.logs.clear();
        Ok(())
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn is_test(&self) -> bool {
        self.options.test
    }

    pub fn is_debug(&self) -> bool {
        self.options.debug
    }

    pub fn mask_answers(&self) -> bool {
        self.options.mask_answers
    }

    pub fn input_format(&self) -> InputFormat {
        self.format
    }

    pub fn input_a_text(&self) -> &str {
        &self.input_a_text
    }

    pub fn input_b_text(&self) -> &str {
        &self.input_b_text
    }

    pub fn expected_a(&self) -> Option<&str> {
        self.expected_a.as_deref()
    }

    pub fn expected_b(&self) -> Option<&str> {
        self.expected_b.as_deref()
    }

    pub fn answer_a(&self) -> Option<&str> {
        self.answer_a.as_deref()
    }

    pub fn answer_b(&self) -> Option<&str> {
        self.answer_b.as_deref()
    }

    /// Identifier of the last part-A run; `None` means part A never ran
    /// and has no answer to correlate.
    pub fn run_id_a(&self) -> Option<&str> {
        self.run_id_a.as_deref()
    }

    /// Identifier of the last part-B run; `None` means part B never ran.
    pub fn run_id_b(&self) -> Option<&str> {
        self.run_id_b.as_deref()
    }

    pub fn preprocessing_time(&self) -> Duration {
        self.preprocessing_time
    }

    pub fn a_processing_time(&self) -> Duration {
        self.a_processing_time
    }

    pub fn b_processing_time(&self) -> Duration {
        self.b_processing_time
    }

    pub fn total_processing_time(&self) -> Duration {
        self.total_processing_time
    }

    /// Phase tag currently labelling log entries, if any phase has started
    pub fn current_phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Log entries buffered since the last flush
    pub fn logs(&self) -> &[LogRecord] {
        &self.logs
    }

    /// Immutable copy of the run state at this moment
    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            year: self.year,
            day: self.day,
            test: self.options.test,
            debug: self.options.debug,
            mask_answers: self.options.mask_answers,
            answer_a: self.answer_a.clone(),
            answer_b: self.answer_b.clone(),
            expected_a: self.expected_a.clone(),
            expected_b: self.expected_b.clone(),
            preprocessing_time: self.preprocessing_time,
            a_processing_time: self.a_processing_time,
            b_processing_time: self.b_processing_time,
            total_processing_time: self.total_processing_time,
            run_id_a: self.run_id_a.clone(),
            run_id_b: self.run_id_b.clone(),
        }
    }
}

/// Fresh 128-bit random hex token correlating a phase execution with the
/// records it produces
fn new_run_id() -> String {
    let mut rng = rand::thread_rng();
    format!("{:016x}{:016x}", rng.r#gen::<u64>(), rng.r#gen::<u64>())
}
