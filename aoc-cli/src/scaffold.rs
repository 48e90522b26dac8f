//! Solution source file scaffolding

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE: &str = r#"use aoc_harness::{InputFormat, RunContext, SolveError, Solver, SolverPlugin};

inventory::submit! {
    SolverPlugin::new(__YEAR__, __DAY__, || Ok(Box::new(Day__DAY__)), &["__YEAR__"])
}

#[derive(Default)]
pub struct Day__DAY__;

impl Solver for Day__DAY__ {
    fn input_format(&self) -> InputFormat {
        InputFormat::Lines
    }

    fn solve_a(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
        let _lines = ctx.input_a().as_lines().ok_or(SolveError::NotImplemented)?;
        Err(SolveError::NotImplemented)
    }

    fn solve_b(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
        let _lines = ctx.input_b().as_lines().ok_or(SolveError::NotImplemented)?;
        Err(SolveError::NotImplemented)
    }
}
"#;

/// Write a fresh solution file for a year/day under the solutions source
/// tree, refusing to clobber an existing one.
///
/// Returns the path written. The year module and its `mod day_N;` line
/// still have to be wired up by hand.
pub fn new_solution(dir: &Path, year: u16, day: u8) -> Result<PathBuf, CliError> {
    let year_dir = dir.join(format!("year_{}", year));
    let path = year_dir.join(format!("day_{}.rs", day));

    if path.exists() {
        return Err(CliError::Config(format!(
            "{} already exists; refusing to overwrite",
            path.display()
        )));
    }

    fs::create_dir_all(&year_dir)?;
    fs::write(
        &path,
        TEMPLATE
            .replace("__YEAR__", &year.to_string())
            .replace("__DAY__", &day.to_string()),
    )?;

    Ok(path)
}
