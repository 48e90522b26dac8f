//! 2024 day 1: pair up two location ID lists

use anyhow::{anyhow, Context};
use aoc_harness::{InputFormat, RunContext, SolveError, Solver, SolverPlugin};
use std::collections::HashMap;

inventory::submit! {
    SolverPlugin::new(2024, 1, || Ok(Box::new(Day1::default())), &["2024", "lists"])
}

/// Two columns of location IDs, parsed once per part input
#[derive(Debug, Default, Clone)]
struct Columns {
    left: Vec<i64>,
    right: Vec<i64>,
}

#[derive(Default)]
pub struct Day1 {
    a: Columns,
    b: Columns,
}

impl Solver for Day1 {
    fn input_format(&self) -> InputFormat {
        InputFormat::Lines
    }

    fn preprocess(&mut self, ctx: &mut RunContext<'_>) -> Result<(), SolveError> {
        self.a = parse_columns(ctx.input_a().as_lines().unwrap_or_default())
            .map_err(SolveError::failed)?;
        self.b = parse_columns(ctx.input_b().as_lines().unwrap_or_default())
            .map_err(SolveError::failed)?;
        ctx.log(self.a.left.len(), "pair count");
        Ok(())
    }

    fn solve_a(&mut self, ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
        let mut left = self.a.left.clone();
        let mut right = self.a.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        let distance: i64 = left
            .iter()
            .zip(&right)
            .map(|(l, r)| (l - r).abs())
            .sum();
        ctx.log(distance, "total distance");
        Ok(distance.to_string())
    }

    fn solve_b(&mut self, _ctx: &mut RunContext<'_>) -> Result<String, SolveError> {
        let mut occurrences: HashMap<i64, i64> = HashMap::new();
        for &value in &self.b.right {
            *occurrences.entry(value).or_insert(0) += 1;
        }

        let similarity: i64 = self
            .b
            .left
            .iter()
            .map(|value| value * occurrences.get(value).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

fn parse_columns(lines: &[String]) -> anyhow::Result<Columns> {
    let mut columns = Columns::default();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let left = tokens
            .next()
            .ok_or_else(|| anyhow!("line {}: missing left ID", idx + 1))?;
        let right = tokens
            .next()
            .ok_or_else(|| anyhow!("line {}: missing right ID", idx + 1))?;
        columns
            .left
            .push(left.parse().with_context(|| format!("line {}", idx + 1))?);
        columns
            .right
            .push(right.parse().with_context(|| format!("line {}", idx + 1))?);
    }
    Ok(columns)
}
