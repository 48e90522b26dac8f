//! Advent of Code puzzle solutions
//!
//! Each day lives in its own module and registers itself with the harness
//! registry through an `inventory::submit!` plugin entry; linking this
//! crate is enough to make its solvers resolvable by year/day.

#[cfg(feature = "my-solutions")]
pub mod year_2024;
