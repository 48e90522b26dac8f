//! Solver registry: explicit mapping from year/day to solver factories
//!
//! Registration happens once at process start by collecting every
//! [`SolverPlugin`] submitted via `inventory::submit!`. Lookup of an
//! unregistered day is a valid "not yet implemented" state, not an error;
//! only a registered factory that fails to produce a solver is.

use crate::error::RegistrationError;
use crate::solver::Solver;
use std::collections::HashMap;

/// Factory function producing a fresh solver instance.
///
/// The error side is for solvers that are registered but broken; factories
/// for working solvers are infallible in practice.
pub type SolverFactory =
    fn() -> Result<Box<dyn Solver>, Box<dyn std::error::Error + Send + Sync>>;

/// Plugin entry collected at link time
///
/// # Example
///
/// ```no_run
/// use aoc_harness::{RunContext, SolveError, Solver, SolverPlugin};
///
/// #[derive(Default)]
/// struct Day1;
///
/// impl Solver for Day1 {
///     fn solve_a(&mut self, _: &mut RunContext<'_>) -> Result<String, SolveError> {
///         Ok("0".to_string())
///     }
///     fn solve_b(&mut self, _: &mut RunContext<'_>) -> Result<String, SolveError> {
///         Ok("0".to_string())
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin::new(2024, 1, || Ok(Box::new(Day1)), &["2024"])
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub factory: SolverFactory,
    /// Free-form tags for selective registration (e.g. a year or theme)
    pub tags: &'static [&'static str],
}

impl SolverPlugin {
    pub const fn new(
        year: u16,
        day: u8,
        factory: SolverFactory,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            year,
            day,
            factory,
            tags,
        }
    }
}

inventory::collect!(SolverPlugin);

/// Builder for constructing an immutable [`SolverRegistry`]
///
/// Detects duplicate year/day registrations while building.
pub struct RegistryBuilder {
    solvers: HashMap<(u16, u8), SolverFactory>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: HashMap::new(),
        }
    }

    /// Register a factory for a specific year and day
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.solvers.insert((year, day), factory);
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register only the plugins matching the filter predicate
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.year, plugin.day, plugin.factory)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping `(year, day)` to solver factories
pub struct SolverRegistry {
    solvers: HashMap<(u16, u8), SolverFactory>,
}

impl SolverRegistry {
    /// Whether an implementation is registered for this year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Create a fresh solver instance for a year/day.
    ///
    /// `Ok(None)` means no implementation is registered: the caller should
    /// branch on it (e.g. disable the run action) rather than fail. An
    /// `Err` means a registered factory broke while loading.
    pub fn create(
        &self,
        year: u16,
        day: u8,
    ) -> Result<Option<Box<dyn Solver>>, RegistrationError> {
        match self.solvers.get(&(year, day)) {
            None => Ok(None),
            Some(factory) => factory()
                .map(Some)
                .map_err(|e| RegistrationError::LoadFailed(year, day, e)),
        }
    }

    /// All registered `(year, day)` pairs, sorted ascending
    pub fn registered_days(&self) -> Vec<(u16, u8)> {
        let mut days: Vec<(u16, u8)> = self.solvers.keys().copied().collect();
        days.sort_unstable();
        days
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::harness::RunContext;

    #[derive(Default)]
    struct StubSolver;

    impl Solver for StubSolver {
        fn solve_a(&mut self, _: &mut RunContext<'_>) -> Result<String, SolveError> {
            Ok("a".to_string())
        }
        fn solve_b(&mut self, _: &mut RunContext<'_>) -> Result<String, SolveError> {
            Ok("b".to_string())
        }
    }

    fn stub_factory() -> Result<Box<dyn Solver>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Box::new(StubSolver))
    }

    fn broken_factory() -> Result<Box<dyn Solver>, Box<dyn std::error::Error + Send + Sync>> {
        Err("corrupt solver state".into())
    }

    #[test]
    fn test_lookup_absent_is_none_not_error() {
        let registry = RegistryBuilder::new().build();
        assert!(!registry.contains(2024, 1));
        assert!(registry.create(2024, 1).unwrap().is_none());
    }

    #[test]
    fn test_register_and_create() {
        let registry = RegistryBuilder::new()
            .register(2024, 1, stub_factory)
            .unwrap()
            .build();
        assert!(registry.contains(2024, 1));
        let solver = registry.create(2024, 1).unwrap().unwrap();
        assert_eq!(solver.input_format(), crate::input::InputFormat::Unspecified);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register(2024, 1, stub_factory)
            .unwrap()
            .register(2024, 1, stub_factory);
        assert!(matches!(result, Err(RegistrationError::Duplicate(2024, 1))));
    }

    #[test]
    fn test_broken_factory_is_load_failure() {
        let registry = RegistryBuilder::new()
            .register(2024, 2, broken_factory)
            .unwrap()
            .build();
        let err = registry.create(2024, 2).unwrap_err();
        assert!(matches!(err, RegistrationError::LoadFailed(2024, 2, _)));
    }

    #[test]
    fn test_registered_days_sorted() {
        let registry = RegistryBuilder::new()
            .register(2024, 5, stub_factory)
            .unwrap()
            .register(2023, 9, stub_factory)
            .unwrap()
            .register(2024, 1, stub_factory)
            .unwrap()
            .build();
        assert_eq!(
            registry.registered_days(),
            vec![(2023, 9), (2024, 1), (2024, 5)]
        );
    }
}
