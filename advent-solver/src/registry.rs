//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};

/// Days per event (1-25)
pub const DAYS: usize = 25;

/// Calculate flat index from a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day > DAYS as u8 {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct the day from a flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Immutable storage for solver factories with O(1) access
///
/// Uses a flat Vec indexed by `day - 1`.
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: from_index(i),
                parts: e.parts,
            })
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        calc_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                day,
                parts: e.parts,
            })
    }

    /// Check if a factory exists for a day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Builder for constructing a [`SolverRegistry`]
///
/// The builder pattern allows method chaining and ensures the registry is
/// immutable after construction, with duplicate detection at registration
/// time.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("registered", &self.entries.iter().filter(|e| e.is_some()).count())
            .finish()
    }
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with an explicit parts count
    ///
    /// Returns an error if the day is out of bounds or already registered.
    pub fn register<F>(mut self, day: u8, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.day)?;
        }
        Ok(self)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter function returns `true`,
    /// allowing selective registration based on tags or day.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps days to factory functions that create solver instances. Once built,
/// it cannot be modified.
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Create a solver instance by invoking the factory for a specific day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Day invalid, solver not found, or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// A type-erased interface without associated types, so different solver
/// types can live behind one `&'static dyn` reference in the plugin table.
///
/// Any type implementing [`Solver`](crate::Solver) gets a `RegisterableSolver`
/// implementation through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

/// Blanket implementation of RegisterableSolver for all Solver types
impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(day, input)?;
            Ok(Box::new(instance))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted via `inventory::submit!`, usually through the
/// `#[derive(AutoRegisterSolver)]` macro.
///
/// # Example
///
/// ```no_run
/// use advent_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "intervals")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
