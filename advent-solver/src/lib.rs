//! Advent of Code Solver Library
//!
//! A flexible and type-safe framework for solving Advent of Code puzzles.
//! Each puzzle day is implemented as a solver with custom input parsing and
//! can produce results for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`PuzzleParser`],
//!   [`PartSolver`], [`Solver`])
//! - Type-safe parsing and result handling with a distinct error taxonomy
//! - Timed solver instances behind the type-erased [`DynSolver`] interface
//! - A plugin registry so solvers register themselves at link time
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError};
//! use advent_solver::AdventSolver;
//!
//! #[derive(AdventSolver)]
//! #[advent_solver(parts = 1)]
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(1, 1, |input: &str| {
//!         Ok(Box::new(advent_solver::SolverInstance::<MyDay1>::new(1, input)?))
//!     })
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver traits
//!
//! [`PuzzleParser`] defines the shared data type (a GAT, so it may borrow
//! from the input) and how to produce it. [`PartSolver<N>`] implements one
//! puzzle part each. [`Solver`] carries the part count and runtime dispatch,
//! and is usually generated by `#[derive(AdventSolver)]`.
//!
//! ## Plugin system
//!
//! Use `#[derive(AutoRegisterSolver)]` with `#[puzzle(day = N)]` to submit a
//! solver to the inventory-backed plugin table; a [`RegistryBuilder`] then
//! collects every submitted plugin with `register_all_plugins()` or a tag
//! filter with `register_solver_plugins(..)`.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverFactoryStorage,
    SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
