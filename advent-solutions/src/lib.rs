//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! One module per puzzle day. Each solution uses the `AutoRegisterSolver`
//! derive macro for automatic plugin registration with the solver framework;
//! the days share nothing beyond the generic parsing helpers in [`util`].

pub mod days;
pub mod util;
