//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing input data
///
/// Malformed input is a precondition violation: it is detected as early as
/// possible during parsing or normalization and never recovered from.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input was well-formed but admits no answer.
    ///
    /// Distinct from a parse failure: the puzzle ran to completion and
    /// proved the question unsatisfiable for this input.
    #[error("No solution: {0}")]
    NoSolution(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry-level solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Solver not found for the given day
    #[error("Solver not found for day {0}")]
    NotFound(u8),
    /// The day is outside the supported 1..=25 range
    #[error("Day {0} is out of range")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a second solver for the same day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// The day is outside the supported 1..=25 range
    #[error("Cannot register solver for day {0}: out of range")]
    InvalidDay(u8),
}
