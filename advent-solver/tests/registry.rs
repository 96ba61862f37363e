//! Registry construction and lookup behavior

use advent_solver::{
    ParseError, PuzzleParser, RegisterableSolver, RegistrationError, RegistryBuilder, SolveError,
    Solver, SolverError,
};

struct CountingSolver;

impl PuzzleParser for CountingSolver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {line:?}")))
            })
            .collect()
    }
}

impl Solver for CountingSolver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().sum::<u64>().to_string()),
            2 => Ok(shared.len().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Borrows the input instead of owning parsed data
struct BorrowingSolver;

impl PuzzleParser for BorrowingSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl Solver for BorrowingSolver {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.first().copied().unwrap_or("").to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn build_registry() -> advent_solver::SolverRegistry {
    let builder = CountingSolver
        .register_with(RegistryBuilder::new(), 3)
        .unwrap();
    let builder = BorrowingSolver.register_with(builder, 7).unwrap();
    builder.build()
}

#[test]
fn test_create_and_solve() {
    let registry = build_registry();

    let mut solver = registry.create_solver(3, "1\n2\n3").unwrap();
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "3");
}

#[test]
fn test_borrowed_shared_data() {
    let registry = build_registry();

    let input = String::from("first line\nsecond line");
    let mut solver = registry.create_solver(7, &input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "first line");
}

#[test]
fn test_not_found() {
    let registry = build_registry();

    assert!(matches!(
        registry.create_solver(4, "").err(),
        Some(SolverError::NotFound(4))
    ));
}

#[test]
fn test_invalid_day() {
    let registry = build_registry();

    assert!(matches!(
        registry.create_solver(0, "").err(),
        Some(SolverError::InvalidDay(0))
    ));
    assert!(matches!(
        registry.create_solver(26, "").err(),
        Some(SolverError::InvalidDay(26))
    ));
}

#[test]
fn test_parse_error_propagates() {
    let registry = build_registry();

    assert!(matches!(
        registry.create_solver(3, "one\ntwo").err(),
        Some(SolverError::Parse(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let builder = CountingSolver
        .register_with(RegistryBuilder::new(), 3)
        .unwrap();
    let err = BorrowingSolver.register_with(builder, 3).unwrap_err();
    assert!(matches!(err, RegistrationError::DuplicateSolver(3)));
}

#[test]
fn test_out_of_range_registration_rejected() {
    let err = CountingSolver
        .register_with(RegistryBuilder::new(), 26)
        .unwrap_err();
    assert!(matches!(err, RegistrationError::InvalidDay(26)));
}

#[test]
fn test_storage_metadata() {
    let registry = build_registry();
    let storage = registry.storage();

    assert_eq!(storage.len(), 2);
    assert!(!storage.is_empty());
    assert!(storage.contains(3));
    assert!(!storage.contains(4));

    let info: Vec<_> = storage.iter_info().collect();
    assert_eq!(info.len(), 2);
    assert_eq!(info[0].day, 3);
    assert_eq!(info[0].parts, 2);
    assert_eq!(info[1].day, 7);
    assert_eq!(info[1].parts, 1);

    assert_eq!(storage.get_info(7).unwrap().parts, 1);
    assert!(storage.get_info(0).is_none());
}

#[test]
fn test_solve_out_of_range_part() {
    let registry = build_registry();

    let mut solver = registry.create_solver(7, "x").unwrap();
    assert!(matches!(
        solver.solve(2).err(),
        Some(SolveError::PartOutOfRange(2))
    ));
}
