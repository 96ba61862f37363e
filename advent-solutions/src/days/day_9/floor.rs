//! Row-coverage index for a closed rectilinear tile boundary
//!
//! The boundary is a cyclic sequence of vertices; every horizontal edge
//! deposits one covered column range on its row. A single sweep over the
//! rows carries two accumulators at once:
//!
//! - the *finalized* coverage of the current row (union of what was open
//!   above and what the row deposits), and
//! - the *open state* for the rows below (the deposits toggle ranges open
//!   and closed, an interval XOR over shared wall columns).
//!
//! Both accumulators consume one merged, begin-ordered stream of ranges and
//! classify each incoming range against the last accumulated one through the
//! closed set of [`Relation`]s, so every geometric case is spelled out.

use itertools::Itertools;
use thiserror::Error;

pub type Coord = u64;

/// A boundary vertex, ordered by column then row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub col: Coord,
    pub row: Coord,
}

impl Point {
    pub fn new(col: Coord, row: Coord) -> Self {
        Self { col, row }
    }
}

/// A closed range of columns, `begin <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColRange {
    pub begin: Coord,
    pub end: Coord,
}

impl ColRange {
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            begin: a.min(b),
            end: a.max(b),
        }
    }

    /// True when every column of `other` lies inside `self`.
    pub fn contains(self, other: ColRange) -> bool {
        self.begin <= other.begin && self.end >= other.end
    }

    /// Union of touching or overlapping ranges; `None` when they stay
    /// disjoint. Requires `self.begin <= other.begin`.
    pub fn merge(self, other: ColRange) -> Option<ColRange> {
        (self.end >= other.begin).then(|| ColRange {
            begin: self.begin,
            end: self.end.max(other.end),
        })
    }
}

/// How a range `b` relates to a range `a` with `a <= b` in `(begin, end)`
/// order. `Crossing` (partial overlap with four distinct endpoints) cannot
/// arise from a boundary that does not intersect itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Equal,
    SharedBegin,
    SharedEnd,
    Nested,
    Touching,
    Disjoint,
    Crossing,
}

impl Relation {
    fn of(a: ColRange, b: ColRange) -> Relation {
        if a == b {
            Relation::Equal
        } else if a.begin == b.begin {
            Relation::SharedBegin
        } else if a.end == b.begin {
            Relation::Touching
        } else if a.end < b.begin {
            Relation::Disjoint
        } else if a.end == b.end {
            Relation::SharedEnd
        } else if a.end > b.end {
            Relation::Nested
        } else {
            Relation::Crossing
        }
    }
}

#[derive(Debug, Error)]
pub enum FloorError {
    #[error("boundary needs at least 4 points, got {0}")]
    TooFewPoints(usize),
    #[error("boundary segment from {0:?} to {1:?} is neither horizontal nor vertical")]
    DiagonalSegment(Point, Point),
    #[error("three consecutive boundary points around {0:?} are colinear")]
    ColinearRun(Point),
    #[error("boundary crosses itself near column {0}")]
    SelfIntersecting(Coord),
    #[error("boundary does not close")]
    Unclosed,
}

/// An axis-aligned rectangle, normalized from two corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row_min: Coord,
    pub row_max: Coord,
    pub col_min: Coord,
    pub col_max: Coord,
}

impl Rect {
    pub fn bounding(a: Point, b: Point) -> Self {
        Self {
            row_min: a.row.min(b.row),
            row_max: a.row.max(b.row),
            col_min: a.col.min(b.col),
            col_max: a.col.max(b.col),
        }
    }

    /// Number of cells covered, corners inclusive.
    pub fn area(&self) -> u64 {
        (self.row_max - self.row_min + 1) * (self.col_max - self.col_min + 1)
    }
}

/// Per-row coverage of the boundary's interior, built once, queried read-only.
#[derive(Debug)]
pub struct Floor {
    rows: Vec<Vec<ColRange>>,
}

impl Floor {
    /// Build the coverage index from the cyclic boundary vertex list.
    pub fn build(points: &[Point]) -> Result<Self, FloorError> {
        if points.len() < 4 {
            return Err(FloorError::TooFewPoints(points.len()));
        }
        check_no_colinear_run(points)?;

        let mut deposits: Vec<Vec<ColRange>> = Vec::new();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            if a.col == b.col {
                // Vertical walls bound regions, they deposit no coverage
                continue;
            }
            if a.row != b.row {
                return Err(FloorError::DiagonalSegment(a, b));
            }
            let row = a.row as usize;
            if row >= deposits.len() {
                deposits.resize_with(row + 1, Vec::new);
            }
            deposits[row].push(ColRange::new(a.col, b.col));
        }
        for row in &mut deposits {
            row.sort_unstable();
        }

        let mut open: Vec<ColRange> = Vec::new();
        let mut rows = Vec::with_capacity(deposits.len());
        for deposit in deposits {
            let mut covered: Vec<ColRange> = Vec::new();
            let mut next_open: Vec<ColRange> = Vec::new();
            for incoming in open.iter().copied().merge(deposit) {
                push_covered(&mut covered, incoming)?;
                push_open(&mut next_open, incoming)?;
            }
            open = next_open;
            rows.push(covered);
        }

        if !open.is_empty() {
            return Err(FloorError::Unclosed);
        }

        Ok(Self { rows })
    }

    /// True when every cell of the rectangle lies in covered area.
    ///
    /// A conjunction over the rectangle's rows; rows outside the built range
    /// hold no coverage at all.
    pub fn is_tiled(&self, rect: Rect) -> bool {
        if rect.row_max as usize >= self.rows.len() {
            return false;
        }
        let span = ColRange {
            begin: rect.col_min,
            end: rect.col_max,
        };
        self.rows[rect.row_min as usize..=rect.row_max as usize]
            .iter()
            .all(|row| row.iter().any(|range| range.contains(span)))
    }

    /// Total number of covered cells across all rows.
    pub fn covered_area(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .map(|range| range.end - range.begin + 1)
            .sum()
    }
}

fn check_no_colinear_run(points: &[Point]) -> Result<(), FloorError> {
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let rows_match = a.row == b.row && b.row == c.row;
        let cols_match = a.col == b.col && b.col == c.col;
        if rows_match || cols_match {
            return Err(FloorError::ColinearRun(b));
        }
    }
    Ok(())
}

/// Union accumulator: what the current row actually covers.
///
/// Everything short of a crossing reduces to "merge when the runs share a
/// wall or overlap, keep both otherwise"; an identical range is the same
/// wall seen twice and still covers its row.
fn push_covered(acc: &mut Vec<ColRange>, b: ColRange) -> Result<(), FloorError> {
    let Some(a) = acc.last_mut() else {
        acc.push(b);
        return Ok(());
    };
    if a.begin > b.begin {
        return Err(FloorError::SelfIntersecting(b.begin));
    }

    match Relation::of(*a, b) {
        Relation::Crossing => return Err(FloorError::SelfIntersecting(b.begin)),
        _ => match a.merge(b) {
            Some(merged) => *a = merged,
            None => acc.push(b),
        },
    }
    Ok(())
}

/// XOR accumulator: what stays open for the rows below.
fn push_open(acc: &mut Vec<ColRange>, b: ColRange) -> Result<(), FloorError> {
    let Some(a) = acc.last_mut() else {
        acc.push(b);
        return Ok(());
    };
    if a.begin > b.begin {
        return Err(FloorError::SelfIntersecting(b.begin));
    }

    match Relation::of(*a, b) {
        // A second identical wall closes the run
        Relation::Equal => {
            acc.pop();
        }
        // One shared endpoint: the uncovered remainder stays open
        Relation::SharedBegin => {
            *a = ColRange {
                begin: a.end.min(b.end),
                end: a.end.max(b.end),
            };
        }
        Relation::SharedEnd => a.end = b.begin,
        Relation::Touching => a.end = b.end,
        Relation::Disjoint => acc.push(b),
        // A deposit strictly inside an open run splits it in two
        Relation::Nested => {
            let tail = ColRange {
                begin: b.end,
                end: a.end,
            };
            a.end = b.begin;
            acc.push(tail);
        }
        Relation::Crossing => return Err(FloorError::SelfIntersecting(b.begin)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(coords: &[(Coord, Coord)]) -> Vec<Point> {
        coords.iter().map(|&(col, row)| Point::new(col, row)).collect()
    }

    fn square() -> Vec<Point> {
        points(&[(0, 0), (4, 0), (4, 4), (0, 4)])
    }

    fn l_shape() -> Vec<Point> {
        points(&[(0, 0), (4, 0), (4, 2), (2, 2), (2, 4), (0, 4)])
    }

    /// Two arms around a notch that opens downward
    fn u_shape() -> Vec<Point> {
        points(&[
            (0, 0),
            (6, 0),
            (6, 4),
            (4, 4),
            (4, 2),
            (2, 2),
            (2, 4),
            (0, 4),
        ])
    }

    /// Interior cells by Pick's theorem: shoelace area plus half the
    /// boundary lattice points plus one. The covered cells include the
    /// boundary tiles, which is exactly this count.
    fn pick_tile_count(boundary: &[Point]) -> u64 {
        let n = boundary.len();
        let mut twice_area: i128 = 0;
        let mut perimeter: u64 = 0;
        for i in 0..n {
            let p = boundary[i];
            let q = boundary[(i + 1) % n];
            twice_area += p.col as i128 * q.row as i128 - q.col as i128 * p.row as i128;
            perimeter += p.col.abs_diff(q.col) + p.row.abs_diff(q.row);
        }
        (twice_area.unsigned_abs() / 2) as u64 + perimeter / 2 + 1
    }

    #[test]
    fn test_interval_containment() {
        let outer = ColRange::new(2, 8);
        assert!(outer.contains(ColRange::new(2, 8)));
        assert!(outer.contains(ColRange::new(4, 4)));
        assert!(!outer.contains(ColRange::new(1, 5)));
        assert!(!outer.contains(ColRange::new(5, 9)));
    }

    #[test]
    fn test_interval_merge() {
        let merged = ColRange::new(0, 4).merge(ColRange::new(4, 8));
        assert_eq!(merged, Some(ColRange::new(0, 8)));
        let merged = ColRange::new(0, 4).merge(ColRange::new(2, 3));
        assert_eq!(merged, Some(ColRange::new(0, 4)));
        assert_eq!(ColRange::new(0, 4).merge(ColRange::new(5, 8)), None);
    }

    #[test]
    fn test_square_is_fully_tiled() {
        let floor = Floor::build(&square()).unwrap();
        let whole = Rect::bounding(Point::new(0, 0), Point::new(4, 4));
        assert!(floor.is_tiled(whole));
        assert_eq!(whole.area(), 25);
        assert_eq!(floor.covered_area(), 25);
    }

    #[test]
    fn test_rectangle_beyond_boundary_is_not_tiled() {
        let floor = Floor::build(&square()).unwrap();
        assert!(!floor.is_tiled(Rect::bounding(Point::new(0, 0), Point::new(5, 4))));
        assert!(!floor.is_tiled(Rect::bounding(Point::new(0, 0), Point::new(4, 5))));
        assert!(!floor.is_tiled(Rect::bounding(Point::new(9, 9), Point::new(9, 9))));
    }

    #[test]
    fn test_unit_cell_queries() {
        let floor = Floor::build(&l_shape()).unwrap();
        let unit = |col, row| Rect::bounding(Point::new(col, row), Point::new(col, row));
        assert!(floor.is_tiled(unit(0, 0)));
        assert!(floor.is_tiled(unit(4, 2)));
        assert!(floor.is_tiled(unit(1, 3)));
        // The notch outside the L
        assert!(!floor.is_tiled(unit(3, 3)));
        assert!(!floor.is_tiled(unit(4, 4)));
    }

    #[test]
    fn test_l_shape_rejects_column_through_notch() {
        let floor = Floor::build(&l_shape()).unwrap();
        // Column 3, rows 0..3: row 3 is outside the L
        let column = Rect::bounding(Point::new(3, 0), Point::new(3, 3));
        assert!(!floor.is_tiled(column));
        // But each arm is fine
        assert!(floor.is_tiled(Rect::bounding(Point::new(0, 0), Point::new(4, 2))));
        assert!(floor.is_tiled(Rect::bounding(Point::new(0, 0), Point::new(2, 4))));
    }

    #[test]
    fn test_u_shape_splits_open_state() {
        let floor = Floor::build(&u_shape()).unwrap();
        // The notch row keeps its walls covered
        assert!(floor.is_tiled(Rect::bounding(Point::new(0, 2), Point::new(6, 2))));
        // Below the notch the middle is outside
        assert!(!floor.is_tiled(Rect::bounding(Point::new(3, 0), Point::new(3, 3))));
        assert!(floor.is_tiled(Rect::bounding(Point::new(0, 0), Point::new(1, 4))));
        assert!(floor.is_tiled(Rect::bounding(Point::new(5, 0), Point::new(6, 4))));
        assert_eq!(floor.covered_area(), pick_tile_count(&u_shape()));
    }

    #[test]
    fn test_staircase_fuses_touching_runs() {
        let stairs = points(&[(0, 0), (2, 0), (2, 2), (4, 2), (4, 4), (0, 4)]);
        let floor = Floor::build(&stairs).unwrap();
        // Row 2 covers both steps as one run
        assert!(floor.is_tiled(Rect::bounding(Point::new(0, 2), Point::new(4, 2))));
        assert!(!floor.is_tiled(Rect::bounding(Point::new(3, 0), Point::new(3, 2))));
        assert_eq!(floor.covered_area(), pick_tile_count(&stairs));
    }

    #[test]
    fn test_coverage_matches_pick_formula() {
        for boundary in [square(), l_shape(), u_shape()] {
            let floor = Floor::build(&boundary).unwrap();
            assert_eq!(floor.covered_area(), pick_tile_count(&boundary));
        }
    }

    #[test]
    fn test_normalized_rows_are_merge_stable() {
        // Re-merging an already normalized row must change nothing
        let floor = Floor::build(&u_shape()).unwrap();
        for row in &floor.rows {
            let mut again: Vec<ColRange> = Vec::new();
            for &range in row {
                push_covered(&mut again, range).unwrap();
            }
            assert_eq!(&again, row);
        }
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert!(matches!(
            Floor::build(&points(&[(0, 0), (4, 4)])),
            Err(FloorError::TooFewPoints(2))
        ));
        assert!(matches!(
            Floor::build(&points(&[(0, 0), (4, 0), (4, 4)])),
            Err(FloorError::TooFewPoints(3))
        ));
    }

    #[test]
    fn test_colinear_run_rejected() {
        let redundant = points(&[(0, 0), (2, 0), (4, 0), (4, 4), (0, 4)]);
        assert!(matches!(
            Floor::build(&redundant),
            Err(FloorError::ColinearRun(_))
        ));
        // The wrap-around triple counts too
        let wrapped = points(&[(2, 0), (4, 0), (4, 4), (0, 4), (0, 0)]);
        assert!(matches!(
            Floor::build(&wrapped),
            Err(FloorError::ColinearRun(_))
        ));
    }

    #[test]
    fn test_diagonal_segment_rejected() {
        let skewed = points(&[(0, 0), (4, 1), (4, 4), (0, 4)]);
        assert!(matches!(
            Floor::build(&skewed),
            Err(FloorError::DiagonalSegment(_, _))
        ));
    }

    #[test]
    fn test_self_intersection_rejected() {
        // The wall at column 4 runs straight through the row-2 segment
        let crossing = points(&[
            (0, 0),
            (4, 0),
            (4, 4),
            (2, 4),
            (2, 2),
            (6, 2),
            (6, 6),
            (0, 6),
        ]);
        assert!(matches!(
            Floor::build(&crossing),
            Err(FloorError::SelfIntersecting(_))
        ));
    }

    /// Histogram outline over `bars` of (width, height): always a simple
    /// rectilinear polygon once equal-height neighbors are merged.
    fn histogram_boundary(bars: &[(Coord, Coord)]) -> Vec<Point> {
        let mut merged: Vec<(Coord, Coord)> = Vec::new();
        for &(width, height) in bars {
            match merged.last_mut() {
                Some((w, h)) if *h == height => *w += width,
                _ => merged.push((width, height)),
            }
        }

        let mut boundary = vec![Point::new(0, 0)];
        let mut col = 0;
        for &(width, height) in &merged {
            boundary.push(Point::new(col, height));
            col += width;
            boundary.push(Point::new(col, height));
        }
        boundary.push(Point::new(col, 0));
        boundary
    }

    proptest! {
        #[test]
        fn prop_coverage_total_matches_pick_formula(
            bars in proptest::collection::vec((1u64..6, 1u64..8), 1..6)
        ) {
            let boundary = histogram_boundary(&bars);
            let floor = Floor::build(&boundary).unwrap();
            prop_assert_eq!(floor.covered_area(), pick_tile_count(&boundary));
        }

        #[test]
        fn prop_unit_cells_of_square_match_interior(
            col in 0u64..8, row in 0u64..8
        ) {
            let floor = Floor::build(&square()).unwrap();
            let cell = Rect::bounding(Point::new(col, row), Point::new(col, row));
            prop_assert_eq!(floor.is_tiled(cell), col <= 4 && row <= 4);
        }
    }
}
