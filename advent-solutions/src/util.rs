//! Generic parsing helpers shared by the daily solvers

use advent_solver::ParseError;
use anyhow::{Context, Result, anyhow, ensure};
use std::str::FromStr;

/// Split `s` on the single occurrence of `delim`, requiring non-empty halves.
pub fn split_in_two(s: &str, delim: char) -> Result<(&str, &str)> {
    let (front, back) = s
        .split_once(delim)
        .with_context(|| format!("expected {delim:?} in {s:?}"))?;
    ensure!(
        !front.is_empty() && !back.is_empty(),
        "empty field around {delim:?} in {s:?}"
    );
    ensure!(
        !back.contains(delim),
        "more than one {delim:?} in {s:?}"
    );
    Ok((front, back))
}

/// Parse an integer, keeping the offending text in the error.
pub fn parse_int<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse().with_context(|| format!("invalid integer {s:?}"))
}

/// Collect exactly `N` items from an iterator of fallible values.
///
/// Fails on short input and on leftover items, so field counts are checked
/// in the same step that builds the value.
pub fn parse_array<T, const N: usize>(
    mut items: impl Iterator<Item = Result<T>>,
) -> Result<[T; N]> {
    let mut collected = Vec::with_capacity(N);
    for _ in 0..N {
        collected.push(items.next().context("too few fields")??);
    }
    ensure!(items.next().is_none(), "too many fields");
    collected
        .try_into()
        .map_err(|_| anyhow!("field count mismatch"))
}

/// Map an internal error chain onto the framework's invalid-input kind.
pub fn invalid_input(e: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_in_two() {
        assert_eq!(split_in_two("12-34", '-').unwrap(), ("12", "34"));
        assert!(split_in_two("1234", '-').is_err());
        assert!(split_in_two("-34", '-').is_err());
        assert!(split_in_two("12-", '-').is_err());
        assert!(split_in_two("1-2-3", '-').is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<u64>("42").unwrap(), 42);
        assert!(parse_int::<u64>("4x2").is_err());
        assert!(parse_int::<u64>("").is_err());
    }

    #[test]
    fn test_parse_array() {
        let fields = "1,2,3".split(',').map(parse_int::<u64>);
        assert_eq!(parse_array::<u64, 3>(fields).unwrap(), [1, 2, 3]);

        let short = "1,2".split(',').map(parse_int::<u64>);
        assert!(parse_array::<u64, 3>(short).is_err());

        let long = "1,2,3,4".split(',').map(parse_int::<u64>);
        assert!(parse_array::<u64, 3>(long).is_err());
    }
}
