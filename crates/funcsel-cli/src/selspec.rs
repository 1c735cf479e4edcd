//! Parsing of `--at` selection arguments.

use std::str::FromStr;

use text_size::TextSize;
use thiserror::Error;

use funcsel_ide::Region;

/// Errors for malformed `--at` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionSpecError {
    /// The spec or one of its endpoints was not a number.
    #[error("invalid offset '{0}' (expected a byte offset like 120)")]
    InvalidOffset(String),
    /// The range was given back to front.
    #[error("selection end {end} is before start {start}")]
    EndBeforeStart {
        /// Start offset as written.
        start: u32,
        /// End offset as written.
        end: u32,
    },
}

/// A parsed `--at` value: either `OFFSET` or `START..END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpec(pub Region);

impl FromStr for SelectionSpec {
    type Err = SelectionSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((start, end)) = s.split_once("..") {
            let start = parse_offset(start)?;
            let end = parse_offset(end)?;
            if end < start {
                return Err(SelectionSpecError::EndBeforeStart { start, end });
            }
            Ok(Self(Region::new(
                TextSize::from(start),
                TextSize::from(end),
            )))
        } else {
            let offset = parse_offset(s)?;
            Ok(Self(Region::cursor(TextSize::from(offset))))
        }
    }
}

fn parse_offset(s: &str) -> Result<u32, SelectionSpecError> {
    s.trim()
        .parse()
        .map_err(|_| SelectionSpecError::InvalidOffset(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor() {
        let spec: SelectionSpec = "120".parse().unwrap();
        assert_eq!(spec.0, Region::cursor(120.into()));
    }

    #[test]
    fn test_parse_range() {
        let spec: SelectionSpec = "40..55".parse().unwrap();
        assert_eq!(spec.0, Region::new(40.into(), 55.into()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "abc".parse::<SelectionSpec>().unwrap_err();
        assert_eq!(err, SelectionSpecError::InvalidOffset("abc".to_string()));
    }

    #[test]
    fn test_parse_rejects_backwards_range() {
        let err = "55..40".parse::<SelectionSpec>().unwrap_err();
        assert_eq!(
            err,
            SelectionSpecError::EndBeforeStart { start: 55, end: 40 }
        );
    }
}
