//! Domain-violation errors raised while building a state space.
//!
//! Evaluation itself is infallible: every precondition is checked once in a
//! problem's constructor, so a constructed instance always yields a value.

use thiserror::Error;

/// Result alias used by every problem constructor.
pub type DpResult<T> = Result<T, DpError>;

/// Inputs rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DpError {
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("{what} = {got} exceeds the supported maximum of {max}")]
    TooLarge {
        what: &'static str,
        got: usize,
        max: usize,
    },

    #[error("{what} can overflow a {bits}-bit result")]
    Overflow { what: &'static str, bits: u32 },

    #[error("matrix {index} has {rows} rows but the previous matrix has {prev_cols} columns")]
    IncompatibleDimensions {
        index: usize,
        rows: usize,
        prev_cols: usize,
    },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("{what} must be at least 1")]
    ZeroDimension { what: &'static str },

    #[error("start square ({row}, {col}) is off a {height}x{width} board")]
    StartOffBoard {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("invalid coin set: {0}")]
    InvalidCoins(&'static str),

    #[error("no price for length {length}; {available} prices given")]
    MissingPrices { length: usize, available: usize },

    #[error("unknown strategy '{0}' (expected exhaustive, memoized or tabulated)")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::DpError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = DpError::IncompatibleDimensions {
            index: 2,
            rows: 7,
            prev_cols: 30,
        };
        assert_eq!(
            err.to_string(),
            "matrix 2 has 7 rows but the previous matrix has 30 columns"
        );
        let err = DpError::TooLarge {
            what: "array length",
            got: 70,
            max: 63,
        };
        assert_eq!(
            err.to_string(),
            "array length = 70 exceeds the supported maximum of 63"
        );
    }
}
