//! Assorted utilities and helpers shared by the problem modules.

use crate::error::{DpError, DpResult};

/// The eight (row, column) displacements of a chess knight, in the fixed
/// order every knight evaluator sums them.
pub const KNIGHT_OFFSETS: [(i64, i64); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Largest dense table, in slots, that any state space may require.
///
/// Constructors check their table dimensions against this bound so that the
/// tabulated and space-optimized evaluators can always allocate.
pub const MAX_TABLE: usize = 1 << 24;

/// Reject `got > max`.
#[inline]
pub fn ensure_at_most(what: &'static str, got: usize, max: usize) -> DpResult<()> {
    if got > max {
        Err(DpError::TooLarge { what, got, max })
    } else {
        Ok(())
    }
}

/// Slot count of a dense table with the given dimensions.
///
/// Every dimension and the running product must stay within [`MAX_TABLE`];
/// callers pass `saturating_add` results so an overflowing dimension is
/// reported rather than wrapped.
pub fn dense_size(what: &'static str, dims: &[usize]) -> DpResult<usize> {
    dims.iter().try_fold(1usize, |size, &dim| {
        ensure_at_most(what, dim, MAX_TABLE)?;
        let size = size.saturating_mul(dim);
        ensure_at_most(what, size, MAX_TABLE)?;
        Ok(size)
    })
}

/// Validate that `grid` is non-empty and rectangular; return its width.
pub fn rectangular_width<T>(grid: &[Vec<T>]) -> DpResult<usize> {
    let first = grid.first().ok_or(DpError::EmptyInput { what: "grid" })?;
    let width = first.len();
    if width == 0 {
        return Err(DpError::ZeroDimension { what: "grid width" });
    }
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != width {
            return Err(DpError::RaggedGrid {
                row,
                got: cells.len(),
                expected: width,
            });
        }
    }
    Ok(width)
}

/// Sum of `values` as `u64`, or `Overflow` if it does not fit.
pub fn checked_total(what: &'static str, values: impl IntoIterator<Item = u64>) -> DpResult<u64> {
    values
        .into_iter()
        .try_fold(0u64, |acc, v| acc.checked_add(v))
        .ok_or(DpError::Overflow { what, bits: 64 })
}
