//! Exhaustive shift search and its coarse-to-fine pyramid composition.

use crate::error::{AlignError, Result};
use crate::metrics::{cross_correlation, mse};
use crate::plate::{Image, Offset};

/// Whether the best score is the smallest or the largest one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Minimize,
    Maximize,
}

/// Scan the whole integer shift window and return the offset achieving the
/// extremum of `score`.
///
/// The window is scanned in row-major order and only strict improvements
/// replace the running best, so among equal scores the first one encountered
/// wins. An empty window yields `(min_row_shift, min_col_shift)`.
pub fn best_shift<S, F>(
    min_row_shift: i32,
    max_row_shift: i32,
    min_col_shift: i32,
    max_col_shift: i32,
    mut score: F,
    mode: SearchMode,
) -> Result<Offset>
where
    S: PartialOrd,
    F: FnMut(i32, i32) -> Result<S>,
{
    let mut best = Offset::new(min_row_shift, min_col_shift);
    let mut best_score: Option<S> = None;

    for d_row in min_row_shift..=max_row_shift {
        for d_col in min_col_shift..=max_col_shift {
            let current = score(d_row, d_col)?;
            let improves = match (&best_score, mode) {
                (None, _) => true,
                (Some(b), SearchMode::Minimize) => current < *b,
                (Some(b), SearchMode::Maximize) => current > *b,
            };
            if improves {
                best_score = Some(current);
                best = Offset::new(d_row, d_col);
            }
        }
    }

    Ok(best)
}

/// Offset of `other` relative to `base` minimizing mean squared error.
pub fn best_shift_by_mse(
    base: &Image,
    other: &Image,
    min_row_shift: i32,
    max_row_shift: i32,
    min_col_shift: i32,
    max_col_shift: i32,
) -> Result<Offset> {
    best_shift(
        min_row_shift,
        max_row_shift,
        min_col_shift,
        max_col_shift,
        |d_row, d_col| mse(base, other, Offset::new(d_row, d_col)),
        SearchMode::Minimize,
    )
}

/// Offset of `other` relative to `base` maximizing cross-correlation.
pub fn best_shift_by_cross_correlation(
    base: &Image,
    other: &Image,
    min_row_shift: i32,
    max_row_shift: i32,
    min_col_shift: i32,
    max_col_shift: i32,
) -> Result<Offset> {
    best_shift(
        min_row_shift,
        max_row_shift,
        min_col_shift,
        max_col_shift,
        |d_row, d_col| cross_correlation(base, other, Offset::new(d_row, d_col)),
        SearchMode::Maximize,
    )
}

/// Coarse-to-fine search over two pyramids of the same scale ladder.
///
/// The running offset starts at zero. At every level (coarsest first) it is
/// projected into that level's coordinates by dividing by `scale` and
/// rounding, then refined by `search` within `±max_shift_begin` at the
/// coarsest level and `±max_shift_corr` at every finer one. A wide window is
/// only ever scanned at low resolution, which is what keeps whole-pyramid
/// search tractable.
pub fn best_shift_for_pyramids<F>(
    pyramid1: &[Image],
    pyramid2: &[Image],
    mut search: F,
    max_shift_begin: i32,
    max_shift_corr: i32,
    scale: f64,
) -> Result<Offset>
where
    F: FnMut(&Image, &Image, i32, i32, i32, i32) -> Result<Offset>,
{
    if pyramid1.is_empty() || pyramid2.is_empty() {
        return Err(AlignError::InvalidGeometry(
            "empty pyramid in shift search".to_string(),
        ));
    }

    let levels = pyramid1.len().min(pyramid2.len());
    let mut best = Offset::default();

    for level in (0..levels).rev() {
        best.row = (best.row as f64 / scale).round() as i32;
        best.col = (best.col as f64 / scale).round() as i32;
        let max_shift = if level == levels - 1 {
            max_shift_begin
        } else {
            max_shift_corr
        };
        best = search(
            &pyramid1[level],
            &pyramid2[level],
            best.row - max_shift,
            best.row + max_shift,
            best.col - max_shift,
            best.col + max_shift,
        )?;
    }

    Ok(best)
}
