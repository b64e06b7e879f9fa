//! Plate border removal.
//!
//! Digitized plates carry dark frames and scanning artifacts along every
//! edge. [`crop_borders`] finds the crop line per side by counting Canny edge
//! pixels along candidate lines; [`simple_crop`] trims a fixed fraction when
//! edge detection would cost more than it saves.

use crate::edges::canny;
use crate::error::{AlignError, Result};
use crate::plate::Image;

/// Index of the first maximum in `values` (strict comparison, first wins).
fn first_max_index(values: &[usize]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

struct EdgeScan {
    start: usize,
    step: i64,
    horizontal: bool,
    budget: usize,
}

/// Crop uninformative borders using edge detection.
///
/// For each side, the edge-pixel count is taken along the first
/// `count_rows`/`count_cols` candidate lines. The line with the most edge
/// pixels is the primary candidate; a window of `±nullable` lines around it
/// is discounted and a secondary candidate picked from the rest. The
/// boundary is whichever of the two lies deeper into the plate, so a strong
/// frame artifact hugging the true content border does not win over a second
/// strong line further in. The crop is inclusive of the chosen lines.
pub fn crop_borders(
    image: &Image,
    threshold1: i32,
    threshold2: i32,
    count_rows: usize,
    count_cols: usize,
    nullable: usize,
) -> Result<Image> {
    let (rows, cols) = (image.rows(), image.cols());
    if rows == 0 || cols == 0 {
        return Err(AlignError::InvalidGeometry(format!(
            "cannot crop empty {rows}x{cols} image"
        )));
    }

    let edge_map = canny(image, threshold1, threshold2)?;

    let mut up = 0;
    let mut down = rows - 1;
    let mut left = 0;
    let mut right = cols - 1;

    let scans = [
        EdgeScan { start: 0, step: 1, horizontal: true, budget: count_rows.min(rows) },
        EdgeScan { start: rows - 1, step: -1, horizontal: true, budget: count_rows.min(rows) },
        EdgeScan { start: 0, step: 1, horizontal: false, budget: count_cols.min(cols) },
        EdgeScan { start: cols - 1, step: -1, horizontal: false, budget: count_cols.min(cols) },
    ];

    for scan in scans {
        if scan.budget == 0 {
            continue;
        }

        let mut counts = Vec::with_capacity(scan.budget);
        for i in 0..scan.budget {
            let line = (scan.start as i64 + scan.step * i as i64) as usize;
            let edge_pixels = if scan.horizontal {
                (0..cols).filter(|&c| edge_map.plane0(line, c) != 0).count()
            } else {
                (0..rows).filter(|&r| edge_map.plane0(r, line) != 0).count()
            };
            counts.push(edge_pixels);
        }

        let primary = first_max_index(&counts);
        let window_lo = primary.saturating_sub(nullable);
        let window_hi = (primary + nullable).min(counts.len() - 1);
        for count in &mut counts[window_lo..=window_hi] {
            *count = 0;
        }
        let secondary = first_max_index(&counts);

        let chosen = primary.max(secondary);
        let boundary = (scan.start as i64 + scan.step * chosen as i64) as usize;

        match (scan.horizontal, scan.step > 0) {
            (true, true) => up = boundary,
            (true, false) => down = boundary,
            (false, true) => left = boundary,
            (false, false) => right = boundary,
        }
    }

    if down < up || right < left {
        return Err(AlignError::InvalidGeometry(format!(
            "crop boundaries crossed: rows {up}..{down}, cols {left}..{right}"
        )));
    }
    image.submatrix(up, left, down - up + 1, right - left + 1)
}

/// Discard a fixed fraction of rows and columns from each side (rounded).
pub fn simple_crop(image: &Image, row_fraction: f64, col_fraction: f64) -> Result<Image> {
    let d_rows = (image.rows() as f64 * row_fraction).round() as usize;
    let d_cols = (image.cols() as f64 * col_fraction).round() as usize;

    let height = image.rows().checked_sub(2 * d_rows).ok_or_else(|| {
        AlignError::InvalidGeometry(format!(
            "row fraction {row_fraction} discards the whole {}-row image",
            image.rows()
        ))
    })?;
    let width = image.cols().checked_sub(2 * d_cols).ok_or_else(|| {
        AlignError::InvalidGeometry(format!(
            "column fraction {col_fraction} discards the whole {}-column image",
            image.cols()
        ))
    })?;

    image.submatrix(d_rows, d_cols, height, width)
}
