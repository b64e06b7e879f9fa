//! Canny edge detection.
//!
//! Blur, signed Sobel gradients, non-maximum suppression along the quantized
//! gradient direction, double thresholding, then BFS promotion of weak edges
//! connected to strong ones.

use std::collections::VecDeque;
use std::f64::consts::PI;

use ndarray::Array2;

use crate::consts::{CANNY_BLUR_RADIUS, CANNY_BLUR_SIGMA, NONMAX_EPSILON};
use crate::error::Result;
use crate::filters::gaussian::GaussianFilter;
use crate::filters::kernel::{BorderMode, PointFilter};
use crate::filters::sobel::{SOBEL_X_KERNEL, SOBEL_Y_KERNEL};
use crate::plate::Image;

const SUPPRESSED: u8 = 0;
const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Step directions for the five compass bins covering [0, pi).
const BIN_STEPS: [(i64, i64); 5] = [(0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1)];

/// Detect edges; strong pixels come out white, everything else black.
///
/// `threshold1 < threshold2` classify gradient magnitudes into suppressed /
/// weak / strong. Both thresholds are caller-supplied; there is no
/// auto-tuning.
pub fn canny(image: &Image, threshold1: i32, threshold2: i32) -> Result<Image> {
    let blurred =
        GaussianFilter::new(CANNY_BLUR_RADIUS, CANNY_BLUR_SIGMA, BorderMode::Keep).apply(image)?;

    let (rows, cols) = (image.rows(), image.cols());
    let mut magnitude = Array2::<f64>::zeros((rows, cols));
    let mut direction = Array2::<f64>::zeros((rows, cols));

    if rows >= 3 && cols >= 3 {
        for r in 1..rows - 1 {
            for c in 1..cols - 1 {
                let mut dx = 0.0;
                let mut dy = 0.0;
                for kr in 0..3 {
                    for kc in 0..3 {
                        let v = blurred.plane0(r + kr - 1, c + kc - 1) as f64;
                        dx += SOBEL_X_KERNEL[kr][kc] as f64 * v;
                        dy += SOBEL_Y_KERNEL[kr][kc] as f64 * v;
                    }
                }
                magnitude[[r, c]] = (dx * dx + dy * dy).sqrt();
                direction[[r, c]] = dy.atan2(dx);
            }
        }
    }

    let mut state = Array2::<u8>::zeros((rows, cols));
    for r in 0..rows {
        for c in 0..cols {
            if is_suppressed(&magnitude, &direction, r, c) {
                state[[r, c]] = SUPPRESSED;
            } else {
                let len = magnitude[[r, c]];
                state[[r, c]] = if len < threshold1 as f64 {
                    SUPPRESSED
                } else if len <= threshold2 as f64 {
                    WEAK
                } else {
                    STRONG
                };
            }
        }
    }

    promote_connected(&mut state);

    Ok(Image::from_fn(rows, cols, |r, c| {
        if state[[r, c]] == STRONG {
            [255, 255, 255]
        } else {
            [0, 0, 0]
        }
    }))
}

/// A pixel is suppressed when either neighbour along its gradient direction
/// is not strictly smaller (within epsilon).
fn is_suppressed(magnitude: &Array2<f64>, direction: &Array2<f64>, row: usize, col: usize) -> bool {
    let (rows, cols) = magnitude.dim();
    let len = magnitude[[row, col]];
    let mut dir = direction[[row, col]];
    if dir < 0.0 {
        dir += PI;
    }

    let bin = ((dir / (PI / 4.0)) as usize).min(4);
    let (dr, dc) = BIN_STEPS[bin];

    let greater = |nr: i64, nc: i64| {
        nr >= 0
            && nr < rows as i64
            && nc >= 0
            && nc < cols as i64
            && magnitude[[nr as usize, nc as usize]] > len - NONMAX_EPSILON
    };

    greater(row as i64 + dr, col as i64 + dc) || greater(row as i64 - dr, col as i64 - dc)
}

/// Promote every weak pixel 8-connected (transitively) to a strong one.
fn promote_connected(state: &mut Array2<u8>) {
    let (rows, cols) = state.dim();
    let mut queue: VecDeque<(usize, usize)> = state
        .indexed_iter()
        .filter(|(_, &s)| s == STRONG)
        .map(|((r, c), _)| (r, c))
        .collect();

    while let Some((row, col)) = queue.pop_front() {
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as i64 + dr;
                let nc = col as i64 + dc;
                if nr < 0 || nr >= rows as i64 || nc < 0 || nc >= cols as i64 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if state[[nr, nc]] == WEAK {
                    state[[nr, nc]] = STRONG;
                    queue.push_back((nr, nc));
                }
            }
        }
    }

    state.mapv_inplace(|s| if s == WEAK { SUPPRESSED } else { s });
}
