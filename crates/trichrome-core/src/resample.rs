//! Image rescaling by backward mapping.
//!
//! Destination pixels map back to `(row / scale, col / scale)` in the source;
//! the base coordinate is clamped so the interpolation neighbourhood never
//! leaves the image. Pixels within the kernel radius of the border are
//! therefore slightly distorted, but no access is ever out of bounds.

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};
use crate::plate::Image;

/// Interpolation kernel used for rescaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleMethod {
    #[default]
    Bilinear,
    Bicubic,
}

/// Resize `image` by `scale` with the given kernel.
///
/// Output dimensions are `(⌊rows·scale⌋, ⌊cols·scale⌋)`.
pub fn resize(image: &Image, scale: f64, method: ResampleMethod) -> Result<Image> {
    if scale <= 0.0 {
        return Err(AlignError::InvalidGeometry(format!(
            "non-positive resize scale {scale}"
        )));
    }
    match method {
        ResampleMethod::Bilinear => resize_bilinear(image, scale),
        ResampleMethod::Bicubic => resize_bicubic(image, scale),
    }
}

fn checked_output_dims(image: &Image, scale: f64, support: usize) -> Result<(usize, usize)> {
    let rows = (image.rows() as f64 * scale) as usize;
    let cols = (image.cols() as f64 * scale) as usize;
    if rows == 0 || cols == 0 || image.rows() < support || image.cols() < support {
        return Err(AlignError::InvalidGeometry(format!(
            "cannot resize {}x{} image by {scale}",
            image.rows(),
            image.cols()
        )));
    }
    Ok((rows, cols))
}

fn clamp_round(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn resize_bilinear(image: &Image, scale: f64) -> Result<Image> {
    let (rows, cols) = checked_output_dims(image, scale, 2)?;
    let mut out = Image::zeros(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let src_row = row as f64 / scale;
            let src_col = col as f64 / scale;

            let i = (src_row.floor().max(0.0) as usize).min(image.rows() - 2);
            let j = (src_col.floor().max(0.0) as usize).min(image.cols() - 2);

            let k11 = ((i + 1) as f64 - src_row) * ((j + 1) as f64 - src_col);
            let k21 = (src_row - i as f64) * ((j + 1) as f64 - src_col);
            let k12 = ((i + 1) as f64 - src_row) * (src_col - j as f64);
            let k22 = (src_row - i as f64) * (src_col - j as f64);

            let q11 = image.pixel(i, j);
            let q21 = image.pixel(i + 1, j);
            let q12 = image.pixel(i, j + 1);
            let q22 = image.pixel(i + 1, j + 1);

            let mut pixel = [0u8; 3];
            for ch in 0..3 {
                pixel[ch] = clamp_round(
                    q11[ch] as f64 * k11
                        + q21[ch] as f64 * k21
                        + q12[ch] as f64 * k12
                        + q22[ch] as f64 * k22,
                );
            }
            out.set_pixel(row, col, pixel);
        }
    }

    Ok(out)
}

/// Sample positions of the 4x4 bicubic neighbourhood, relative to the clamped
/// base coordinate, in the same order as the weights below.
const BICUBIC_TAPS: [(usize, usize); 16] = [
    (1, 1),
    (1, 2),
    (2, 1),
    (2, 2),
    (1, 0),
    (0, 1),
    (2, 0),
    (0, 2),
    (1, 3),
    (3, 1),
    (0, 0),
    (2, 3),
    (3, 2),
    (0, 3),
    (3, 0),
    (3, 3),
];

/// Cubic convolution weights for fractional offsets `x` (columns) and `y`
/// (rows) from the base coordinate.
fn bicubic_weights(x: f64, y: f64) -> [f64; 16] {
    [
        0.25 * (x - 1.0) * (x - 2.0) * (x + 1.0) * (y - 1.0) * (y - 2.0) * (y + 1.0),
        -0.25 * x * (x + 1.0) * (x - 2.0) * (y - 1.0) * (y - 2.0) * (y + 1.0),
        -0.25 * y * (x - 1.0) * (x - 2.0) * (x + 1.0) * (y + 1.0) * (y - 2.0),
        0.25 * x * y * (x + 1.0) * (x - 2.0) * (y + 1.0) * (y - 2.0),
        -1.0 / 12.0 * x * (x - 1.0) * (x - 2.0) * (y - 1.0) * (y - 2.0) * (y + 1.0),
        -1.0 / 12.0 * y * (x - 1.0) * (x - 2.0) * (x + 1.0) * (y - 1.0) * (y - 2.0),
        1.0 / 12.0 * x * y * (x - 1.0) * (x - 2.0) * (y + 1.0) * (y - 2.0),
        1.0 / 12.0 * x * y * (x + 1.0) * (x - 2.0) * (y - 1.0) * (y - 2.0),
        1.0 / 12.0 * x * (x - 1.0) * (x + 1.0) * (y - 1.0) * (y - 2.0) * (y + 1.0),
        1.0 / 12.0 * y * (x - 1.0) * (x - 2.0) * (x + 1.0) * (y - 1.0) * (y + 1.0),
        1.0 / 36.0 * x * y * (x - 1.0) * (x - 2.0) * (y - 1.0) * (y - 2.0),
        -1.0 / 12.0 * x * y * (x - 1.0) * (x + 1.0) * (y + 1.0) * (y - 2.0),
        -1.0 / 12.0 * x * y * (x + 1.0) * (x - 2.0) * (y - 1.0) * (y + 1.0),
        -1.0 / 36.0 * x * y * (x - 1.0) * (x + 1.0) * (y - 1.0) * (y - 2.0),
        -1.0 / 36.0 * x * y * (x - 1.0) * (x - 2.0) * (y - 1.0) * (y + 1.0),
        1.0 / 36.0 * x * y * (x - 1.0) * (x + 1.0) * (y - 1.0) * (y + 1.0),
    ]
}

fn resize_bicubic(image: &Image, scale: f64) -> Result<Image> {
    let (rows, cols) = checked_output_dims(image, scale, 4)?;
    let mut out = Image::zeros(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let src_row = row as f64 / scale;
            let src_col = col as f64 / scale;

            let i = (src_row.floor().max(0.0) as usize).min(image.rows() - 4);
            let j = (src_col.floor().max(0.0) as usize).min(image.cols() - 4);

            let y = src_row - i as f64;
            let x = src_col - j as f64;
            let weights = bicubic_weights(x, y);

            let mut acc = [0.0f64; 3];
            for (&(dr, dc), &w) in BICUBIC_TAPS.iter().zip(weights.iter()) {
                let q = image.pixel(i + dr, j + dc);
                for ch in 0..3 {
                    acc[ch] += q[ch] as f64 * w;
                }
            }
            out.set_pixel(row, col, [clamp_round(acc[0]), clamp_round(acc[1]), clamp_round(acc[2])]);
        }
    }

    Ok(out)
}
