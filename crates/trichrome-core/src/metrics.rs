//! Overlap bookkeeping and similarity metrics between shifted channels.
//!
//! All metrics operate on the first stored channel only: the separated
//! exposures are monochrome, so the remaining planes carry no extra
//! information. Sums accumulate in `u64`, which cannot overflow for any
//! addressable image (255² per pixel).

use crate::error::{AlignError, Result};
use crate::plate::{Image, Offset};

/// Rectangular intersection of several images on a common canvas, in the
/// base image's coordinate system. Never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossRegion {
    pub up: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

/// Intersect a base image (implicitly at offset zero) with other images at
/// the given offsets.
///
/// Fails if any image has zero rows or columns, or if the intersection is
/// empty.
pub fn cross_region(
    base: (usize, usize),
    others: &[((usize, usize), Offset)],
) -> Result<CrossRegion> {
    if base.0 == 0 || base.1 == 0 {
        return Err(AlignError::InvalidGeometry(
            "zero-sized base image in cross region".to_string(),
        ));
    }

    let mut up: i64 = 0;
    let mut left: i64 = 0;
    let mut down: i64 = base.0 as i64 - 1;
    let mut right: i64 = base.1 as i64 - 1;

    for &((rows, cols), shift) in others {
        if rows == 0 || cols == 0 {
            return Err(AlignError::InvalidGeometry(
                "zero-sized image in cross region".to_string(),
            ));
        }
        up = up.max(shift.row as i64);
        left = left.max(shift.col as i64);
        down = down.min(rows as i64 - 1 + shift.row as i64);
        right = right.min(cols as i64 - 1 + shift.col as i64);
    }

    if down < up || right < left {
        return Err(AlignError::InvalidGeometry(format!(
            "images have no overlap (rows {up}..{down}, cols {left}..{right})"
        )));
    }

    Ok(CrossRegion {
        up: up as usize,
        left: left as usize,
        height: (down - up + 1) as usize,
        width: (right - left + 1) as usize,
    })
}

fn image_dims(image: &Image) -> (usize, usize) {
    (image.rows(), image.cols())
}

/// Intersection of two images with `other` translated by `shift`.
pub fn cross_two(base: &Image, other: &Image, shift: Offset) -> Result<CrossRegion> {
    cross_region(image_dims(base), &[(image_dims(other), shift)])
}

/// Intersection of three images with `a` and `b` translated by their shifts.
pub fn cross_three(
    base: &Image,
    a: &Image,
    b: &Image,
    shift_a: Offset,
    shift_b: Offset,
) -> Result<CrossRegion> {
    cross_region(
        image_dims(base),
        &[(image_dims(a), shift_a), (image_dims(b), shift_b)],
    )
}

fn accumulate(
    base: &Image,
    other: &Image,
    shift: Offset,
    region: &CrossRegion,
    f: impl Fn(u8, u8) -> u64,
) -> u64 {
    let mut sum = 0u64;
    for r in region.up..region.up + region.height {
        let r2 = (r as i64 - shift.row as i64) as usize;
        for c in region.left..region.left + region.width {
            let c2 = (c as i64 - shift.col as i64) as usize;
            sum += f(base.plane0(r, c), other.plane0(r2, c2));
        }
    }
    sum
}

/// Accumulate `f` over every overlapping pixel pair of the first channel.
pub fn sum_overlap(
    base: &Image,
    other: &Image,
    shift: Offset,
    f: impl Fn(u8, u8) -> u64,
) -> Result<u64> {
    let region = cross_two(base, other, shift)?;
    Ok(accumulate(base, other, shift, &region, f))
}

/// Mean squared error over the overlap region.
pub fn mse(base: &Image, other: &Image, shift: Offset) -> Result<f64> {
    let region = cross_two(base, other, shift)?;
    let sum = accumulate(base, other, shift, &region, |a, b| {
        let d = a as i64 - b as i64;
        (d * d) as u64
    });
    Ok(sum as f64 / (region.height * region.width) as f64)
}

/// Cross-correlation (sum of products) over the overlap region.
pub fn cross_correlation(base: &Image, other: &Image, shift: Offset) -> Result<u64> {
    sum_overlap(base, other, shift, |a, b| a as u64 * b as u64)
}
