use crate::error::{AlignError, Result};
use crate::plate::Image;

fn mirrored_coord(coord: usize, new_len: usize, radius: usize) -> usize {
    if coord >= radius && coord < new_len - radius {
        coord - radius
    } else if coord < radius {
        radius - (coord + 1)
    } else {
        let past_end = coord - (new_len - radius);
        new_len - 2 * radius - 1 - past_end
    }
}

/// Reflect-pad an image by `radius` pixels on every side.
///
/// The first reflected row outside the image repeats the border row, the next
/// one the row before it, and so on. Inverse of [`unmirror`] on the interior.
pub fn mirror(image: &Image, radius: usize) -> Result<Image> {
    if radius > image.rows().min(image.cols()) {
        return Err(AlignError::InvalidGeometry(format!(
            "mirror radius {radius} exceeds {}x{} image",
            image.rows(),
            image.cols()
        )));
    }

    let rows = image.rows() + 2 * radius;
    let cols = image.cols() + 2 * radius;
    Ok(Image::from_fn(rows, cols, |r, c| {
        image.pixel(mirrored_coord(r, rows, radius), mirrored_coord(c, cols, radius))
    }))
}

/// Trim a `radius`-pixel band from every side.
pub fn unmirror(image: &Image, radius: usize) -> Result<Image> {
    let height = image.rows().checked_sub(2 * radius).ok_or_else(|| {
        AlignError::InvalidGeometry(format!(
            "cannot trim {radius}-pixel border from {}x{} image",
            image.rows(),
            image.cols()
        ))
    })?;
    let width = image.cols().checked_sub(2 * radius).ok_or_else(|| {
        AlignError::InvalidGeometry(format!(
            "cannot trim {radius}-pixel border from {}x{} image",
            image.rows(),
            image.cols()
        ))
    })?;
    image.submatrix(radius, radius, height, width)
}
