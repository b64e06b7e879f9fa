use ndarray::{s, Array3};

use crate::error::{AlignError, Result};

/// An owned RGB raster with 8-bit channels.
///
/// Pixel data is stored row-major with shape `(rows, cols, 3)`. Dimensions are
/// fixed at construction; `Clone` performs a deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Array3<u8>,
}

impl Image {
    /// All-black image of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array3::zeros((rows, cols, 3)),
        }
    }

    /// Build an image by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let data = Array3::from_shape_fn((rows, cols, 3), |(r, c, ch)| f(r, c)[ch]);
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, value: [u8; 3]) {
        for (ch, v) in value.into_iter().enumerate() {
            self.data[[row, col, ch]] = v;
        }
    }

    /// First stored channel of a pixel. Similarity metrics and the channel
    /// merge operate on this plane only.
    pub fn plane0(&self, row: usize, col: usize) -> u8 {
        self.data[[row, col, 0]]
    }

    /// Deep copy of the rectangle `(top, left)` .. `(top+height, left+width)`.
    ///
    /// An empty rectangle is invalid geometry; one that reaches past the image
    /// bounds is an out-of-range access.
    pub fn submatrix(&self, top: usize, left: usize, height: usize, width: usize) -> Result<Image> {
        if height == 0 || width == 0 {
            return Err(AlignError::InvalidGeometry(format!(
                "empty {height}x{width} submatrix requested"
            )));
        }
        if top + height > self.rows() || left + width > self.cols() {
            return Err(AlignError::OutOfRange {
                row: (top + height) as i64 - 1,
                col: (left + width) as i64 - 1,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(Image {
            data: self
                .data
                .slice(s![top..top + height, left..left + width, ..])
                .to_owned(),
        })
    }
}

/// Integer translation of one image relative to another, in (row, col) order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Offset {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Split a vertically stacked plate into its three exposures, top to bottom.
///
/// Row counts differ by at most one and always sum to the plate height: each
/// third receives `(remaining rows) / (remaining thirds)` rows.
pub fn split_channels(plate: &Image) -> Result<[Image; 3]> {
    let mut channels = Vec::with_capacity(3);
    let mut current_row = 0;
    for i in 0..3 {
        let height = (plate.rows() - current_row) / (3 - i);
        channels.push(plate.submatrix(current_row, 0, height, plate.cols())?);
        current_row += height;
    }
    Ok(channels
        .try_into()
        .expect("exactly three channels were pushed"))
}

/// Re-stack channel images vertically, inverting [`split_channels`].
pub fn stack_channels(channels: &[Image]) -> Result<Image> {
    let Some(first) = channels.first() else {
        return Err(AlignError::InvalidGeometry(
            "no channels to stack".to_string(),
        ));
    };
    let cols = first.cols();
    if channels.iter().any(|c| c.cols() != cols) {
        return Err(AlignError::InvalidGeometry(
            "channel widths differ".to_string(),
        ));
    }
    let rows: usize = channels.iter().map(Image::rows).sum();
    let mut out = Image::zeros(rows, cols);
    let mut current_row = 0;
    for channel in channels {
        for r in 0..channel.rows() {
            for c in 0..cols {
                out.set_pixel(current_row + r, c, channel.pixel(r, c));
            }
        }
        current_row += channel.rows();
    }
    Ok(out)
}
