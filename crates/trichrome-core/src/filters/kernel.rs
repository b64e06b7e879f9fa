//! Weighted-neighbourhood filtering over a generic accumulator.
//!
//! One application routine serves every convolution-style filter: the kernel
//! element type doubles as the accumulator, so integer kernels (Sobel) sum in
//! `i32` while smoothing kernels sum in `f64`.

use ndarray::Array2;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::filters::mirror::{mirror, unmirror};
use crate::plate::Image;

/// A capability that turns one image into another.
pub trait PointFilter {
    fn apply(&self, image: &Image) -> Result<Image>;
}

/// How pixels closer than the kernel radius to the border are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderMode {
    /// Copy border pixels from the source; only the interior is filtered.
    #[default]
    Keep,
    /// Reflect-pad by the kernel radius, filter, then trim the padding.
    Mirror,
}

/// Convolution with an arbitrary kernel, accumulating in the kernel's own
/// numeric type.
pub struct KernelFilter<T> {
    kernel: Array2<T>,
    border: BorderMode,
}

/// Round, drop the sign, and saturate at 255.
fn normalize(value: f64) -> u8 {
    let rounded = value.round().abs();
    if rounded > 255.0 {
        255
    } else {
        rounded as u8
    }
}

impl<T> KernelFilter<T>
where
    T: Copy
        + Zero
        + FromPrimitive
        + ToPrimitive
        + std::ops::Add<Output = T>
        + std::ops::Mul<Output = T>
        + Send
        + Sync,
{
    pub fn new(kernel: Array2<T>, border: BorderMode) -> Self {
        Self { kernel, border }
    }

    fn weigh(&self, image: &Image, top: usize, left: usize) -> [u8; 3] {
        let mut acc = [T::zero(); 3];
        for ((kr, kc), &w) in self.kernel.indexed_iter() {
            let px = image.pixel(top + kr, left + kc);
            for ch in 0..3 {
                acc[ch] = acc[ch] + T::from_u8(px[ch]).unwrap_or_else(T::zero) * w;
            }
        }
        acc.map(|v| normalize(v.to_f64().unwrap_or(0.0)))
    }

    /// Filter every pixel whose kernel window fits; the rest keep their
    /// source values.
    fn filtered_interior(&self, image: &Image) -> Image {
        let (kh, kw) = self.kernel.dim();
        let (rows, cols) = (image.rows(), image.cols());
        let mut out = image.clone();
        if rows < kh || cols < kw {
            return out;
        }

        let (rr, rc) = (kh / 2, kw / 2);
        let (r_lo, r_hi) = (rr, rows - kh + rr + 1);
        let (c_lo, c_hi) = (rc, cols - kw + rc + 1);

        if rows * cols >= PARALLEL_PIXEL_THRESHOLD {
            let filtered: Vec<Vec<[u8; 3]>> = (r_lo..r_hi)
                .into_par_iter()
                .map(|r| {
                    (c_lo..c_hi)
                        .map(|c| self.weigh(image, r - rr, c - rc))
                        .collect()
                })
                .collect();
            for (ri, row_data) in filtered.into_iter().enumerate() {
                for (ci, px) in row_data.into_iter().enumerate() {
                    out.set_pixel(r_lo + ri, c_lo + ci, px);
                }
            }
        } else {
            for r in r_lo..r_hi {
                for c in c_lo..c_hi {
                    out.set_pixel(r, c, self.weigh(image, r - rr, c - rc));
                }
            }
        }
        out
    }
}

impl<T> PointFilter for KernelFilter<T>
where
    T: Copy
        + Zero
        + FromPrimitive
        + ToPrimitive
        + std::ops::Add<Output = T>
        + std::ops::Mul<Output = T>
        + Send
        + Sync,
{
    fn apply(&self, image: &Image) -> Result<Image> {
        match self.border {
            BorderMode::Keep => Ok(self.filtered_interior(image)),
            BorderMode::Mirror => {
                let (kh, kw) = self.kernel.dim();
                let radius = (kh / 2).max(kw / 2);
                let padded = mirror(image, radius)?;
                unmirror(&self.filtered_interior(&padded), radius)
            }
        }
    }
}
