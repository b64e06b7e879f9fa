use ndarray::arr2;

use crate::error::Result;
use crate::filters::kernel::{BorderMode, KernelFilter, PointFilter};
use crate::plate::Image;

pub const SOBEL_X_KERNEL: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_Y_KERNEL: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Horizontal Sobel derivative; output holds gradient magnitudes per channel.
pub struct SobelX {
    inner: KernelFilter<i32>,
}

impl SobelX {
    pub fn new(border: BorderMode) -> Self {
        Self {
            inner: KernelFilter::new(arr2(&SOBEL_X_KERNEL), border),
        }
    }
}

impl PointFilter for SobelX {
    fn apply(&self, image: &Image) -> Result<Image> {
        self.inner.apply(image)
    }
}

/// Vertical Sobel derivative; output holds gradient magnitudes per channel.
pub struct SobelY {
    inner: KernelFilter<i32>,
}

impl SobelY {
    pub fn new(border: BorderMode) -> Self {
        Self {
            inner: KernelFilter::new(arr2(&SOBEL_Y_KERNEL), border),
        }
    }
}

impl PointFilter for SobelY {
    fn apply(&self, image: &Image) -> Result<Image> {
        self.inner.apply(image)
    }
}
