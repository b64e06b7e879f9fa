use ndarray::arr2;

use crate::error::Result;
use crate::filters::kernel::{BorderMode, KernelFilter, PointFilter};
use crate::plate::Image;

/// Fixed 3x3 sharpening kernel, applied with mirror padding so the border is
/// sharpened like the interior.
pub struct UnsharpFilter {
    inner: KernelFilter<f64>,
}

impl UnsharpFilter {
    pub fn new() -> Self {
        let kernel = arr2(&[
            [-1.0 / 6.0, -2.0 / 3.0, -1.0 / 6.0],
            [-2.0 / 3.0, 4.0 + 1.0 / 3.0, -2.0 / 3.0],
            [-1.0 / 6.0, -2.0 / 3.0, -1.0 / 6.0],
        ]);
        Self {
            inner: KernelFilter::new(kernel, BorderMode::Mirror),
        }
    }
}

impl Default for UnsharpFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl PointFilter for UnsharpFilter {
    fn apply(&self, image: &Image) -> Result<Image> {
        self.inner.apply(image)
    }
}
