use serde::{Deserialize, Serialize};

use crate::filters::kernel::BorderMode;
use crate::resample::ResampleMethod;

/// Tunable parameters of an alignment run. Everything else (crop thresholds,
/// pyramid ladder, search windows) is fixed in [`crate::consts`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Interpolation kernel for every rescale in the run.
    #[serde(default)]
    pub interpolation: ResampleMethod,

    /// Pre-scale factor for sub-pixel alignment. Channels are enlarged by
    /// this factor before the search and the merged result is shrunk back.
    #[serde(default)]
    pub subpixel: Option<f64>,

    /// Border handling for kernel filters applied as post-processing.
    #[serde(default)]
    pub border: BorderMode,

    /// Name of a registry filter to apply to the merged result.
    #[serde(default)]
    pub postprocess: Option<String>,
}
