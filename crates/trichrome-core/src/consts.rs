/// Minimum pixel count (h*w) to use row-level Rayon parallelism in kernel filters.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Channel pixel count above which edge-detection cropping is skipped in
/// favour of the cheap fixed-fraction crop.
pub const CROP_AREA_LIMIT: usize = 500_000;

/// Lower Canny threshold used by the border cropper.
pub const BORDER_CANNY_LOW: i32 = 10;

/// Upper Canny threshold used by the border cropper.
pub const BORDER_CANNY_HIGH: i32 = 30;

/// Fraction of rows/columns scanned from each plate edge for a crop boundary.
pub const BORDER_SCAN_FRACTION: f64 = 0.07;

/// Half-width of the window zeroed around the first boundary candidate before
/// picking the second one.
pub const BORDER_NULLABLE: usize = 2;

/// Row fraction discarded per side by the fixed-fraction crop.
pub const SIMPLE_CROP_ROW_FRACTION: f64 = 0.04;

/// Column fraction discarded per side by the fixed-fraction crop.
pub const SIMPLE_CROP_COL_FRACTION: f64 = 0.05;

/// Per-level downscale factor of the alignment pyramid.
pub const PYRAMID_SCALE: f64 = 0.5;

/// A pyramid level is only kept while its shorter side is at least this long.
pub const PYRAMID_MIN_LEN: usize = 300;

/// Search window half-width at the coarsest pyramid level.
pub const SEARCH_WINDOW_COARSE: i32 = 30;

/// Search window half-width at every finer pyramid level.
pub const SEARCH_WINDOW_REFINE: i32 = 2;

/// Gaussian blur radius applied before gradient extraction in Canny.
pub const CANNY_BLUR_RADIUS: usize = 2;

/// Gaussian blur sigma applied before gradient extraction in Canny.
pub const CANNY_BLUR_SIGMA: f64 = 1.4;

/// Tolerance for the "not strictly less than a neighbour" comparison in
/// non-maximum suppression.
pub const NONMAX_EPSILON: f64 = 1e-9;

/// Luminance coefficient for the red channel (ITU-R BT.709).
pub const LUMINANCE_R: f64 = 0.2125;

/// Luminance coefficient for the green channel (ITU-R BT.709).
pub const LUMINANCE_G: f64 = 0.7154;

/// Luminance coefficient for the blue channel (ITU-R BT.709).
pub const LUMINANCE_B: f64 = 0.0721;
