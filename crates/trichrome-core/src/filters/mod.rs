pub mod balance;
pub mod gaussian;
pub mod histogram;
pub mod kernel;
pub mod median;
pub mod mirror;
pub mod registry;
pub mod sobel;
pub mod unsharp;

pub use kernel::{BorderMode, KernelFilter, PointFilter};
pub use registry::{FilterRegistry, ImageFilter};
