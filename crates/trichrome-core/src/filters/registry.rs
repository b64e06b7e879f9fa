//! In-process registry of named post-processing filters.
//!
//! A filter is a capability with an optional configuration dialogue: callers
//! keep answering [`ImageFilter::prompt`] via [`ImageFilter::submit`] until no
//! prompt remains, then call [`ImageFilter::apply`].

use crate::error::{AlignError, Result};
use crate::filters::balance::{autocontrast, gray_world};
use crate::filters::gaussian::{GaussianFilter, SeparableGaussianFilter};
use crate::filters::kernel::{BorderMode, PointFilter};
use crate::filters::median::{apply_median, MedianVariant};
use crate::filters::sobel::{SobelX, SobelY};
use crate::filters::unsharp::UnsharpFilter;
use crate::plate::Image;

pub trait ImageFilter {
    fn name(&self) -> &'static str;

    /// Next configuration question, or `None` once the filter is ready.
    fn prompt(&self) -> Option<String> {
        None
    }

    /// Answer the pending prompt.
    fn submit(&mut self, _input: &str) -> Result<()> {
        Ok(())
    }

    fn apply(&self, image: &Image) -> Result<Image>;
}

type FilterFactory = fn(BorderMode) -> Box<dyn ImageFilter>;

pub struct FilterRegistry {
    factories: Vec<(&'static str, FilterFactory)>,
}

impl FilterRegistry {
    /// Registry holding every built-in filter.
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            factories: Vec::new(),
        };
        registry.register("median", |_| Box::new(MedianImageFilter::default()));
        registry.register("unsharp", |_| Box::new(UnsharpImageFilter));
        registry.register("gray-world", |_| Box::new(GrayWorldImageFilter));
        registry.register("autocontrast", |_| {
            Box::new(AutocontrastImageFilter::default())
        });
        registry.register("gaussian", |border| {
            Box::new(GaussianImageFilter::new(border, false))
        });
        registry.register("gaussian-separable", |border| {
            Box::new(GaussianImageFilter::new(border, true))
        });
        registry.register("sobel-x", |border| Box::new(SobelImageFilter::x(border)));
        registry.register("sobel-y", |border| Box::new(SobelImageFilter::y(border)));
        registry
    }

    pub fn register(&mut self, name: &'static str, factory: FilterFactory) {
        self.factories.push((name, factory));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|(name, _)| *name).collect()
    }

    /// Instantiate a filter by name. `border` configures how kernel filters
    /// treat pixels near the image border.
    pub fn create(&self, name: &str, border: BorderMode) -> Option<Box<dyn ImageFilter>> {
        self.factories
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, factory)| factory(border))
    }
}

fn parse_field<T: std::str::FromStr>(input: &str, what: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| AlignError::Filter(format!("bad {what} {input:?}")))
}

#[derive(Default)]
pub struct MedianImageFilter {
    variant: Option<MedianVariant>,
    radius: Option<usize>,
}

impl ImageFilter for MedianImageFilter {
    fn name(&self) -> &'static str {
        "median"
    }

    fn prompt(&self) -> Option<String> {
        if self.variant.is_none() {
            Some(
                "choose implementation:\n    [0] simple\n    [1] linear\n    [2] constant"
                    .to_string(),
            )
        } else if self.radius.is_none() {
            Some("enter radius:".to_string())
        } else {
            None
        }
    }

    fn submit(&mut self, input: &str) -> Result<()> {
        if self.variant.is_none() {
            self.variant = Some(match input.trim() {
                "0" => MedianVariant::Simple,
                "1" => MedianVariant::Linear,
                "2" => MedianVariant::Constant,
                other => {
                    return Err(AlignError::Filter(format!(
                        "unknown median implementation {other:?}"
                    )))
                }
            });
        } else {
            self.radius = Some(parse_field(input, "radius")?);
        }
        Ok(())
    }

    fn apply(&self, image: &Image) -> Result<Image> {
        let (Some(variant), Some(radius)) = (self.variant, self.radius) else {
            return Err(AlignError::Filter(
                "median filter applied before configuration".to_string(),
            ));
        };
        apply_median(image, radius, variant)
    }
}

pub struct UnsharpImageFilter;

impl ImageFilter for UnsharpImageFilter {
    fn name(&self) -> &'static str {
        "unsharp"
    }

    fn apply(&self, image: &Image) -> Result<Image> {
        UnsharpFilter::new().apply(image)
    }
}

pub struct GrayWorldImageFilter;

impl ImageFilter for GrayWorldImageFilter {
    fn name(&self) -> &'static str {
        "gray-world"
    }

    fn apply(&self, image: &Image) -> Result<Image> {
        Ok(gray_world(image))
    }
}

#[derive(Default)]
pub struct AutocontrastImageFilter {
    fraction: Option<f64>,
}

impl ImageFilter for AutocontrastImageFilter {
    fn name(&self) -> &'static str {
        "autocontrast"
    }

    fn prompt(&self) -> Option<String> {
        if self.fraction.is_none() {
            Some("enter discarded fraction (0.0 - 0.4):".to_string())
        } else {
            None
        }
    }

    fn submit(&mut self, input: &str) -> Result<()> {
        let fraction: f64 = parse_field(input, "fraction")?;
        if !(0.0..=0.4).contains(&fraction) {
            return Err(AlignError::Filter(format!(
                "fraction {fraction} outside 0.0 - 0.4"
            )));
        }
        self.fraction = Some(fraction);
        Ok(())
    }

    fn apply(&self, image: &Image) -> Result<Image> {
        let Some(fraction) = self.fraction else {
            return Err(AlignError::Filter(
                "autocontrast filter applied before configuration".to_string(),
            ));
        };
        Ok(autocontrast(image, fraction))
    }
}

pub struct GaussianImageFilter {
    border: BorderMode,
    separable: bool,
    radius: Option<usize>,
    sigma: Option<f64>,
}

impl GaussianImageFilter {
    fn new(border: BorderMode, separable: bool) -> Self {
        Self {
            border,
            separable,
            radius: None,
            sigma: None,
        }
    }
}

impl ImageFilter for GaussianImageFilter {
    fn name(&self) -> &'static str {
        if self.separable {
            "gaussian-separable"
        } else {
            "gaussian"
        }
    }

    fn prompt(&self) -> Option<String> {
        if self.sigma.is_none() {
            Some("enter sigma (0.1 - 100):".to_string())
        } else if self.radius.is_none() {
            Some("enter radius:".to_string())
        } else {
            None
        }
    }

    fn submit(&mut self, input: &str) -> Result<()> {
        if self.sigma.is_none() {
            let sigma: f64 = parse_field(input, "sigma")?;
            if !(0.1..=100.0).contains(&sigma) {
                return Err(AlignError::Filter(format!(
                    "sigma {sigma} outside 0.1 - 100"
                )));
            }
            self.sigma = Some(sigma);
        } else {
            let radius: usize = parse_field(input, "radius")?;
            if radius == 0 {
                return Err(AlignError::Filter("radius must be at least 1".to_string()));
            }
            self.radius = Some(radius);
        }
        Ok(())
    }

    fn apply(&self, image: &Image) -> Result<Image> {
        let (Some(radius), Some(sigma)) = (self.radius, self.sigma) else {
            return Err(AlignError::Filter(
                "gaussian filter applied before configuration".to_string(),
            ));
        };
        if self.separable {
            SeparableGaussianFilter::new(radius, sigma, self.border).apply(image)
        } else {
            GaussianFilter::new(radius, sigma, self.border).apply(image)
        }
    }
}

pub struct SobelImageFilter {
    border: BorderMode,
    vertical: bool,
}

impl SobelImageFilter {
    fn x(border: BorderMode) -> Self {
        Self {
            border,
            vertical: false,
        }
    }

    fn y(border: BorderMode) -> Self {
        Self {
            border,
            vertical: true,
        }
    }
}

impl ImageFilter for SobelImageFilter {
    fn name(&self) -> &'static str {
        if self.vertical {
            "sobel-y"
        } else {
            "sobel-x"
        }
    }

    fn apply(&self, image: &Image) -> Result<Image> {
        if self.vertical {
            SobelY::new(self.border).apply(image)
        } else {
            SobelX::new(self.border).apply(image)
        }
    }
}
