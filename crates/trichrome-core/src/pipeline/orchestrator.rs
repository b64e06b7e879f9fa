//! The alignment state machine: split, crop, pyramid, search, merge.
//!
//! Stages run strictly in order with no retry; any failure aborts the run.
//! The per-channel stages are independent and run under Rayon purely as a
//! performance optimization — only the merge serializes on both offsets.

use std::path::Path;

use tracing::info;

use crate::consts::{
    BORDER_CANNY_HIGH, BORDER_CANNY_LOW, BORDER_NULLABLE, BORDER_SCAN_FRACTION, CROP_AREA_LIMIT,
    PYRAMID_MIN_LEN, PYRAMID_SCALE, SEARCH_WINDOW_COARSE, SEARCH_WINDOW_REFINE,
    SIMPLE_CROP_COL_FRACTION, SIMPLE_CROP_ROW_FRACTION,
};
use crate::crop::{crop_borders, simple_crop};
use crate::error::Result;
use crate::filters::registry::ImageFilter;
use crate::io::load_image;
use crate::merge::merge_channels;
use crate::plate::{split_channels, Image};
use crate::pyramid::build_pyramid;
use crate::resample::resize;
use crate::search::{best_shift_by_mse, best_shift_for_pyramids};

use super::config::AlignConfig;
use super::events::{PipelineEvent, Subscriber};

/// Apply `f` to three values concurrently.
fn join3<T, R, F>(items: [T; 3], f: F) -> [R; 3]
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Sync,
{
    let [a, b, c] = items;
    let (ra, (rb, rc)) = rayon::join(|| f(a), || rayon::join(|| f(b), || f(c)));
    [ra, rb, rc]
}

pub struct AlignmentPipeline {
    config: AlignConfig,
    subscribers: Vec<Subscriber>,
}

impl AlignmentPipeline {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            subscribers: Vec::new(),
        }
    }

    /// Register a lifecycle event listener.
    pub fn subscribe(&mut self, subscriber: impl FnMut(PipelineEvent, Option<&Image>) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&mut self, event: PipelineEvent, image: Option<&Image>) {
        for subscriber in &mut self.subscribers {
            subscriber(event, image);
        }
    }

    /// Load a plate from disk and align it.
    pub fn run_file(&mut self, input: &Path) -> Result<Image> {
        let plate = load_image(input)?;
        info!(rows = plate.rows(), cols = plate.cols(), "plate loaded");
        self.emit(PipelineEvent::ImageLoaded, None);
        self.run(&plate)
    }

    /// Align an already loaded plate into one color image.
    pub fn run(&mut self, plate: &Image) -> Result<Image> {
        let config = self.config.clone();

        let mut channels = split_channels(plate)?;
        self.emit(PipelineEvent::ChannelsSplit, None);

        if let Some(scale) = config.subpixel {
            let resized = join3(channels, |ch| resize(&ch, scale, config.interpolation));
            let [top, mid, bot] = resized;
            channels = [top?, mid?, bot?];
            info!(scale, "channels pre-scaled for sub-pixel search");
        }

        // Edge-based cropping is worth it only on small channels. On large
        // ones the cheap fixed-fraction crop feeds the search, and the merge
        // must run on uncropped copies so crop losses do not compound into
        // the composite dimensions.
        let edge_crop = channels[0].rows() * channels[0].cols() <= CROP_AREA_LIMIT;
        let uncropped = (!edge_crop).then(|| channels.clone());

        let cropped = join3(channels, |ch| {
            if edge_crop {
                let count_rows = (ch.rows() as f64 * BORDER_SCAN_FRACTION) as usize;
                let count_cols = (ch.cols() as f64 * BORDER_SCAN_FRACTION) as usize;
                crop_borders(
                    &ch,
                    BORDER_CANNY_LOW,
                    BORDER_CANNY_HIGH,
                    count_rows,
                    count_cols,
                    BORDER_NULLABLE,
                )
            } else {
                simple_crop(&ch, SIMPLE_CROP_ROW_FRACTION, SIMPLE_CROP_COL_FRACTION)
            }
        });
        let [top, mid, bot] = cropped;
        let channels = [top?, mid?, bot?];
        info!(edge_crop, "channel borders cropped");
        self.emit(PipelineEvent::Cropped, None);

        let pyramids = join3(channels.clone(), |ch| {
            build_pyramid(&ch, PYRAMID_SCALE, PYRAMID_MIN_LEN, config.interpolation)
        });
        let [pyr_top, pyr_mid, pyr_bot] = pyramids;
        let (pyr_top, pyr_mid, pyr_bot) = (pyr_top?, pyr_mid?, pyr_bot?);

        let search = |other: &[Image]| {
            best_shift_for_pyramids(
                &pyr_mid,
                other,
                best_shift_by_mse,
                SEARCH_WINDOW_COARSE,
                SEARCH_WINDOW_REFINE,
                PYRAMID_SCALE,
            )
        };
        let (blue_shift, red_shift) = rayon::join(|| search(&pyr_top), || search(&pyr_bot));
        let (blue_shift, red_shift) = (blue_shift?, red_shift?);
        info!(?blue_shift, ?red_shift, "channel offsets found");

        let sources = uncropped.as_ref().unwrap_or(&channels);
        let mut result = merge_channels(
            &sources[1],
            &sources[0],
            &sources[2],
            blue_shift,
            red_shift,
        )?;

        if let Some(scale) = config.subpixel {
            result = resize(&result, 1.0 / scale, config.interpolation)?;
        }

        info!(rows = result.rows(), cols = result.cols(), "channels merged");
        self.emit(PipelineEvent::Aligned, Some(&result));
        Ok(result)
    }

    /// Drive a filter's configuration dialogue to completion, then apply it.
    ///
    /// `respond` answers each prompt (e.g. from stdin); filter errors
    /// propagate unmodified.
    pub fn postprocess<R>(
        &mut self,
        image: &Image,
        filter: &mut dyn ImageFilter,
        mut respond: R,
    ) -> Result<Image>
    where
        R: FnMut(&str) -> Result<String>,
    {
        while let Some(prompt) = filter.prompt() {
            let answer = respond(&prompt)?;
            filter.submit(&answer)?;
        }
        let result = filter.apply(image)?;
        info!(filter = filter.name(), "result postprocessed");
        self.emit(PipelineEvent::PostProcessed, Some(&result));
        Ok(result)
    }
}
