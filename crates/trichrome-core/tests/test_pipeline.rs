mod common;

use std::sync::{Arc, Mutex};

use common::blob;
use trichrome_core::io::save_image;
use trichrome_core::pipeline::config::AlignConfig;
use trichrome_core::pipeline::{AlignmentPipeline, PipelineEvent};
use trichrome_core::plate::{stack_channels, Image};
use trichrome_core::resample::ResampleMethod;

/// Plate of three stacked 64x80 exposures of the same blob, with the top
/// channel displaced by (2, 1) and the bottom one by (-1, 2) relative to the
/// middle reference. The gradient is shallow enough that the border cropper
/// finds no edges and leaves the channels whole.
fn synthetic_plate() -> Image {
    let middle = blob(64, 80, 32.0, 40.0, 1.0);
    let top = blob(64, 80, 30.0, 39.0, 1.0);
    let bottom = blob(64, 80, 33.0, 38.0, 1.0);
    stack_channels(&[top, middle, bottom]).unwrap()
}

#[test]
fn test_alignment_registers_all_three_channels() {
    let plate = synthetic_plate();
    let mut pipeline = AlignmentPipeline::new(AlignConfig::default());
    let result = pipeline.run(&plate).unwrap();

    // Offsets (2,1) and (-1,2) against 64x80 channels leave a 61x78 overlap.
    assert_eq!((result.rows(), result.cols()), (61, 78));

    // The exposures are identical up to translation, so perfect registration
    // makes every output pixel gray.
    for r in 0..result.rows() {
        for c in 0..result.cols() {
            let [red, green, blue] = result.pixel(r, c);
            assert_eq!(red, green, "({r},{c})");
            assert_eq!(green, blue, "({r},{c})");
        }
    }
}

#[test]
fn test_subpixel_alignment_round_trips_through_the_prescale() {
    let plate = synthetic_plate();
    let config = AlignConfig {
        subpixel: Some(2.0),
        interpolation: ResampleMethod::Bilinear,
        ..Default::default()
    };
    let mut pipeline = AlignmentPipeline::new(config);
    let result = pipeline.run(&plate).unwrap();

    // The doubled channels overlap in 122x156 pixels; the inverse rescale
    // halves that back down.
    assert_eq!((result.rows(), result.cols()), (61, 78));
    for r in 0..result.rows() {
        for c in 0..result.cols() {
            let [red, green, blue] = result.pixel(r, c);
            assert_eq!(red, green, "({r},{c})");
            assert_eq!(green, blue, "({r},{c})");
        }
    }
}

#[test]
fn test_lifecycle_events_fire_once_each_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plate.png");
    save_image(&synthetic_plate(), &input).unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let seen = events.clone();

    let mut pipeline = AlignmentPipeline::new(AlignConfig::default());
    pipeline.subscribe(move |event, _| seen.lock().unwrap().push(event));

    let result = pipeline.run_file(&input).unwrap();
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            PipelineEvent::ImageLoaded,
            PipelineEvent::ChannelsSplit,
            PipelineEvent::Cropped,
            PipelineEvent::Aligned,
        ]
    );

    let registry = trichrome_core::filters::FilterRegistry::with_builtins();
    let mut filter = registry
        .create("gray-world", Default::default())
        .unwrap();
    pipeline
        .postprocess(&result, filter.as_mut(), |_| {
            panic!("gray-world has no prompts")
        })
        .unwrap();
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&PipelineEvent::PostProcessed)
    );
}

#[test]
fn test_filter_prompts_are_driven_to_completion() {
    let image = blob(16, 16, 8.0, 8.0, 6.0);
    let registry = trichrome_core::filters::FilterRegistry::with_builtins();
    let mut filter = registry.create("median", Default::default()).unwrap();

    let mut pipeline = AlignmentPipeline::new(AlignConfig::default());
    let answers = Arc::new(Mutex::new(vec!["1".to_string(), "1".to_string()]));
    let queue = answers.clone();
    let filtered = pipeline
        .postprocess(&image, filter.as_mut(), move |_prompt| {
            Ok(queue.lock().unwrap().remove(0))
        })
        .unwrap();

    assert!(answers.lock().unwrap().is_empty(), "both prompts consumed");
    let expected = trichrome_core::filters::median::median_linear(&image, 1).unwrap();
    assert_eq!(filtered, expected);
}
