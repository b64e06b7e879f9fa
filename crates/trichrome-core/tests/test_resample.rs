mod common;

use common::{gray, noise, solid};
use trichrome_core::resample::{resize, ResampleMethod};

#[test]
fn test_output_dimensions_round_down() {
    let image = noise(10, 7, 4);
    let half = resize(&image, 0.5, ResampleMethod::Bilinear).unwrap();
    assert_eq!((half.rows(), half.cols()), (5, 3));

    let grown = resize(&image, 1.3, ResampleMethod::Bilinear).unwrap();
    assert_eq!((grown.rows(), grown.cols()), (13, 9));
}

#[test]
fn test_constant_images_stay_constant() {
    let image = solid(8, 8, 77);
    for method in [ResampleMethod::Bilinear, ResampleMethod::Bicubic] {
        for scale in [0.5, 2.0] {
            let resized = resize(&image, scale, method).unwrap();
            for r in 0..resized.rows() {
                for c in 0..resized.cols() {
                    assert_eq!(resized.pixel(r, c), [77, 77, 77], "{method:?} x{scale}");
                }
            }
        }
    }
}

#[test]
fn test_bilinear_interpolates_midpoints() {
    let values = [[0u8, 100], [50, 150]];
    let image = gray(2, 2, |r, c| values[r][c]);
    let doubled = resize(&image, 2.0, ResampleMethod::Bilinear).unwrap();

    assert_eq!(doubled.pixel(0, 0)[0], 0);
    assert_eq!(doubled.pixel(0, 1)[0], 50);
    assert_eq!(doubled.pixel(1, 0)[0], 25);
    assert_eq!(doubled.pixel(1, 1)[0], 75);
}

#[test]
fn test_bilinear_halving_decimates_even_pixels() {
    let image = noise(4, 4, 9);
    let half = resize(&image, 0.5, ResampleMethod::Bilinear).unwrap();
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(half.pixel(r, c), image.pixel(2 * r, 2 * c));
        }
    }
}

#[test]
fn test_invalid_geometry_is_rejected() {
    let image = noise(10, 10, 2);
    assert!(resize(&image, 0.0, ResampleMethod::Bilinear).is_err());
    assert!(resize(&image, -1.0, ResampleMethod::Bicubic).is_err());
    assert!(resize(&image, 0.01, ResampleMethod::Bilinear).is_err());

    // Bicubic needs a 4x4 neighbourhood.
    let tiny = noise(3, 3, 2);
    assert!(resize(&tiny, 2.0, ResampleMethod::Bicubic).is_err());
    assert!(resize(&tiny, 2.0, ResampleMethod::Bilinear).is_ok());
}
