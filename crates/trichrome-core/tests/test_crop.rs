mod common;

use common::{gray, noise};
use trichrome_core::crop::{crop_borders, simple_crop};
use trichrome_core::plate::Image;

#[test]
fn test_simple_crop_discards_rounded_fractions() {
    let image = noise(10, 10, 21);
    let cropped = simple_crop(&image, 0.25, 0.1).unwrap();

    // round(10 * 0.25) = 3 rows and round(10 * 0.1) = 1 column per side.
    assert_eq!((cropped.rows(), cropped.cols()), (4, 8));
    assert_eq!(cropped, image.submatrix(3, 1, 4, 8).unwrap());
}

#[test]
fn test_simple_crop_fails_when_nothing_remains() {
    let image = noise(10, 10, 5);
    assert!(simple_crop(&image, 0.5, 0.1).is_err());
}

#[test]
fn test_zero_scan_budget_keeps_the_whole_plate() {
    let image = noise(20, 20, 13);
    let cropped = crop_borders(&image, 10, 30, 0, 0, 2).unwrap();
    assert_eq!(cropped, image);
}

/// Plate with bright 8-pixel bands on every side and textured content inside.
fn framed_plate() -> Image {
    let content = noise(60, 60, 77);
    gray(60, 60, |r, c| {
        if r < 8 || r >= 52 || c < 8 || c >= 52 {
            220
        } else {
            20 + content.pixel(r, c)[0] / 4
        }
    })
}

#[test]
fn test_crop_borders_trims_the_bright_frame() {
    let plate = framed_plate();
    let cropped = crop_borders(&plate, 10, 30, 12, 12, 2).unwrap();

    // Each boundary lands on or near the band edge, never outside the
    // scanned window.
    assert!(cropped.rows() < 60 && cropped.cols() < 60);
    assert!((30..=52).contains(&cropped.rows()), "{}", cropped.rows());
    assert!((30..=52).contains(&cropped.cols()), "{}", cropped.cols());
}

#[test]
fn test_crop_boundaries_never_leave_the_scanned_window() {
    let image = noise(30, 30, 55);
    let cropped = crop_borders(&image, 10, 30, 3, 3, 0).unwrap();
    // At most the first three lines per side are candidates, so no boundary
    // can sit deeper than index 2.
    assert!(cropped.rows() >= 30 - 2 * 2);
    assert!(cropped.cols() >= 30 - 2 * 2);
}
