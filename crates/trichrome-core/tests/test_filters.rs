mod common;

use approx::assert_relative_eq;
use common::{gray, noise, solid};
use trichrome_core::filters::balance::{autocontrast, gray_world};
use trichrome_core::filters::gaussian::{
    gaussian_kernel, separable_gaussian_kernels, GaussianFilter, SeparableGaussianFilter,
};
use trichrome_core::filters::kernel::BorderMode;
use trichrome_core::filters::mirror::{mirror, unmirror};
use trichrome_core::filters::sobel::SobelX;
use trichrome_core::filters::unsharp::UnsharpFilter;
use trichrome_core::filters::PointFilter;
use trichrome_core::plate::Image;

#[test]
fn test_gaussian_kernels_are_normalized() {
    let kernel = gaussian_kernel(2, 1.4);
    assert_relative_eq!(kernel.sum(), 1.0, epsilon = 1e-12);

    let (horizontal, vertical) = separable_gaussian_kernels(3, 0.8);
    assert_relative_eq!(horizontal.sum(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(vertical.sum(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_separable_and_full_gaussian_agree_on_the_interior() {
    let image = noise(24, 24, 17);
    let radius = 2;
    let full = GaussianFilter::new(radius, 1.4, BorderMode::Keep)
        .apply(&image)
        .unwrap();
    let separable = SeparableGaussianFilter::new(radius, 1.4, BorderMode::Keep)
        .apply(&image)
        .unwrap();

    for r in radius..image.rows() - radius {
        for c in radius..image.cols() - radius {
            let a = full.pixel(r, c);
            let b = separable.pixel(r, c);
            for ch in 0..3 {
                let diff = (a[ch] as i16 - b[ch] as i16).abs();
                assert!(diff <= 1, "({r},{c}) ch{ch}: {} vs {}", a[ch], b[ch]);
            }
        }
    }
}

#[test]
fn test_mirror_reflects_borders_and_unmirror_inverts_it() {
    let image = gray(3, 3, |r, c| (r * 3 + c) as u8);
    let padded = mirror(&image, 1).unwrap();

    assert_eq!((padded.rows(), padded.cols()), (5, 5));
    // Corners repeat the source corners.
    assert_eq!(padded.pixel(0, 0), image.pixel(0, 0));
    assert_eq!(padded.pixel(0, 4), image.pixel(0, 2));
    assert_eq!(padded.pixel(4, 0), image.pixel(2, 0));
    assert_eq!(padded.pixel(4, 4), image.pixel(2, 2));
    // The interior is the source itself.
    assert_eq!(unmirror(&padded, 1).unwrap(), image);

    let wide = noise(5, 6, 3);
    assert_eq!(unmirror(&mirror(&wide, 2).unwrap(), 2).unwrap(), wide);
}

#[test]
fn test_mirror_rejects_oversized_radius() {
    let image = noise(3, 3, 1);
    assert!(mirror(&image, 4).is_err());
}

#[test]
fn test_unsharp_preserves_constant_images() {
    let image = solid(9, 9, 100);
    let sharpened = UnsharpFilter::new().apply(&image).unwrap();
    assert_eq!(sharpened, image);
}

#[test]
fn test_sobel_responds_to_a_vertical_edge() {
    let image = gray(8, 8, |_, c| if c < 4 { 10 } else { 200 });
    let edges = SobelX::new(BorderMode::Keep).apply(&image).unwrap();

    // Flat regions give zero response; the step saturates.
    assert_eq!(edges.pixel(4, 1)[0], 0);
    assert_eq!(edges.pixel(4, 6)[0], 0);
    assert_eq!(edges.pixel(4, 3)[0], 255);
    assert_eq!(edges.pixel(4, 4)[0], 255);
}

#[test]
fn test_gray_world_equalizes_channel_means() {
    let image = Image::from_fn(6, 6, |_, _| [10, 20, 30]);
    let balanced = gray_world(&image);
    for r in 0..6 {
        for c in 0..6 {
            assert_eq!(balanced.pixel(r, c), [20, 20, 20]);
        }
    }
}

#[test]
fn test_autocontrast_stretches_the_full_range() {
    let image = gray(1, 51, |_, c| 50 + c as u8);
    let stretched = autocontrast(&image, 0.0);

    assert_eq!(stretched.pixel(0, 0)[0], 0);
    assert_eq!(stretched.pixel(0, 50)[0], 255);
    assert_eq!(stretched.pixel(0, 25)[0], 128);
}

#[test]
fn test_autocontrast_ignores_discarded_outliers() {
    // 98 pixels at 100, one dark and one bright outlier. Discarding 1% from
    // each end leaves a single-value histogram, which maps onto itself.
    let image = gray(1, 100, |_, c| match c {
        0 => 0,
        99 => 255,
        _ => 100,
    });
    let stretched = autocontrast(&image, 0.01);
    assert_eq!(stretched.pixel(0, 50)[0], 100);
}
