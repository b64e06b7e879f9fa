mod common;

use common::{gray, noise};
use trichrome_core::metrics::{
    cross_correlation, cross_region, cross_two, mse, sum_overlap, CrossRegion,
};
use trichrome_core::plate::Offset;

#[test]
fn test_cross_region_of_identical_images_at_zero_offset() {
    let a = noise(5, 5, 3);
    let region = cross_two(&a, &a, Offset::default()).unwrap();
    assert_eq!(
        region,
        CrossRegion {
            up: 0,
            left: 0,
            height: 5,
            width: 5
        }
    );
}

#[test]
fn test_translating_the_shifted_image_moves_the_region_not_its_size() {
    let base = (10usize, 10usize);
    let other = (5usize, 5usize);

    let first = cross_region(base, &[(other, Offset::new(2, 3))]).unwrap();
    let second = cross_region(base, &[(other, Offset::new(3, 4))]).unwrap();

    assert_eq!(second.up, first.up + 1);
    assert_eq!(second.left, first.left + 1);
    assert_eq!(second.height, first.height);
    assert_eq!(second.width, first.width);
}

#[test]
fn test_disjoint_images_have_no_cross_region() {
    let a = noise(5, 5, 1);
    let b = noise(5, 5, 2);
    assert!(cross_two(&a, &b, Offset::new(10, 10)).is_err());
    assert!(cross_two(&a, &b, Offset::new(-10, 0)).is_err());
    assert!(cross_two(&a, &b, Offset::new(5, 0)).is_err());
}

#[test]
fn test_zero_sized_inputs_are_rejected() {
    assert!(cross_region((0, 5), &[((5, 5), Offset::default())]).is_err());
    assert!(cross_region((5, 5), &[((5, 0), Offset::default())]).is_err());
}

#[test]
fn test_mse_of_identical_images_is_zero() {
    let a = noise(9, 7, 11);
    assert_eq!(mse(&a, &a, Offset::default()).unwrap(), 0.0);
}

#[test]
fn test_mse_of_constant_difference() {
    let a = gray(1, 1, |_, _| 2);
    let b = gray(1, 1, |_, _| 5);
    assert_eq!(mse(&a, &b, Offset::default()).unwrap(), 9.0);
}

#[test]
fn test_cross_correlation_of_an_image_with_itself() {
    let a = gray(2, 2, |r, c| (r * 2 + c + 1) as u8);
    let expected: u64 = [1u64, 2, 3, 4].iter().map(|v| v * v).sum();
    assert_eq!(cross_correlation(&a, &a, Offset::default()).unwrap(), expected);
}

#[test]
fn test_sum_overlap_restricts_to_the_overlap() {
    // 2x2 images offset by (1, 1) overlap in a single pixel pair:
    // base (1,1) against other (0,0).
    let a = gray(2, 2, |r, c| (r * 2 + c + 1) as u8);
    let b = gray(2, 2, |r, c| (r * 2 + c + 10) as u8);
    let sum = sum_overlap(&a, &b, Offset::new(1, 1), |x, y| x as u64 + y as u64).unwrap();
    assert_eq!(sum, 4 + 10);
}
