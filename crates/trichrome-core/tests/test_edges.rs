mod common;

use common::{gray, solid};
use trichrome_core::edges::canny;

#[test]
fn test_constant_images_have_no_edges() {
    let edges = canny(&solid(16, 16, 120), 10, 30).unwrap();
    for r in 0..16 {
        for c in 0..16 {
            assert_eq!(edges.pixel(r, c), [0, 0, 0]);
        }
    }
}

#[test]
fn test_output_is_strictly_binary() {
    let image = gray(32, 32, |r, c| {
        if (10..22).contains(&r) && (10..22).contains(&c) {
            255
        } else {
            0
        }
    });
    let edges = canny(&image, 10, 30).unwrap();
    for r in 0..32 {
        for c in 0..32 {
            let px = edges.pixel(r, c);
            assert!(px == [0, 0, 0] || px == [255, 255, 255], "({r},{c}): {px:?}");
        }
    }
}

#[test]
fn test_edges_trace_the_outline_of_a_square() {
    let image = gray(32, 32, |r, c| {
        if (10..22).contains(&r) && (10..22).contains(&c) {
            255
        } else {
            0
        }
    });
    let edges = canny(&image, 10, 30).unwrap();

    let mut white = 0;
    for r in 0..32 {
        for c in 0..32 {
            if edges.pixel(r, c)[0] == 255 {
                white += 1;
                // Every edge pixel hugs the square outline: inside the
                // dilated square but not deep inside it.
                assert!((6..=25).contains(&r) && (6..=25).contains(&c), "({r},{c})");
                assert!(
                    !((14..=17).contains(&r) && (14..=17).contains(&c)),
                    "({r},{c})"
                );
            }
        }
    }
    assert!(white >= 20, "only {white} edge pixels found");
}

#[test]
fn test_unreachable_thresholds_suppress_everything() {
    let image = gray(32, 32, |r, c| {
        if (10..22).contains(&r) && (10..22).contains(&c) {
            255
        } else {
            0
        }
    });
    let edges = canny(&image, 100_000, 200_000).unwrap();
    for r in 0..32 {
        for c in 0..32 {
            assert_eq!(edges.pixel(r, c), [0, 0, 0]);
        }
    }
}
