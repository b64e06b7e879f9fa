use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::plate::Image;

/// Gray-world white balance: rescale each channel so all three share the
/// image-wide mean intensity. Results saturate at 255.
pub fn gray_world(image: &Image) -> Image {
    let pixels = image.rows() * image.cols();
    if pixels == 0 {
        return image.clone();
    }

    let mut sums = [0u64; 3];
    for r in 0..image.rows() {
        for c in 0..image.cols() {
            let px = image.pixel(r, c);
            for ch in 0..3 {
                sums[ch] += px[ch] as u64;
            }
        }
    }

    let means = sums.map(|s| s as f64 / pixels as f64);
    let middle = (means[0] + means[1] + means[2]) / 3.0;
    let gains = means.map(|m| middle / m);

    Image::from_fn(image.rows(), image.cols(), |r, c| {
        let px = image.pixel(r, c);
        let mut balanced = [0u8; 3];
        for ch in 0..3 {
            let v = (px[ch] as f64 * gains[ch]).round();
            balanced[ch] = if v.is_finite() {
                v.clamp(0.0, 255.0) as u8
            } else {
                px[ch]
            };
        }
        balanced
    })
}

fn brightness(pixel: [u8; 3]) -> usize {
    let v = LUMINANCE_R * pixel[0] as f64
        + LUMINANCE_G * pixel[1] as f64
        + LUMINANCE_B * pixel[2] as f64;
    v.round().min(255.0) as usize
}

/// Linear contrast stretch after discarding `fraction` of the darkest and
/// brightest pixels (by luminance) from each end of the histogram.
pub fn autocontrast(image: &Image, fraction: f64) -> Image {
    let pixels = image.rows() * image.cols();
    if pixels == 0 {
        return image.clone();
    }

    let mut hist = [0usize; 256];
    for r in 0..image.rows() {
        for c in 0..image.cols() {
            hist[brightness(image.pixel(r, c))] += 1;
        }
    }

    let discard = (fraction * pixels as f64) as usize;

    let mut rest = discard;
    let mut lo = 0usize;
    while rest > 0 && lo < 255 {
        if hist[lo] <= rest {
            rest -= hist[lo];
            hist[lo] = 0;
            lo += 1;
        } else {
            hist[lo] -= rest;
            rest = 0;
        }
    }

    let mut rest = discard;
    let mut hi = 255usize;
    while rest > 0 && hi > 0 {
        if hist[hi] <= rest {
            rest -= hist[hi];
            hist[hi] = 0;
            hi -= 1;
        } else {
            hist[hi] -= rest;
            rest = 0;
        }
    }

    while lo < 255 && hist[lo] == 0 {
        lo += 1;
    }
    while hi > 0 && hist[hi] == 0 {
        hi -= 1;
    }

    if hi <= lo {
        return image.clone();
    }

    let stretch = |v: u8| -> u8 {
        let scaled = ((v as f64 - lo as f64) * 255.0 / (hi - lo) as f64).round();
        scaled.clamp(0.0, 255.0) as u8
    };

    Image::from_fn(image.rows(), image.cols(), |r, c| {
        image.pixel(r, c).map(stretch)
    })
}
