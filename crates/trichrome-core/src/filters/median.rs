//! Median filtering in three equivalent implementations.
//!
//! All three produce pixel-identical output; they differ only in per-pixel
//! cost: `simple` re-sorts every window, `linear` slides one histogram per
//! row, `constant` maintains per-column histograms merged into the kernel
//! histogram so each step touches O(radius) buckets regardless of window
//! size. Images too small for the window are returned unchanged.

use crate::error::Result;
use crate::filters::histogram::Histogram;
use crate::plate::Image;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MedianVariant {
    Simple,
    Linear,
    Constant,
}

pub fn apply_median(image: &Image, radius: usize, variant: MedianVariant) -> Result<Image> {
    match variant {
        MedianVariant::Simple => median_simple(image, radius),
        MedianVariant::Linear => median_linear(image, radius),
        MedianVariant::Constant => median_constant(image, radius),
    }
}

fn window_fits(image: &Image, radius: usize) -> bool {
    2 * radius + 1 <= image.rows() && 2 * radius + 1 <= image.cols()
}

/// Selection-based median over every window.
pub fn median_simple(image: &Image, radius: usize) -> Result<Image> {
    let mut out = image.clone();
    if !window_fits(image, radius) {
        return Ok(out);
    }

    let window_len = (2 * radius + 1) * (2 * radius + 1);
    let mut values = vec![[0u8; 3]; window_len];

    for row in radius..image.rows() - radius {
        for col in radius..image.cols() - radius {
            let mut n = 0;
            for r in row - radius..=row + radius {
                for c in col - radius..=col + radius {
                    values[n] = image.pixel(r, c);
                    n += 1;
                }
            }
            let mut pixel = [0u8; 3];
            for ch in 0..3 {
                let mut plane: Vec<u8> = values.iter().map(|px| px[ch]).collect();
                let mid = plane.len() / 2;
                pixel[ch] = *plane.select_nth_unstable(mid).1;
            }
            out.set_pixel(row, col, pixel);
        }
    }
    Ok(out)
}

/// Sliding-histogram median: one add/remove column pair per step along a row.
pub fn median_linear(image: &Image, radius: usize) -> Result<Image> {
    let mut out = image.clone();
    if !window_fits(image, radius) {
        return Ok(out);
    }

    let mut hists: [Histogram; 3] = Default::default();

    for row in radius..image.rows() - radius {
        for col in radius..image.cols() - radius {
            if col == radius {
                for h in &mut hists {
                    h.clear();
                }
                for r in row - radius..=row + radius {
                    for c in col - radius..=col + radius {
                        let px = image.pixel(r, c);
                        for ch in 0..3 {
                            hists[ch].add(px[ch] as usize)?;
                        }
                    }
                }
            } else {
                for r in row - radius..=row + radius {
                    let gone = image.pixel(r, col - radius - 1);
                    let new = image.pixel(r, col + radius);
                    for ch in 0..3 {
                        hists[ch].remove(gone[ch] as usize)?;
                        hists[ch].add(new[ch] as usize)?;
                    }
                }
            }
            let pixel = [
                hists[0].median()? as u8,
                hists[1].median()? as u8,
                hists[2].median()? as u8,
            ];
            out.set_pixel(row, col, pixel);
        }
    }
    Ok(out)
}

/// Two-level histogram median: per-column histograms advance with the row,
/// and the kernel histogram is updated by merging/unmerging whole columns.
pub fn median_constant(image: &Image, radius: usize) -> Result<Image> {
    let mut out = image.clone();
    if !window_fits(image, radius) {
        return Ok(out);
    }

    let cols = image.cols();
    let mut column_hists: Vec<[Histogram; 3]> = (0..cols).map(|_| Default::default()).collect();
    for (col, hists) in column_hists.iter_mut().enumerate() {
        for row in 0..2 * radius + 1 {
            let px = image.pixel(row, col);
            for ch in 0..3 {
                hists[ch].add(px[ch] as usize)?;
            }
        }
    }

    let mut kernel: [Histogram; 3] = Default::default();

    for row in radius..image.rows() - radius {
        if row != radius {
            for (col, hists) in column_hists.iter_mut().enumerate() {
                let gone = image.pixel(row - radius - 1, col);
                let new = image.pixel(row + radius, col);
                for ch in 0..3 {
                    hists[ch].remove(gone[ch] as usize)?;
                    hists[ch].add(new[ch] as usize)?;
                }
            }
        }
        for col in radius..cols - radius {
            if col == radius {
                for h in &mut kernel {
                    h.clear();
                }
                for source in &column_hists[col - radius..=col + radius] {
                    for ch in 0..3 {
                        kernel[ch].merge(&source[ch]);
                    }
                }
            } else {
                for ch in 0..3 {
                    kernel[ch].unmerge(&column_hists[col - radius - 1][ch])?;
                    kernel[ch].merge(&column_hists[col + radius][ch]);
                }
            }
            let pixel = [
                kernel[0].median()? as u8,
                kernel[1].median()? as u8,
                kernel[2].median()? as u8,
            ];
            out.set_pixel(row, col, pixel);
        }
    }
    Ok(out)
}
