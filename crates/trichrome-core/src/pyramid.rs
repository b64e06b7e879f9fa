use crate::error::Result;
use crate::plate::Image;
use crate::resample::{resize, ResampleMethod};

/// Build a multi-resolution pyramid for one channel.
///
/// Level 0 is a copy of the source; each following level is the previous one
/// resized by `scale` (< 1). Levels are appended while their shorter side
/// stays at least `min_len` long, so the result always holds level 0 and the
/// coarsest level comes last.
pub fn build_pyramid(
    image: &Image,
    scale: f64,
    min_len: usize,
    method: ResampleMethod,
) -> Result<Vec<Image>> {
    let mut levels = vec![image.clone()];
    loop {
        let prev = levels.last().expect("pyramid holds at least level 0");
        let next_rows = (prev.rows() as f64 * scale) as usize;
        let next_cols = (prev.cols() as f64 * scale) as usize;
        if next_rows.min(next_cols) < min_len {
            break;
        }
        let next = resize(prev, scale, method)?;
        levels.push(next);
    }
    Ok(levels)
}
