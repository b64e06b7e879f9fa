use crate::error::Result;
use crate::metrics::cross_three;
use crate::plate::{Image, Offset};

/// Interleave three aligned channels into one color image.
///
/// `green` is the reference; `blue` and `red` are translated by their
/// offsets, named for the plate's top-to-bottom blue/green/red emulsion
/// order. The result covers exactly the three-way overlap region, reading
/// the first stored channel of every input.
pub fn merge_channels(
    green: &Image,
    blue: &Image,
    red: &Image,
    blue_shift: Offset,
    red_shift: Offset,
) -> Result<Image> {
    let region = cross_three(green, blue, red, blue_shift, red_shift)?;

    let mut out = Image::zeros(region.height, region.width);
    for r in 0..region.height {
        let gr = region.up + r;
        let br = (gr as i64 - blue_shift.row as i64) as usize;
        let rr = (gr as i64 - red_shift.row as i64) as usize;
        for c in 0..region.width {
            let gc = region.left + c;
            let bc = (gc as i64 - blue_shift.col as i64) as usize;
            let rc = (gc as i64 - red_shift.col as i64) as usize;
            out.set_pixel(
                r,
                c,
                [red.plane0(rr, rc), green.plane0(gr, gc), blue.plane0(br, bc)],
            );
        }
    }
    Ok(out)
}
