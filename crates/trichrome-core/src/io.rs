use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::plate::Image;

/// Load any image the `image` crate can decode into an 8-bit RGB raster.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)?.to_rgb8();
    let (w, h) = decoded.dimensions();
    Ok(Image::from_fn(h as usize, w as usize, |r, c| {
        decoded.get_pixel(c as u32, r as u32).0
    }))
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    let mut out = RgbImage::new(image.cols() as u32, image.rows() as u32);
    for r in 0..image.rows() {
        for c in 0..image.cols() {
            out.put_pixel(c as u32, r as u32, Rgb(image.pixel(r, c)));
        }
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => out.save_with_format(path, ImageFormat::Png)?,
        Some("tiff" | "tif") => out.save_with_format(path, ImageFormat::Tiff)?,
        _ => out.save(path)?,
    }
    Ok(())
}
