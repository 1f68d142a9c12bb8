//! Histogram construction from decoded images
//!
//! Every pixel is reduced to its 8-bit RGB value and counted. Fully
//! transparent pixels carry no color and are skipped. Partially
//! transparent pixels either keep their RGB as-is or, when a background
//! color is configured, are composited over it first.

use crate::IoResult;
use colorsig_core::{Histogram, PackedColor};
use image::DynamicImage;
use log::debug;
use std::path::Path;

/// Options for building a histogram from an image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistogramOptions {
    /// Color to composite partially transparent pixels over
    pub background: Option<PackedColor>,
}

#[inline]
fn blend_channel(fg: u8, bg: u8, alpha: f64) -> u8 {
    (fg as f64 * alpha + bg as f64 * (1.0 - alpha))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Resolve one RGBA pixel to the color it contributes, if any
#[inline]
fn pixel_color(rgba: [u8; 4], background: Option<PackedColor>) -> Option<PackedColor> {
    let [r, g, b, a] = rgba;
    match (a, background) {
        (0, _) => None,
        (255, _) | (_, None) => Some(PackedColor::from_rgb(r, g, b)),
        (_, Some(bg)) => {
            let alpha = a as f64 / 255.0;
            Some(PackedColor::from_rgb(
                blend_channel(r, bg.red(), alpha),
                blend_channel(g, bg.green(), alpha),
                blend_channel(b, bg.blue(), alpha),
            ))
        }
    }
}

/// Count the colors of a decoded image
pub fn histogram_from_image(image: &DynamicImage, options: &HistogramOptions) -> Histogram {
    let rgba = image.to_rgba8();
    let mut histogram = Histogram::new();
    let mut transparent = 0u64;

    for pixel in rgba.pixels() {
        match pixel_color(pixel.0, options.background) {
            Some(color) => histogram.add_pixel(color),
            None => transparent += 1,
        }
    }

    debug!(
        "{}x{} image: {} distinct colors, {} transparent pixels skipped",
        rgba.width(),
        rgba.height(),
        histogram.len(),
        transparent
    );
    histogram
}

/// Decode an encoded image held in memory and count its colors
pub fn histogram_from_memory(data: &[u8], options: &HistogramOptions) -> IoResult<Histogram> {
    let image = image::load_from_memory(data)?;
    Ok(histogram_from_image(&image, options))
}

/// Read an image file and count its colors
///
/// The format is detected from the file contents and extension.
pub fn read_histogram<P: AsRef<Path>>(path: P, options: &HistogramOptions) -> IoResult<Histogram> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    Ok(histogram_from_image(&image, options))
}
