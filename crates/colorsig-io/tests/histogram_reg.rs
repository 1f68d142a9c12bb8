//! Image histogram regression test
//!
//! Writes small PNG images and reads them back as color histograms,
//! covering transparency handling and background compositing.

use colorsig_core::PackedColor;
use colorsig_io::{HistogramOptions, IoError, histogram_from_memory, read_histogram};
use colorsig_test::{RegParams, regout_path};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

fn c(v: u32) -> PackedColor {
    PackedColor::new(v).unwrap()
}

#[test]
fn histogram_rgb_reg() {
    let mut rp = RegParams::new("histogram_rgb");

    // 8x4: left half red, right half blue, one green pixel
    let mut img = RgbImage::from_fn(8, 4, |x, _| {
        if x < 4 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    img.put_pixel(7, 3, Rgb([0, 255, 0]));

    let path = regout_path("histogram_rgb.png").unwrap();
    img.save(&path).unwrap();

    let hist = read_histogram(&path, &HistogramOptions::default()).unwrap();
    rp.compare_values(3.0, hist.len() as f64, 0.0);
    rp.compare_values(32.0, hist.total() as f64, 0.0);
    rp.compare_values(16.0, hist.count(c(0xff0000)) as f64, 0.0);
    rp.compare_values(15.0, hist.count(c(0x0000ff)) as f64, 0.0);
    rp.compare_values(1.0, hist.count(c(0x00ff00)) as f64, 0.0);

    // The background only affects translucent pixels
    let with_bg = read_histogram(
        &path,
        &HistogramOptions {
            background: Some(PackedColor::WHITE),
        },
    )
    .unwrap();
    rp.compare_values(1.0, if with_bg == hist { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "histogram rgb regression test failed");
}

#[test]
fn histogram_alpha_reg() {
    let mut rp = RegParams::new("histogram_alpha");

    // Row 0 opaque gray, row 1 fully transparent, row 2 half-transparent black
    let img = RgbaImage::from_fn(5, 3, |_, y| match y {
        0 => Rgba([128, 128, 128, 255]),
        1 => Rgba([255, 0, 0, 0]),
        _ => Rgba([0, 0, 0, 128]),
    });
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    // --- No background: translucent pixels keep their RGB ---
    let plain = histogram_from_memory(&png, &HistogramOptions::default()).unwrap();
    rp.compare_values(10.0, plain.total() as f64, 0.0);
    rp.compare_values(5.0, plain.count(c(0x808080)) as f64, 0.0);
    rp.compare_values(5.0, plain.count(PackedColor::BLACK) as f64, 0.0);
    rp.compare_values(0.0, plain.count(c(0xff0000)) as f64, 0.0);

    // --- White background: half-black becomes mid gray ---
    let composited = histogram_from_memory(
        &png,
        &HistogramOptions {
            background: Some(PackedColor::WHITE),
        },
    )
    .unwrap();
    rp.compare_values(10.0, composited.total() as f64, 0.0);
    rp.compare_values(5.0, composited.count(c(0x7f7f7f)) as f64, 0.0);
    rp.compare_values(0.0, composited.count(PackedColor::BLACK) as f64, 0.0);

    // --- Fully transparent image gives an empty histogram ---
    let clear = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 0]));
    let mut png = Vec::new();
    clear
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    let empty = histogram_from_memory(&png, &HistogramOptions::default()).unwrap();
    rp.compare_values(1.0, if empty.is_empty() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "histogram alpha regression test failed");
}

#[test]
fn histogram_errors_reg() {
    let mut rp = RegParams::new("histogram_errors");

    let missing = read_histogram(
        regout_path("does_not_exist.png").unwrap(),
        &HistogramOptions::default(),
    );
    rp.compare_values(1.0, if matches!(missing, Err(IoError::Io(_))) { 1.0 } else { 0.0 }, 0.0);

    let garbage = histogram_from_memory(b"definitely not an image", &HistogramOptions::default());
    rp.compare_values(1.0, if garbage.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "histogram errors regression test failed");
}
