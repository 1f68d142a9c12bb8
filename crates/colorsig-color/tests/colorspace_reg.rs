//! Colorspace conversion regression test
//!
//! Tests RGB -> XYZ -> Lab reference values and the exact packed round
//! trip over the whole 24-bit cube.

use colorsig_color::{
    Lab, lab_to_packed, lab_to_rgb, lab_to_xyz, packed_to_lab, rgb_to_lab, rgb_to_xyz, xyz_to_lab,
    xyz_to_rgb,
};
use colorsig_core::PackedColor;
use colorsig_test::RegParams;

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Reference Lab values (sRGB, D65) ---
    for &((r, g, b), (l, a, bb)) in &[
        ((255, 0, 0), (53.2408, 80.0925, 67.2032)),
        ((0, 255, 0), (87.7347, -86.1827, 83.1793)),
        ((0, 0, 255), (32.2970, 79.1875, -107.8602)),
        ((255, 255, 255), (100.0, 0.0, 0.0)),
        ((0, 0, 0), (0.0, 0.0, 0.0)),
    ] {
        let lab = rgb_to_lab(r, g, b);
        rp.compare_values(l, lab.l, 1e-3);
        rp.compare_values(a, lab.a, 1e-3);
        rp.compare_values(bb, lab.b, 1e-3);
    }

    // --- White XYZ is the D65 white point ---
    let white = rgb_to_xyz(255, 255, 255);
    rp.compare_values(0.95047, white.x, 1e-6);
    rp.compare_values(1.0, white.y, 1e-6);
    rp.compare_values(1.08883, white.z, 1e-6);

    // --- XYZ <-> Lab is an inverse pair ---
    for &(r, g, b) in &[(255, 128, 0), (0, 128, 255), (64, 64, 64), (3, 2, 1)] {
        let xyz = rgb_to_xyz(r, g, b);
        let back = lab_to_xyz(xyz_to_lab(xyz));
        rp.compare_values(xyz.x, back.x, 1e-12);
        rp.compare_values(xyz.y, back.y, 1e-12);
        rp.compare_values(xyz.z, back.z, 1e-12);
        let (r2, g2, b2) = xyz_to_rgb(xyz);
        rp.compare_values(1.0, if (r, g, b) == (r2, g2, b2) { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Out-of-range Lab is clamped only at quantization ---
    let (r, g, b) = lab_to_rgb(Lab::new(-10.0, 0.0, 0.0));
    rp.compare_values(0.0, (r as u32 + g as u32 + b as u32) as f64, 0.0);
    let (r, g, b) = lab_to_rgb(Lab::new(110.0, 0.0, 0.0));
    rp.compare_values(765.0, (r as u32 + g as u32 + b as u32) as f64, 0.0);

    assert!(rp.cleanup(), "colorspace regression test failed");
}

#[test]
fn packed_round_trip_reg() {
    let mut rp = RegParams::new("packed_round_trip");

    let mut mismatches = 0u32;
    let mut first_mismatch = None;
    for value in 0..=0x00ff_ffffu32 {
        let color = PackedColor::new(value).unwrap();
        let back = lab_to_packed(packed_to_lab(color));
        if back != color {
            mismatches += 1;
            first_mismatch.get_or_insert((color, back));
        }
    }

    if let Some((color, back)) = first_mismatch {
        rp.compare_colors(color, back);
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    assert!(rp.cleanup(), "packed round trip regression test failed");
}
