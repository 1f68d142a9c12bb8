//! Color space conversion
//!
//! Provides conversion between the color spaces of the descriptor chain:
//! - RGB <-> linear sRGB (gamma expansion / compression)
//! - linear sRGB <-> CIE XYZ (D65 illuminant)
//! - CIE XYZ <-> CIE L*a*b*
//! - packed `0x00RRGGBB` <-> CIE L*a*b*
//!
//! All intermediate values are `f64`. Nothing is clamped until the final
//! quantization back to 8-bit channels, so out-of-gamut Lab values survive
//! the forward chain untouched.

use colorsig_core::PackedColor;

/// D65 reference white
pub const D65_XN: f64 = 0.95047;
pub const D65_YN: f64 = 1.0;
pub const D65_ZN: f64 = 1.08883;

/// Channel value (in [0, 1]) at or below which the sRGB curve is linear
const SRGB_LINEAR_LIMIT: f64 = 0.03928;

/// `(6/29)^3`, the split point of the Lab companding function
const LAB_EPSILON: f64 = 216.0 / 24389.0;

/// CIE L*a*b* color representation
///
/// - `l`: Lightness, [0.0, 100.0] for in-gamut sRGB
/// - `a`: Green-Red component
/// - `b`: Blue-Yellow component
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new LAB color
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis: `sqrt(a^2 + b^2)`
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// CIE XYZ color representation (D65 illuminant)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Linear-light sRGB, nominally in [0.0, 1.0] per channel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Create a new linear RGB color
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Expand an 8-bit gamma-encoded channel to linear light
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= SRGB_LINEAR_LIMIT {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compress a linear-light channel and quantize it to 8 bits
///
/// Values outside the gamut are clamped after rounding.
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let scaled = value * 12.92;
    let encoded = if scaled <= SRGB_LINEAR_LIMIT {
        scaled
    } else {
        value.powf(1.0 / 2.4) * 1.055 - 0.055
    };
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert 8-bit RGB to linear sRGB
pub fn rgb_to_linear(r: u8, g: u8, b: u8) -> LinearRgb {
    LinearRgb::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

/// Convert linear sRGB to 8-bit RGB
pub fn linear_to_rgb(rgb: LinearRgb) -> (u8, u8, u8) {
    (
        linear_to_srgb(rgb.r),
        linear_to_srgb(rgb.g),
        linear_to_srgb(rgb.b),
    )
}

/// Convert linear sRGB to CIE XYZ (D65)
pub fn linear_to_xyz(rgb: LinearRgb) -> Xyz {
    Xyz::new(
        0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b,
        0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b,
        0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b,
    )
}

/// Convert CIE XYZ (D65) to linear sRGB
pub fn xyz_to_linear(xyz: Xyz) -> LinearRgb {
    LinearRgb::new(
        3.2404548360214087 * xyz.x - 1.537138850102575 * xyz.y - 0.4985315468684809 * xyz.z,
        -0.9692663898756537 * xyz.x + 1.876010928842491 * xyz.y + 0.04155608234667351 * xyz.z,
        0.055643419604213644 * xyz.x - 0.20402585426769815 * xyz.y + 1.0572251624579287 * xyz.z,
    )
}

/// Convert RGB to CIE XYZ (D65 illuminant, sRGB color space)
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    linear_to_xyz(rgb_to_linear(r, g, b))
}

/// Convert CIE XYZ to RGB (D65 illuminant, sRGB color space)
pub fn xyz_to_rgb(xyz: Xyz) -> (u8, u8, u8) {
    linear_to_rgb(xyz_to_linear(xyz))
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        841.0 * t / 108.0 + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(u: f64) -> f64 {
    let cube = u * u * u;
    if cube > LAB_EPSILON {
        cube
    } else {
        (u - 4.0 / 29.0) * 108.0 / 841.0
    }
}

/// Convert CIE XYZ to CIE L*a*b*
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_XN);
    let fy = lab_f(xyz.y / D65_YN);
    let fz = lab_f(xyz.z / D65_ZN);
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert CIE L*a*b* to CIE XYZ
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;
    Xyz::new(
        D65_XN * lab_f_inv(fx),
        D65_YN * lab_f_inv(fy),
        D65_ZN * lab_f_inv(fz),
    )
}

/// Convert RGB to CIE L*a*b*
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// Convert CIE L*a*b* to RGB
pub fn lab_to_rgb(lab: Lab) -> (u8, u8, u8) {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Convert a packed `0x00RRGGBB` color to CIE L*a*b*
pub fn packed_to_lab(color: PackedColor) -> Lab {
    let (r, g, b) = color.to_rgb();
    rgb_to_lab(r, g, b)
}

/// Convert CIE L*a*b* to the nearest packed color
pub fn lab_to_packed(lab: Lab) -> PackedColor {
    let (r, g, b) = lab_to_rgb(lab);
    PackedColor::from_rgb(r, g, b)
}
