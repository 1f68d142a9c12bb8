//! Perceptual color difference
//!
//! Implements the CIEDE2000 color-difference formula (ΔE00, CIE 142-2001)
//! between two CIE L*a*b* colors, with the parametric weighting factors
//! kL = kC = kH = 1.
//!
//! Hue angles are handled in degrees throughout and converted to radians
//! only at the point where `sin`/`cos` are evaluated. The zero-chroma cases
//! are explicit branches, so the result is finite for every finite input.
//!
//! Reference: G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.

use crate::colorspace::Lab;

/// 25^7, shared by the G factor and the rotation term
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle of `(a, b)` in degrees, in `[0, 360)`
///
/// Returns 0 for the achromatic point, where `atan2` is undefined.
#[inline]
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

#[inline]
fn chroma_weight(c_mean: f64) -> f64 {
    let c7 = c_mean.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

#[inline]
fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

#[inline]
fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// CIEDE2000 color difference between two Lab colors
///
/// The result is non-negative and symmetric in its arguments. Differences
/// below about 1.0 are not perceptible; there is no fixed upper bound
/// (black against white is exactly 100).
pub fn ciede2000(lab1: &Lab, lab2: &Lab) -> f64 {
    // a' correction
    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_mean));
    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;

    let c1p = (a1p * a1p + lab1.b * lab1.b).sqrt();
    let c2p = (a2p * a2p + lab2.b * lab2.b).sqrt();
    let h1p = hue_degrees(a1p, lab1.b);
    let h2p = hue_degrees(a2p, lab2.b);

    let chroma_product = c1p * c2p;

    // Differences
    let dl = lab2.l - lab1.l;
    let dc = c2p - c1p;
    let dh = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dh_big = 2.0 * chroma_product.sqrt() * sin_deg(dh / 2.0);

    // Means
    let l_mean = (lab1.l + lab2.l) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let hp_sum = h1p + h2p;
    let hp_mean = if chroma_product == 0.0 {
        hp_sum
    } else if (h1p - h2p).abs() <= 180.0 {
        hp_sum / 2.0
    } else if hp_sum < 360.0 {
        (hp_sum + 360.0) / 2.0
    } else {
        (hp_sum - 360.0) / 2.0
    };

    // Weighting functions
    let t = 1.0 - 0.17 * cos_deg(hp_mean - 30.0)
        + 0.24 * cos_deg(2.0 * hp_mean)
        + 0.32 * cos_deg(3.0 * hp_mean + 6.0)
        - 0.20 * cos_deg(4.0 * hp_mean - 63.0);

    let l_offset_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    // Blue-region rotation
    let delta_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * chroma_weight(cp_mean);
    let rt = -sin_deg(2.0 * delta_theta) * rc;

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh_big / sh;

    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_colors() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        assert_eq!(ciede2000(&lab, &lab), 0.0);
    }

    #[test]
    fn test_black_and_white() {
        let black = Lab::new(0.0, 0.0, 0.0);
        let white = Lab::new(100.0, 0.0, 0.0);
        assert!((ciede2000(&black, &white) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_pure_lightness_difference() {
        // At L = 50 the lightness weight is 1, so a pure L shift is exact
        let a = Lab::new(45.0, 0.0, 0.0);
        let b = Lab::new(55.0, 0.0, 0.0);
        assert!((ciede2000(&a, &b) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_hue_degrees_quadrants() {
        assert_eq!(hue_degrees(0.0, 0.0), 0.0);
        assert!((hue_degrees(1.0, 0.0) - 0.0).abs() < 1e-12);
        assert!((hue_degrees(0.0, 1.0) - 90.0).abs() < 1e-12);
        assert!((hue_degrees(-1.0, 0.0) - 180.0).abs() < 1e-12);
        assert!((hue_degrees(0.0, -1.0) - 270.0).abs() < 1e-12);
        assert!((hue_degrees(-0.0, -0.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_chroma_against_chromatic() {
        let gray = Lab::new(50.0, 0.0, 0.0);
        let red = Lab::new(50.0, 60.0, 40.0);
        let de = ciede2000(&gray, &red);
        assert!(de.is_finite() && de > 0.0);
    }
}
