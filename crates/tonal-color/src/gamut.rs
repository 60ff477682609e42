// SPDX-License-Identifier: MIT
//
// Gamut checker — read-only reporting for UI warnings.
//
// Token generation never rejects a color: it always clamps with
// `Color::to_gamut`. This module only answers "would this color survive
// output as-is?" for sRGB and for wide-gamut Display P3 screens.

use serde::Serialize;

use crate::{Color, ColorError};

/// Linear sRGB → linear Display P3 (both D65).
const SRGB_TO_P3: [[f64; 3]; 3] = [
    [0.822_462_1, 0.177_538_0, 0.0],
    [0.033_194_2, 0.966_805_8, 0.0],
    [0.017_082_7, 0.072_397_4, 0.910_519_9],
];

const EPSILON: f64 = 1e-7;

/// An output color space a color can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gamut {
    Srgb,
    DisplayP3,
}

/// Where a color can be shown without clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GamutReport {
    pub srgb: bool,
    pub display_p3: bool,
}

impl GamutReport {
    /// The widest-first label for the report: `"srgb"`, `"p3"` or `"out"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.srgb {
            "srgb"
        } else if self.display_p3 {
            "p3"
        } else {
            "out"
        }
    }
}

/// Check an OKLCH color against both gamuts.
#[must_use]
pub fn check(color: Color) -> GamutReport {
    GamutReport {
        srgb: color.in_srgb_gamut(),
        display_p3: in_gamut(color, Gamut::DisplayP3),
    }
}

/// Check a raw OKLCH triple.
#[must_use]
pub fn check_oklch(l: f64, c: f64, h: f64) -> GamutReport {
    check(Color::oklch(l, c, h))
}

/// Check a hex string. 8-bit hex is sRGB by construction, so this only
/// fails on parse errors; it exists so UI code has one entry point.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if `hex` does not parse.
pub fn check_hex(hex: &str) -> Result<GamutReport, ColorError> {
    Color::parse(hex).map(check)
}

/// Whether `color` is representable in `gamut`.
#[must_use]
pub fn in_gamut(color: Color, gamut: Gamut) -> bool {
    match gamut {
        Gamut::Srgb => color.in_srgb_gamut(),
        Gamut::DisplayP3 => {
            let rgb = color.to_linear_srgb();
            let [r, g, b] = mul(&SRGB_TO_P3, rgb);
            [r, g, b].iter().all(|v| (-EPSILON..=1.0 + EPSILON).contains(v))
        }
    }
}

/// Largest chroma at lightness `l` and hue `h` that stays inside `gamut`.
#[must_use]
pub fn max_chroma(l: f64, h: f64, gamut: Gamut) -> f64 {
    let mut lo = 0.0;
    let mut hi = 0.5;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if in_gamut(Color::oklch(l, mid, h), gamut) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

fn mul(m: &[[f64; 3]; 3], (r, g, b): (f64, f64, f64)) -> [f64; 3] {
    let row = |i: usize| m[i][2].mul_add(b, m[i][0].mul_add(r, m[i][1] * g));
    [row(0), row(1), row(2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_colors_are_in_both() {
        let report = check(Color::hex("#0052cc").unwrap());
        assert!(report.srgb);
        assert!(report.display_p3);
        assert_eq!(report.label(), "srgb");
    }

    #[test]
    fn vivid_green_is_p3_only() {
        // Just past the sRGB green corner, well inside P3.
        let green = Color::oklch(0.80, 0.31, 145.0);
        let report = check(green);
        assert!(!report.srgb);
        assert!(report.display_p3, "expected P3 to hold {green:?}");
        assert_eq!(report.label(), "p3");
    }

    #[test]
    fn absurd_chroma_is_out() {
        let report = check_oklch(0.5, 0.6, 200.0);
        assert!(!report.srgb && !report.display_p3);
        assert_eq!(report.label(), "out");
    }

    #[test]
    fn hex_entry_point() {
        assert!(check_hex("#fff").unwrap().srgb);
        assert!(check_hex("zzz").is_err());
    }

    #[test]
    fn max_chroma_is_wider_in_p3() {
        let srgb = max_chroma(0.6, 145.0, Gamut::Srgb);
        let p3 = max_chroma(0.6, 145.0, Gamut::DisplayP3);
        assert!(p3 > srgb, "p3 {p3} should exceed srgb {srgb}");
        assert!(in_gamut(Color::oklch(0.6, srgb, 145.0), Gamut::Srgb));
    }

    #[test]
    fn white_has_no_chroma_headroom() {
        assert!(max_chroma(1.0, 0.0, Gamut::Srgb) < 1e-3);
        assert!(max_chroma(1.0, 250.0, Gamut::DisplayP3) < 1e-3);
    }
}
