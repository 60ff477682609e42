// SPDX-License-Identifier: MIT

//! Reference tone system in the Material style.
//!
//! Tones run 0 (black) to 100 (white) and are CIE L*, which is a power
//! curve in luminance rather than the eased table the shade scales use.
//! This is a side-by-side reference for previews; nothing in token
//! generation reads it.

use tonal_color::Color;
use tonal_color::color::{hue_delta, normalize_hue};

/// The tones a Material tonal palette is usually shown at.
pub const STANDARD_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// Fraction of the hue gap closed by [`harmonize_hue`].
pub const HARMONIZE_FRACTION: f64 = 1.0 / 6.0;

// CIE constants, κ and ε as exact ratios.
const KAPPA: f64 = 24389.0 / 27.0;
const EPSILON: f64 = 216.0 / 24389.0;

/// Relative luminance Y for a tone (L*), in [0, 1].
#[must_use]
pub fn tone_to_luminance(tone: f64) -> f64 {
    let tone = tone.clamp(0.0, 100.0);
    let f = (tone + 16.0) / 116.0;
    let cube = f * f * f;
    if cube > EPSILON { cube } else { tone / KAPPA }
}

/// Tone (L*) for a relative luminance Y.
#[must_use]
pub fn luminance_to_tone(y: f64) -> f64 {
    let y = y.clamp(0.0, 1.0);
    if y > EPSILON {
        116.0f64.mul_add(y.cbrt(), -16.0)
    } else {
        y * KAPPA
    }
}

/// OKLCH lightness of a neutral at `tone`.
///
/// For grays Oklab L is the cube root of luminance.
#[must_use]
pub fn tone_to_lightness(tone: f64) -> f64 {
    tone_to_luminance(tone).cbrt()
}

/// Inverse of [`tone_to_lightness`].
#[must_use]
pub fn lightness_to_tone(l: f64) -> f64 {
    let l = l.clamp(0.0, 1.0);
    luminance_to_tone(l * l * l)
}

/// Move `source` one sixth of the shortest arc toward `target`.
#[must_use]
pub fn harmonize_hue(source: f64, target: f64) -> f64 {
    normalize_hue(hue_delta(source, target).mul_add(HARMONIZE_FRACTION, source))
}

/// A seed's hue and chroma at every standard tone, clamped to sRGB.
#[must_use]
pub fn tonal_palette(seed: Color) -> Vec<(u8, Color)> {
    STANDARD_TONES
        .iter()
        .map(|&tone| {
            let l = tone_to_lightness(f64::from(tone));
            (tone, Color::oklch(l, seed.c, seed.h).to_gamut())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn tone_endpoints() {
        assert!(approx_eq(tone_to_lightness(0.0), 0.0, 1e-12));
        assert!(approx_eq(tone_to_lightness(100.0), 1.0, 1e-12));
        assert!(approx_eq(tone_to_luminance(50.0), 0.1842, 1e-3));
    }

    #[test]
    fn tone_roundtrip() {
        for tone in STANDARD_TONES {
            let t = f64::from(tone);
            assert!(approx_eq(lightness_to_tone(tone_to_lightness(t)), t, 1e-9), "{tone}");
        }
    }

    #[test]
    fn curve_is_not_linear() {
        // Tone 50 is well below the linear midpoint in luminance.
        assert!(tone_to_luminance(50.0) < 0.25);
        assert!(tone_to_lightness(50.0) > 0.5);
    }

    #[test]
    fn harmonize_takes_short_way() {
        assert!(approx_eq(harmonize_hue(0.0, 60.0), 10.0, 1e-9));
        assert!(approx_eq(harmonize_hue(350.0, 50.0), 0.0, 1e-9));
        assert!(approx_eq(harmonize_hue(10.0, 310.0), 0.0, 1e-9));
        assert!(approx_eq(harmonize_hue(120.0, 120.0), 120.0, 1e-9));
    }

    #[test]
    fn palette_is_light_ordered() {
        let seed = Color::hex("#6b4fbb").unwrap();
        let palette = tonal_palette(seed);
        assert_eq!(palette.len(), STANDARD_TONES.len());
        assert!(palette.windows(2).all(|w| w[0].1.l < w[1].1.l));
        assert!(palette.iter().all(|(_, c)| c.in_srgb_gamut()));
    }
}
