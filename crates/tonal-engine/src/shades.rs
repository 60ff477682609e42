// SPDX-License-Identifier: MIT

//! Shade scale generation — one seed color in, 21 tones out.
//!
//! Every step has a fixed target lightness from [`LIGHTNESS`]. Hue comes
//! from the seed; chroma is the seed's chroma times a multiplier picked by
//! lightness bucket (see [`chroma_multiplier`]). Each tone is then pulled
//! into sRGB by reducing chroma, so lightness and hue are exact across the
//! whole scale.
//!
//! ```text
//! step   0 ──────────────── 500 ─────────────── 1000
//! L    1.00  (×0.3 chroma)  0.56  (×1.0)        0.05 (×0.35)
//! ```

use tonal_color::Color;

use crate::step::Step;

/// Target OKLCH lightness per step, index = `step / 50`.
///
/// Tighter spacing near white and black, a straight run through the
/// middle. These values are tuned by eye; change them and every token
/// moves.
pub const LIGHTNESS: [f64; Step::COUNT] = [
    1.000, 0.975, 0.940, 0.900, 0.860, // 0..200
    0.810, 0.760, 0.710, 0.660, 0.610, // 250..450
    0.560, 0.510, 0.460, 0.410, 0.360, // 500..700
    0.310, 0.265, 0.220, 0.170, 0.115, // 750..950
    0.050, // 1000
];

/// Chroma of a tinted neutral scale.
pub const NEUTRAL_TINT_CHROMA: f64 = 0.02;

/// Target lightness of a step.
#[must_use]
pub const fn target_lightness(step: Step) -> f64 {
    LIGHTNESS[step.index()]
}

/// Chroma multiplier for a tone at lightness `l`.
///
/// Near-white and near-black tones are muted; the 0.65–0.77 band gets a
/// boost above the seed so dark-mode accents stay vivid.
#[must_use]
pub fn chroma_multiplier(l: f64) -> f64 {
    if l > 0.90 {
        0.3
    } else if l > 0.80 {
        0.6
    } else if (0.65..=0.77).contains(&l) {
        1.1
    } else if l < 0.20 {
        0.35
    } else if l < 0.30 {
        0.65
    } else {
        1.0
    }
}

// ---------------------------------------------------------------------------
// ShadeScale
// ---------------------------------------------------------------------------

/// A complete Step → color mapping.
///
/// Always holds all 21 steps; there is no partially filled scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeScale {
    colors: [Color; Step::COUNT],
}

impl ShadeScale {
    /// Build a scale from a chromatic seed.
    ///
    /// Returns `None` for an achromatic seed: a gray seed has no hue to
    /// carry, and callers substitute [`ShadeScale::pure_neutral`].
    #[must_use]
    pub fn from_seed(seed: Color) -> Option<Self> {
        if seed.is_achromatic() {
            return None;
        }
        Some(Self::from_fn(|l| {
            Color::oklch(l, seed.c * chroma_multiplier(l), seed.h)
        }))
    }

    /// Low-chroma neutral scale carrying `hue`.
    #[must_use]
    pub fn tinted_neutral(hue: f64) -> Self {
        Self::from_fn(|l| Color::oklch(l, NEUTRAL_TINT_CHROMA, hue))
    }

    /// Pure gray scale.
    #[must_use]
    pub fn pure_neutral() -> Self {
        Self::from_fn(Color::gray)
    }

    fn from_fn(tone: impl Fn(f64) -> Color) -> Self {
        Self {
            colors: LIGHTNESS.map(|l| tone(l).to_gamut()),
        }
    }

    /// The color at `step`.
    #[must_use]
    pub const fn get(&self, step: Step) -> Color {
        self.colors[step.index()]
    }

    /// `#rrggbb` at `step`.
    #[must_use]
    pub fn hex(&self, step: Step) -> String {
        self.get(step).to_hex()
    }

    /// `(step, color)` pairs from white to black.
    pub fn iter(&self) -> impl Iterator<Item = (Step, Color)> + '_ {
        Step::all().map(|s| (s, self.get(s)))
    }

    /// Apply `f` to every tone, re-clamping the result to sRGB.
    #[must_use]
    pub fn map(&self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            colors: self.colors.map(|c| f(c).to_gamut()),
        }
    }
}

/// Parse `seed_hex` and build its scale.
///
/// `None` means "no scale available": the input did not parse, or it is a
/// gray with no hue. Never panics.
#[must_use]
pub fn generate_shades(seed_hex: &str) -> Option<ShadeScale> {
    let Some(seed) = Color::hex(seed_hex) else {
        log::debug!("seed {seed_hex:?} is not a hex color; no scale");
        return None;
    };
    ShadeScale::from_seed(seed)
}
