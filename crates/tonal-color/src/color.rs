// SPDX-License-Identifier: MIT
//
// tonal color — the perceptual adapter every palette operation goes through.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) follow the
// usual color-science notation so the math reads like the published
// Oklab formulas.
#![allow(clippy::many_single_char_names)]
//
// Colors are stored in OKLCH. Shade scales are built by walking lightness
// at a fixed hue, contrast is measured on sRGB relative luminance, and
// anything that leaves the sRGB gamut is pulled back by reducing chroma
// only, so lightness and hue survive the trip.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ #rrggbb
//
// Everything is f64: contrast searches compare ratios that differ in the
// third decimal, and f32 rounding was enough to flip a step choice.

use std::fmt;
use std::str::FromStr;

use crate::ColorError;

/// Tolerance for the linear-light gamut test.
///
/// Pure white and black land a few ULPs outside [0, 1] after the matrix
/// round-trip; without slack they would be reported as out of gamut.
const GAMUT_EPSILON: f64 = 1e-7;

/// Chroma below this is treated as gray (hue undefined).
const ACHROMATIC_CHROMA: f64 = 1e-4;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color in OKLCH with alpha.
///
/// ```
/// use tonal_color::Color;
///
/// let brand = Color::hex("#0052cc").unwrap();
/// let muted = brand.scale_chroma(0.5);
/// let warmer = brand.shift_hue(-10.0);
///
/// assert!(muted.c < brand.c);
/// assert_eq!(brand.to_hex(), "#0052cc");
/// # let _ = warmer;
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma: 0.0 (gray) upward; sRGB tops out around 0.32.
    pub c: f64,

    /// Hue angle in degrees, [0, 360).
    pub h: f64,

    /// Opacity: 0.0 (transparent) to 1.0 (opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from OKLCH components.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from OKLCH components with alpha.
    #[inline]
    #[must_use]
    pub const fn oklcha(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self { l, c, h, alpha }
    }

    /// Create an opaque color from gamma-encoded sRGB (0.0–1.0).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self::oklch(l, c, h)
    }

    /// Create an opaque color from linear-light sRGB (0.0–1.0).
    #[must_use]
    pub fn linear_srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, a, b_ok) = linear_srgb_to_oklab(r, g, b);
        let (c, h) = oklab_ab_to_oklch(a, b_ok);
        Self::oklch(l, c, h)
    }

    /// Create an opaque color from 8-bit sRGB channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Returns `None` for anything else. Use [`Color::parse`] when the
    /// caller wants to report the bad input.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s.trim())
    }

    /// Like [`Color::hex`], but with a typed error carrying the input.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if `s` is not a hex color.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        Self::hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }

    /// A pure gray at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f64) -> Self {
        Self::oklch(lightness, 0.0, 0.0)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Whether alpha is at (or above) 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether the color has no meaningful chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_CHROMA
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Set chroma (clamped to >= 0.0).
    #[inline]
    #[must_use]
    pub const fn set_chroma(self, c: f64) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    /// Multiply chroma by `factor`. Lightness and hue are untouched.
    #[inline]
    #[must_use]
    pub const fn scale_chroma(self, factor: f64) -> Self {
        self.set_chroma(self.c * factor)
    }

    /// Rotate the hue by `degrees`, wrapping around 360°.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Perceptual distance (Euclidean ΔE in Oklab).
    ///
    /// Differences below ~0.02 are hard to see.
    #[must_use]
    pub fn distance(self, other: &Self) -> f64 {
        let (a1, b1) = oklch_to_oklab_ab(self.c, self.h);
        let (a2, b2) = oklch_to_oklab_ab(other.c, other.h);
        let dl = self.l - other.l;
        let da = a1 - a2;
        let db = b1 - b2;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Gamma-encoded sRGB, each channel clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Linear-light sRGB, unclamped. Out-of-gamut colors have channels
    /// outside [0, 1].
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let (a, b) = oklch_to_oklab_ab(self.c, self.h);
        oklab_to_linear_srgb(self.l, a, b)
    }

    /// 8-bit sRGB (clamped).
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha.clamp(0.0, 1.0));
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    // ─── Gamut ───────────────────────────────────────────────────────────

    /// Whether the color is displayable in sRGB without clipping.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = self.to_linear_srgb();
        in_unit(r) && in_unit(g) && in_unit(b)
    }

    /// Bring the color into sRGB by lowering chroma only.
    ///
    /// Binary search on chroma keeps lightness and hue exactly as given.
    /// In-gamut colors are returned unchanged.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0;
        let mut hi = self.c;
        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Color::oklcha({:.4}, {:.4}, {:.1}, {:.2})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Shortest-arc distance between two hues, in degrees (0–180).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Signed shortest-arc rotation that takes hue `from` onto hue `to`,
/// in (-180, 180].
#[inline]
#[must_use]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let d = normalize_hue(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

#[inline]
fn in_unit(v: f64) -> bool {
    (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&v)
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-10 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Björn Ottosson's matrices, via the LMS cone-response space.
// Reference: https://bottosson.github.io/posts/oklab/

fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(
        s,
        (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)),
    );

    (r, g, bl)
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(
        -s_,
        0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_),
    );
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0f64.mul_add(
        -s_,
        0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_),
    );

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (transfer function) ─────────────────────────────────

/// Apply the sRGB transfer curve to one linear-light channel.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB transfer curve from one gamma-encoded channel.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = linear_srgb_to_oklab(
        srgb_to_linear(r),
        srgb_to_linear(g),
        srgb_to_linear(b),
    );
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        3 | 4 => {
            let nib = |i: usize| parse_hex_digit(bytes[i]).map(|v| v << 4 | v);
            let color = Color::rgb8(nib(0)?, nib(1)?, nib(2)?);
            if bytes.len() == 4 {
                Some(color.with_alpha(f64::from(nib(3)?) / 255.0))
            } else {
                Some(color)
            }
        }
        6 | 8 => {
            let byte = |i: usize| parse_hex_byte(&bytes[i..i + 2]);
            let color = Color::rgb8(byte(0)?, byte(2)?, byte(4)?);
            if bytes.len() == 8 {
                Some(color.with_alpha(f64::from(byte(6)?) / 255.0))
            } else {
                Some(color)
            }
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a channel in 0.0–1.0 to 0–255 with rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamped to 0.0..=255.0 before the cast.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
