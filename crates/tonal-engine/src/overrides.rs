// SPDX-License-Identifier: MIT

//! The override pipeline: transforms layered onto freshly generated scales.
//!
//! Order matters and is fixed:
//!
//! ```text
//! 1. neutral scale from the tint source     (neutral_scale)
//! 2. saturation multiplier                  ┐
//! 3. temperature (hue) shift                ├ role scales only
//! 4. contrast-level saturation boost        ┘ (apply_role_overrides)
//! 5. harmony: secondary seed from primary   (harmonize_secondary)
//! ```
//!
//! Step 5 rewrites a seed rather than a scale, so it runs before the
//! secondary scale is generated. Every transform re-clamps to sRGB.

use tonal_color::Color;

use crate::settings::{ContrastLevel, HarmonyMode, NeutralTintSource, OverrideSettings};
use crate::shades::ShadeScale;

/// Multiply the chroma of every tone by `multiplier`.
///
/// Lightness and hue are untouched; a boost that leaves sRGB is pulled
/// back to the gamut edge.
#[must_use]
pub fn apply_saturation(scale: &ShadeScale, multiplier: f64) -> ShadeScale {
    if (multiplier - 1.0).abs() < f64::EPSILON {
        return scale.clone();
    }
    scale.map(|c| c.scale_chroma(multiplier).to_gamut())
}

/// Rotate the hue of every tone by `degrees`, wrapping mod 360.
#[must_use]
pub fn apply_temperature(scale: &ShadeScale, degrees: f64) -> ShadeScale {
    if degrees.abs() < f64::EPSILON {
        return scale.clone();
    }
    scale.map(|c| c.shift_hue(degrees).to_gamut())
}

/// Boost chroma to offset the washed-out look of high-contrast steps.
#[must_use]
pub fn apply_contrast_boost(scale: &ShadeScale, level: ContrastLevel) -> ShadeScale {
    apply_saturation(scale, level.saturation_boost())
}

/// Steps 2–4 of the pipeline for one role scale.
///
/// `settings` is expected to be normalized already.
#[must_use]
pub fn apply_role_overrides(
    scale: &ShadeScale,
    settings: &OverrideSettings,
    level: ContrastLevel,
) -> ShadeScale {
    let scale = apply_saturation(scale, settings.saturation_multiplier);
    let scale = apply_temperature(&scale, settings.temperature_shift);
    apply_contrast_boost(&scale, level)
}

/// The secondary seed implied by `harmony` for a given primary seed.
///
/// Keeps the primary's lightness and chroma and rotates its hue. `None`
/// when harmony is off or the primary has no hue to rotate.
#[must_use]
pub fn harmonize_secondary(primary: Color, harmony: HarmonyMode) -> Option<Color> {
    let rotation = harmony.rotation()?;
    if primary.is_achromatic() {
        return None;
    }
    Some(primary.shift_hue(rotation).to_gamut())
}

/// Build the neutral scale for the effective tint source.
///
/// Sources with no usable hue (a gray or missing seed, an unset custom
/// color) fall back to pure gray.
#[must_use]
pub fn neutral_scale(
    settings: &OverrideSettings,
    primary: Option<Color>,
    secondary: Option<Color>,
) -> ShadeScale {
    let tint = match settings.effective_neutral_source() {
        NeutralTintSource::Pure => None,
        NeutralTintSource::Primary => primary,
        NeutralTintSource::Secondary => secondary,
        NeutralTintSource::Custom => {
            let custom = settings.custom_neutral_color();
            if custom.is_none() {
                log::warn!(
                    "custom neutral tint {:?} is not a hex color; using pure neutrals",
                    settings.custom_neutral.as_deref().unwrap_or("")
                );
            }
            custom
        }
    };
    match tint {
        Some(c) if !c.is_achromatic() => ShadeScale::tinted_neutral(c.h),
        _ => ShadeScale::pure_neutral(),
    }
}
