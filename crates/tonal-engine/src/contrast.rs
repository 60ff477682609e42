// SPDX-License-Identifier: MIT

//! WCAG contrast measurement and the step searches built on it.
//!
//! Ratios are computed on sRGB relative luminance (the WCAG 2.1
//! definition); choices are made between scale steps, whose lightness was
//! laid out in OKLCH. Two kinds of search live here:
//!
//! - **scale searches** pick a [`Step`] of one scale against a fixed
//!   background: [`find_step_meeting`] (phase one, strict) and
//!   [`find_closest_step`] (phase two, fallback), combined by
//!   [`find_optimal_step_by_contrast`];
//! - **candidate searches** pick one color out of a short list:
//!   [`find_first_meeting`] and [`find_best_contrast`].
//!
//! None of them fail. When nothing reaches the target the closest
//! achievable answer is returned and [`StepMatch::meets_target`] says so.

use tonal_color::Color;
use tonal_color::color::srgb_to_linear;

use crate::shades::ShadeScale;
use crate::step::{Step, StepRange};

/// Relative luminance per WCAG 2.1, in [0.0, 1.0].
///
/// `L = 0.2126 R + 0.7152 G + 0.0722 B` over linearized sRGB channels.
/// Measured on the 8-bit color that ends up in the token output, so a
/// ratio computed here holds for the emitted hex too. Alpha is ignored.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_rgb8();
    let lin = |v: u8| srgb_to_linear(f64::from(v) / 255.0);
    0.2126f64.mul_add(lin(r), 0.7152f64.mul_add(lin(g), 0.0722 * lin(b)))
}

/// WCAG contrast ratio, in [1.0, 21.0]. Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast between two hex strings; `None` if either does not parse.
#[must_use]
pub fn contrast_ratio_hex(a: &str, b: &str) -> Option<f64> {
    Some(contrast_ratio(Color::hex(a)?, Color::hex(b)?))
}

// ---------------------------------------------------------------------------
// Scale searches
// ---------------------------------------------------------------------------

/// Outcome of a scale search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMatch {
    pub step: Step,
    /// Contrast of the chosen step against the reference color.
    pub ratio: f64,
    pub meets_target: bool,
}

/// Phase one: among in-range steps reaching `target`, the one closest to
/// it (the least contrast that still passes).
///
/// Steps are visited in ascending order; on ties the first wins.
#[must_use]
pub fn find_step_meeting(
    scale: &ShadeScale,
    background: Color,
    target: f64,
    range: StepRange,
) -> Option<StepMatch> {
    let mut best: Option<StepMatch> = None;
    for step in range.iter() {
        let ratio = contrast_ratio(scale.get(step), background);
        if ratio < target {
            continue;
        }
        if best.is_none_or(|b| ratio - target < b.ratio - target) {
            best = Some(StepMatch { step, ratio, meets_target: true });
        }
    }
    best
}

/// Phase two: the in-range step whose contrast is nearest `target`, above
/// or below.
#[must_use]
pub fn find_closest_step(
    scale: &ShadeScale,
    background: Color,
    target: f64,
    range: StepRange,
) -> Option<StepMatch> {
    let mut best: Option<StepMatch> = None;
    for step in range.iter() {
        let ratio = contrast_ratio(scale.get(step), background);
        if best.is_none_or(|b| (ratio - target).abs() < (b.ratio - target).abs()) {
            best = Some(StepMatch {
                step,
                ratio,
                meets_target: ratio >= target,
            });
        }
    }
    best
}

/// Best step for `target` within `range`: the passing step closest to the
/// target if any step passes, else the closest step overall, else
/// [`Step::MID`] for an empty range.
#[must_use]
pub fn find_optimal_step_by_contrast(
    scale: &ShadeScale,
    background: Color,
    target: f64,
    range: StepRange,
) -> StepMatch {
    find_step_meeting(scale, background, target, range)
        .or_else(|| find_closest_step(scale, background, target, range))
        .unwrap_or_else(|| StepMatch {
            step: Step::MID,
            ratio: contrast_ratio(scale.get(Step::MID), background),
            meets_target: false,
        })
}

/// In-range step minimizing `distance`, first wins ties, step 500 for an
/// empty range.
fn nearest_step(range: StepRange, distance: impl Fn(Step) -> f64) -> Step {
    range
        .iter()
        .map(|s| (s, distance(s)))
        .fold(None, |best: Option<(Step, f64)>, (s, d)| match best {
            Some((_, bd)) if bd <= d => best,
            _ => Some((s, d)),
        })
        .map_or(Step::MID, |(s, _)| s)
}

/// The in-range step perceptually nearest to `color` (Oklab ΔE).
#[must_use]
pub fn find_closest_step_in_scale(scale: &ShadeScale, color: Color, range: StepRange) -> Step {
    nearest_step(range, |s| scale.get(s).distance(&color))
}

/// The in-range step whose lightness is nearest to `color`'s.
///
/// Stay-true pins a role to the tone the user typed in; chroma and hue
/// already come from the seed, so only lightness decides.
#[must_use]
pub fn find_step_by_lightness(scale: &ShadeScale, color: Color, range: StepRange) -> Step {
    nearest_step(range, |s| (scale.get(s).l - color.l).abs())
}

// ---------------------------------------------------------------------------
// Candidate searches
// ---------------------------------------------------------------------------

/// The first candidate reaching `min_ratio` against `background`.
#[must_use]
pub fn find_first_meeting(
    background: Color,
    candidates: &[Color],
    min_ratio: f64,
) -> Option<Color> {
    candidates
        .iter()
        .copied()
        .find(|c| contrast_ratio(*c, background) >= min_ratio)
}

/// The first candidate reaching `min_ratio`, or failing that the one with
/// the highest contrast (first wins ties).
///
/// Always returns a member of `candidates`; `None` only when it is empty.
#[must_use]
pub fn find_best_contrast(
    background: Color,
    candidates: &[Color],
    min_ratio: f64,
) -> Option<Color> {
    find_first_meeting(background, candidates, min_ratio).or_else(|| {
        candidates
            .iter()
            .copied()
            .fold(None, |best: Option<(Color, f64)>, c| {
                let ratio = contrast_ratio(c, background);
                match best {
                    Some((_, br)) if br >= ratio => best,
                    _ => Some((c, ratio)),
                }
            })
            .map(|(c, _)| c)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
