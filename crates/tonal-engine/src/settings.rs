// SPDX-License-Identifier: MIT

//! Generation inputs other than the seeds: display mode, contrast level and
//! the user's override settings.
//!
//! Everything here is plain configuration. Range-limited values are
//! accepted as given on deserialization and normalized on use (see
//! [`OverrideSettings::normalized`]), so a hand-edited file with an
//! out-of-range number still generates.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonal_color::Color;

use crate::role::Role;
use crate::step::{Step, StepRange};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Neutral step used as the page background.
    #[must_use]
    pub const fn background_step(self) -> Step {
        match self {
            Self::Light => Step::MIN,
            Self::Dark => Step::MAX,
        }
    }

    /// Range searched for a role's base step.
    #[must_use]
    pub const fn base_range(self) -> StepRange {
        match self {
            Self::Light => StepRange::new(300, 500),
            Self::Dark => StepRange::new(500, 700),
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("unknown mode {s:?} (expected light or dark)")),
        }
    }
}

// ---------------------------------------------------------------------------
// ContrastLevel
// ---------------------------------------------------------------------------

/// Accessibility tier controlling the minimum WCAG ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastLevel {
    #[default]
    Default,
    #[serde(alias = "high-contrast")]
    High,
    ExtraHigh,
}

impl ContrastLevel {
    pub const ALL: [Self; 3] = [Self::Default, Self::High, Self::ExtraHigh];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::High => "high",
            Self::ExtraHigh => "extra-high",
        }
    }

    /// Minimum ratio for text on a colored background.
    #[must_use]
    pub const fn text_target(self) -> f64 {
        match self {
            Self::Default => 4.5,
            Self::High => 7.0,
            Self::ExtraHigh => 9.0,
        }
    }

    /// Minimum ratio between a container and its role color.
    #[must_use]
    pub const fn container_target(self) -> f64 {
        match self {
            Self::Default => 3.0,
            Self::High => 4.5,
            Self::ExtraHigh => 7.0,
        }
    }

    /// Outline targets against the surface: `[subtle, default, strong]`.
    #[must_use]
    pub const fn outline_targets(self) -> [f64; 3] {
        match self {
            Self::Default => [2.0, 3.0, 4.5],
            Self::High => [3.0, 4.5, 7.0],
            Self::ExtraHigh => [4.5, 7.0, 9.0],
        }
    }

    /// Chroma boost applied to role scales at this level.
    #[must_use]
    pub const fn saturation_boost(self) -> f64 {
        match self {
            Self::Default => 1.0,
            Self::High => 1.15,
            Self::ExtraHigh => 1.3,
        }
    }

    /// Hover and pressed step deltas for `mode`.
    ///
    /// Dark mode moves by less than light mode; the asymmetry is tuned,
    /// keep it.
    #[must_use]
    pub const fn state_deltas(self, mode: Mode) -> (i32, i32) {
        match (mode, self) {
            (Mode::Light, Self::ExtraHigh) => (150, 300),
            (Mode::Light, _) => (100, 200),
            (Mode::Dark, Self::ExtraHigh) => (-100, -200),
            (Mode::Dark, _) => (-50, -100),
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContrastLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "high" | "high-contrast" => Ok(Self::High),
            "extra-high" => Ok(Self::ExtraHigh),
            _ => Err(format!(
                "unknown contrast level {s:?} (expected default, high or extra-high)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Harmony / neutral source
// ---------------------------------------------------------------------------

/// How the secondary seed is derived from the primary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyMode {
    /// Secondary seed is whatever the user picked.
    #[default]
    None,
    Analogous,
    Complementary,
    /// Always the +120° neighbor; the −120° one is not offered.
    Triadic,
}

impl HarmonyMode {
    /// Hue rotation from primary to secondary, `None` when inactive.
    #[must_use]
    pub const fn rotation(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Analogous => Some(30.0),
            Self::Complementary => Some(180.0),
            Self::Triadic => Some(120.0),
        }
    }
}

/// Where the neutral scale takes its tint from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeutralTintSource {
    #[default]
    Primary,
    Secondary,
    /// Hue of [`OverrideSettings::custom_neutral`].
    Custom,
    /// No tint at all.
    Pure,
}

// ---------------------------------------------------------------------------
// Custom tones
// ---------------------------------------------------------------------------

/// Per-mode pinned base steps for one role, as raw user numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinnedTones {
    pub light: Option<i32>,
    pub dark: Option<i32>,
}

impl PinnedTones {
    #[must_use]
    pub const fn get(self, mode: Mode) -> Option<i32> {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }
}

/// Pro-mode base step pins, keyed by role.
///
/// Values stay raw until read: [`CustomTones::get`] snaps them onto the
/// grid, so `437` pins step 450 and `-20` pins step 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomTones(BTreeMap<Role, PinnedTones>);

impl CustomTones {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pinned step for `role` in `mode`, snapped and clamped.
    #[must_use]
    pub fn get(&self, role: Role, mode: Mode) -> Option<Step> {
        self.0.get(&role)?.get(mode).map(Step::snap)
    }

    /// Pin `role` in `mode` to a raw value.
    pub fn set(&mut self, role: Role, mode: Mode, value: i32) {
        let entry = self.0.entry(role).or_default();
        match mode {
            Mode::Light => entry.light = Some(value),
            Mode::Dark => entry.dark = Some(value),
        }
    }

    /// Remove the pin for `role` in `mode`.
    pub fn clear(&mut self, role: Role, mode: Mode) {
        if let Some(entry) = self.0.get_mut(&role) {
            match mode {
                Mode::Light => entry.light = None,
                Mode::Dark => entry.dark = None,
            }
            if entry.light.is_none() && entry.dark.is_none() {
                self.0.remove(&role);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// OverrideSettings
// ---------------------------------------------------------------------------

/// User overrides layered on top of plain seed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OverrideSettings {
    /// Force an untinted neutral scale regardless of `neutral_tint_source`.
    pub use_pure_neutrals: bool,
    /// Chroma multiplier for role scales, 0.5–1.5.
    pub saturation_multiplier: f64,
    /// Hue rotation in degrees for role scales, -15..+15.
    pub temperature_shift: f64,
    pub harmony_mode: HarmonyMode,
    /// Pin each role's base to the step closest to its seed.
    pub stay_true_to_input_color: bool,
    /// Enables `custom_tones`.
    pub pro_mode: bool,
    pub custom_tones: CustomTones,
    pub neutral_tint_source: NeutralTintSource,
    /// Tint color for [`NeutralTintSource::Custom`], as hex.
    pub custom_neutral: Option<String>,
}

impl Default for OverrideSettings {
    fn default() -> Self {
        Self {
            use_pure_neutrals: false,
            saturation_multiplier: 1.0,
            temperature_shift: 0.0,
            harmony_mode: HarmonyMode::None,
            stay_true_to_input_color: false,
            pro_mode: false,
            custom_tones: CustomTones::new(),
            neutral_tint_source: NeutralTintSource::Primary,
            custom_neutral: None,
        }
    }
}

impl OverrideSettings {
    pub const SATURATION_RANGE: (f64, f64) = (0.5, 1.5);
    pub const TEMPERATURE_RANGE: (f64, f64) = (-15.0, 15.0);

    /// A copy with every ranged value pulled into range.
    ///
    /// Non-finite numbers fall back to the neutral value (1.0 and 0.0).
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (smin, smax) = Self::SATURATION_RANGE;
        let (tmin, tmax) = Self::TEMPERATURE_RANGE;
        let saturation = clamp_logged(
            "saturation-multiplier",
            self.saturation_multiplier,
            smin,
            smax,
            1.0,
        );
        let temperature =
            clamp_logged("temperature-shift", self.temperature_shift, tmin, tmax, 0.0);
        Self {
            saturation_multiplier: saturation,
            temperature_shift: temperature,
            ..self.clone()
        }
    }

    /// The pinned base step for `role` in `mode`, only when pro mode is on.
    #[must_use]
    pub fn pinned_step(&self, role: Role, mode: Mode) -> Option<Step> {
        if self.pro_mode {
            self.custom_tones.get(role, mode)
        } else {
            None
        }
    }

    /// The effective neutral source after `use_pure_neutrals`.
    #[must_use]
    pub const fn effective_neutral_source(&self) -> NeutralTintSource {
        if self.use_pure_neutrals {
            NeutralTintSource::Pure
        } else {
            self.neutral_tint_source
        }
    }

    /// The parsed custom neutral tint, if set and valid.
    #[must_use]
    pub fn custom_neutral_color(&self) -> Option<Color> {
        self.custom_neutral.as_deref().and_then(Color::hex)
    }

    /// True when no override moves generation away from plain seeds.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

fn clamp_logged(name: &str, value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{name} {value} is not a number; using {fallback}");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if (clamped - value).abs() > f64::EPSILON {
        log::warn!("{name} {value} out of range; clamped to {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Harmony ─────────────────────────────────────────────────────

    #[test]
    fn harmony_rotations() {
        assert_eq!(HarmonyMode::None.rotation(), None);
        assert_eq!(HarmonyMode::Analogous.rotation(), Some(30.0));
        assert_eq!(HarmonyMode::Complementary.rotation(), Some(180.0));
        assert_eq!(HarmonyMode::Triadic.rotation(), Some(120.0));
    }

    // ── Levels ──────────────────────────────────────────────────────

    #[test]
    fn targets_rise_with_level() {
        let text: Vec<f64> = ContrastLevel::ALL.iter().map(|l| l.text_target()).collect();
        let container: Vec<f64> = ContrastLevel::ALL.iter().map(|l| l.container_target()).collect();
        assert_eq!(text, vec![4.5, 7.0, 9.0]);
        assert_eq!(container, vec![3.0, 4.5, 7.0]);
        for level in ContrastLevel::ALL {
            let [a, b, c] = level.outline_targets();
            assert!(a < b && b < c);
        }
    }

    #[test]
    fn state_deltas_are_asymmetric() {
        assert_eq!(ContrastLevel::Default.state_deltas(Mode::Light), (100, 200));
        assert_eq!(ContrastLevel::ExtraHigh.state_deltas(Mode::Light), (150, 300));
        assert_eq!(ContrastLevel::High.state_deltas(Mode::Dark), (-50, -100));
        assert_eq!(ContrastLevel::ExtraHigh.state_deltas(Mode::Dark), (-100, -200));
    }

    #[test]
    fn level_parsing() {
        assert_eq!("high-contrast".parse::<ContrastLevel>(), Ok(ContrastLevel::High));
        assert_eq!("Extra-High".parse::<ContrastLevel>(), Ok(ContrastLevel::ExtraHigh));
        assert!("max".parse::<ContrastLevel>().is_err());
        assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
    }

    // ── Custom tones ────────────────────────────────────────────────

    #[test]
    fn custom_tones_snap_and_clamp() {
        let mut tones = CustomTones::new();
        tones.set(Role::Primary, Mode::Light, 437);
        tones.set(Role::Primary, Mode::Dark, 2000);
        tones.set(Role::Error, Mode::Light, -20);
        assert_eq!(tones.get(Role::Primary, Mode::Light).map(Step::value), Some(450));
        assert_eq!(tones.get(Role::Primary, Mode::Dark), Some(Step::MAX));
        assert_eq!(tones.get(Role::Error, Mode::Light), Some(Step::MIN));
        assert_eq!(tones.get(Role::Error, Mode::Dark), None);
        tones.clear(Role::Error, Mode::Light);
        tones.clear(Role::Primary, Mode::Light);
        tones.clear(Role::Primary, Mode::Dark);
        assert!(tones.is_empty());
    }

    #[test]
    fn pins_need_pro_mode() {
        let mut settings = OverrideSettings::default();
        settings.custom_tones.set(Role::Info, Mode::Light, 600);
        assert_eq!(settings.pinned_step(Role::Info, Mode::Light), None);
        settings.pro_mode = true;
        assert_eq!(settings.pinned_step(Role::Info, Mode::Light).map(Step::value), Some(600));
    }

    // ── Normalization ───────────────────────────────────────────────

    #[test]
    fn normalized_clamps_ranges() {
        let settings = OverrideSettings {
            saturation_multiplier: 3.0,
            temperature_shift: -40.0,
            ..OverrideSettings::default()
        }
        .normalized();
        assert!((settings.saturation_multiplier - 1.5).abs() < 1e-12);
        assert!((settings.temperature_shift + 15.0).abs() < 1e-12);

        let nan = OverrideSettings {
            saturation_multiplier: f64::NAN,
            ..OverrideSettings::default()
        }
        .normalized();
        assert!((nan.saturation_multiplier - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pure_neutrals_override_source() {
        let settings = OverrideSettings {
            use_pure_neutrals: true,
            neutral_tint_source: NeutralTintSource::Secondary,
            ..OverrideSettings::default()
        };
        assert_eq!(settings.effective_neutral_source(), NeutralTintSource::Pure);
        assert!(!settings.is_identity());
        assert!(OverrideSettings::default().is_identity());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{ "harmony-mode": "triadic", "custom-tones": { "primary": { "dark": 650 } } }"#;
        let settings: OverrideSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.harmony_mode, HarmonyMode::Triadic);
        assert!((settings.saturation_multiplier - 1.0).abs() < 1e-12);
        assert_eq!(
            settings.custom_tones.get(Role::Primary, Mode::Dark).map(Step::value),
            Some(650),
        );
        assert_eq!(settings.custom_tones.get(Role::Primary, Mode::Light), None);
    }
}
