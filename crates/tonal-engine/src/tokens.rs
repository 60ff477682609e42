// SPDX-License-Identifier: MIT

//! Semantic token mapping — palette scales to named, contrast-checked colors.
//!
//! For every role and mode the mapper resolves three families (base,
//! container, fix), each in three states (rest, hover, pressed), each with
//! a paired on-color:
//!
//! ```text
//! base step      pinned tone │ stay-true search │ contrast search vs bg
//!     │
//!     ├── on-base           best of the extremes on the far side
//!     ├── hover/pressed     base ± mode delta, own on-colors
//!     └── container step    inverse of base, contrast vs base color
//!             └── on-container   in-family extremes before neutrals
//! fix            steps 400/500/600 in both modes
//! ```
//!
//! On-colors are only ever drawn from the extreme ends of a scale, never
//! mid-scale, and always measured against the exact color they sit on.

use std::collections::BTreeMap;
use std::fmt;

use tonal_color::vision::{self, Deficiency};
use tonal_color::Color;

use crate::contrast::{
    contrast_ratio, find_best_contrast, find_optimal_step_by_contrast, find_step_by_lightness,
};
use crate::palette::PaletteSet;
use crate::role::Role;
use crate::settings::{ContrastLevel, Mode, OverrideSettings};
use crate::shades::ShadeScale;
use crate::step::{Step, StepRange};
use crate::surface;

/// Prefix shared by every token name.
pub const TOKEN_PREFIX: &str = "--color-";

/// Range searched when pinning a role to its own seed.
pub const STAY_TRUE_RANGE: StepRange = StepRange::new(300, 600);

// ---------------------------------------------------------------------------
// Token names
// ---------------------------------------------------------------------------

/// Which family of a role a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Base,
    Container,
    Fix,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Base, Self::Container, Self::Fix];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Container => "-container",
            Self::Fix => "-fix",
        }
    }
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Rest,
    Hover,
    Pressed,
}

impl State {
    pub const ALL: [Self; 3] = [Self::Rest, Self::Hover, Self::Pressed];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Rest => "",
            Self::Hover => "-hover",
            Self::Pressed => "-pressed",
        }
    }
}

/// Structured name of a per-role token.
///
/// Renders as `--color-[on-]<role>[-container|-fix][-hover|-pressed]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenName {
    pub role: Role,
    /// The paired text color rather than the fill.
    pub on: bool,
    pub variant: Variant,
    pub state: State,
}

impl TokenName {
    #[must_use]
    pub const fn new(role: Role, variant: Variant, state: State) -> Self {
        Self {
            role,
            on: false,
            variant,
            state,
        }
    }

    /// The on-color paired with this fill.
    #[must_use]
    pub const fn on(self) -> Self {
        Self { on: true, ..self }
    }

    /// All 18 token names of one role, fills before on-colors per state.
    pub fn all_for(role: Role) -> impl Iterator<Item = Self> {
        Variant::ALL.into_iter().flat_map(move |variant| {
            State::ALL.into_iter().flat_map(move |state| {
                let fill = Self::new(role, variant, state);
                [fill, fill.on()]
            })
        })
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{TOKEN_PREFIX}{}{}{}{}",
            if self.on { "on-" } else { "" },
            self.role.name(),
            self.variant.suffix(),
            self.state.suffix()
        )
    }
}

/// Full token name for a mode-wide token (`surface` → `--color-surface`).
#[must_use]
pub fn mode_token(name: &str) -> String {
    format!("{TOKEN_PREFIX}{name}")
}

// ---------------------------------------------------------------------------
// TokenSet
// ---------------------------------------------------------------------------

/// A flat token-name → color map for one mode.
///
/// Keys are full custom-property names (`--color-primary`). Iteration is
/// sorted by key, so every serialization of a set is stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSet {
    tokens: BTreeMap<String, Color>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.tokens.insert(name.into(), color);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.tokens.get(name).copied()
    }

    /// The `#rrggbb` value of `name`.
    #[must_use]
    pub fn hex(&self, name: &str) -> Option<String> {
        self.get(name).map(Color::to_hex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Add every token of `other`, replacing on collision.
    pub fn extend(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
    }

    /// Only the tokens whose names satisfy `keep`.
    #[must_use]
    pub fn filter(&self, keep: impl Fn(&str) -> bool) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .filter(|(k, _)| keep(k))
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        }
    }

    /// The flat name → hex map handed to serializers.
    #[must_use]
    pub fn to_hex_map(&self) -> BTreeMap<String, String> {
        self.tokens
            .iter()
            .map(|(k, v)| (k.clone(), v.to_hex()))
            .collect()
    }

    /// How the whole set appears to someone with `deficiency`.
    #[must_use]
    pub fn simulate(&self, deficiency: Deficiency) -> Self {
        Self {
            tokens: self
                .tokens
                .iter()
                .map(|(k, v)| (k.clone(), vision::simulate(*v, deficiency)))
                .collect(),
        }
    }
}

impl FromIterator<(String, Color)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (String, Color)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Step selection
// ---------------------------------------------------------------------------

/// Base step of `role` in `mode`.
///
/// First match wins: a pro-mode pin, then the step nearest the seed's
/// lightness (stay-true), then a contrast search against the mode
/// background using the text target.
#[must_use]
pub fn base_step(
    palette: &PaletteSet,
    role: Role,
    mode: Mode,
    level: ContrastLevel,
    settings: &OverrideSettings,
) -> Step {
    let scale = palette.scale(role);

    if let Some(pinned) = settings.pinned_step(role, mode) {
        log::debug!("{role}/{mode}: base pinned to {pinned}");
        return pinned;
    }

    if settings.stay_true_to_input_color {
        let step = find_step_by_lightness(scale, palette.seed(role), STAY_TRUE_RANGE);
        log::debug!("{role}/{mode}: base {step} nearest to seed lightness");
        return step;
    }

    let background = palette.neutral().get(mode.background_step());
    let found = find_optimal_step_by_contrast(
        scale,
        background,
        level.text_target(),
        mode.base_range(),
    );
    if found.meets_target {
        log::debug!("{role}/{mode}: base {} at {:.2}:1", found.step, found.ratio);
    } else {
        log::debug!(
            "{role}/{mode}: no base step reaches {}:1, closest {} at {:.2}:1",
            level.text_target(),
            found.step,
            found.ratio
        );
    }
    found.step
}

/// Range searched for the container step.
///
/// Inverse of the base: the darker the base, the lighter the container
/// (mirrored in dark mode).
#[must_use]
pub fn container_range(mode: Mode, base: Step) -> StepRange {
    let v = base.value();
    match mode {
        Mode::Light if v >= 600 => StepRange::new(100, 150),
        Mode::Light if v >= 400 => StepRange::new(150, 250),
        Mode::Light => StepRange::new(200, 300),
        Mode::Dark if v <= 400 => StepRange::new(850, 900),
        Mode::Dark if v <= 600 => StepRange::new(750, 850),
        Mode::Dark => StepRange::new(700, 800),
    }
}

/// Container step: contrast search against the base color with the
/// container target.
#[must_use]
pub fn container_step(scale: &ShadeScale, base: Step, mode: Mode, level: ContrastLevel) -> Step {
    find_optimal_step_by_contrast(
        scale,
        scale.get(base),
        level.container_target(),
        container_range(mode, base),
    )
    .step
}

/// Fix tokens sit at the same steps in both modes.
pub const FIX_STEPS: [Step; 3] = [Step::at(400), Step::at(500), Step::at(600)];

// ---------------------------------------------------------------------------
// On-color candidates
// ---------------------------------------------------------------------------

/// Ordering of on-color candidates on a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefer {
    Neutral,
    Scale,
}

/// Which end of the scales an on-color is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Light,
    Dark,
}

impl Side {
    /// Base rule: light extremes on steps 400 and darker.
    const fn for_step(step: Step) -> Self {
        if step.value() >= 400 { Self::Light } else { Self::Dark }
    }

    /// Whichever end reads better on `fill`.
    fn for_fill(fill: Color) -> Self {
        if contrast_ratio(fill, Color::WHITE) >= contrast_ratio(fill, Color::BLACK) {
            Self::Light
        } else {
            Self::Dark
        }
    }

    const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Scale ends on-colors are drawn from, outermost first.
const LIGHT_END: [Step; 3] = [Step::MIN, Step::at(50), Step::at(100)];
const DARK_END: [Step; 3] = [Step::MAX, Step::at(950), Step::at(900)];

fn extremes(scale: &ShadeScale, neutral: &ShadeScale, side: Side, prefer: Prefer) -> [Color; 4] {
    let (n, [s0, s1, s2]) = match side {
        Side::Light => (neutral.get(Step::MIN), LIGHT_END.map(|s| scale.get(s))),
        Side::Dark => (neutral.get(Step::MAX), DARK_END.map(|s| scale.get(s))),
    };
    match prefer {
        Prefer::Neutral => [n, s0, s1, s2],
        Prefer::Scale => [s0, n, s1, s2],
    }
}

/// Extremes of the better-reading side, then those of the other side.
fn both_sides(scale: &ShadeScale, neutral: &ShadeScale, fill: Color, prefer: Prefer) -> [Color; 8] {
    let side = Side::for_fill(fill);
    let [a, b, c, d] = extremes(scale, neutral, side, prefer);
    let [e, f, g, h] = extremes(scale, neutral, side.opposite(), prefer);
    [a, b, c, d, e, f, g, h]
}

/// On-container candidates for a light container: in-family darks, then
/// neutral ones.
const ON_LIGHT_CONTAINER: ([Step; 3], [Step; 3]) = (
    [Step::MAX, Step::at(900), Step::at(800)],
    [Step::at(900), Step::at(800), Step::MIN],
);
const ON_DARK_CONTAINER: ([Step; 3], [Step; 3]) = (
    [Step::MIN, Step::at(100), Step::at(200)],
    [Step::at(100), Step::at(200), Step::MAX],
);

/// In-family extremes first, then neutral ones.
fn container_candidates(scale: &ShadeScale, neutral: &ShadeScale, step: Step) -> [Color; 6] {
    let (own, shared) = if step < Step::MID {
        ON_LIGHT_CONTAINER
    } else {
        ON_DARK_CONTAINER
    };
    let [a, b, c] = own.map(|s| scale.get(s));
    let [d, e, f] = shared.map(|s| neutral.get(s));
    [a, b, c, d, e, f]
}

fn best_on(fill: Color, candidates: &[Color], target: f64) -> Color {
    find_best_contrast(fill, candidates, target).unwrap_or(Color::BLACK)
}

// ---------------------------------------------------------------------------
// Mapper
// ---------------------------------------------------------------------------

/// Resolved steps of one role, useful for inspection and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSteps {
    pub base: [Step; 3],
    pub container: [Step; 3],
    pub fix: [Step; 3],
}

impl RoleSteps {
    /// Resolve every step of `role` in `mode`.
    #[must_use]
    pub fn resolve(
        palette: &PaletteSet,
        role: Role,
        mode: Mode,
        level: ContrastLevel,
        settings: &OverrideSettings,
    ) -> Self {
        let (hover, pressed) = level.state_deltas(mode);
        let base = base_step(palette, role, mode, level, settings);
        let container = container_step(palette.scale(role), base, mode, level);
        Self {
            base: [base, base.offset(hover), base.offset(pressed)],
            container: [container, container.offset(hover), container.offset(pressed)],
            fix: FIX_STEPS,
        }
    }

    #[must_use]
    pub const fn get(&self, variant: Variant, state: State) -> Step {
        let steps = match variant {
            Variant::Base => &self.base,
            Variant::Container => &self.container,
            Variant::Fix => &self.fix,
        };
        match state {
            State::Rest => steps[0],
            State::Hover => steps[1],
            State::Pressed => steps[2],
        }
    }
}

/// The 18 tokens of one role in `mode`.
#[must_use]
pub fn generate_role_tokens(
    palette: &PaletteSet,
    role: Role,
    mode: Mode,
    level: ContrastLevel,
    settings: &OverrideSettings,
) -> TokenSet {
    let scale = palette.scale(role);
    let neutral = palette.neutral();
    let steps = RoleSteps::resolve(palette, role, mode, level, settings);
    let text = level.text_target();

    let mut set = TokenSet::new();
    for variant in Variant::ALL {
        for state in State::ALL {
            let step = steps.get(variant, state);
            let fill = scale.get(step);
            let on = match (variant, state) {
                (Variant::Container, _) => {
                    best_on(fill, &container_candidates(scale, neutral, step), text)
                }
                (Variant::Base, State::Rest) => {
                    let side = Side::for_step(step);
                    best_on(fill, &extremes(scale, neutral, side, Prefer::Neutral), text)
                }
                (Variant::Fix, _) => {
                    best_on(fill, &both_sides(scale, neutral, fill, Prefer::Neutral), text)
                }
                (Variant::Base, _) => {
                    let prefer = if mode.is_dark() { Prefer::Scale } else { Prefer::Neutral };
                    best_on(fill, &both_sides(scale, neutral, fill, prefer), text)
                }
            };
            let name = TokenName::new(role, variant, state);
            set.insert(name.to_string(), fill);
            set.insert(name.on().to_string(), on);
        }
    }
    set
}

/// Every token for `mode`: all roles plus the mode-wide set.
///
/// Roles are independent of each other; the result does not depend on the
/// order they are visited in.
#[must_use]
pub fn generate_tokens(
    palette: &PaletteSet,
    mode: Mode,
    level: ContrastLevel,
    settings: &OverrideSettings,
) -> TokenSet {
    let mut set = TokenSet::new();
    for role in Role::ALL {
        set.extend(generate_role_tokens(palette, role, mode, level, settings));
    }
    set.extend(surface::generate_surface_tokens(palette, mode, level));
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Seeds;

    fn palette(level: ContrastLevel) -> PaletteSet {
        PaletteSet::generate(&Seeds::default(), &OverrideSettings::default(), level)
    }

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn name_grammar() {
        let n = TokenName::new(Role::Primary, Variant::Base, State::Rest);
        assert_eq!(n.to_string(), "--color-primary");
        assert_eq!(n.on().to_string(), "--color-on-primary");
        let n = TokenName::new(Role::Error, Variant::Container, State::Hover);
        assert_eq!(n.to_string(), "--color-error-container-hover");
        assert_eq!(n.on().to_string(), "--color-on-error-container-hover");
        let n = TokenName::new(Role::Info, Variant::Fix, State::Pressed);
        assert_eq!(n.to_string(), "--color-info-fix-pressed");
        assert_eq!(mode_token("surface"), "--color-surface");
    }

    #[test]
    fn eighteen_names_per_role() {
        let names: Vec<String> = TokenName::all_for(Role::Warning).map(|n| n.to_string()).collect();
        assert_eq!(names.len(), 18);
        let unique: std::collections::BTreeSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), 18);
    }

    // ── Steps ───────────────────────────────────────────────────────

    #[test]
    fn container_range_is_inverse_of_base() {
        let s = |v| Step::snap(v);
        assert_eq!(container_range(Mode::Light, s(600)), StepRange::new(100, 150));
        assert_eq!(container_range(Mode::Light, s(450)), StepRange::new(150, 250));
        assert_eq!(container_range(Mode::Light, s(300)), StepRange::new(200, 300));
        assert_eq!(container_range(Mode::Dark, s(400)), StepRange::new(850, 900));
        assert_eq!(container_range(Mode::Dark, s(550)), StepRange::new(750, 850));
        assert_eq!(container_range(Mode::Dark, s(700)), StepRange::new(700, 800));
    }

    #[test]
    fn pinned_tone_wins() {
        let mut settings = OverrideSettings {
            pro_mode: true,
            stay_true_to_input_color: true,
            ..OverrideSettings::default()
        };
        settings.custom_tones.set(Role::Primary, Mode::Dark, 837);
        let p = palette(ContrastLevel::Default);
        let step = base_step(&p, Role::Primary, Mode::Dark, ContrastLevel::Default, &settings);
        assert_eq!(step.value(), 850);
    }

    #[test]
    fn stay_true_stays_in_range() {
        let settings = OverrideSettings {
            stay_true_to_input_color: true,
            ..OverrideSettings::default()
        };
        let p = palette(ContrastLevel::Default);
        for role in Role::ALL {
            for mode in Mode::ALL {
                let step = base_step(&p, role, mode, ContrastLevel::Default, &settings);
                assert!(STAY_TRUE_RANGE.contains(step), "{role}/{mode}: {step}");
            }
        }
    }

    #[test]
    fn base_search_uses_mode_range() {
        let p = palette(ContrastLevel::Default);
        let settings = OverrideSettings::default();
        for role in Role::ALL {
            let light = base_step(&p, role, Mode::Light, ContrastLevel::Default, &settings);
            let dark = base_step(&p, role, Mode::Dark, ContrastLevel::Default, &settings);
            assert!(Mode::Light.base_range().contains(light));
            assert!(Mode::Dark.base_range().contains(dark));
        }
    }

    #[test]
    fn state_steps_follow_deltas() {
        let p = palette(ContrastLevel::Default);
        let settings = OverrideSettings::default();
        let light = RoleSteps::resolve(
            &p,
            Role::Primary,
            Mode::Light,
            ContrastLevel::Default,
            &settings,
        );
        assert_eq!(light.base[1], light.base[0].offset(100));
        assert_eq!(light.base[2], light.base[0].offset(200));
        let dark = RoleSteps::resolve(
            &p,
            Role::Primary,
            Mode::Dark,
            ContrastLevel::Default,
            &settings,
        );
        assert_eq!(dark.base[1], dark.base[0].offset(-50));
        assert_eq!(dark.fix, light.fix);
    }

    // ── Tokens ──────────────────────────────────────────────────────

    #[test]
    fn role_tokens_are_complete() {
        let p = palette(ContrastLevel::Default);
        let set = generate_role_tokens(
            &p,
            Role::Success,
            Mode::Light,
            ContrastLevel::Default,
            &OverrideSettings::default(),
        );
        assert_eq!(set.len(), 18);
        for name in TokenName::all_for(Role::Success) {
            assert!(set.get(&name.to_string()).is_some(), "missing {name}");
        }
    }

    #[test]
    fn on_colors_are_extremes() {
        let p = palette(ContrastLevel::Default);
        let settings = OverrideSettings::default();
        for mode in Mode::ALL {
            let set = generate_role_tokens(
                &p,
                Role::Primary,
                mode,
                ContrastLevel::Default,
                &settings,
            );
            let scale = p.scale(Role::Primary);
            let neutral = p.neutral();
            let extremes: Vec<String> = [0, 50, 100, 900, 950, 1000]
                .iter()
                .map(|&v| scale.hex(Step::snap(v)))
                .chain([0, 1000].iter().map(|&v| neutral.hex(Step::snap(v))))
                .collect();
            let on = set.hex("--color-on-primary").unwrap();
            assert!(extremes.contains(&on), "{mode}: {on} is mid-scale");
        }
    }

    #[test]
    fn fix_tokens_match_across_modes() {
        let p = palette(ContrastLevel::Default);
        let settings = OverrideSettings::default();
        let light = generate_role_tokens(
            &p,
            Role::Info,
            Mode::Light,
            ContrastLevel::Default,
            &settings,
        );
        let dark = generate_role_tokens(
            &p,
            Role::Info,
            Mode::Dark,
            ContrastLevel::Default,
            &settings,
        );
        for name in ["--color-info-fix", "--color-on-info-fix", "--color-info-fix-pressed"] {
            assert_eq!(light.get(name), dark.get(name), "{name}");
        }
    }

    #[test]
    fn container_text_is_readable_when_possible() {
        let p = palette(ContrastLevel::Default);
        let set = generate_tokens(
            &p,
            Mode::Light,
            ContrastLevel::Default,
            &OverrideSettings::default(),
        );
        for role in Role::ALL {
            let fill = set.get(&format!("--color-{role}-container")).unwrap();
            let on = set.get(&format!("--color-on-{role}-container")).unwrap();
            assert!(contrast_ratio(fill, on) >= 4.5, "{role}");
        }
    }

    #[test]
    fn stay_true_follows_seed_lightness() {
        let settings = OverrideSettings {
            stay_true_to_input_color: true,
            ..OverrideSettings::default()
        };
        let p = palette(ContrastLevel::Default);
        for role in Role::ALL {
            let seed_l = p.seed(role).l;
            let step = base_step(&p, role, Mode::Light, ContrastLevel::Default, &settings);
            let gap = |s: Step| (p.scale(role).get(s).l - seed_l).abs();
            assert!(STAY_TRUE_RANGE.iter().all(|s| gap(step) <= gap(s)), "{role}: {step}");
        }
    }

    #[test]
    fn on_container_prefers_own_family() {
        let settings = OverrideSettings::default();
        for level in [ContrastLevel::Default, ContrastLevel::ExtraHigh] {
            let p = palette(level);
            for mode in Mode::ALL {
                for role in Role::ALL {
                    let scale = p.scale(role);
                    let steps = RoleSteps::resolve(&p, role, mode, level, &settings);
                    let set = generate_role_tokens(&p, role, mode, level, &settings);
                    for state in State::ALL {
                        let step = steps.get(Variant::Container, state);
                        let fill = scale.get(step);
                        let name = TokenName::new(role, Variant::Container, state);
                        let on = set.get(&name.on().to_string()).unwrap();
                        let (own, _) = if step < Step::MID {
                            ON_LIGHT_CONTAINER
                        } else {
                            ON_DARK_CONTAINER
                        };
                        let target = level.text_target();
                        let first_own = own
                            .iter()
                            .map(|s| scale.get(*s))
                            .find(|c| contrast_ratio(fill, *c) >= target);
                        if let Some(expected) = first_own {
                            assert_eq!(on, expected, "{mode}/{level}: {name}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn state_on_colors_are_recomputed() {
        let mut settings = OverrideSettings {
            pro_mode: true,
            ..OverrideSettings::default()
        };
        // A light base (dark text) whose pressed fill is a mid blue.
        settings.custom_tones.set(Role::Primary, Mode::Light, 300);
        let p = palette(ContrastLevel::Default);
        let level = ContrastLevel::Default;
        let set = generate_role_tokens(&p, Role::Primary, Mode::Light, level, &settings);
        let scale = p.scale(Role::Primary);
        assert_eq!(set.get("--color-primary"), Some(scale.get(Step::at(300))));
        assert_eq!(set.get("--color-primary-pressed"), Some(scale.get(Step::at(500))));

        let on_base = set.get("--color-on-primary").unwrap();
        let on_pressed = set.get("--color-on-primary-pressed").unwrap();
        let pressed = set.get("--color-primary-pressed").unwrap();
        assert_ne!(on_pressed, on_base);
        assert!(contrast_ratio(pressed, on_pressed) >= 4.5);
        assert!(contrast_ratio(pressed, on_base) < contrast_ratio(pressed, on_pressed));
    }

    #[test]
    fn state_on_colors_read_whenever_possible() {
        let settings = OverrideSettings::default();
        let p = palette(ContrastLevel::Default);
        let text = ContrastLevel::Default.text_target();
        for mode in Mode::ALL {
            for role in Role::ALL {
                let set = generate_role_tokens(&p, role, mode, ContrastLevel::Default, &settings);
                let scale = p.scale(role);
                for variant in [Variant::Base, Variant::Fix] {
                    for state in [State::Hover, State::Pressed] {
                        let name = TokenName::new(role, variant, state);
                        let fill = set.get(&name.to_string()).unwrap();
                        let on = set.get(&name.on().to_string()).unwrap();
                        let reachable = both_sides(scale, p.neutral(), fill, Prefer::Neutral)
                            .iter()
                            .any(|c| contrast_ratio(fill, *c) >= text);
                        if reachable {
                            assert!(contrast_ratio(fill, on) >= text, "{mode}: {name}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn simulate_keeps_every_key() {
        let p = palette(ContrastLevel::Default);
        let set = generate_tokens(
            &p,
            Mode::Dark,
            ContrastLevel::Default,
            &OverrideSettings::default(),
        );
        let sim = set.simulate(Deficiency::Grayscale);
        assert_eq!(sim.len(), set.len());
        assert!(sim.iter().all(|(_, c)| c.is_achromatic()));
    }
}
