// SPDX-License-Identifier: MIT

//! Mode-wide tokens: surfaces, outlines, disabled, focus, link, overlays.
//!
//! These come from the neutral scale (primary and info for focus and
//! link) and do not belong to any role. Fixed steps are used where the
//! value is structural; the outline ladder and anything carrying text are
//! searched against the surface with the level's targets.

use tonal_color::Color;

use crate::contrast::{find_best_contrast, find_optimal_step_by_contrast};
use crate::palette::PaletteSet;
use crate::role::Role;
use crate::settings::{ContrastLevel, Mode};
use crate::shades::ShadeScale;
use crate::step::{Step, StepRange};
use crate::tokens::{TokenSet, mode_token};

/// Names of every mode-wide token, without the `--color-` prefix.
pub const SURFACE_TOKENS: [&str; 19] = [
    "background",
    "on-background",
    "surface",
    "on-surface",
    "surface-dim",
    "surface-container",
    "surface-container-high",
    "on-surface-variant",
    "inverse-surface",
    "on-inverse-surface",
    "outline-subtle",
    "outline-default",
    "outline-strong",
    "disabled",
    "on-disabled",
    "focus",
    "link",
    "backdrop",
    "shadow",
];

/// Whether a full token name is one of the mode-wide tokens.
#[must_use]
pub fn is_surface_token(name: &str) -> bool {
    name.strip_prefix(crate::tokens::TOKEN_PREFIX)
        .is_some_and(|short| SURFACE_TOKENS.contains(&short))
}

/// Outline ladder search range, both modes.
const OUTLINE_RANGE: StepRange = StepRange::new(100, 900);

/// Disabled text sits near 3:1, legible but clearly inactive.
const DISABLED_TEXT_TARGET: f64 = 3.0;

// Fixed neutral positions, (light, dark).
const SURFACE: (Step, Step) = (Step::MIN, Step::MAX);
const SURFACE_DIM: (Step, Step) = (Step::at(50), Step::at(950));
const SURFACE_CONTAINER: (Step, Step) = (Step::at(100), Step::at(900));
const SURFACE_CONTAINER_HIGH: (Step, Step) = (Step::at(150), Step::at(850));
const INVERSE_SURFACE: (Step, Step) = (Step::at(900), Step::at(100));
const DISABLED: (Step, Step) = (Step::at(100), Step::at(900));

/// Text candidates on the surface and on the inverse surface, (light, dark).
const ON_SURFACE: ([Step; 3], [Step; 3]) = (
    [Step::at(900), Step::at(950), Step::MAX],
    [Step::at(100), Step::at(50), Step::MIN],
);
const ON_INVERSE: ([Step; 3], [Step; 3]) = (
    [Step::MIN, Step::at(50), Step::at(100)],
    [Step::MAX, Step::at(950), Step::at(900)],
);

// Search ranges, (light, dark).
const SURFACE_VARIANT_RANGE: (StepRange, StepRange) =
    (StepRange::new(500, 900), StepRange::new(100, 500));
const ON_DISABLED_RANGE: (StepRange, StepRange) =
    (StepRange::new(400, 900), StepRange::new(100, 600));
const ACCENT_RANGE: (StepRange, StepRange) = (StepRange::new(400, 800), StepRange::new(200, 600));

/// Pick the light-mode or dark-mode value.
const fn by_mode<T: Copy>(mode: Mode, (light, dark): (T, T)) -> T {
    match mode {
        Mode::Light => light,
        Mode::Dark => dark,
    }
}

/// Every mode-wide token for `mode`.
#[must_use]
pub fn generate_surface_tokens(palette: &PaletteSet, mode: Mode, level: ContrastLevel) -> TokenSet {
    let neutral = palette.neutral();
    let at = |pair: (Step, Step)| neutral.get(by_mode(mode, pair));
    let text = level.text_target();
    let text_on = |fill: Color, steps: ([Step; 3], [Step; 3])| {
        let candidates = by_mode(mode, steps).map(|s| neutral.get(s));
        find_best_contrast(fill, &candidates, text).unwrap_or(Color::BLACK)
    };
    let search = |scale: &ShadeScale, bg: Color, target: f64, range: StepRange| {
        scale.get(find_optimal_step_by_contrast(scale, bg, target, range).step)
    };

    let background = at(SURFACE);
    let surface = background;
    let on_surface = text_on(surface, ON_SURFACE);

    let inverse = at(INVERSE_SURFACE);
    let on_inverse = text_on(inverse, ON_INVERSE);

    let on_surface_variant = search(neutral, surface, text, by_mode(mode, SURFACE_VARIANT_RANGE));

    let [subtle, default, strong] = level.outline_targets();
    let outline = |target| search(neutral, surface, target, OUTLINE_RANGE);

    let disabled = at(DISABLED);
    let on_disabled = search(
        neutral,
        disabled,
        DISABLED_TEXT_TARGET,
        by_mode(mode, ON_DISABLED_RANGE),
    );

    let accent_range = by_mode(mode, ACCENT_RANGE);
    let focus = search(
        palette.scale(Role::Primary),
        surface,
        level.container_target(),
        accent_range,
    );
    let link = search(palette.scale(Role::Info), surface, text, accent_range);

    let black = neutral.get(Step::MAX);
    let backdrop = black.with_alpha(by_mode(mode, (0.5, 0.7)));
    let shadow = black.with_alpha(by_mode(mode, (0.12, 0.4)));

    let values = [
        background,
        on_surface,
        surface,
        on_surface,
        at(SURFACE_DIM),
        at(SURFACE_CONTAINER),
        at(SURFACE_CONTAINER_HIGH),
        on_surface_variant,
        inverse,
        on_inverse,
        outline(subtle),
        outline(default),
        outline(strong),
        disabled,
        on_disabled,
        focus,
        link,
        backdrop,
        shadow,
    ];

    SURFACE_TOKENS
        .iter()
        .zip(values)
        .map(|(name, color)| (mode_token(name), color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio;
    use crate::palette::Seeds;
    use crate::settings::OverrideSettings;

    fn tokens(mode: Mode, level: ContrastLevel) -> TokenSet {
        let palette = PaletteSet::generate(&Seeds::default(), &OverrideSettings::default(), level);
        generate_surface_tokens(&palette, mode, level)
    }

    #[test]
    fn every_surface_token_present() {
        for mode in Mode::ALL {
            let set = tokens(mode, ContrastLevel::Default);
            assert_eq!(set.len(), SURFACE_TOKENS.len());
            for name in SURFACE_TOKENS {
                assert!(is_surface_token(&mode_token(name)));
                assert!(set.get(&mode_token(name)).is_some(), "{mode}: {name}");
            }
        }
        assert!(!is_surface_token("--color-primary"));
    }

    #[test]
    fn surface_is_the_mode_extreme() {
        let light = tokens(Mode::Light, ContrastLevel::Default);
        let dark = tokens(Mode::Dark, ContrastLevel::Default);
        let l = light.get("--color-surface").unwrap();
        let d = dark.get("--color-surface").unwrap();
        assert!(l.l > 0.99 && d.l < 0.06);
    }

    #[test]
    fn outline_ladder_rises() {
        for level in ContrastLevel::ALL {
            for mode in Mode::ALL {
                let set = tokens(mode, level);
                let surface = set.get("--color-surface").unwrap();
                let ratio = |n: &str| contrast_ratio(set.get(n).unwrap(), surface);
                let subtle = ratio("--color-outline-subtle");
                let default = ratio("--color-outline-default");
                let strong = ratio("--color-outline-strong");
                assert!(subtle <= default && default <= strong, "{mode}/{level}");
                let [_, _, target] = level.outline_targets();
                assert!(strong >= target, "{mode}/{level}: strong {strong:.2}");
            }
        }
    }

    #[test]
    fn on_surface_meets_text_target() {
        for level in ContrastLevel::ALL {
            for mode in Mode::ALL {
                let set = tokens(mode, level);
                let ratio = contrast_ratio(
                    set.get("--color-on-surface").unwrap(),
                    set.get("--color-surface").unwrap(),
                );
                assert!(ratio >= level.text_target(), "{mode}/{level}: {ratio:.2}");
            }
        }
    }

    #[test]
    fn fixed_positions_mirror_between_modes() {
        let palette = PaletteSet::generate(
            &Seeds::default(),
            &OverrideSettings::default(),
            ContrastLevel::Default,
        );
        let neutral = palette.neutral();
        let light = generate_surface_tokens(&palette, Mode::Light, ContrastLevel::Default);
        let dark = generate_surface_tokens(&palette, Mode::Dark, ContrastLevel::Default);
        for (name, l, d) in [
            ("surface-dim", 50, 950),
            ("surface-container", 100, 900),
            ("surface-container-high", 150, 850),
            ("inverse-surface", 900, 100),
            ("disabled", 100, 900),
        ] {
            let token = mode_token(name);
            assert_eq!(light.get(&token), Some(neutral.get(Step::at(l))), "light {name}");
            assert_eq!(dark.get(&token), Some(neutral.get(Step::at(d))), "dark {name}");
        }
    }

    #[test]
    fn overlays_are_translucent() {
        let set = tokens(Mode::Light, ContrastLevel::Default);
        assert_eq!(set.hex("--color-backdrop").unwrap().len(), 9);
        assert_eq!(set.hex("--color-shadow").unwrap().len(), 9);
        assert_eq!(set.hex("--color-surface").unwrap().len(), 7);
    }
}
