//! End-to-end behavior of the token pipeline.
//!
//! These go through the public API only: seeds and settings in, token sets
//! and exports out.

use pretty_assertions::assert_eq;
use tonal_color::Color;
use tonal_color::color::hue_diff;
use tonal_engine::contrast::{
    contrast_ratio, find_best_contrast, find_closest_step_in_scale, find_step_meeting,
};
use tonal_engine::export::{ExportFormat, export};
use tonal_engine::settings::HarmonyMode;
use tonal_engine::step::StepRange;
use tonal_engine::store::{Event, State, update};
use tonal_engine::tokens::{RoleSteps, TokenName, generate_role_tokens};
use tonal_engine::{
    ContrastLevel, Mode, OverrideSettings, PaletteSet, Role, Seeds, Step, generate, generate_shades,
};

fn seeds_with_primary(hex: &str) -> Seeds {
    let mut seeds = Seeds::default();
    seeds.set(Role::Primary, hex);
    seeds
}

// ── Scales ──────────────────────────────────────────────────────────

#[test]
fn every_seed_gives_a_full_light_to_dark_scale() {
    for seed in ["#0052cc", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#6b4fbb", "#123456"] {
        let scale = generate_shades(seed).unwrap();
        let steps: Vec<u16> = scale.iter().map(|(s, _)| s.value()).collect();
        assert_eq!(steps, Step::all().map(Step::value).collect::<Vec<_>>());
        let sum = |c: Color| {
            let (r, g, b) = c.to_rgb8();
            u32::from(r) + u32::from(g) + u32::from(b)
        };
        assert!(sum(scale.get(Step::MIN)) > sum(scale.get(Step::MAX)), "{seed}");
    }
}

#[test]
fn closest_step_roundtrips_step_500() {
    let scale = generate_shades("#0052cc").unwrap();
    let found = find_closest_step_in_scale(&scale, scale.get(Step::MID), StepRange::FULL);
    assert_eq!(found, Step::MID);
}

// ── Contrast ────────────────────────────────────────────────────────

#[test]
fn ratio_symmetry_over_a_palette() {
    let palette = PaletteSet::generate(
        &Seeds::default(),
        &OverrideSettings::default(),
        ContrastLevel::Default,
    );
    let colors: Vec<Color> = Role::ALL
        .iter()
        .flat_map(|r| palette.scale(*r).iter().map(|(_, c)| c))
        .collect();
    for a in colors.iter().step_by(5) {
        assert!((contrast_ratio(*a, *a) - 1.0).abs() < 1e-12);
        for b in colors.iter().step_by(7) {
            assert!((contrast_ratio(*a, *b) - contrast_ratio(*b, *a)).abs() < 1e-12);
        }
    }
}

#[test]
fn best_contrast_always_picks_a_candidate() {
    let candidates = [Color::gray(0.4), Color::gray(0.5), Color::gray(0.6)];
    for bg in [Color::WHITE, Color::BLACK, Color::gray(0.5)] {
        for target in [1.0, 4.5, 21.0] {
            let pick = find_best_contrast(bg, &candidates, target).unwrap();
            assert!(candidates.contains(&pick));
        }
    }
}

// ── Token scenarios ─────────────────────────────────────────────────

#[test]
fn blue_primary_light_default() {
    let seeds = seeds_with_primary("#0052CC");
    let settings = OverrideSettings::default();
    let generated = generate(&seeds, &settings, ContrastLevel::Default);
    let tokens = &generated.light;

    let primary = tokens.get("--color-primary").unwrap();
    let surface = tokens.get("--color-surface").unwrap();
    let scale = generated.palette.scale(Role::Primary);
    let reachable = find_step_meeting(scale, surface, 4.5, StepRange::new(300, 500)).is_some();
    assert!(reachable);
    assert!(contrast_ratio(primary, surface) >= 4.5);

    let on = tokens.hex("--color-on-primary").unwrap();
    let neutral = generated.palette.neutral();
    let extremes = [
        scale.hex(Step::MIN),
        scale.hex(Step::MAX),
        neutral.hex(Step::MIN),
        neutral.hex(Step::MAX),
    ];
    assert!(extremes.contains(&on), "on-primary {on} is not a pure extreme");
}

#[test]
fn extra_high_moves_the_container() {
    let seeds = seeds_with_primary("#0052cc");
    let settings = OverrideSettings::default();
    let steps = |level| {
        let palette = PaletteSet::generate(&seeds, &settings, level);
        let steps = RoleSteps::resolve(&palette, Role::Primary, Mode::Light, level, &settings);
        let scale = palette.scale(Role::Primary);
        let ratio = contrast_ratio(scale.get(steps.container[0]), scale.get(steps.base[0]));
        (steps.container[0], ratio)
    };
    let (default_step, default_ratio) = steps(ContrastLevel::Default);
    let (strict_step, strict_ratio) = steps(ContrastLevel::ExtraHigh);
    assert_ne!(default_step, strict_step);
    assert!(strict_ratio > default_ratio);
}

#[test]
fn complementary_harmony_sets_opposite_secondary() {
    let settings = OverrideSettings {
        harmony_mode: HarmonyMode::Complementary,
        ..OverrideSettings::default()
    };
    for secondary in ["#6b4fbb", "#00ff00", "garbage"] {
        let mut seeds = Seeds::default();
        seeds.set(Role::Secondary, secondary);
        let palette = PaletteSet::generate(&seeds, &settings, ContrastLevel::Default);
        let p = palette.seed(Role::Primary);
        let s = palette.seed(Role::Secondary);
        assert!((hue_diff(s.h, (p.h + 180.0) % 360.0)).abs() < 1e-9, "prior {secondary}");
    }
}

#[test]
fn half_saturation_halves_every_role_scale() {
    let seeds = Seeds::default();
    let full = PaletteSet::generate(&seeds, &OverrideSettings::default(), ContrastLevel::Default);
    let half_settings = OverrideSettings {
        saturation_multiplier: 0.5,
        ..OverrideSettings::default()
    };
    let half = PaletteSet::generate(&seeds, &half_settings, ContrastLevel::Default);
    for role in Role::ALL {
        for step in Step::all() {
            let (a, b) = (full.scale(role).get(step), half.scale(role).get(step));
            assert!((b.c - a.c * 0.5).abs() < 1e-9, "{role} {step}");
            assert!((b.l - a.l).abs() < 1e-12, "{role} {step}");
            if !a.is_achromatic() {
                assert!(hue_diff(a.h, b.h) < 1e-9, "{role} {step}");
            }
        }
    }
    assert_eq!(full.neutral(), half.neutral());
}

#[test]
fn generation_is_idempotent() {
    let settings = OverrideSettings {
        temperature_shift: 7.5,
        stay_true_to_input_color: true,
        ..OverrideSettings::default()
    };
    let a = generate(&Seeds::default(), &settings, ContrastLevel::High);
    let b = generate(&Seeds::default(), &settings, ContrastLevel::High);
    assert_eq!(a.light.to_hex_map(), b.light.to_hex_map());
    assert_eq!(a.dark.to_hex_map(), b.dark.to_hex_map());
    let ja = export(ExportFormat::Json, &a.light, &a.dark, &a.palette).unwrap();
    let jb = export(ExportFormat::Json, &b.light, &b.dark, &b.palette).unwrap();
    assert_eq!(ja, jb);
}

#[test]
fn malformed_input_still_gives_complete_tokens() {
    let seeds = Seeds::from_fn(|_| "not-a-color".to_string());
    let mut settings = OverrideSettings {
        pro_mode: true,
        saturation_multiplier: 9.0,
        temperature_shift: f64::NAN,
        ..OverrideSettings::default()
    };
    settings.custom_tones.set(Role::Info, Mode::Light, 12_345);
    let generated = generate(&seeds, &settings, ContrastLevel::ExtraHigh);
    for role in Role::ALL {
        for name in TokenName::all_for(role) {
            assert!(generated.light.get(&name.to_string()).is_some(), "{name}");
            assert!(generated.dark.get(&name.to_string()).is_some(), "{name}");
        }
    }
    assert_eq!(generated.light.len(), generated.dark.len());
    let info = generated.palette.scale(Role::Info);
    assert_eq!(generated.light.get("--color-info"), Some(info.get(Step::MAX)));
}

#[test]
fn role_order_does_not_matter() {
    let seeds = Seeds::default();
    let settings = OverrideSettings::default();
    let palette = PaletteSet::generate(&seeds, &settings, ContrastLevel::Default);
    let role_tokens = |role: &Role| {
        generate_role_tokens(&palette, *role, Mode::Dark, ContrastLevel::Default, &settings)
    };
    let forward: Vec<_> = Role::ALL.iter().map(role_tokens).collect();
    let mut backward: Vec<_> = Role::ALL.iter().rev().map(role_tokens).collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

// ── Store ───────────────────────────────────────────────────────────

#[test]
fn store_tracks_generation() {
    let state = State::default();
    let state = update(&state, Event::SetContrast(ContrastLevel::High));
    let state = update(&state, Event::SetMode(Mode::Dark));
    let expected = generate(&state.seeds, &state.settings, ContrastLevel::High);
    assert_eq!(state.tokens(), &expected.dark);
}
