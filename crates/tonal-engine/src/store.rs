// SPDX-License-Identifier: MIT

//! Reducer-style state: `update(&State, Event) -> State`.
//!
//! The store owns the inputs (seeds, overrides, mode, level) and the
//! derived palette and token sets. Each [`Event`] declares what it
//! invalidates; [`update`] recomputes exactly that and nothing else. Both
//! modes are always derived, so switching mode only flips which set
//! [`State::tokens`] returns.

use bitflags::bitflags;
use tonal_color::Color;

use crate::overrides::harmonize_secondary;
use crate::palette::Seeds;
use crate::role::Role;
use crate::settings::{ContrastLevel, HarmonyMode, Mode, NeutralTintSource, OverrideSettings};
use crate::tokens::TokenSet;
use crate::{Generated, generate};

bitflags! {
    /// What an event makes stale.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Invalidation: u8 {
        /// Scales must be rebuilt (implies tokens).
        const PALETTE = 0b0000_0001;
        /// Token sets must be remapped from the existing palette.
        const TOKENS  = 0b0000_0010;
        /// Only the active mode changed.
        const MODE    = 0b0000_0100;
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetSeed(Role, String),
    /// Replace all seeds at once (preset, loaded file).
    LoadSeeds(Seeds),
    SetMode(Mode),
    SetContrast(ContrastLevel),
    SetSaturation(f64),
    SetTemperature(f64),
    SetHarmony(HarmonyMode),
    SetNeutralSource(NeutralTintSource),
    SetCustomNeutral(Option<String>),
    SetPureNeutrals(bool),
    SetStayTrue(bool),
    SetProMode(bool),
    PinTone { role: Role, mode: Mode, value: i32 },
    ClearTone { role: Role, mode: Mode },
    /// Back to default seeds and settings, keeping mode and level.
    Reset,
}

impl Event {
    /// What applying this event invalidates.
    #[must_use]
    pub const fn invalidates(&self) -> Invalidation {
        match self {
            Self::SetMode(_) => Invalidation::MODE,
            Self::SetStayTrue(_)
            | Self::SetProMode(_)
            | Self::PinTone { .. }
            | Self::ClearTone { .. } => Invalidation::TOKENS,
            Self::SetSeed(..)
            | Self::LoadSeeds(_)
            | Self::SetContrast(_)
            | Self::SetSaturation(_)
            | Self::SetTemperature(_)
            | Self::SetHarmony(_)
            | Self::SetNeutralSource(_)
            | Self::SetCustomNeutral(_)
            | Self::SetPureNeutrals(_)
            | Self::Reset => Invalidation::PALETTE.union(Invalidation::TOKENS),
        }
    }
}

/// Inputs plus everything derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub seeds: Seeds,
    pub settings: OverrideSettings,
    pub mode: Mode,
    pub contrast: ContrastLevel,
    derived: Generated,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            Seeds::default(),
            OverrideSettings::default(),
            Mode::default(),
            ContrastLevel::default(),
        )
    }
}

impl State {
    #[must_use]
    pub fn new(
        seeds: Seeds,
        settings: OverrideSettings,
        mode: Mode,
        contrast: ContrastLevel,
    ) -> Self {
        let derived = generate(&seeds, &settings, contrast);
        Self {
            seeds,
            settings,
            mode,
            contrast,
            derived,
        }
    }

    /// Tokens of the active mode.
    #[must_use]
    pub const fn tokens(&self) -> &TokenSet {
        self.derived.tokens(self.mode)
    }

    #[must_use]
    pub const fn generated(&self) -> &Generated {
        &self.derived
    }
}

/// Write the harmony-derived secondary seed back into `seeds`.
fn sync_secondary(seeds: &mut Seeds, harmony: HarmonyMode) {
    let derived = Color::hex(&seeds.primary).and_then(|p| harmonize_secondary(p, harmony));
    if let Some(secondary) = derived {
        seeds.secondary = secondary.to_hex();
    }
}

/// Apply `event` to `state`, returning the new state.
#[must_use]
pub fn update(state: &State, event: Event) -> State {
    let invalidation = event.invalidates();
    let mut next = state.clone();

    match event {
        Event::SetSeed(role, hex) => {
            next.seeds.set(role, hex);
            if role == Role::Primary {
                sync_secondary(&mut next.seeds, next.settings.harmony_mode);
            }
        }
        Event::LoadSeeds(seeds) => {
            next.seeds = seeds;
            sync_secondary(&mut next.seeds, next.settings.harmony_mode);
        }
        Event::SetMode(mode) => next.mode = mode,
        Event::SetContrast(level) => next.contrast = level,
        Event::SetSaturation(v) => next.settings.saturation_multiplier = v,
        Event::SetTemperature(v) => next.settings.temperature_shift = v,
        Event::SetHarmony(harmony) => {
            next.settings.harmony_mode = harmony;
            sync_secondary(&mut next.seeds, harmony);
        }
        Event::SetNeutralSource(source) => next.settings.neutral_tint_source = source,
        Event::SetCustomNeutral(hex) => next.settings.custom_neutral = hex,
        Event::SetPureNeutrals(on) => next.settings.use_pure_neutrals = on,
        Event::SetStayTrue(on) => next.settings.stay_true_to_input_color = on,
        Event::SetProMode(on) => next.settings.pro_mode = on,
        Event::PinTone { role, mode, value } => next.settings.custom_tones.set(role, mode, value),
        Event::ClearTone { role, mode } => next.settings.custom_tones.clear(role, mode),
        Event::Reset => {
            next.seeds = Seeds::default();
            next.settings = OverrideSettings::default();
        }
    }

    if invalidation.contains(Invalidation::PALETTE) {
        next.derived = generate(&next.seeds, &next.settings, next.contrast);
    } else if invalidation.contains(Invalidation::TOKENS) {
        next.derived.remap(&next.settings, next.contrast);
    }
    log::debug!("event applied, invalidated {invalidation:?}");
    next
}
