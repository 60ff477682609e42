//! # tonal-engine — Seed Colors to Design Tokens
//!
//! Turns six seed colors into a complete, contrast-checked token palette
//! for light and dark mode at one of three contrast levels. Every step is a
//! pure function of its inputs: the same seeds, overrides and level always
//! give byte-identical output.
//!
//! # Architecture
//!
//! ```text
//! Seeds + OverrideSettings + ContrastLevel
//!     │
//!     ▼
//! shades.rs:    21-step scale per seed (fixed lightness, bucketed chroma)
//!     │
//!     ▼
//! overrides.rs: neutral tint, saturation, temperature, boost, harmony
//!     │
//!     ▼
//! palette.rs:   PaletteSet (six role scales + neutral)
//!     │
//!     ▼
//! contrast.rs:  WCAG ratios, step and candidate searches
//!     │
//!     ▼
//! tokens.rs +   --color-* TokenSet per mode
//! surface.rs
//!     │
//!     ├──▶ audit.rs:  pass/fail per readable pair
//!     └──▶ export.rs: CSS / SCSS / Tailwind / JSON
//! ```
//!
//! `store.rs` wraps the pipeline in a reducer for interactive front ends;
//! `material.rs` is a reference tone curve that nothing above depends on.
//!
//! # Failure model
//!
//! Generation has no error path. Unparseable seeds become gray, gamut
//! overflow is clamped away, and a contrast target no step can reach
//! yields the closest step. [`EngineError`] is only returned by the strict
//! edges: seed validation, preset lookup and export.

// Mathematical code uses small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]
// Lightness/chroma/hue variable names are inherently similar.
#![allow(clippy::similar_names)]
// Token assembly lists every token in one place.
#![allow(clippy::too_many_lines)]
// `tokens::TokenSet`, `palette::PaletteSet` read better than shorter names.
#![allow(clippy::module_name_repetitions)]

pub mod audit;
pub mod builtin;
pub mod contrast;
pub mod error;
pub mod export;
pub mod material;
pub mod overrides;
pub mod palette;
pub mod role;
pub mod settings;
pub mod shades;
pub mod step;
pub mod store;
pub mod surface;
pub mod tokens;

pub use error::EngineError;
pub use palette::{PaletteSet, Seeds};
pub use role::Role;
pub use settings::{ContrastLevel, HarmonyMode, Mode, NeutralTintSource, OverrideSettings};
pub use shades::{ShadeScale, generate_shades};
pub use step::Step;
pub use tokens::TokenSet;

/// A palette and the token sets of both modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub palette: PaletteSet,
    pub light: TokenSet,
    pub dark: TokenSet,
}

impl Generated {
    /// Token set of `mode`.
    #[must_use]
    pub const fn tokens(&self, mode: Mode) -> &TokenSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// Re-run token mapping over the existing palette.
    ///
    /// For changes that move steps but not scales (pins, stay-true).
    pub fn remap(&mut self, settings: &OverrideSettings, level: ContrastLevel) {
        self.light = tokens::generate_tokens(&self.palette, Mode::Light, level, settings);
        self.dark = tokens::generate_tokens(&self.palette, Mode::Dark, level, settings);
    }
}

/// Run the whole pipeline: scales, overrides, tokens for both modes.
#[must_use]
pub fn generate(seeds: &Seeds, settings: &OverrideSettings, level: ContrastLevel) -> Generated {
    let palette = PaletteSet::generate(seeds, settings, level);
    let light = tokens::generate_tokens(&palette, Mode::Light, level, settings);
    let dark = tokens::generate_tokens(&palette, Mode::Dark, level, settings);
    Generated {
        palette,
        light,
        dark,
    }
}
