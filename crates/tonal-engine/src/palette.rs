// SPDX-License-Identifier: MIT

//! Seeds in, scales out: the palette set every token is read from.
//!
//! A [`PaletteSet`] holds one [`ShadeScale`] per [`Role`] plus the neutral
//! scale, all with the override pipeline already applied. It depends on the
//! contrast level (through the saturation boost) but not on the mode, so a
//! single palette serves both the light and the dark token sets.

use serde::{Deserialize, Serialize};
use tonal_color::Color;

use crate::error::EngineError;
use crate::overrides::{apply_role_overrides, harmonize_secondary, neutral_scale};
use crate::role::Role;
use crate::settings::{ContrastLevel, OverrideSettings};
use crate::shades::ShadeScale;
use crate::step::Step;

// ---------------------------------------------------------------------------
// Seeds
// ---------------------------------------------------------------------------

/// The six user-chosen seed colors, as entered.
///
/// Strings are kept verbatim so a bad value can be shown back to the user;
/// generation parses them leniently, [`Seeds::validate`] strictly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Seeds {
    pub primary: String,
    pub secondary: String,
    pub error: String,
    pub warning: String,
    pub success: String,
    pub info: String,
}

impl Default for Seeds {
    fn default() -> Self {
        Self::from_fn(|role| role.default_seed().to_string())
    }
}

impl Seeds {
    /// Build from a per-role function.
    pub fn from_fn(mut f: impl FnMut(Role) -> String) -> Self {
        Self {
            primary: f(Role::Primary),
            secondary: f(Role::Secondary),
            error: f(Role::Error),
            warning: f(Role::Warning),
            success: f(Role::Success),
            info: f(Role::Info),
        }
    }

    #[must_use]
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Error => &self.error,
            Role::Warning => &self.warning,
            Role::Success => &self.success,
            Role::Info => &self.info,
        }
    }

    pub fn set(&mut self, role: Role, hex: impl Into<String>) {
        let slot = match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Error => &mut self.error,
            Role::Warning => &mut self.warning,
            Role::Success => &mut self.success,
            Role::Info => &mut self.info,
        };
        *slot = hex.into();
    }

    /// The parsed seed for `role`, or `None` if it is not a hex color.
    #[must_use]
    pub fn color(&self, role: Role) -> Option<Color> {
        Color::hex(self.get(role))
    }

    /// Check that every seed parses.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSeed`] for the first role, in
    /// [`Role::ALL`] order, whose seed is not a hex color.
    pub fn validate(&self) -> Result<(), EngineError> {
        for role in Role::ALL {
            Color::parse(self.get(role))
                .map_err(|source| EngineError::InvalidSeed { role, source })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PaletteSet
// ---------------------------------------------------------------------------

/// Every scale a token can come from, overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSet {
    /// Effective seed per role: after harmony, and a stand-in gray for
    /// seeds that did not parse.
    seeds: [Color; 6],
    scales: [ShadeScale; 6],
    neutral: ShadeScale,
}

impl PaletteSet {
    /// Run seed parsing, scale generation and the override pipeline.
    ///
    /// Never fails. A seed that does not parse, or is gray, gets the pure
    /// neutral scale so the token mapper always sees complete scales.
    #[must_use]
    pub fn generate(seeds: &Seeds, settings: &OverrideSettings, level: ContrastLevel) -> Self {
        let settings = settings.normalized();

        let mut parsed = Role::ALL.map(|role| {
            let color = seeds.color(role);
            if color.is_none() {
                log::warn!(
                    "{role} seed {:?} is not a hex color; using neutral gray",
                    seeds.get(role)
                );
            }
            color
        });

        let primary = parsed[Role::Primary.index()];
        let harmonized = primary.and_then(|p| harmonize_secondary(p, settings.harmony_mode));
        if let Some(secondary) = harmonized {
            log::debug!(
                "harmony {:?}: secondary seed {secondary} from primary",
                settings.harmony_mode
            );
            parsed[Role::Secondary.index()] = Some(secondary);
        }

        let neutral = neutral_scale(
            &settings,
            parsed[Role::Primary.index()],
            parsed[Role::Secondary.index()],
        );

        let scales = Role::ALL.map(|role| {
            let raw = parsed[role.index()].and_then(ShadeScale::from_seed);
            let raw = raw.unwrap_or_else(|| {
                if parsed[role.index()].is_some() {
                    log::debug!("{role} seed is achromatic; using the pure neutral scale");
                }
                ShadeScale::pure_neutral()
            });
            apply_role_overrides(&raw, &settings, level)
        });

        let seeds = Role::ALL.map(|role| {
            parsed[role.index()].unwrap_or_else(|| scales[role.index()].get(Step::MID))
        });

        Self {
            seeds,
            scales,
            neutral,
        }
    }

    /// Scale for `role`.
    #[must_use]
    pub const fn scale(&self, role: Role) -> &ShadeScale {
        &self.scales[role.index()]
    }

    #[must_use]
    pub const fn neutral(&self) -> &ShadeScale {
        &self.neutral
    }

    /// The seed `role`'s scale was generated from.
    #[must_use]
    pub const fn seed(&self, role: Role) -> Color {
        self.seeds[role.index()]
    }

    /// `(name, scale)` for every scale, neutral after secondary.
    #[must_use]
    pub fn named_scales(&self) -> Vec<(&'static str, &ShadeScale)> {
        let mut out = Vec::with_capacity(Role::ALL.len() + 1);
        for role in Role::ALL {
            out.push((role.name(), self.scale(role)));
            if role == Role::Secondary {
                out.push(("neutral", &self.neutral));
            }
        }
        out
    }
}
