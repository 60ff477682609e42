// SPDX-License-Identifier: MIT
//
// Project file loading.
//
// A project file is TOML:
//
//   mode = "dark"
//   contrast = "high"
//   preset = "ocean"          # optional, replaces the seed defaults
//
//   [seeds]
//   primary = "#0052cc"
//
//   [overrides]
//   saturation-multiplier = 1.2
//   harmony-mode = "analogous"
//
// Every key is optional. Seeds listed in `[seeds]` win over the preset.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tonal_engine::builtin;
use tonal_engine::{ContrastLevel, Mode, OverrideSettings, Role, Seeds};

/// Per-role seed entries as written in the file; unset roles stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedTable {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
}

impl SeedTable {
    fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Primary => self.primary.as_deref(),
            Role::Secondary => self.secondary.as_deref(),
            Role::Error => self.error.as_deref(),
            Role::Warning => self.warning.as_deref(),
            Role::Success => self.success.as_deref(),
            Role::Info => self.info.as_deref(),
        }
    }
}

/// The parsed project file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectConfig {
    pub mode: Mode,
    pub contrast: ContrastLevel,
    pub preset: Option<String>,
    pub seeds: SeedTable,
    pub overrides: OverrideSettings,
}

impl ProjectConfig {
    /// Read and parse `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve seeds: `preset` (or the argument overriding it), then the
    /// explicit `[seeds]` entries on top.
    pub fn resolve_seeds(&self, preset: Option<&str>) -> Result<Seeds> {
        let mut seeds = match preset.or(self.preset.as_deref()) {
            Some(name) => builtin::preset(name)?,
            None => Seeds::default(),
        };
        for role in Role::ALL {
            if let Some(hex) = self.seeds.get(role) {
                seeds.set(role, hex);
            }
        }
        Ok(seeds)
    }
}
