// SPDX-License-Identifier: MIT

//! Serializers for generated tokens: CSS, SCSS, Tailwind and JSON.
//!
//! All of them take the light and dark [`TokenSet`]s as they are; nothing
//! here picks or adjusts a color. Every key is checked to be a valid CSS
//! custom property name before anything is written, since all formats
//! ultimately end up as `var(--…)` references.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::EngineError;
use crate::palette::PaletteSet;
use crate::surface::is_surface_token;
use crate::tokens::{TOKEN_PREFIX, TokenSet};

static CUSTOM_PROPERTY: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^--[A-Za-z_][A-Za-z0-9_-]*$"));

/// Whether `name` can be used as a CSS custom property.
#[must_use]
pub fn is_valid_custom_property(name: &str) -> bool {
    CUSTOM_PROPERTY
        .as_ref()
        .is_ok_and(|re| re.is_match(name))
}

/// Check every key of `set`.
///
/// # Errors
///
/// [`EngineError::InvalidTokenName`] for the first key that is not a valid
/// custom property name.
pub fn validate_keys(set: &TokenSet) -> Result<(), EngineError> {
    match set.iter().find(|(name, _)| !is_valid_custom_property(name)) {
        Some((name, _)) => Err(EngineError::InvalidTokenName(name.to_string())),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Output format of [`export`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Css, Self::Scss, Self::Tailwind, Self::Json];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind | Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| format!("unknown format {s:?} (expected css, scss, tailwind or json)"))
    }
}

/// Serialize both modes in `format`.
///
/// # Errors
///
/// Fails on an invalid token name or a JSON serialization error.
pub fn export(
    format: ExportFormat,
    light: &TokenSet,
    dark: &TokenSet,
    palette: &PaletteSet,
) -> Result<String, EngineError> {
    match format {
        ExportFormat::Css => to_css(light, dark),
        ExportFormat::Scss => to_scss(light, dark),
        ExportFormat::Tailwind => to_tailwind(light),
        ExportFormat::Json => to_json(&ExportDocument::new(light, dark, palette)),
    }
}

// ---------------------------------------------------------------------------
// CSS / SCSS
// ---------------------------------------------------------------------------

fn css_block(out: &mut String, selector: &str, set: &TokenSet) {
    let _ = writeln!(out, "{selector} {{");
    for (name, color) in set.iter() {
        let _ = writeln!(out, "  {name}: {color};");
    }
    out.push_str("}\n");
}

/// `:root` for light, `[data-theme="dark"]` for dark.
///
/// # Errors
///
/// [`EngineError::InvalidTokenName`] if a key is not a custom property.
pub fn to_css(light: &TokenSet, dark: &TokenSet) -> Result<String, EngineError> {
    validate_keys(light)?;
    validate_keys(dark)?;
    let mut out = String::new();
    css_block(&mut out, ":root", light);
    out.push('\n');
    css_block(&mut out, "[data-theme=\"dark\"]", dark);
    Ok(out)
}

/// Light tokens as `$color-*` variables, dark tokens as a `$dark-theme` map.
///
/// # Errors
///
/// [`EngineError::InvalidTokenName`] if a key is not a custom property.
pub fn to_scss(light: &TokenSet, dark: &TokenSet) -> Result<String, EngineError> {
    validate_keys(light)?;
    validate_keys(dark)?;
    let mut out = String::from("// Light mode\n");
    for (name, color) in light.iter() {
        let _ = writeln!(out, "${}: {color};", name.trim_start_matches("--"));
    }
    out.push_str("\n// Dark mode\n$dark-theme: (\n");
    for (name, color) in dark.iter() {
        let _ = writeln!(out, "  \"{}\": {color},", name.trim_start_matches("--"));
    }
    out.push_str(");\n");
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tailwind / JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TailwindConfig {
    theme: TailwindTheme,
}

#[derive(Serialize)]
struct TailwindTheme {
    extend: TailwindExtend,
}

#[derive(Serialize)]
struct TailwindExtend {
    colors: BTreeMap<String, String>,
}

/// `theme.extend.colors` entries pointing at the CSS variables.
///
/// Only names are taken from `tokens`; the values stay in CSS, so one
/// config serves both modes.
///
/// # Errors
///
/// Fails on an invalid token name or a JSON serialization error.
pub fn to_tailwind(tokens: &TokenSet) -> Result<String, EngineError> {
    validate_keys(tokens)?;
    let colors = tokens
        .iter()
        .map(|(name, _)| {
            let short = name.strip_prefix(TOKEN_PREFIX).unwrap_or(name);
            (short.to_string(), format!("var({name})"))
        })
        .collect();
    let config = TailwindConfig {
        theme: TailwindTheme {
            extend: TailwindExtend { colors },
        },
    };
    Ok(serde_json::to_string_pretty(&config)?)
}

/// A light/dark pair of flat name → hex maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeMaps {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

/// The `tokens` section of [`ExportDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTokens {
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
    /// Only the mode-wide tokens, for importers that treat them apart.
    pub surface: ModeMaps,
}

/// The stable JSON shape consumed by design-tool importers:
/// `{ tokens: { light, dark, surface: { light, dark } }, scales: { name: { step: hex } } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub tokens: DocumentTokens,
    /// Step keys serialize as strings (`"0"`, `"50"`, …) in numeric order.
    pub scales: BTreeMap<String, BTreeMap<u16, String>>,
}

impl ExportDocument {
    #[must_use]
    pub fn new(light: &TokenSet, dark: &TokenSet, palette: &PaletteSet) -> Self {
        let scales = palette
            .named_scales()
            .into_iter()
            .map(|(name, scale)| {
                let steps = scale.iter().map(|(s, c)| (s.value(), c.to_hex())).collect();
                (name.to_string(), steps)
            })
            .collect();
        Self {
            tokens: DocumentTokens {
                light: light.to_hex_map(),
                dark: dark.to_hex_map(),
                surface: ModeMaps {
                    light: light.filter(is_surface_token).to_hex_map(),
                    dark: dark.filter(is_surface_token).to_hex_map(),
                },
            },
            scales,
        }
    }
}

/// Pretty-printed JSON of `doc`.
///
/// # Errors
///
/// Fails on an invalid token name or a JSON serialization error.
pub fn to_json(doc: &ExportDocument) -> Result<String, EngineError> {
    for key in doc.tokens.light.keys().chain(doc.tokens.dark.keys()) {
        if !is_valid_custom_property(key) {
            return Err(EngineError::InvalidTokenName(key.clone()));
        }
    }
    Ok(serde_json::to_string_pretty(doc)?)
}
