// SPDX-License-Identifier: MIT

//! Named seed presets — ready-to-use starting points.
//!
//! Only the brand seeds change between presets; the semantic roles
//! (error, warning, success, info) keep their defaults so status colors
//! read the same everywhere.

use crate::error::EngineError;
use crate::palette::Seeds;
use crate::role::Role;

/// Look up a builtin preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_seeds(name: &str) -> Option<Seeds> {
    let (primary, secondary) = match name {
        "default" => return Some(Seeds::default()),
        "ocean" => ("#0077b6", "#00b4d8"),
        "forest" => ("#2d6a4f", "#95a03c"),
        "sunset" => ("#e85d04", "#9d0208"),
        "grape" => ("#7b2cbf", "#c77dff"),
        "slate" => ("#475569", "#64748b"),
        _ => return None,
    };
    let mut seeds = Seeds::default();
    seeds.set(Role::Primary, primary);
    seeds.set(Role::Secondary, secondary);
    Some(seeds)
}

/// Like [`builtin_seeds`], with an error naming the unknown preset.
///
/// # Errors
///
/// [`EngineError::UnknownPreset`] if `name` is not a builtin.
pub fn preset(name: &str) -> Result<Seeds, EngineError> {
    builtin_seeds(name).ok_or_else(|| EngineError::UnknownPreset(name.to_string()))
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "ocean", "forest", "sunset", "grape", "slate"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in builtin_names() {
            let seeds = builtin_seeds(name).unwrap_or_else(|| panic!("{name} missing"));
            assert!(seeds.validate().is_ok(), "{name} has a bad seed");
        }
    }

    #[test]
    fn presets_keep_semantic_defaults() {
        let ocean = builtin_seeds("ocean").unwrap();
        assert_eq!(ocean.primary, "#0077b6");
        assert_eq!(ocean.get(Role::Error), Role::Error.default_seed());
    }

    #[test]
    fn unknown_preset() {
        assert!(builtin_seeds("vaporwave").is_none());
        assert!(matches!(preset("vaporwave"), Err(EngineError::UnknownPreset(_))));
    }
}
