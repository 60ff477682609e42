// SPDX-License-Identifier: MIT

//! Accessibility audit of a generated token set.
//!
//! Generation never fails, so a target that no step could reach still
//! produces tokens. The audit is where that shows: every pair that is
//! meant to be read together is measured and compared to its target.

use serde::Serialize;

use crate::contrast::contrast_ratio;
use crate::role::Role;
use crate::settings::ContrastLevel;
use crate::tokens::{State, TokenName, TokenSet, Variant, mode_token};

/// One measured foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub required: f64,
    pub passes: bool,
}

/// All pairs of one token set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    /// Entries below their target.
    pub fn failures(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| !e.passes)
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.entries.iter().all(|e| e.passes)
    }

    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.entries.iter().filter(|e| e.passes).count()
    }
}

/// Audit `tokens` against the targets of `level`.
///
/// Pairs whose tokens are missing from the set are skipped.
#[must_use]
pub fn audit(tokens: &TokenSet, level: ContrastLevel) -> AuditReport {
    let text = level.text_target();
    let mut pairs: Vec<(String, String, f64)> = Vec::new();

    for role in Role::ALL {
        for variant in Variant::ALL {
            for state in State::ALL {
                let fill = TokenName::new(role, variant, state);
                pairs.push((fill.on().to_string(), fill.to_string(), text));
            }
        }
        let base = TokenName::new(role, Variant::Base, State::Rest);
        pairs.push((base.to_string(), mode_token("surface"), text));
    }

    let surface = mode_token("surface");
    pairs.push((mode_token("on-surface"), surface.clone(), text));
    pairs.push((mode_token("on-background"), mode_token("background"), text));
    pairs.push((mode_token("on-inverse-surface"), mode_token("inverse-surface"), text));
    pairs.push((mode_token("link"), surface.clone(), text));
    pairs.push((mode_token("focus"), surface.clone(), level.container_target()));
    let [subtle, default, strong] = level.outline_targets();
    for (name, target) in [
        ("outline-subtle", subtle),
        ("outline-default", default),
        ("outline-strong", strong),
    ] {
        pairs.push((mode_token(name), surface.clone(), target));
    }

    let entries = pairs
        .into_iter()
        .filter_map(|(fg, bg, required)| {
            let ratio = contrast_ratio(tokens.get(&fg)?, tokens.get(&bg)?);
            Some(AuditEntry {
                foreground: fg,
                background: bg,
                ratio,
                required,
                passes: ratio >= required,
            })
        })
        .collect();

    AuditReport { entries }
}
