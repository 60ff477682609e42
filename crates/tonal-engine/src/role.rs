// SPDX-License-Identifier: MIT

//! The six semantic color roles.
//!
//! Roles are a closed set so every per-role loop is exhaustive. The neutral
//! scale is not a role: it has no tokens of its own shape and lives in
//! [`PaletteSet`](crate::palette::PaletteSet) beside them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named, user-seeded color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Primary,
    Secondary,
    Error,
    Warning,
    Success,
    Info,
}

impl Role {
    /// Every role, in token-output order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Error,
        Self::Warning,
        Self::Success,
        Self::Info,
    ];

    /// Token-name segment (`--color-<name>`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    /// Position in per-role arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Seed used when the user has not picked one.
    #[must_use]
    pub const fn default_seed(self) -> &'static str {
        match self {
            Self::Primary => "#0052cc",
            Self::Secondary => "#6b4fbb",
            Self::Error => "#dc2626",
            Self::Warning => "#d97706",
            Self::Success => "#16a34a",
            Self::Info => "#0284c7",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.name() == lower)
            .ok_or_else(|| format!("unknown role {s:?}"))
    }
}
