// SPDX-License-Identifier: MIT

//! Errors at the strict edges of the engine.
//!
//! Generation itself never fails (bad seeds degrade to gray, unreachable
//! targets fall back to the closest step). These variants come from the
//! places that are allowed to say no: seed validation, preset lookup and
//! export.

use tonal_color::ColorError;

use crate::role::Role;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("{role} seed: {source}")]
    InvalidSeed {
        role: Role,
        #[source]
        source: ColorError,
    },

    #[error("{0:?} is not a valid CSS custom property name")]
    InvalidTokenName(String),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
