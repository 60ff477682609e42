// SPDX-License-Identifier: MIT
//
// Color vision deficiency simulation for previews.
//
// Each deficiency is one fixed 3×3 matrix applied to linear-light sRGB.
// The result is clamped back into [0, 1] and re-encoded, so every
// simulated color is displayable. Alpha passes through untouched.

use serde::{Deserialize, Serialize};

use crate::Color;

/// The simulated forms of color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deficiency {
    /// Green-weak/green-blind, the most common form.
    Deuteranopia,
    /// Red-blind.
    Protanopia,
    /// Blue-yellow, rare.
    Tritanopia,
    /// No color perception: luma only.
    Grayscale,
}

impl Deficiency {
    pub const ALL: [Self; 4] = [
        Self::Deuteranopia,
        Self::Protanopia,
        Self::Tritanopia,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deuteranopia => "deuteranopia",
            Self::Protanopia => "protanopia",
            Self::Tritanopia => "tritanopia",
            Self::Grayscale => "grayscale",
        }
    }

    /// Parse from a name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|d| d.name() == lower)
    }

    /// The transform matrix, rows are output R, G, B.
    #[must_use]
    pub const fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            Self::Deuteranopia => [
                [0.625, 0.375, 0.0],
                [0.700, 0.300, 0.0],
                [0.000, 0.300, 0.700],
            ],
            Self::Protanopia => [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.000, 0.242, 0.758],
            ],
            Self::Tritanopia => [
                [0.950, 0.050, 0.000],
                [0.000, 0.433, 0.567],
                [0.000, 0.475, 0.525],
            ],
            Self::Grayscale => [
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ],
        }
    }
}

/// How `color` appears to someone with `deficiency`.
#[must_use]
pub fn simulate(color: Color, deficiency: Deficiency) -> Color {
    let m = deficiency.matrix();
    let (r, g, b) = color.to_gamut().to_linear_srgb();
    let row = |i: usize| {
        m[i][2]
            .mul_add(b, m[i][0].mul_add(r, m[i][1] * g))
            .clamp(0.0, 1.0)
    };
    Color::linear_srgb(row(0), row(1), row(2)).with_alpha(color.alpha)
}
