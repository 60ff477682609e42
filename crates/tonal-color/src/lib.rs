// SPDX-License-Identifier: MIT
//
// tonal-color — the perceptual color layer under the tonal token engine.
//
// Everything here is a pure function of its inputs: OKLCH construction and
// hex I/O (`color`), gamut reporting for sRGB and Display P3 (`gamut`), and
// color-vision-deficiency previews (`vision`). The engine crate builds shade
// scales and contrast searches on top of these and never touches raw RGB
// math itself.

// Mathematical code uses small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]
// Lightness/chroma/hue variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod gamut;
pub mod vision;

pub use color::Color;
pub use gamut::{Gamut, GamutReport};
pub use vision::Deficiency;

/// Errors from parsing color input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?} (expected #rgb, #rgba, #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
}
