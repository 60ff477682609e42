// SPDX-License-Identifier: MIT

//! Scale positions — the 21-point white→black grid.
//!
//! A [`Step`] is always one of `0, 50, 100, … , 1000`. Raw user numbers
//! (custom tones, deltas) go through [`Step::snap`], which clamps and
//! rounds onto the grid, so range comparisons never see off-grid values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One position on a shade scale. `Step(0)` is near-white, `Step(1000)`
/// near-black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Step(u16);

impl Step {
    /// Distance between neighboring steps.
    pub const INCREMENT: u16 = 50;

    /// Number of steps on a scale.
    pub const COUNT: usize = 21;

    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(1000);

    /// Fallback when a contrast search has nothing to choose from.
    pub const MID: Self = Self(500);

    /// Grid value for `const` tables, where an off-grid value fails the
    /// build.
    ///
    /// # Panics
    ///
    /// If `value` is off-grid or above 1000.
    #[must_use]
    pub const fn at(value: u16) -> Self {
        match Self::new(value) {
            Some(step) => step,
            None => panic!("step must be a multiple of 50 in 0..=1000"),
        }
    }

    /// Exact grid value, or `None` if `value` is off-grid or above 1000.
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value <= 1000 && value % Self::INCREMENT == 0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamp to 0–1000 and round to the nearest 50 (halves round up).
    #[must_use]
    pub const fn snap(value: i32) -> Self {
        let clamped = if value < 0 {
            0
        } else if value > 1000 {
            1000
        } else {
            value
        };
        // 0..=1000 after clamping, fits u16.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let snapped = ((clamped + 25) / 50 * 50) as u16;
        Self(snapped)
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Position in a 21-element scale array.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 / Self::INCREMENT) as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            // index < 21, fits u16.
            #[allow(clippy::cast_possible_truncation)]
            let value = index as u16 * Self::INCREMENT;
            Some(Self(value))
        } else {
            None
        }
    }

    /// Move by `delta` scale units, snapping and clamping the result.
    #[must_use]
    pub const fn offset(self, delta: i32) -> Self {
        Self::snap(self.0 as i32 + delta)
    }

    /// All 21 steps in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from turning a number or string into a [`Step`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a scale step (expected 0..=1000 in multiples of 50)")]
pub struct InvalidStep(pub String);

impl TryFrom<u16> for Step {
    type Error = InvalidStep;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidStep(value.to_string()))
    }
}

impl From<Step> for u16 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl FromStr for Step {
    type Err = InvalidStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidStep(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// StepRange
// ---------------------------------------------------------------------------

/// An inclusive, ascending range of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    pub lo: Step,
    pub hi: Step,
}

impl StepRange {
    /// Build from raw bounds; both are snapped onto the grid.
    #[must_use]
    pub const fn new(lo: u16, hi: u16) -> Self {
        Self {
            lo: Step::snap(lo as i32),
            hi: Step::snap(hi as i32),
        }
    }

    /// The whole scale.
    pub const FULL: Self = Self::new(0, 1000);

    #[must_use]
    pub fn contains(self, step: Step) -> bool {
        self.lo <= step && step <= self.hi
    }

    /// Steps in the range, ascending. Empty if `lo > hi`.
    pub fn iter(self) -> impl Iterator<Item = Step> {
        Step::all().filter(move |s| self.contains(*s))
    }
}
