// File: crates/barchart-core/src/types.rs
// Summary: Shared layout types and constants (margins, viewport, bar styling defaults).

use serde::{Deserialize, Serialize};

/// Fixed interior padding of the category scale.
pub const BAND_PADDING: f64 = 0.1;
/// Headroom added to every value before taking the magnitude maximum.
pub const VALUE_HEADROOM: f64 = 10.0;
/// Default bar fill colour.
pub const BAR_FILL: &str = "green";
/// Default bar outline colour.
pub const BAR_STROKE: &str = "black";

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right), saturating at `u32::MAX`.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating at `u32::MAX`.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    /// Margins of the bar chart: room on the left for value labels and at the
    /// bottom for rotated category labels.
    fn default() -> Self {
        Self::new(70, 20, 20, 200)
    }
}

/// Size of the host-provided drawing area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
