// File: crates/barchart-core/src/layout.rs
// Summary: Plot-area layout: viewport minus fixed margins.

use crate::host::format_number;
use crate::types::{Insets, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub margins: Insets,
    /// Viewport width minus left and right margins. Negative when the
    /// viewport is narrower than the margins; no clamping is applied.
    pub inner_width: f64,
    /// Viewport height minus top and bottom margins.
    pub inner_height: f64,
}

impl Layout {
    pub fn compute(viewport: Viewport, margins: Insets) -> Self {
        Self {
            viewport,
            margins,
            // Summed in f64 so configured margins of any size cannot overflow.
            inner_width: viewport.width - f64::from(margins.left) - f64::from(margins.right),
            inner_height: viewport.height - f64::from(margins.top) - f64::from(margins.bottom),
        }
    }

    /// Transform placing the plot group at the top-left margin corner.
    pub fn translate(&self) -> String {
        format!("translate({},{})", self.margins.left, self.margins.top)
    }

    /// Transform placing the category axis along the bottom of the plot area.
    pub fn x_axis_translate(&self) -> String {
        format!("translate(0,{})", format_number(self.inner_height - 1.0))
    }
}
