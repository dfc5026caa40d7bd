// File: crates/barchart-core/src/axis.rs
// Summary: Axis generator; lays out a domain line, tick marks and tick labels for a scale.

use crate::host::format_number;
use crate::scale::{BandScale, LinearScale, Scale};
use crate::scene::{self, NodeRef};

/// Length of tick marks, inner and outer.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Ticks requested from a linear scale.
pub const TICK_COUNT: usize = 10;
/// Half-pixel shift so 1px strokes land on pixel centres.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

impl Orient {
    /// Direction ticks point away from the plot.
    fn k(self) -> f64 {
        match self {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }
}

/// One tick: pixel position along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Axis model computed from a scale, ready to draw into a group element.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Horizontal axis under the plot, one tick centred in each band.
    pub fn bottom(scale: &BandScale) -> Self {
        let mut offset = (scale.bandwidth() - CRISP_OFFSET * 2.0).max(0.0) / 2.0;
        if scale.is_round() {
            offset = (offset + 0.5).floor();
        }
        let ticks = scale
            .labels()
            .iter()
            .filter_map(|label| {
                scale.apply(label).map(|x| Tick { position: x + offset, label: label.clone() })
            })
            .collect();
        Self { orient: Orient::Bottom, range: Scale::range(scale), ticks }
    }

    /// Vertical axis left of the plot with round-valued ticks.
    pub fn left(scale: &LinearScale) -> Self {
        let values = scale.ticks(TICK_COUNT);
        let step = tick_step(&values);
        let ticks = values
            .into_iter()
            .map(|v| Tick { position: scale.to_px(v), label: format_tick(v, step) })
            .collect();
        Self { orient: Orient::Left, range: Scale::range(scale), ticks }
    }

    /// Append the domain path and tick groups to `group` and set its text defaults.
    pub fn draw(&self, group: &NodeRef) {
        let k = self.orient.k();
        let r0 = self.range.0 + CRISP_OFFSET;
        let r1 = self.range.1 + CRISP_OFFSET;
        let outer = k * TICK_SIZE;
        {
            let mut g = group.borrow_mut();
            g.set_attr("fill", "none")
                .set_attr("font-size", 10)
                .set_attr("font-family", "sans-serif")
                .set_attr(
                    "text-anchor",
                    match self.orient {
                        Orient::Bottom => "middle",
                        Orient::Left => "end",
                    },
                );
        }

        let d = match self.orient {
            Orient::Bottom => format!(
                "M{},{}V{}H{}V{}",
                num(r0), num(outer), num(CRISP_OFFSET), num(r1), num(outer)
            ),
            Orient::Left => format!(
                "M{},{}H{}V{}H{}",
                num(outer), num(r0), num(CRISP_OFFSET), num(r1), num(outer)
            ),
        };
        scene::append(group, "path")
            .borrow_mut()
            .set_attr("class", "domain")
            .set_attr("stroke", "currentColor")
            .set_attr("d", d);

        let spacing = k * (TICK_SIZE + TICK_PADDING);
        for tick in &self.ticks {
            let at = num(tick.position + CRISP_OFFSET);
            let g = scene::append(group, "g");
            g.borrow_mut()
                .set_attr("class", "tick")
                .set_attr("opacity", 1)
                .set_attr(
                    "transform",
                    match self.orient {
                        Orient::Bottom => format!("translate({at},0)"),
                        Orient::Left => format!("translate(0,{at})"),
                    },
                );
            let (line_attr, text_attr, dy) = match self.orient {
                Orient::Bottom => ("y2", "y", "0.71em"),
                Orient::Left => ("x2", "x", "0.32em"),
            };
            scene::append(&g, "line")
                .borrow_mut()
                .set_attr("stroke", "currentColor")
                .set_attr(line_attr, num(outer));
            scene::append(&g, "text")
                .borrow_mut()
                .set_attr("fill", "currentColor")
                .set_attr(text_attr, num(spacing))
                .set_attr("dy", dy)
                .set_text(tick.label.clone());
        }
    }
}

fn num(v: f64) -> String {
    format_number(v)
}

fn tick_step(values: &[f64]) -> f64 {
    match values {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}

/// Fixed-point label with as many decimals as the tick step needs and
/// thousands separators, e.g. `1,200` or `0.25`.
pub fn format_tick(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return format_number(v);
    }
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let fixed = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (fixed.clone(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = v < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('−');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(&f);
    }
    out
}
