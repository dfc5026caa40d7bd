// File: crates/barchart-core/src/bar_chart.rs
// Summary: Bar chart visual: lays out the plot, derives scales from the rows of the
// first data view, then redraws axes and reconciles one rect per data point.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::axis::Axis;
use crate::error::{Result, VisualError};
use crate::host::{
    format_number, EnumerateVisualObjectInstancesOptions, Visual, VisualConstructorOptions,
    VisualObjectInstance, VisualUpdateOptions,
};
use crate::layout::Layout;
use crate::reconcile::{BarId, BarKey, JoinStats, KeyedShapes};
use crate::scale::{BandScale, LinearScale, Scale};
use crate::scene::{self, NodeRef};
use crate::settings::VisualSettings;
use crate::types::{Insets, BAND_PADDING, BAR_FILL, BAR_STROKE, VALUE_HEADROOM};
use crate::view_model::{BarChartViewModel, DataPoint};

/// Class shared by both axis groups.
pub const AXIS_CLASS: &str = "axis";
/// Class carried by every bar rect.
pub const BAR_CLASS: &str = "bar";

/// Tunables of the bar chart. Defaults reproduce the stock visual.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartOptions {
    pub margins: Insets,
    pub band_padding: f64,
    pub value_headroom: f64,
    pub bar_fill: String,
    pub bar_stroke: String,
    /// Drop every bar before reconciling, so each update recreates them all.
    pub full_redraw: bool,
    /// How bars are matched across updates when `full_redraw` is off.
    pub key: BarKey,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            margins: Insets::default(),
            band_padding: BAND_PADDING,
            value_headroom: VALUE_HEADROOM,
            bar_fill: BAR_FILL.to_string(),
            bar_stroke: BAR_STROKE.to_string(),
            full_redraw: true,
            key: BarKey::Index,
        }
    }
}

impl BarChartOptions {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Layout, scales and data of the most recent update.
#[derive(Clone, Debug)]
pub struct Frame {
    pub layout: Layout,
    pub x: BandScale,
    pub y: LinearScale,
    pub view_model: BarChartViewModel,
    pub stats: JoinStats,
}

pub struct BarChart {
    svg: NodeRef,
    g: NodeRef,
    /// Created on the first update so a fresh surface is just `svg > g`.
    bars: Option<NodeRef>,
    shapes: KeyedShapes<BarId, NodeRef>,
    settings: VisualSettings,
    options: BarChartOptions,
    frame: Option<Frame>,
}

impl BarChart {
    pub fn new(options: VisualConstructorOptions) -> Self {
        Self::with_options(options, BarChartOptions::default())
    }

    /// Attach `svg > g` beneath the host element. Nothing is drawn yet.
    pub fn with_options(ctor: VisualConstructorOptions, options: BarChartOptions) -> Self {
        let svg = scene::append(&ctor.element, "svg");
        let g = scene::append(&svg, "g");
        debug!("bar chart attached");
        Self {
            svg,
            g,
            bars: None,
            shapes: KeyedShapes::new(),
            settings: VisualSettings::default(),
            options,
            frame: None,
        }
    }

    /// Root `<svg>` element of the drawing surface.
    pub fn svg(&self) -> &NodeRef { &self.svg }
    pub fn options(&self) -> &BarChartOptions { &self.options }
    pub fn settings(&self) -> VisualSettings { self.settings }
    pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }
    pub fn bar_count(&self) -> usize { self.shapes.len() }

    /// Bar rects in drawing order.
    pub fn bars(&self) -> Vec<NodeRef> {
        self.shapes.shapes().cloned().collect()
    }

    /// Rebuild both axes and return the bar group, re-appended after them.
    fn draw_axes(&mut self, layout: &Layout, x: &BandScale, y: &LinearScale) -> NodeRef {
        // Bars stay above the axes: lift the bar group out and put it back last.
        if let Some(bars) = &self.bars {
            scene::detach(&self.g, bars);
        }

        let x_axis = scene::append(&self.g, "g");
        x_axis
            .borrow_mut()
            .set_attr("class", "x axis")
            .set_style("fill", "black")
            .set_attr("transform", layout.x_axis_translate());
        Axis::bottom(x).draw(&x_axis);
        // Rotate category labels so long names do not overlap.
        for text in scene::select_all(&x_axis, scene::tag("text")) {
            text.borrow_mut()
                .set_style("text-anchor", "end")
                .set_attr("dx", "-.8em")
                .set_attr("dy", "-.6em")
                .set_attr("transform", "rotate(-90)");
        }

        let y_axis = scene::append(&self.g, "g");
        y_axis
            .borrow_mut()
            .set_attr("class", "y axis")
            .set_style("fill", "black");
        Axis::left(y).draw(&y_axis);

        let bars = Rc::clone(self.bars.get_or_insert_with(|| scene::element("g")));
        scene::append_node(&self.g, Rc::clone(&bars));
        bars
    }

    fn reconcile_bars(
        &mut self,
        bars: NodeRef,
        points: &[DataPoint],
        x: &BandScale,
        y: &LinearScale,
        inner_height: f64,
    ) -> JoinStats {
        let key = self.options.key;
        let fill = self.options.bar_fill.clone();
        let stroke = self.options.bar_stroke.clone();
        let place = |rect: &NodeRef, d: &DataPoint| {
            let top = y.to_px(d.value);
            rect.borrow_mut()
                .set_attr("x", format_number(x.apply(&d.category).unwrap_or(f64::NAN)))
                .set_attr("width", format_number(x.bandwidth()))
                .set_attr("y", format_number(top))
                .set_attr("height", format_number(inner_height - top));
        };
        self.shapes.apply(
            points,
            |i, d| key.id(i, d),
            |_, d| {
                let rect = scene::append(&bars, "rect");
                rect.borrow_mut()
                    .set_attr("class", BAR_CLASS)
                    .set_attr("fill", &fill)
                    .set_attr("stroke", &stroke);
                place(&rect, d);
                rect
            },
            |_, d, rect| place(rect, d),
            |rect| {
                scene::detach(&bars, &rect);
            },
        )
    }
}

impl Visual for BarChart {
    fn update(&mut self, options: &VisualUpdateOptions) -> Result<()> {
        let viewport = options.viewport;
        // Height is driven by the viewport width as well; kept as the stock visual does it.
        self.svg
            .borrow_mut()
            .set_attr("width", format_number(viewport.width))
            .set_attr("height", format_number(viewport.width));

        let layout = Layout::compute(viewport, self.options.margins);
        self.g
            .borrow_mut()
            .set_attr("width", format_number(layout.inner_width))
            .set_attr("height", format_number(layout.inner_height))
            .set_attr("transform", layout.translate());

        let view = options.data_views.first().ok_or(VisualError::MissingDataView)?;
        let table = view.table.as_ref().ok_or(VisualError::MissingTable)?;
        self.settings.merge_from(view)?;

        let view_model = BarChartViewModel::from_rows(&table.rows, self.options.value_headroom);
        let x = BandScale::new()
            .domain(view_model.categories())
            .range_round(0.0, layout.inner_width)
            .padding(self.options.band_padding);
        let y = LinearScale::new()
            .domain(0.0, view_model.data_max.unwrap_or(f64::NAN))
            .range(layout.inner_height, 0.0);
        debug!(
            width = viewport.width,
            height = viewport.height,
            rows = table.rows.len(),
            bandwidth = x.bandwidth(),
            y_max = ?view_model.data_max,
            "bar chart update"
        );

        scene::remove_all(&self.svg, scene::class(AXIS_CLASS));
        if self.options.full_redraw {
            scene::remove_all(&self.svg, scene::class(BAR_CLASS));
            self.shapes.clear();
        }
        let bars = self.draw_axes(&layout, &x, &y);

        let stats = self.reconcile_bars(bars, &view_model.data_points, &x, &y, layout.inner_height);
        debug!(entered = stats.entered, updated = stats.updated, exited = stats.exited, "bars reconciled");

        self.frame = Some(Frame { layout, x, y, view_model, stats });
        Ok(())
    }

    fn enumerate_object_instances(
        &self,
        options: &EnumerateVisualObjectInstancesOptions,
    ) -> Vec<VisualObjectInstance> {
        self.settings.enumerate(&options.object_name)
    }

    fn destroy(&mut self) {
        // The host owns and discards the mounting element.
        info!("bar chart destroyed");
    }
}
