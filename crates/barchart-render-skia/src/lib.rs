// File: crates/barchart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a visual's `<svg>` surface using Skia CPU raster surfaces.

pub mod style;

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use barchart_core::scene::{Node, NodeRef};

use crate::style::{parse_color, parse_length, parse_number, parse_transform, Transform, CURRENT_COLOR};

/// Largest surface edge accepted, in pixels.
const MAX_EDGE: i32 = 16_384;
const DEFAULT_FONT_SIZE: f32 = 10.0;

pub struct RasterOptions {
    pub background: skia::Color,
    /// Text is platform-font dependent; switch off for pixel-exact comparisons.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { background: skia::Color::WHITE, draw_labels: true }
    }
}

/// Paint state inherited down the tree.
#[derive(Clone, Copy)]
struct Inherited {
    fill: Option<skia::Color>,
    stroke: Option<skia::Color>,
    font_size: f32,
    anchor: Anchor,
}

#[derive(Clone, Copy, PartialEq)]
enum Anchor {
    Start,
    Middle,
    End,
}

impl Default for Inherited {
    fn default() -> Self {
        Self { fill: Some(skia::Color::BLACK), stroke: None, font_size: DEFAULT_FONT_SIZE, anchor: Anchor::Start }
    }
}

impl Inherited {
    fn apply(mut self, node: &Node) -> Self {
        // Inline style wins over the presentation attribute.
        let prop = |name: &str| node.style(name).or_else(|| node.attr(name));
        if let Some(fill) = prop("fill") {
            self.fill = parse_color(fill);
        }
        if let Some(stroke) = prop("stroke") {
            self.stroke = parse_color(stroke);
        }
        if let Some(size) = prop("font-size") {
            if let Ok(size) = size.trim().trim_end_matches("px").parse::<f32>() {
                self.font_size = size;
            }
        }
        match prop("text-anchor") {
            Some("middle") => self.anchor = Anchor::Middle,
            Some("end") => self.anchor = Anchor::End,
            Some("start") => self.anchor = Anchor::Start,
            _ => {}
        }
        self
    }
}

/// Surface size from the root's `width`/`height` attributes.
pub fn surface_size(svg: &NodeRef) -> (i32, i32) {
    let node = svg.borrow();
    let edge = |name: &str| {
        let v = parse_number(node.attr(name));
        if v.is_finite() { (v.ceil() as i32).clamp(1, MAX_EDGE) } else { 1 }
    };
    (edge("width"), edge("height"))
}

/// Render `svg` (the visual's surface root) to PNG bytes.
pub fn render_to_png_bytes(svg: &NodeRef, opts: &RasterOptions) -> Result<Vec<u8>> {
    let (width, height) = surface_size(svg);
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);

    paint_node(canvas, &svg.borrow(), Inherited::default(), opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(width, height, bytes = data.len(), "rasterized surface");
    Ok(data.as_bytes().to_vec())
}

/// Render `svg` to a PNG file at `output_png_path`.
pub fn render_to_png(
    svg: &NodeRef,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let data = render_to_png_bytes(svg, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, data)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn paint_node(canvas: &skia::Canvas, node: &Node, parent: Inherited, opts: &RasterOptions) {
    let state = parent.apply(node);
    let saved = canvas.save();
    if let Some(t) = node.attr("transform") {
        for step in parse_transform(t) {
            match step {
                Transform::Translate(x, y) => { canvas.translate((x, y)); }
                Transform::Rotate(deg) => { canvas.rotate(deg, None); }
            }
        }
    }

    match node.tag.as_str() {
        "rect" => draw_rect(canvas, node, &state),
        "line" => draw_line(canvas, node, &state),
        "path" => draw_path(canvas, node, &state),
        "text" if opts.draw_labels => draw_text(canvas, node, &state),
        _ => {}
    }

    for child in node.children() {
        paint_node(canvas, &child.borrow(), state, opts);
    }
    canvas.restore_to_count(saved);
}

fn stroke_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_rect(canvas: &skia::Canvas, node: &Node, state: &Inherited) {
    let x = parse_number(node.attr("x"));
    let y = parse_number(node.attr("y"));
    let w = parse_number(node.attr("width"));
    let h = parse_number(node.attr("height"));
    // NaN or negative geometry draws nothing.
    if !(x.is_finite() && y.is_finite() && w > 0.0 && h > 0.0) {
        return;
    }
    let rect = skia::Rect::from_xywh(x, y, w, h);
    if let Some(fill) = state.fill {
        canvas.draw_rect(rect, &fill_paint(fill));
    }
    if let Some(stroke) = state.stroke {
        canvas.draw_rect(rect, &stroke_paint(stroke));
    }
}

fn draw_line(canvas: &skia::Canvas, node: &Node, state: &Inherited) {
    let coord = |name: &str| {
        let v = parse_number(node.attr(name));
        if v.is_nan() { 0.0 } else { v }
    };
    let color = state.stroke.unwrap_or(CURRENT_COLOR);
    canvas.draw_line((coord("x1"), coord("y1")), (coord("x2"), coord("y2")), &stroke_paint(color));
}

fn draw_path(canvas: &skia::Canvas, node: &Node, state: &Inherited) {
    let (Some(d), Some(stroke)) = (node.attr("d"), state.stroke) else { return };
    // Degenerate scales produce NaN coordinates; skip those paths.
    if d.contains("NaN") {
        return;
    }
    if let Some(path) = skia::Path::from_svg(d) {
        canvas.draw_path(&path, &stroke_paint(stroke));
    }
}

fn draw_text(canvas: &skia::Canvas, node: &Node, state: &Inherited) {
    let (Some(text), Some(fill)) = (node.text(), state.fill) else { return };
    let size = state.font_size;
    let mut font = skia::Font::default();
    font.set_size(size);
    let paint = fill_paint(fill);

    let mut x = parse_length(node.attr("x"), size) + parse_length(node.attr("dx"), size);
    let y = parse_length(node.attr("y"), size) + parse_length(node.attr("dy"), size);
    let (advance, _) = font.measure_str(text, Some(&paint));
    match state.anchor {
        Anchor::Start => {}
        Anchor::Middle => x -= advance / 2.0,
        Anchor::End => x -= advance,
    }
    canvas.draw_str(text, (x, y), &font, &paint);
}
