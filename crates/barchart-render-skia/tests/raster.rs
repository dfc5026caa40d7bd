// File: crates/barchart-render-skia/tests/raster.rs
// Purpose: Rasterize a rendered bar chart and check size and a few pixels.

use barchart_core::scene;
use barchart_core::{
    BarChart, DataView, PrimitiveValue, Viewport, Visual, VisualConstructorOptions, VisualUpdateOptions,
};
use barchart_render_skia::{render_to_png, render_to_png_bytes, surface_size, RasterOptions};

fn chart_500x400() -> BarChart {
    let host = scene::element("div");
    let mut chart = BarChart::new(VisualConstructorOptions { element: host });
    let rows = vec![
        vec![PrimitiveValue::from("USA"), PrimitiveValue::from(10.0)],
        vec![PrimitiveValue::from("UK"), PrimitiveValue::from(5.0)],
    ];
    chart
        .update(&VisualUpdateOptions::new(Viewport::new(500.0, 400.0), vec![DataView::from_rows(rows)]))
        .expect("update");
    chart
}

fn no_labels() -> RasterOptions {
    RasterOptions { draw_labels: false, ..RasterOptions::default() }
}

#[test]
fn surface_is_square_because_height_follows_width() {
    let chart = chart_500x400();
    assert_eq!(surface_size(chart.svg()), (500, 500));
}

#[test]
fn bars_are_painted_green() {
    let chart = chart_500x400();
    let bytes = render_to_png_bytes(chart.svg(), &no_labels()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (500, 500));

    // USA bar spans x 90..266, y 110..200 once shifted by the (70, 20) margins.
    let inside = img.get_pixel(178, 155).0;
    assert_eq!(inside, [0, 128, 0, 255]);
    // Above the UK bar (top at y 155) is background.
    let above = img.get_pixel(373, 140).0;
    assert_eq!(above, [255, 255, 255, 255]);
    // Left margin, clear of the value axis.
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
}

#[test]
fn writes_png_file() {
    let chart = chart_500x400();
    let out = std::path::PathBuf::from("target/test_out/bar_chart.png");
    render_to_png(chart.svg(), &RasterOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn empty_chart_still_renders() {
    let host = scene::element("div");
    let mut chart = BarChart::new(VisualConstructorOptions { element: host });
    chart
        .update(&VisualUpdateOptions::new(Viewport::new(300.0, 250.0), vec![DataView::from_rows(Vec::new())]))
        .expect("update");
    let bytes = render_to_png_bytes(chart.svg(), &no_labels()).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (300, 300));
}
