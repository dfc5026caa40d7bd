// File: crates/demo/src/main.rs
// Summary: Host harness: registers the visuals, feeds CSV rows through one update and
// writes the resulting surface as SVG (and PNG for the bar chart).

use anyhow::{Context, Result};
use barchart_core::host::{DataViewObject, Visual};
use barchart_core::scene::{self, NodeRef};
use barchart_core::settings::{MY_CUSTOM_OBJ, MY_PROP};
use barchart_core::{
    bar_chart_plugin, settings_echo_plugin, svg, BarChartOptions, DataView, DataViewTableRow,
    EnumerateVisualObjectInstancesOptions, PluginRegistry, PrimitiveValue, Viewport,
    VisualConstructorOptions, VisualUpdateOptions,
};
use barchart_render_skia::{render_to_png, RasterOptions};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Bar,
    Echo,
}

impl Kind {
    fn plugin_name(self) -> &'static str {
        match self {
            Kind::Bar => "barChart",
            Kind::Echo => "settingsEcho",
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            Kind::Bar => "bar_chart",
            Kind::Echo => "settings_echo",
        }
    }
}

/// Render CSV rows through a registered visual.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file; the first column is the category, the second the value.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Which visual to instantiate.
    #[arg(long, value_enum, default_value_t = Kind::Bar)]
    visual: Kind,

    /// JSON file with bar chart options; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Value of `myCustomObj.myprop` passed in the data view metadata.
    #[arg(long)]
    myprop: Option<bool>,

    /// Output directory.
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let options = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config '{}'", path.display()))?;
            BarChartOptions::from_json(&text)
                .with_context(|| format!("parsing config '{}'", path.display()))?
        }
        None => BarChartOptions::default(),
    };

    // Registration happens here, once, before any visual exists.
    let mut registry = PluginRegistry::new();
    registry.register(bar_chart_plugin(options))?;
    registry.register(settings_echo_plugin())?;

    let rows = match &cli.input {
        Some(path) => load_rows_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => sample_rows(),
    };
    println!("Loaded {} rows", rows.len());

    let mut view = DataView::from_rows(rows);
    if let Some(flag) = cli.myprop {
        let mut object = DataViewObject::new();
        object.insert(MY_PROP.to_string(), serde_json::Value::Bool(flag));
        view = view.with_object(MY_CUSTOM_OBJ, object);
    }

    let host_element = scene::element("div");
    let mut visual = registry.create(
        cli.visual.plugin_name(),
        VisualConstructorOptions { element: host_element.clone() },
    )?;
    visual
        .update(&VisualUpdateOptions::new(Viewport::new(cli.width, cli.height), vec![view]))
        .context("visual update failed")?;

    for instance in visual.enumerate_object_instances(&EnumerateVisualObjectInstancesOptions::new(MY_CUSTOM_OBJ)) {
        info!(object = %instance.object_name, properties = ?instance.properties, "settings");
    }

    write_outputs(&host_element, cli.visual, &cli.out)?;
    visual.destroy();
    Ok(())
}

fn write_outputs(host_element: &NodeRef, kind: Kind, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let stem = kind.file_stem();
    let surface = scene::select_all(host_element, scene::tag("svg")).into_iter().next();
    match surface {
        Some(svg_root) => {
            let out_svg = out_dir.join(format!("{stem}.svg"));
            svg::write(&svg_root, &out_svg)?;
            println!("Wrote {}", out_svg.display());

            let out_png = out_dir.join(format!("{stem}.png"));
            render_to_png(&svg_root, &RasterOptions::default(), &out_png)?;
            println!("Wrote {}", out_png.display());
        }
        None => {
            // Text-only visuals: dump the host element markup.
            let out_html = out_dir.join(format!("{stem}.html"));
            std::fs::write(&out_html, svg::to_string(host_element))?;
            println!("Wrote {}", out_html.display());
        }
    }
    Ok(())
}

/// Load `category,value` rows. Cells are passed through as text or numbers without
/// validation; the visual decides how to read them.
fn load_rows_csv(path: &Path) -> Result<Vec<DataViewTableRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let row = rec.iter().take(2).map(cell).collect::<Vec<_>>();
        out.push(row);
    }
    Ok(out)
}

fn cell(raw: &str) -> PrimitiveValue {
    let s = raw.trim();
    if s.is_empty() {
        return PrimitiveValue::Null;
    }
    match s.parse::<f64>() {
        Ok(n) => PrimitiveValue::Number(n),
        Err(_) => PrimitiveValue::Text(s.to_string()),
    }
}

fn sample_rows() -> Vec<DataViewTableRow> {
    [("USA", 10.0), ("UK", 5.0), ("Germany", 7.5), ("France", 6.0), ("Japan", 9.0)]
        .into_iter()
        .map(|(c, v)| vec![PrimitiveValue::from(c), PrimitiveValue::from(v)])
        .collect()
}
