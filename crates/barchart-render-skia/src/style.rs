// File: crates/barchart-render-skia/src/style.rs
// Summary: Parsing of the presentation attributes the core visuals emit
// (colours, transforms, lengths).

use skia_safe as skia;

/// Colour used for `currentColor`.
pub const CURRENT_COLOR: skia::Color = skia::Color::BLACK;

/// Parse a paint value. `None` means "do not paint" (`none`, or unknown input).
pub fn parse_color(value: &str) -> Option<skia::Color> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        return parse_hex(hex);
    }
    let rgb = match v.to_ascii_lowercase().as_str() {
        "currentcolor" => return Some(CURRENT_COLOR),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "green" => (0, 128, 0),
        "red" => (255, 0, 0),
        "blue" => (0, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "steelblue" => (70, 130, 180),
        _ => return None,
    };
    Some(skia::Color::from_rgb(rgb.0, rgb.1, rgb.2))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(skia::Color::from_rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        3 => {
            let c = |i: usize| channel(&hex.get(i..i + 1)?.repeat(2));
            Some(skia::Color::from_rgb(c(0)?, c(1)?, c(2)?))
        }
        _ => None,
    }
}

/// One step of an SVG `transform` list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(f32, f32),
    Rotate(f32),
}

/// Parse `translate(x,y) rotate(a)` style lists; unknown steps are skipped.
pub fn parse_transform(value: &str) -> Vec<Transform> {
    value
        .split(')')
        .filter_map(|step| {
            let (name, args) = step.split_once('(')?;
            let args: Vec<f32> = args
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse().ok())
                .collect();
            match (name.trim(), args.as_slice()) {
                ("translate", [x]) => Some(Transform::Translate(*x, 0.0)),
                ("translate", [x, y, ..]) => Some(Transform::Translate(*x, *y)),
                ("rotate", [a, ..]) => Some(Transform::Rotate(*a)),
                _ => None,
            }
        })
        .collect()
}

/// Length in pixels; `em` units scale with `font_size`. Missing or bad input is 0.
pub fn parse_length(value: Option<&str>, font_size: f32) -> f32 {
    let Some(v) = value.map(str::trim) else { return 0.0 };
    match v.strip_suffix("em") {
        Some(em) => em.parse::<f32>().map(|e| e * font_size).unwrap_or(0.0),
        None => v.strip_suffix("px").unwrap_or(v).parse().unwrap_or(0.0),
    }
}

/// Numeric attribute; NaN for missing or unparsable values.
pub fn parse_number(value: Option<&str>) -> f32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(f32::NAN)
}
