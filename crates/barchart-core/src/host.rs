// File: crates/barchart-core/src/host.rs
// Summary: Host-facing contract: data view payloads, update options, settings enumeration
// and the `Visual` trait every renderer implements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scene::NodeRef;
use crate::types::Viewport;

/// A single table cell as the host hands it over.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PrimitiveValue {
    /// Text form of the cell. Null becomes an empty string.
    pub fn to_text(&self) -> String {
        match self {
            PrimitiveValue::Null => String::new(),
            PrimitiveValue::Bool(b) => b.to_string(),
            PrimitiveValue::Number(n) => format_number(*n),
            PrimitiveValue::Text(s) => s.clone(),
        }
    }

    /// Numeric form of the cell. Text follows the host's string-to-number
    /// rules: blank is 0, anything that does not parse is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            PrimitiveValue::Null => f64::NAN,
            PrimitiveValue::Bool(b) => if *b { 1.0 } else { 0.0 },
            PrimitiveValue::Number(n) => *n,
            PrimitiveValue::Text(s) => parse_number(s),
        }
    }
}

/// Host string-to-number conversion. Only the spelled-out `Infinity` is
/// accepted for infinities; `inf`, `nan` and friends are NaN. Unsigned
/// `0x`/`0o`/`0b` literals are integers in that radix.
fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).map_or(f64::NAN, |v| v as f64);
    }
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self { PrimitiveValue::Text(s.to_string()) }
}

impl From<String> for PrimitiveValue {
    fn from(s: String) -> Self { PrimitiveValue::Text(s) }
}

impl From<f64> for PrimitiveValue {
    fn from(n: f64) -> Self { PrimitiveValue::Number(n) }
}

impl From<bool> for PrimitiveValue {
    fn from(b: bool) -> Self { PrimitiveValue::Bool(b) }
}

/// Format a number the way the host displays it: integral values carry no
/// fractional part, infinities are spelled out.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if n == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign, e.g. 1e+21 and 1.5e-7.
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        format!("{n}")
    }
}

/// One row of a table data view; cells are positional.
pub type DataViewTableRow = Vec<PrimitiveValue>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataViewTable {
    #[serde(default)]
    pub rows: Vec<DataViewTableRow>,
}

/// Property bag of one settings object, e.g. `{"myprop": true}`.
pub type DataViewObject = serde_json::Map<String, serde_json::Value>;
/// Settings objects keyed by object name, e.g. `myCustomObj`.
pub type DataViewObjects = BTreeMap<String, DataViewObject>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataViewMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<DataViewObjects>,
}

/// Snapshot of the data bound to the visual.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<DataViewTable>,
    #[serde(default)]
    pub metadata: DataViewMetadata,
}

impl DataView {
    /// Data view holding just a table of rows.
    pub fn from_rows(rows: Vec<DataViewTableRow>) -> Self {
        Self { table: Some(DataViewTable { rows }), metadata: DataViewMetadata::default() }
    }

    /// Attach a settings object under `name`.
    pub fn with_object(mut self, name: impl Into<String>, object: DataViewObject) -> Self {
        self.metadata
            .objects
            .get_or_insert_with(DataViewObjects::new)
            .insert(name.into(), object);
        self
    }

    pub fn object(&self, name: &str) -> Option<&DataViewObject> {
        self.metadata.objects.as_ref().and_then(|o| o.get(name))
    }
}

/// Payload of one host update call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualUpdateOptions {
    pub viewport: Viewport,
    #[serde(default)]
    pub data_views: Vec<DataView>,
}

impl VisualUpdateOptions {
    pub fn new(viewport: Viewport, data_views: Vec<DataView>) -> Self {
        Self { viewport, data_views }
    }
}

/// Handed to a visual once, at construction.
#[derive(Clone, Debug)]
pub struct VisualConstructorOptions {
    /// Mounting element owned by the host; the visual appends beneath it.
    pub element: NodeRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerateVisualObjectInstancesOptions {
    pub object_name: String,
}

impl EnumerateVisualObjectInstancesOptions {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self { object_name: object_name.into() }
    }
}

/// One configurable object instance reported to the host's property pane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    pub object_name: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
    /// `None` (serialized as `null`) applies the setting to the whole visual
    /// rather than one data point.
    pub selector: Option<serde_json::Value>,
}

/// Contract between a host and a visual. The host serializes all calls.
pub trait Visual {
    /// Redraw for a new viewport and data payload.
    fn update(&mut self, options: &VisualUpdateOptions) -> Result<()>;

    /// Report the current values of the settings group `options.object_name`.
    fn enumerate_object_instances(
        &self,
        _options: &EnumerateVisualObjectInstancesOptions,
    ) -> Vec<VisualObjectInstance> {
        Vec::new()
    }

    /// Release anything the visual allocated itself.
    fn destroy(&mut self) {}
}
