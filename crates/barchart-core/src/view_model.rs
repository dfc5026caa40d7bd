// File: crates/barchart-core/src/view_model.rs
// Summary: Converts host table rows into typed bar data points.

use serde::{Deserialize, Serialize};

use crate::host::{DataViewTableRow, PrimitiveValue};

/// One bar: its category label and magnitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: String,
    pub value: f64,
}

/// Data points of one update plus the padded magnitude maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartViewModel {
    pub data_points: Vec<DataPoint>,
    /// Largest `value + headroom` over the points; `None` when no point has a
    /// comparable value (no rows, or every value NaN).
    pub data_max: Option<f64>,
}

impl BarChartViewModel {
    pub fn from_rows(rows: &[DataViewTableRow], headroom: f64) -> Self {
        let data_points = visual_transform(rows);
        let data_max = padded_max(&data_points, headroom);
        Self { data_points, data_max }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.data_points.iter().map(|d| d.category.as_str())
    }
}

/// Row `i` becomes point `i`: cell 0 as text, cell 1 as a number. Short or
/// malformed rows are not rejected; missing cells read as null, so the
/// category comes out empty and the value NaN.
pub fn visual_transform(rows: &[DataViewTableRow]) -> Vec<DataPoint> {
    rows.iter()
        .map(|row| DataPoint {
            category: row.first().map_or_else(String::new, PrimitiveValue::to_text),
            value: row.get(1).map_or(f64::NAN, PrimitiveValue::to_number),
        })
        .collect()
}

/// Maximum of `value + headroom` taken per point, skipping NaN.
pub fn padded_max(points: &[DataPoint], headroom: f64) -> Option<f64> {
    points
        .iter()
        .map(|d| d.value + headroom)
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
}
