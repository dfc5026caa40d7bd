// File: crates/barchart-core/tests/view_model.rs
// Purpose: Row-to-data-point conversion and the padded magnitude maximum.

use barchart_core::view_model::padded_max;
use barchart_core::{visual_transform, BarChartViewModel, DataPoint, DataViewTableRow, PrimitiveValue};

fn row(category: &str, value: f64) -> DataViewTableRow {
    vec![PrimitiveValue::from(category), PrimitiveValue::from(value)]
}

#[test]
fn converts_rows_in_order() {
    let rows = vec![row("USA", 10.0), row("UK", 5.0)];
    let points = visual_transform(&rows);
    assert_eq!(
        points,
        vec![
            DataPoint { category: "USA".into(), value: 10.0 },
            DataPoint { category: "UK".into(), value: 5.0 },
        ]
    );
}

#[test]
fn keeps_duplicates_and_order_without_sorting() {
    let rows = vec![row("b", 2.0), row("a", 1.0), row("b", 3.0)];
    let cats: Vec<_> = visual_transform(&rows).into_iter().map(|d| d.category).collect();
    assert_eq!(cats, vec!["b", "a", "b"]);
}

#[test]
fn conversion_is_idempotent() {
    let rows = vec![row("x", 1.5), vec![PrimitiveValue::Null], row("y", -2.0)];
    let first = visual_transform(&rows);
    let second = visual_transform(&rows);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.category, b.category);
        assert!(a.value == b.value || (a.value.is_nan() && b.value.is_nan()));
    }
}

#[test]
fn malformed_rows_are_not_rejected() {
    let rows = vec![
        vec![],
        vec![PrimitiveValue::from("only-category")],
        vec![PrimitiveValue::from("text-value"), PrimitiveValue::from("abc")],
        vec![PrimitiveValue::from(42.0), PrimitiveValue::from(" 7.5 ")],
    ];
    let points = visual_transform(&rows);
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].category, "");
    assert!(points[0].value.is_nan());
    assert_eq!(points[1].category, "only-category");
    assert!(points[1].value.is_nan());
    assert!(points[2].value.is_nan());
    assert_eq!(points[3].category, "42");
    assert_eq!(points[3].value, 7.5);
}

#[test]
fn data_max_is_taken_over_padded_values() {
    let vm = BarChartViewModel::from_rows(&[row("USA", 10.0), row("UK", 5.0)], 10.0);
    assert_eq!(vm.data_max, Some(20.0));
}

#[test]
fn data_max_skips_nan_and_is_none_without_values() {
    let points = vec![
        DataPoint { category: "a".into(), value: f64::NAN },
        DataPoint { category: "b".into(), value: -4.0 },
    ];
    assert_eq!(padded_max(&points, 10.0), Some(6.0));
    assert_eq!(padded_max(&points[..1], 10.0), None);
    assert_eq!(BarChartViewModel::from_rows(&[], 10.0).data_max, None);
}
