// File: crates/barchart-core/tests/scale.rs
// Purpose: Band and linear scale arithmetic, ticks and tick labels.

use barchart_core::axis::format_tick;
use barchart_core::{BandScale, LinearScale, Scale};

#[test]
fn band_scale_rounds_to_whole_pixels() {
    let x = BandScale::new()
        .domain(["USA", "UK"])
        .range_round(0.0, 410.0)
        .padding(0.1);
    assert_eq!(x.step(), 195.0);
    assert_eq!(x.bandwidth(), 176.0);
    assert_eq!(x.apply("USA"), Some(20.0));
    assert_eq!(x.apply("UK"), Some(215.0));
    assert_eq!(x.apply("France"), None);
    assert_eq!(Scale::range(&x), (0.0, 410.0));
}

#[test]
fn band_scale_domain_is_distinct_in_first_seen_order() {
    let x = BandScale::new().domain(["b", "a", "b", "c", "a"]).range(0.0, 300.0);
    assert_eq!(x.labels(), ["b", "a", "c"]);
    assert_eq!(x.apply("b"), Some(0.0));
    assert_eq!(x.apply("a"), Some(100.0));
    assert_eq!(x.bandwidth(), 100.0);
}

#[test]
fn band_scale_empty_domain_has_no_positions() {
    let x = BandScale::new().domain(Vec::<String>::new()).range_round(0.0, 410.0).padding(0.1);
    assert!(x.labels().is_empty());
    assert_eq!(x.apply("anything"), None);
}

#[test]
fn band_scale_lookup_scales_to_many_categories() {
    let labels: Vec<String> = (0..20_000).map(|i| format!("c{i}")).collect();
    let repeated = labels.iter().chain(labels.iter()).cloned();
    let x = BandScale::new().domain(repeated).range(0.0, 20_000.0);
    assert_eq!(x.labels().len(), 20_000);
    assert_eq!(x.step(), 1.0);
    assert_eq!(x.apply("c0"), Some(0.0));
    assert_eq!(x.apply("c12345"), Some(12_345.0));
    assert_eq!(x.apply("c19999"), Some(19_999.0));
    assert_eq!(x.apply("c20000"), None);
}

#[test]
fn linear_scale_inverts_range() {
    let y = LinearScale::new().domain(0.0, 20.0).range(180.0, 0.0);
    assert_eq!(y.to_px(0.0), 180.0);
    assert_eq!(y.to_px(10.0), 90.0);
    assert_eq!(y.to_px(20.0), 0.0);
    assert_eq!(y.apply(&5.0), Some(135.0));
}

#[test]
fn linear_scale_degenerate_domains() {
    let flat = LinearScale::new().domain(0.0, 0.0).range(100.0, 0.0);
    assert_eq!(flat.to_px(3.0), 50.0);

    let undefined = LinearScale::new().domain(0.0, f64::NAN).range(100.0, 0.0);
    assert!(undefined.to_px(3.0).is_nan());
    assert_eq!(undefined.apply(&3.0), None);
    assert!(undefined.ticks(10).is_empty());
}

#[test]
fn linear_ticks_use_round_steps() {
    let y = LinearScale::new().domain(0.0, 20.0);
    let ticks = y.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[1], 2.0);
    assert_eq!(ticks[10], 20.0);

    let small = LinearScale::new().domain(0.0, 1.0).ticks(10);
    assert_eq!(small.len(), 11);
    assert_eq!(small[10], 1.0);

    let odd = LinearScale::new().domain(0.0, 17.0).ticks(10);
    assert_eq!(odd, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
}

#[test]
fn tick_labels() {
    assert_eq!(format_tick(1000.0, 200.0), "1,000");
    assert_eq!(format_tick(1234567.0, 1.0), "1,234,567");
    assert_eq!(format_tick(0.25, 0.05), "0.25");
    assert_eq!(format_tick(-5.0, 1.0), "−5");
    assert_eq!(format_tick(0.0, 2.0), "0");
}
