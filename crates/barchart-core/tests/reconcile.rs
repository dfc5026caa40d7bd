// File: crates/barchart-core/tests/reconcile.rs
// Purpose: Generic keyed enter/update/exit matching.

use barchart_core::{join, KeyedShapes};

#[test]
fn join_splits_enter_update_exit() {
    let existing = vec![("a", 1), ("b", 2), ("c", 3)];
    let data = ["c", "d", "a"];
    let j = join(existing, &data, |_, d| *d);

    let enter: Vec<_> = j.enter.iter().map(|(i, k, _)| (*i, *k)).collect();
    assert_eq!(enter, vec![(1, "d")]);
    let update: Vec<_> = j.update.iter().map(|(i, k, _, s)| (*i, *k, *s)).collect();
    assert_eq!(update, vec![(0, "c", 3), (2, "a", 1)]);
    assert_eq!(j.exit, vec![("b", 2)]);
}

#[test]
fn duplicate_keys_are_first_wins() {
    let existing = vec![("a", 1), ("a", 2)];
    let data = ["a", "a"];
    let j = join(existing, &data, |_, d| *d);
    assert_eq!(j.update.len(), 1);
    assert_eq!(j.update[0].3, 1);
    assert_eq!(j.enter.len(), 1);
    assert_eq!(j.enter[0].0, 1);
    assert_eq!(j.exit, vec![("a", 2)]);
}

#[test]
fn keyed_shapes_follow_data_order() {
    let mut shapes: KeyedShapes<&str, String> = KeyedShapes::new();
    let mut removed = Vec::new();
    let stats = shapes.apply(
        &["x", "y"],
        |_, d| *d,
        |_, d| format!("shape-{d}"),
        |_, _, _| {},
        |s| removed.push(s),
    );
    assert_eq!((stats.entered, stats.updated, stats.exited), (2, 0, 0));

    let mut updated = Vec::new();
    let stats = shapes.apply(
        &["z", "y"],
        |_, d| *d,
        |_, d| format!("shape-{d}"),
        |i, _, s: &String| updated.push((i, s.clone())),
        |s| removed.push(s),
    );
    assert_eq!((stats.entered, stats.updated, stats.exited), (1, 1, 1));
    assert_eq!(updated, vec![(1, "shape-y".to_string())]);
    assert_eq!(removed, vec!["shape-x".to_string()]);
    assert_eq!(shapes.keys().copied().collect::<Vec<_>>(), ["z", "y"]);
    assert_eq!(shapes.len(), 2);

    let cleared = shapes.clear();
    assert_eq!(cleared.len(), 2);
    assert!(shapes.is_empty());
}

#[test]
fn positional_keys_match_by_index() {
    let mut shapes: KeyedShapes<usize, &str> = KeyedShapes::new();
    shapes.apply(&["a", "b", "c"], |i, _| i, |_, d| *d, |_, _, _| {}, |_| {});
    let stats = shapes.apply(&["q"], |i, _| i, |_, d| *d, |_, _, _| {}, |_| {});
    assert_eq!((stats.entered, stats.updated, stats.exited), (0, 1, 2));
    // Shapes are only handed to `update`, never replaced, so the old value stays.
    assert_eq!(shapes.shapes().copied().collect::<Vec<_>>(), ["a"]);
}
