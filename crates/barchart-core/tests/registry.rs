// File: crates/barchart-core/tests/registry.rs
// Purpose: Explicit plugin registration and instantiation through factories.

use barchart_core::scene;
use barchart_core::{
    bar_chart_plugin, settings_echo_plugin, BarChartOptions, DataView, PluginRegistry, PrimitiveValue,
    Viewport, VisualConstructorOptions, VisualError, VisualUpdateOptions,
};

fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(bar_chart_plugin(BarChartOptions::default())).expect("bar chart");
    registry.register(settings_echo_plugin()).expect("echo");
    registry
}

#[test]
fn registered_plugins_are_listed() {
    let registry = registry();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names().collect::<Vec<_>>(), ["barChart", "settingsEcho"]);
    let plugin = registry.get("barChart").expect("plugin");
    assert_eq!(plugin.display_name, "BarChart");
    assert_eq!(plugin.api_version, "2.6.0");
    assert!(plugin.custom);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = registry();
    let err = registry.register(settings_echo_plugin()).expect_err("duplicate");
    assert!(matches!(err, VisualError::DuplicatePlugin(name) if name == "settingsEcho"));
}

#[test]
fn registries_are_independent() {
    let populated = registry();
    let empty = PluginRegistry::new();
    assert!(!populated.is_empty());
    assert!(empty.is_empty());
    let err = empty
        .create("barChart", VisualConstructorOptions { element: scene::element("div") })
        .err()
        .expect("unknown");
    assert!(matches!(err, VisualError::UnknownPlugin(_)));
}

#[test]
fn factory_builds_working_visual() {
    let registry = registry();
    let host = scene::element("div");
    let mut visual = registry
        .create("barChart", VisualConstructorOptions { element: host.clone() })
        .expect("create");
    let rows = vec![
        vec![PrimitiveValue::from("USA"), PrimitiveValue::from(10.0)],
        vec![PrimitiveValue::from("UK"), PrimitiveValue::from(5.0)],
    ];
    visual
        .update(&VisualUpdateOptions::new(Viewport::new(500.0, 400.0), vec![DataView::from_rows(rows)]))
        .expect("update");
    assert_eq!(scene::count(&host, scene::class("bar")), 2);
    visual.destroy();
    // Teardown leaves the host-owned tree alone.
    assert_eq!(scene::count(&host, scene::class("bar")), 2);
}
