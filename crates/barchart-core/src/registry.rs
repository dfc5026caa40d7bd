// File: crates/barchart-core/src/registry.rs
// Summary: Plugin descriptors and an explicit, host-owned registry of visual factories.

use std::collections::BTreeMap;
use std::fmt;

use tracing::info;

use crate::bar_chart::{BarChart, BarChartOptions};
use crate::echo::SettingsEcho;
use crate::error::{Result, VisualError};
use crate::host::{Visual, VisualConstructorOptions};

/// Host API version the visuals are written against.
pub const API_VERSION: &str = "2.6.0";

/// Builds a visual for a mounting element.
pub type VisualFactory = Box<dyn Fn(VisualConstructorOptions) -> Result<Box<dyn Visual>>>;

/// Everything a host needs to list and instantiate one visual.
pub struct VisualPlugin {
    pub name: String,
    pub display_name: String,
    pub class: String,
    pub api_version: String,
    pub custom: bool,
    pub create: VisualFactory,
}

impl fmt::Debug for VisualPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualPlugin")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("class", &self.class)
            .field("api_version", &self.api_version)
            .field("custom", &self.custom)
            .finish_non_exhaustive()
    }
}

/// Plugins keyed by name. The hosting harness creates one at startup and
/// registers what it wants to offer.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, VisualPlugin>,
}

impl PluginRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn register(&mut self, plugin: VisualPlugin) -> Result<()> {
        if self.plugins.contains_key(&plugin.name) {
            return Err(VisualError::DuplicatePlugin(plugin.name));
        }
        info!(name = %plugin.name, display_name = %plugin.display_name, "registered visual plugin");
        self.plugins.insert(plugin.name.clone(), plugin);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&VisualPlugin> {
        self.plugins.get(name)
    }

    /// Instantiate the plugin registered as `name`.
    pub fn create(&self, name: &str, options: VisualConstructorOptions) -> Result<Box<dyn Visual>> {
        let plugin = self
            .plugins
            .get(name)
            .ok_or_else(|| VisualError::UnknownPlugin(name.to_string()))?;
        (plugin.create)(options)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.plugins.len() }
    pub fn is_empty(&self) -> bool { self.plugins.is_empty() }
}

/// Bar chart plugin using `options` for every instance it creates.
pub fn bar_chart_plugin(options: BarChartOptions) -> VisualPlugin {
    VisualPlugin {
        name: "barChart".to_string(),
        display_name: "BarChart".to_string(),
        class: "BarChart".to_string(),
        api_version: API_VERSION.to_string(),
        custom: true,
        create: Box::new(move |ctor: VisualConstructorOptions| -> Result<Box<dyn Visual>> {
            Ok(Box::new(BarChart::with_options(ctor, options.clone())))
        }),
    }
}

pub fn settings_echo_plugin() -> VisualPlugin {
    VisualPlugin {
        name: "settingsEcho".to_string(),
        display_name: "Settings Echo".to_string(),
        class: "SettingsEcho".to_string(),
        api_version: API_VERSION.to_string(),
        custom: true,
        create: Box::new(|ctor: VisualConstructorOptions| -> Result<Box<dyn Visual>> {
            Ok(Box::new(SettingsEcho::new(ctor)))
        }),
    }
}
