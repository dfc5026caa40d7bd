// File: crates/barchart-core/src/echo.rs
// Summary: Settings-echo visual; prints a caption and the current `myprop` flag as text.

use tracing::debug;

use crate::error::{Result, VisualError};
use crate::host::{
    EnumerateVisualObjectInstancesOptions, Visual, VisualConstructorOptions, VisualObjectInstance,
    VisualUpdateOptions,
};
use crate::scene::{self, NodeRef};
use crate::settings::{VisualSettings, MY_CUSTOM_OBJ, MY_PROP};

/// Caption shown above the flag value.
pub fn caption() -> String {
    format!("{MY_CUSTOM_OBJ}.{MY_PROP}")
}

pub struct SettingsEcho {
    caption: NodeRef,
    value: NodeRef,
    settings: VisualSettings,
}

impl SettingsEcho {
    pub fn new(options: VisualConstructorOptions) -> Self {
        let caption = scene::append(&options.element, "p");
        let value = scene::append(&options.element, "p");
        Self { caption, value, settings: VisualSettings::default() }
    }

    pub fn settings(&self) -> VisualSettings { self.settings }

    /// Text currently shown in the caption and value blocks.
    pub fn texts(&self) -> (Option<String>, Option<String>) {
        (
            self.caption.borrow().text().map(str::to_string),
            self.value.borrow().text().map(str::to_string),
        )
    }
}

impl Visual for SettingsEcho {
    /// Fails when the settings object is absent rather than showing a default.
    fn update(&mut self, options: &VisualUpdateOptions) -> Result<()> {
        let view = options.data_views.first().ok_or(VisualError::MissingDataView)?;
        self.settings = VisualSettings::parse(view)?;
        self.caption.borrow_mut().set_text(caption());
        self.value.borrow_mut().set_text(self.settings.my_visual_prop.to_string());
        debug!(myprop = self.settings.my_visual_prop, "settings echo update");
        Ok(())
    }

    fn enumerate_object_instances(
        &self,
        options: &EnumerateVisualObjectInstancesOptions,
    ) -> Vec<VisualObjectInstance> {
        self.settings.enumerate(&options.object_name)
    }
}
