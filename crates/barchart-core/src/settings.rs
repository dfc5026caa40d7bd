// File: crates/barchart-core/src/settings.rs
// Summary: Visual settings read from data view metadata and echoed to the property pane.

use serde_json::{Map, Value};

use crate::error::{Result, VisualError};
use crate::host::{DataView, VisualObjectInstance};

/// Settings group holding the custom flag.
pub const MY_CUSTOM_OBJ: &str = "myCustomObj";
/// Boolean property inside [`MY_CUSTOM_OBJ`].
pub const MY_PROP: &str = "myprop";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisualSettings {
    pub my_visual_prop: bool,
}

impl VisualSettings {
    /// Read settings from `view`; the `myCustomObj` object must be present.
    pub fn parse(view: &DataView) -> Result<Self> {
        let object = view
            .object(MY_CUSTOM_OBJ)
            .ok_or(VisualError::MissingSettings(MY_CUSTOM_OBJ))?;
        Ok(Self { my_visual_prop: read_bool(object, MY_PROP)?.unwrap_or(false) })
    }

    /// Overlay whatever `view` supplies; absent values keep their current state.
    pub fn merge_from(&mut self, view: &DataView) -> Result<()> {
        if let Some(object) = view.object(MY_CUSTOM_OBJ) {
            if let Some(flag) = read_bool(object, MY_PROP)? {
                self.my_visual_prop = flag;
            }
        }
        Ok(())
    }

    /// Instances for `object_name`; unknown groups yield nothing.
    pub fn enumerate(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        match object_name {
            MY_CUSTOM_OBJ => {
                let mut properties = Map::new();
                properties.insert(MY_PROP.to_string(), Value::Bool(self.my_visual_prop));
                vec![VisualObjectInstance {
                    object_name: object_name.to_string(),
                    properties,
                    selector: None,
                }]
            }
            _ => Vec::new(),
        }
    }
}

fn read_bool(object: &Map<String, Value>, property: &'static str) -> Result<Option<bool>> {
    match object.get(property) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(VisualError::InvalidSetting {
            object: MY_CUSTOM_OBJ,
            property,
            expected: "boolean",
        }),
    }
}
