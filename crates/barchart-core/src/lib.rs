// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the host contract, view model, scales,
// scene tree and the bar chart / settings-echo visuals.

pub mod types;
pub mod error;
pub mod host;
pub mod scene;
pub mod svg;
pub mod scale;
pub mod axis;
pub mod layout;
pub mod view_model;
pub mod reconcile;
pub mod settings;
pub mod bar_chart;
pub mod echo;
pub mod registry;

pub use bar_chart::{BarChart, BarChartOptions, Frame};
pub use echo::SettingsEcho;
pub use error::{Result, VisualError};
pub use host::{
    DataView, DataViewTable, DataViewTableRow, EnumerateVisualObjectInstancesOptions, PrimitiveValue,
    Visual, VisualConstructorOptions, VisualObjectInstance, VisualUpdateOptions,
};
pub use layout::Layout;
pub use reconcile::{join, BarKey, JoinStats, KeyedShapes};
pub use registry::{bar_chart_plugin, settings_echo_plugin, PluginRegistry, VisualPlugin};
pub use scale::{BandScale, LinearScale, Scale};
pub use scene::NodeRef;
pub use settings::VisualSettings;
pub use types::{Insets, Viewport};
pub use view_model::{visual_transform, BarChartViewModel, DataPoint};
