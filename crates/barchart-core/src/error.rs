// File: crates/barchart-core/src/error.rs
// Summary: Error type surfaced to the host when an update or plugin lookup fails.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VisualError>;

/// Failures a visual reports back to its host. None of them are retried;
/// the host decides what to do with a failed update.
#[derive(Debug, Error)]
pub enum VisualError {
    /// The update carried no data views at all.
    #[error("update has no data view")]
    MissingDataView,

    /// The first data view carries no table.
    #[error("first data view has no table")]
    MissingTable,

    /// A settings object the visual reads was not supplied.
    #[error("settings object `{0}` is missing")]
    MissingSettings(&'static str),

    /// A settings property was present but not of the expected type.
    #[error("settings property `{object}.{property}` is not a {expected}")]
    InvalidSetting {
        object: &'static str,
        property: &'static str,
        expected: &'static str,
    },

    /// A plugin with this name is already registered.
    #[error("plugin `{0}` is already registered")]
    DuplicatePlugin(String),

    /// No plugin with this name is registered.
    #[error("no plugin named `{0}`")]
    UnknownPlugin(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
