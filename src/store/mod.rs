use std::io;

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::JsonFileSettingStore;
pub use memory::MemorySettingStore;

pub const ANIMATOR_DURATION_SCALE: &str = "animator_duration_scale";

#[derive(Debug, Error)]
pub enum SettingError {
    #[error("setting '{key}' not found")]
    NotFound { key: String },

    #[error("permission denied writing setting '{key}'")]
    PermissionDenied { key: String },

    #[error("io failure accessing setting '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("setting store is corrupt: {details}")]
    Parse { details: String },
}

/// Host owned key/value store holding system wide float settings.
///
/// The store is shared with other processes, so implementations must not
/// cache values.
pub trait SettingStore {
    fn get_float(&self, key: &str) -> Result<f32, SettingError>;
    fn put_float(&mut self, key: &str, value: f32) -> Result<(), SettingError>;
}

impl<S: SettingStore + ?Sized> SettingStore for Box<S> {
    fn get_float(&self, key: &str) -> Result<f32, SettingError> {
        (**self).get_float(key)
    }

    fn put_float(&mut self, key: &str, value: f32) -> Result<(), SettingError> {
        (**self).put_float(key, value)
    }
}
