use std::{
    collections::BTreeMap,
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use super::{SettingError, SettingStore};

/// Settings persisted as a flat json object of `key: float`.
///
/// Every call goes to disk, another process may edit the file at any time.
#[derive(Debug, Clone)]
pub struct JsonFileSettingStore {
    path: PathBuf,
}

impl JsonFileSettingStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileSettingStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self, key: &str) -> Result<Option<BTreeMap<String, f32>>, SettingError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str::<BTreeMap<String, f32>>(&json)
                .map(Some)
                .map_err(|err| {
                    error!(?err, path = ?self.path, "settings file could not be parsed");
                    SettingError::Parse {
                        details: err.to_string(),
                    }
                }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(key, err)),
        }
    }
}

fn io_error(key: &str, source: io::Error) -> SettingError {
    match source.kind() {
        ErrorKind::PermissionDenied => SettingError::PermissionDenied { key: key.into() },
        _ => SettingError::Io {
            key: key.into(),
            source,
        },
    }
}

impl SettingStore for JsonFileSettingStore {
    fn get_float(&self, key: &str) -> Result<f32, SettingError> {
        self.read_all(key)?
            .and_then(|values| values.get(key).copied())
            .ok_or_else(|| SettingError::NotFound { key: key.into() })
    }

    fn put_float(&mut self, key: &str, value: f32) -> Result<(), SettingError> {
        let mut values = self.read_all(key)?.unwrap_or_default();
        values.insert(key.into(), value);
        let json = serde_json::to_string_pretty(&values).map_err(|err| SettingError::Parse {
            details: err.to_string(),
        })?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|err| io_error(key, err))?;
            }
        }
        debug!(path = ?self.path, key, value, "storing setting");
        fs::write(&self.path, json).map_err(|err| io_error(key, err))
    }
}
