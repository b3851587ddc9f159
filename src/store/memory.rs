use std::collections::HashMap;

use tracing::trace;

use super::{SettingError, SettingStore};

/// In-process store. A read only store rejects every write the way the
/// system does for apps without the secure settings privilege.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingStore {
    values: HashMap<String, f32>,
    read_only: bool,
}

impl MemorySettingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: f32) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn set_external(&mut self, key: &str, value: f32) {
        self.values.insert(key.into(), value);
    }
}

impl SettingStore for MemorySettingStore {
    fn get_float(&self, key: &str) -> Result<f32, SettingError> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| SettingError::NotFound { key: key.into() })
    }

    fn put_float(&mut self, key: &str, value: f32) -> Result<(), SettingError> {
        if self.read_only {
            return Err(SettingError::PermissionDenied { key: key.into() });
        }
        trace!(key, value, "put_float");
        self.values.insert(key.into(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::store::ANIMATOR_DURATION_SCALE;

    #[test]
    fn missing_value_not_found() {
        let store = MemorySettingStore::new();
        let result = store.get_float(ANIMATOR_DURATION_SCALE);
        assert!(matches!(result, Err(SettingError::NotFound { .. })));
    }

    #[test]
    fn put_then_get() {
        let mut store = MemorySettingStore::new();
        assert_ok!(store.put_float(ANIMATOR_DURATION_SCALE, 2.0));
        assert_eq!(store.get_float(ANIMATOR_DURATION_SCALE).unwrap(), 2.0);
    }

    #[test]
    fn read_only_rejects_and_keeps_value() {
        let mut store = MemorySettingStore::new()
            .with_value(ANIMATOR_DURATION_SCALE, 1.0)
            .read_only();
        let result = store.put_float(ANIMATOR_DURATION_SCALE, 5.0);
        assert!(matches!(result, Err(SettingError::PermissionDenied { .. })));
        assert_eq!(store.get_float(ANIMATOR_DURATION_SCALE).unwrap(), 1.0);
    }

    #[test]
    fn external_change_ignores_privilege() {
        let mut store = MemorySettingStore::new().read_only();
        store.set_external(ANIMATOR_DURATION_SCALE, 0.5);
        assert_eq!(store.get_float(ANIMATOR_DURATION_SCALE).unwrap(), 0.5);
        assert_err!(store.put_float(ANIMATOR_DURATION_SCALE, 1.0));
    }
}
