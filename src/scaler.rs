use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::{
    scale::Scale,
    store::{SettingError, SettingStore, ANIMATOR_DURATION_SCALE},
};

pub const DEFAULT_PACKAGE: &str = "uk.co.nickbutcher.animatordurationtile";

pub fn remediation_message(package: &str) -> String {
    format!(
        "Permission required. Run: adb shell pm grant {} android.permission.WRITE_SECURE_SETTINGS",
        package
    )
}

#[derive(Debug, Error)]
pub enum ScaleWriteError {
    #[error("{message}")]
    PermissionDenied { message: String },

    #[error("failed writing animator duration scale")]
    Store(#[source] SettingError),
}

/// Reads and writes the global animator duration scale. Never caches.
pub struct AnimatorDurationScaler<S: SettingStore> {
    store: S,
    remediation: String,
}

impl<S: SettingStore> AnimatorDurationScaler<S> {
    pub fn new(store: S, package: &str) -> Self {
        AnimatorDurationScaler {
            store,
            remediation: remediation_message(package),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn remediation(&self) -> &str {
        &self.remediation
    }

    pub fn read(&self) -> Scale {
        match self.store.get_float(ANIMATOR_DURATION_SCALE) {
            Ok(value) => Scale::from_store(value),
            Err(err) => {
                error!(?err, "Could not read Animator Duration Scale setting");
                Scale::default()
            }
        }
    }

    #[instrument(skip(self))]
    pub fn write(&mut self, scale: Scale) -> Result<(), ScaleWriteError> {
        match self.store.put_float(ANIMATOR_DURATION_SCALE, scale.value()) {
            Ok(()) => Ok(()),
            Err(SettingError::PermissionDenied { .. }) => {
                debug!("{}", self.remediation);
                Err(ScaleWriteError::PermissionDenied {
                    message: self.remediation.clone(),
                })
            }
            Err(err) => {
                error!(?err, "write failed");
                Err(ScaleWriteError::Store(err))
            }
        }
    }
}
