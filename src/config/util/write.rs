use std::{fs, path::PathBuf};

use serde::Serialize;
use tracing::{error, info};

pub fn try_write<T>(content: &T, settings_dir: &str, settings_file: &str) -> bool
where
    T: ?Sized + Serialize
{
    match serde_json::to_string_pretty(content) {
        Ok(json) => {
            if let Err(err) = fs::create_dir_all(settings_dir) {
                error!(?err, settings_dir, "could not create settings dir");
                return false;
            }
            let filename = [settings_dir, settings_file].iter().collect::<PathBuf>();
            info!(?filename, "storing tile settings");
            if let Err(err) = fs::write(&filename, json) {
                error!(?err, ?filename, "error writing to path");
                return false;
            }
            true
        },
        Err(err) => {
            error!(?err, "error serializing");
            false
        },
    }
}
