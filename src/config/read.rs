use std::{fs, path::PathBuf};

use serde::de::DeserializeOwned;
use tracing::{error, info};

pub fn read_or_default<T>(settings_dir: &str, settings_file: &str) -> T
where
    T: DeserializeOwned,
    T: Default
{
    let path: PathBuf = [settings_dir, settings_file].iter().collect::<PathBuf>();
    match fs::read_to_string(path) {
        Ok(settings_json) => match serde_json::from_str::<T>(&settings_json) {
            Ok(settings) => {
                settings
            }
            Err(err) => {
                error!("File '{}/{}' could not be parsed. Error: {}. Using default configuration.", settings_dir, settings_file, err);
                T::default()
            }
        },
        Err(err) => {
            info!("File '{}/{}' could not be opened. Error: {}. Using default configuration.", settings_dir, settings_file, err);
            T::default()
        }
    }
}
