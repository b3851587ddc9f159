use std::fmt::{self, Display};

use logging::LogLevel;
use serde::{Deserialize, Serialize};

use crate::scaler::DEFAULT_PACKAGE;

pub mod logging;
pub mod read;
pub mod util;

pub const SETTINGS_FILE: &str = "tile.json";

/// What a tap on the tile does. The full list is always reachable with a
/// long press.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMode {
    Toggle,
    #[default]
    Picker,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoggingSettings {
    pub log_level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TileSettings {
    #[serde(default)]
    pub mode: TileMode,
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub store_file: Option<String>,
}

fn default_package() -> String {
    DEFAULT_PACKAGE.into()
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            mode: TileMode::default(),
            package: default_package(),
            logging: LoggingSettings::default(),
            store_file: None,
        }
    }
}

impl Display for TileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileMode::Toggle => write!(f, "Toggle 1x/5x"),
            TileMode::Picker => write!(f, "Picker"),
        }
    }
}
