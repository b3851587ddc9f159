//! Inspect and change the system wide animator duration scale from a quick
//! settings tile: a 1x/5x toggle, a preset picker dialog and a full list
//! screen.
//!
//! The host provides the [`SettingStore`] holding the live value and the
//! [`PresentationSink`] that renders the tile, and forwards its UI events to
//! a [`ScaleController`].

pub mod bucket;
pub mod config;
pub mod modes;
pub mod preset;
pub mod scale;
pub mod scaler;
pub mod sink;
pub mod store;

#[cfg(test)]
pub(crate) mod fakes;

pub use bucket::{classify_exact, classify_threshold, list_entry, Bucket};
pub use config::{logging::LogLevel, TileMode, TileSettings};
pub use modes::{ControllerError, ControllerResult, ScaleController, WriteOutcome};
pub use preset::{Preset, PRESET_SCALES};
pub use scale::{Scale, ScaleError};
pub use scaler::{AnimatorDurationScaler, ScaleWriteError};
pub use sink::{ChoiceDialog, PresentationSink, ScaleList, ScaleListEntry};
pub use store::{
    JsonFileSettingStore, MemorySettingStore, SettingError, SettingStore, ANIMATOR_DURATION_SCALE,
};
