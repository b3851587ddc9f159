use anyhow::anyhow;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    bucket::{classify_exact, classify_threshold, Bucket},
    config::{logging::init_logging, read::read_or_default, TileMode, TileSettings, SETTINGS_FILE},
    scale::Scale,
    scaler::{AnimatorDurationScaler, ScaleWriteError},
    sink::{ChoiceDialog, PresentationSink, ScaleList},
    store::{JsonFileSettingStore, SettingError, SettingStore},
};

pub mod full_list;
pub mod picker;
pub mod toggle;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("choice {index} is not one of the {len} presets")]
    InvalidChoice { index: usize, len: usize },

    #[error("the scale list is not showing")]
    ListNotShowing,

    #[error("the picker dialog is not showing")]
    DialogNotShowing,

    #[error("setting store failure")]
    Store(#[from] SettingError),
}

pub type ControllerResult<T = ()> = Result<T, ControllerError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteOutcome {
    Written(Scale),
    PermissionDenied,
}

/// Drives the tile, its picker dialog and the full list screen.
///
/// Holds no scale state of its own, every event reads the store again.
/// Events are handled one at a time through `&mut self`.
pub struct ScaleController<S: SettingStore, P: PresentationSink> {
    scaler: AnimatorDurationScaler<S>,
    sink: P,
    mode: TileMode,
    dialog: Option<ChoiceDialog>,
    list: Option<ScaleList>,
}

impl<S: SettingStore, P: PresentationSink> ScaleController<S, P> {
    pub fn new(store: S, sink: P, settings: &TileSettings) -> Self {
        info!(mode = %settings.mode, "creating tile controller");
        ScaleController {
            scaler: AnimatorDurationScaler::new(store, &settings.package),
            sink,
            mode: settings.mode,
            dialog: None,
            list: None,
        }
    }

    pub fn mode(&self) -> TileMode {
        self.mode
    }

    pub fn scaler(&self) -> &AnimatorDurationScaler<S> {
        &self.scaler
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.scaler.store_mut()
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }

    /// Re-reads the scale and renders its icon. The picker tile only has
    /// icons for the presets themselves, the toggle tile rounds up.
    pub fn refresh(&mut self) -> Bucket {
        let scale = self.scaler.read();
        let bucket = match self.mode {
            TileMode::Picker => classify_exact(scale),
            TileMode::Toggle => classify_threshold(scale),
        };
        debug!(%scale, ?bucket, "refresh");
        self.sink.render_icon(bucket);
        bucket
    }

    pub fn start_listening(&mut self) -> Bucket {
        self.refresh()
    }

    #[instrument(skip(self))]
    pub fn click(&mut self) -> ControllerResult {
        debug!(mode = %self.mode, "tile clicked");
        match self.mode {
            TileMode::Toggle => self.toggle().map(|_| ()),
            TileMode::Picker => {
                self.open_picker();
                Ok(())
            }
        }
    }

    fn apply(&mut self, scale: Scale) -> ControllerResult<WriteOutcome> {
        match self.scaler.write(scale) {
            Ok(()) => Ok(WriteOutcome::Written(scale)),
            Err(ScaleWriteError::PermissionDenied { message }) => {
                self.sink.show_permission_denied_notice(&message);
                Ok(WriteOutcome::PermissionDenied)
            }
            Err(ScaleWriteError::Store(err)) => Err(ControllerError::Store(err)),
        }
    }
}

impl<P: PresentationSink> ScaleController<JsonFileSettingStore, P> {
    /// Builds a controller from `tile.json` in `config_dir`, backed by the
    /// configured json settings file.
    pub fn from_config_dir(config_dir: &str, sink: P) -> anyhow::Result<Self> {
        let settings = read_or_default::<TileSettings>(config_dir, SETTINGS_FILE);
        if !init_logging(settings.logging.log_level) {
            debug!("tracing subscriber already installed");
        }
        let store_file = settings
            .store_file
            .clone()
            .ok_or_else(|| anyhow!("'{}/{}' does not name a store_file", config_dir, SETTINGS_FILE))?;
        Ok(ScaleController::new(
            JsonFileSettingStore::new(store_file),
            sink,
            &settings,
        ))
    }
}
