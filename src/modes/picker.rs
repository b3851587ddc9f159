use tracing::{debug, info};

use crate::{
    preset::{self, PRESET_SCALES},
    sink::{ChoiceDialog, PresentationSink},
    store::SettingStore,
};

use super::{ControllerError, ControllerResult, ScaleController, WriteOutcome};

impl<S: SettingStore, P: PresentationSink> ScaleController<S, P> {
    pub fn open_picker(&mut self) -> ChoiceDialog {
        let current = self.scaler.read();
        let dialog = ChoiceDialog::for_presets(preset::index_of(current));
        debug!(%current, selected = ?dialog.selected, "open picker");
        self.sink.show_choice_dialog(&dialog);
        self.dialog = Some(dialog.clone());
        dialog
    }

    /// The user picked `index` in the dialog. The dialog is dismissed
    /// whether or not the write went through.
    pub fn choose(&mut self, index: usize) -> ControllerResult<WriteOutcome> {
        if self.dialog.is_none() {
            return Err(ControllerError::DialogNotShowing);
        }
        let Some(preset) = preset::preset(index) else {
            return Err(ControllerError::InvalidChoice {
                index,
                len: PRESET_SCALES.len(),
            });
        };
        info!(scale = %preset.scale, "picked");
        let outcome = self.apply(preset.scale);
        self.close_dialog();
        let outcome = outcome?;
        if let WriteOutcome::Written(_) = outcome {
            self.refresh();
        }
        Ok(outcome)
    }

    pub fn cancel_dialog(&mut self) {
        debug!("picker cancelled");
        self.close_dialog();
    }

    pub fn dialog(&self) -> Option<&ChoiceDialog> {
        self.dialog.as_ref()
    }

    fn close_dialog(&mut self) {
        self.dialog = None;
        self.sink.dismiss_dialog();
    }
}
