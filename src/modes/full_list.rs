use tracing::{debug, info};

use crate::{
    bucket::list_entry,
    preset::PRESET_SCALES,
    sink::{PresentationSink, ScaleList},
    store::SettingStore,
};

use super::{ControllerError, ControllerResult, ScaleController, WriteOutcome};

impl<S: SettingStore, P: PresentationSink> ScaleController<S, P> {
    pub fn open_list(&mut self) -> ScaleList {
        let current = self.scaler.read();
        let list = ScaleList::for_presets(list_entry(current));
        debug!(%current, checked = ?list.checked(), "open list");
        self.sink.show_scale_list(&list);
        self.list = Some(list.clone());
        list
    }

    pub fn select_entry(&mut self, index: usize) -> ControllerResult<WriteOutcome> {
        let Some(list) = self.list.as_mut() else {
            return Err(ControllerError::ListNotShowing);
        };
        let Some(scale) = list.entries.get(index).map(|entry| entry.scale) else {
            return Err(ControllerError::InvalidChoice {
                index,
                len: PRESET_SCALES.len(),
            });
        };
        list.check_only(index);
        info!(%scale, "selected from list");
        let outcome = self.apply(scale);
        self.close_list();
        outcome
    }

    pub fn cancel_list(&mut self) {
        debug!("list cancelled");
        self.close_list();
    }

    pub fn list(&self) -> Option<&ScaleList> {
        self.list.as_ref()
    }

    fn close_list(&mut self) {
        self.list = None;
        self.sink.close_screen();
    }
}
