use crate::{bucket::Bucket, preset, scale::Scale};

pub const DIALOG_TITLE: &str = "Animator duration scale";

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceDialog {
    pub title: String,
    pub labels: Vec<String>,
    pub selected: Option<usize>,
    pub cancelable: bool,
}

impl ChoiceDialog {
    pub fn for_presets(selected: Option<usize>) -> Self {
        ChoiceDialog {
            title: DIALOG_TITLE.into(),
            labels: preset::labels(),
            selected,
            cancelable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleListEntry {
    pub scale: Scale,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleList {
    pub entries: Vec<ScaleListEntry>,
}

impl ScaleList {
    pub fn for_presets(checked: usize) -> Self {
        let entries = preset::presets()
            .into_iter()
            .enumerate()
            .map(|(i, preset)| ScaleListEntry {
                scale: preset.scale,
                label: preset.label,
                checked: i == checked,
            })
            .collect();
        ScaleList { entries }
    }

    pub fn checked(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.checked)
    }

    pub fn check_only(&mut self, index: usize) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.checked = i == index;
        }
    }
}

/// The UI surface driven by the controller: a tile, its dialog and the
/// full list screen.
pub trait PresentationSink {
    fn render_icon(&mut self, bucket: Bucket);
    fn show_choice_dialog(&mut self, dialog: &ChoiceDialog);
    fn dismiss_dialog(&mut self);
    fn show_scale_list(&mut self, list: &ScaleList);
    fn close_screen(&mut self);
    fn show_permission_denied_notice(&mut self, message: &str);
}
