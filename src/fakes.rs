use std::cell::Cell;

use crate::{
    bucket::Bucket,
    sink::{ChoiceDialog, PresentationSink, ScaleList},
    store::{SettingError, SettingStore},
};

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    RenderIcon(Bucket),
    ShowDialog(ChoiceDialog),
    DismissDialog,
    ShowList(ScaleList),
    CloseScreen,
    PermissionDenied(String),
}

/// Records every call in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn icons(&self) -> Vec<Bucket> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::RenderIcon(bucket) => Some(*bucket),
                _ => None,
            })
            .collect()
    }

    pub fn last_icon(&self) -> Option<Bucket> {
        self.icons().last().copied()
    }

    pub fn dialogs(&self) -> Vec<ChoiceDialog> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::ShowDialog(dialog) => Some(dialog.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::PermissionDenied(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for RecordingSink {
    fn render_icon(&mut self, bucket: Bucket) {
        self.calls.push(SinkCall::RenderIcon(bucket));
    }

    fn show_choice_dialog(&mut self, dialog: &ChoiceDialog) {
        self.calls.push(SinkCall::ShowDialog(dialog.clone()));
    }

    fn dismiss_dialog(&mut self) {
        self.calls.push(SinkCall::DismissDialog);
    }

    fn show_scale_list(&mut self, list: &ScaleList) {
        self.calls.push(SinkCall::ShowList(list.clone()));
    }

    fn close_screen(&mut self) {
        self.calls.push(SinkCall::CloseScreen);
    }

    fn show_permission_denied_notice(&mut self, message: &str) {
        self.calls.push(SinkCall::PermissionDenied(message.into()));
    }
}

/// Counts the calls reaching the wrapped store
pub struct CountingStore<S> {
    inner: S,
    reads: Cell<usize>,
    writes: usize,
}

impl<S: SettingStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        CountingStore {
            inner,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<S: SettingStore> SettingStore for CountingStore<S> {
    fn get_float(&self, key: &str) -> Result<f32, SettingError> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get_float(key)
    }

    fn put_float(&mut self, key: &str, value: f32) -> Result<(), SettingError> {
        self.writes += 1;
        self.inner.put_float(key, value)
    }
}
