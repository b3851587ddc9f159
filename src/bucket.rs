use serde::{Deserialize, Serialize};

use crate::{
    preset::{self, PRESET_SCALES},
    scale::Scale,
};

/// Discrete display class of a scale, selects the tile icon.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Off,
    Half,
    One,
    OneHalf,
    Two,
    Five,
    Ten,
    Other,
}

const PRESET_BUCKETS: [Bucket; 7] = [
    Bucket::Off,
    Bucket::Half,
    Bucket::One,
    Bucket::OneHalf,
    Bucket::Two,
    Bucket::Five,
    Bucket::Ten,
];

impl Bucket {
    pub fn icon(&self) -> &'static str {
        match self {
            Bucket::Off => "ic_animator_duration_off",
            Bucket::Half => "ic_animator_duration_half_x",
            Bucket::One => "ic_animator_duration_1x",
            Bucket::OneHalf => "ic_animator_duration_1_5x",
            Bucket::Two => "ic_animator_duration_2x",
            Bucket::Five => "ic_animator_duration_5x",
            Bucket::Ten => "ic_animator_duration_10x",
            Bucket::Other => "ic_animator_duration",
        }
    }

    pub fn preset_index(&self) -> Option<usize> {
        PRESET_BUCKETS.iter().position(|bucket| bucket == self)
    }

    pub fn scale(&self) -> Option<Scale> {
        self.preset_index().map(|i| PRESET_SCALES[i])
    }

    pub fn label(&self) -> Option<String> {
        self.scale().map(preset::label)
    }
}

/// Classifies a scale that was just read or set. Anything that is not
/// exactly one of the presets is `Other`.
pub fn classify_exact(scale: Scale) -> Bucket {
    match preset::index_of(scale) {
        Some(index) => PRESET_BUCKETS[index],
        None => Bucket::Other,
    }
}

/// Classifies a live scale into the smallest preset that is greater or
/// equal. Values above the largest preset are `Other`.
pub fn classify_threshold(scale: Scale) -> Bucket {
    let value = scale.value();
    PRESET_SCALES
        .iter()
        .zip(PRESET_BUCKETS)
        .find(|(preset, _)| value <= preset.value())
        .map(|(_, bucket)| bucket)
        .unwrap_or(Bucket::Other)
}

/// Preset index of the entry that is checked in the full list. Same
/// thresholds as `classify_threshold`, but everything above `5x` lands on
/// the last entry.
pub fn list_entry(scale: Scale) -> usize {
    let last = PRESET_SCALES.len() - 1;
    let value = scale.value();
    PRESET_SCALES[..last]
        .iter()
        .position(|preset| value <= preset.value())
        .unwrap_or(last)
}
