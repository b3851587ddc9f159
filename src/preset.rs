use derive_new::new;
use itertools::Itertools;

use crate::scale::Scale;

pub const PRESET_SCALES: [Scale; 7] = [
    Scale::OFF,
    Scale::HALF,
    Scale::ONE,
    Scale::ONE_HALF,
    Scale::TWO,
    Scale::FIVE,
    Scale::TEN,
];

pub const ANIMATION_OFF: &str = "Animation off";

#[derive(new, Debug, Clone, PartialEq)]
pub struct Preset {
    pub scale: Scale,
    pub label: String,
}

pub fn label(scale: Scale) -> String {
    if scale.is_off() {
        return ANIMATION_OFF.into();
    }
    format!("Animation scale {}", scale)
}

pub fn presets() -> Vec<Preset> {
    PRESET_SCALES
        .iter()
        .map(|scale| Preset::new(*scale, label(*scale)))
        .collect()
}

pub fn labels() -> Vec<String> {
    PRESET_SCALES.iter().map(|scale| label(*scale)).collect()
}

pub fn preset(index: usize) -> Option<Preset> {
    PRESET_SCALES
        .get(index)
        .map(|scale| Preset::new(*scale, label(*scale)))
}

pub fn index_of(scale: Scale) -> Option<usize> {
    PRESET_SCALES
        .iter()
        .find_position(|preset| **preset == scale)
        .map(|(pos, _)| pos)
}
