use std::fmt::{self, Display};

use thiserror::Error;
use tracing::warn;

/// Animator duration multiplier. `0` disables animations, `1` is the system default.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("animator duration scale {0} is outside of [0, 10]")]
    OutOfRange(f32),
}

impl Scale {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 10.0;

    pub const OFF: Scale = Scale(0.0);
    pub const HALF: Scale = Scale(0.5);
    pub const ONE: Scale = Scale(1.0);
    pub const ONE_HALF: Scale = Scale(1.5);
    pub const TWO: Scale = Scale(2.0);
    pub const FIVE: Scale = Scale(5.0);
    pub const TEN: Scale = Scale(10.0);

    pub fn new(value: f32) -> Result<Self, ScaleError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Scale(value))
        } else {
            Err(ScaleError::OutOfRange(value))
        }
    }

    /// Wraps whatever the setting store holds. Other apps may write values
    /// outside of the valid range, these still have to be displayed.
    pub fn from_store(value: f32) -> Self {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            warn!(value, "stored animator duration scale is out of range");
        }
        Scale(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_off(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::ONE
    }
}

impl From<Scale> for f32 {
    fn from(val: Scale) -> Self {
        val.0
    }
}

impl TryFrom<f32> for Scale {
    type Error = ScaleError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Scale::new(value)
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        if rounded == self.0 {
            write!(f, "{}x", rounded as i64)
        } else {
            write!(f, "{}x", self.0)
        }
    }
}
