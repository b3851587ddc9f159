use tracing::info;

use crate::{scale::Scale, sink::PresentationSink, store::SettingStore};

use super::{ControllerResult, ScaleController, WriteOutcome};

pub fn toggle_target(current: Scale) -> Scale {
    if current == Scale::ONE {
        Scale::FIVE
    } else {
        Scale::ONE
    }
}

impl<S: SettingStore, P: PresentationSink> ScaleController<S, P> {
    pub fn toggle(&mut self) -> ControllerResult<WriteOutcome> {
        let current = self.scaler.read();
        let target = toggle_target(current);
        info!(%current, %target, "toggle");
        let outcome = self.apply(target)?;
        self.refresh();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bucket::Bucket,
        config::{TileMode, TileSettings},
        fakes::{RecordingSink, SinkCall},
        store::{MemorySettingStore, ANIMATOR_DURATION_SCALE},
    };

    use super::*;

    fn toggle_tile(store: MemorySettingStore) -> ScaleController<MemorySettingStore, RecordingSink> {
        let settings = TileSettings {
            mode: TileMode::Toggle,
            ..Default::default()
        };
        ScaleController::new(store, RecordingSink::default(), &settings)
    }

    #[test]
    fn target_flips_between_one_and_five() {
        assert_eq!(toggle_target(Scale::ONE), Scale::FIVE);
        assert_eq!(toggle_target(Scale::FIVE), Scale::ONE);
        assert_eq!(toggle_target(Scale::TWO), Scale::ONE);
        assert_eq!(toggle_target(Scale::OFF), Scale::ONE);
    }

    #[test]
    fn toggles_one_five_one() {
        let store = MemorySettingStore::new().with_value(ANIMATOR_DURATION_SCALE, 1.0);
        let mut tile = toggle_tile(store);

        assert_eq!(tile.toggle().unwrap(), WriteOutcome::Written(Scale::FIVE));
        assert_eq!(tile.sink().last_icon(), Some(Bucket::Five));

        assert_eq!(tile.toggle().unwrap(), WriteOutcome::Written(Scale::ONE));
        assert_eq!(tile.sink().last_icon(), Some(Bucket::One));
    }

    #[test]
    fn other_scale_goes_to_one() {
        let store = MemorySettingStore::new().with_value(ANIMATOR_DURATION_SCALE, 2.0);
        let mut tile = toggle_tile(store);

        tile.toggle().unwrap();

        assert_eq!(tile.scaler().read(), Scale::ONE);
        assert_eq!(tile.sink().icons(), vec![Bucket::One]);
    }

    #[test]
    fn rejected_toggle_keeps_icon_and_notifies_once() {
        // Arrange
        let store = MemorySettingStore::new()
            .with_value(ANIMATOR_DURATION_SCALE, 1.0)
            .read_only();
        let mut tile = toggle_tile(store);
        tile.start_listening();

        // Act
        let outcome = tile.toggle().unwrap();

        // Assert
        assert_eq!(outcome, WriteOutcome::PermissionDenied);
        assert_eq!(tile.sink().icons(), vec![Bucket::One, Bucket::One]);
        assert_eq!(tile.sink().notices().len(), 1);
        assert!(matches!(tile.sink().calls[1], SinkCall::PermissionDenied(_)));
        assert_eq!(tile.scaler().read(), Scale::ONE);
    }
}
