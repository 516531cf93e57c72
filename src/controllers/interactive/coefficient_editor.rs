use crate::controllers::interactive::debounce::DebouncedTask;
use crate::core::data::affine_map::CoefficientField;
use crate::core::data::map_set::{MapId, MapSet};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    /// Quiet time after the last edit before the cloud is regenerated.
    pub quiet_period: Duration,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(100),
        }
    }
}

/// Applies single-coefficient edits and owns the debounced regeneration they trigger.
///
/// Invalid input is dropped without surfacing an error; the previous value stays.
#[derive(Debug, Clone)]
pub struct CoefficientEditor {
    regeneration: DebouncedTask,
}

impl CoefficientEditor {
    #[must_use]
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            regeneration: DebouncedTask::new(settings.quiet_period),
        }
    }

    /// Returns whether the edit was applied.
    pub fn set_coefficient(
        &mut self,
        map_set: &mut MapSet,
        map: MapId,
        field: CoefficientField,
        value: f64,
        now: Duration,
    ) -> bool {
        if !value.is_finite() {
            tracing::debug!(map = map.key(), %field, value, "ignoring non-finite coefficient");
            return false;
        }

        map_set.set_coefficient(map, field, value);
        self.regeneration.schedule(now);

        true
    }

    /// Parses host-supplied strings (`"f2"`, `"e"`, `"0.5"`) before applying the edit.
    pub fn set_coefficient_str(
        &mut self,
        map_set: &mut MapSet,
        map: &str,
        field: &str,
        value: &str,
        now: Duration,
    ) -> bool {
        let map = match map.parse::<MapId>() {
            Ok(map) => map,
            Err(err) => {
                tracing::debug!(%err, "ignoring coefficient edit");
                return false;
            }
        };

        let field = match field.parse::<CoefficientField>() {
            Ok(field) => field,
            Err(err) => {
                tracing::debug!(%err, "ignoring coefficient edit");
                return false;
            }
        };

        let Ok(value) = value.trim().parse::<f64>() else {
            tracing::debug!(map = map.key(), %field, value, "ignoring unparsable coefficient");
            return false;
        };

        self.set_coefficient(map_set, map, field, value, now)
    }

    /// Returns `true` once the quiet period after the last edit has elapsed.
    pub fn poll_regeneration(&mut self, now: Duration) -> bool {
        self.regeneration.poll(now)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.regeneration.deadline()
    }

    pub fn cancel_pending(&mut self) {
        self.regeneration.cancel();
    }
}
