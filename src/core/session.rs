use crate::core::gesture::settings::GestureSettings;
use crate::core::gesture::state::GestureState;
use crate::core::view::{DetailLadder, ViewLimits, Viewport};

/// Rules the gesture machine applies; fixed for a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionRules {
    pub gesture: GestureSettings,
    pub view: ViewLimits,
    pub detail: DetailLadder,
}

/// Interaction state that evolves with input: where we look, how densely we
/// sample, and what the fingers are doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState {
    pub viewport: Viewport,
    pub gesture: GestureState,
    pub render_count: usize,
}

impl SessionState {
    #[must_use]
    pub fn new(rules: &InteractionRules) -> Self {
        Self {
            viewport: Viewport::new(rules.view.default_scale),
            gesture: GestureState::default(),
            render_count: rules.detail.initial,
        }
    }

    pub fn reset(&mut self, rules: &InteractionRules) {
        *self = Self::new(rules);
    }
}
