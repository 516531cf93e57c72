//! Turns the normalized input stream into viewport operations.
//!
//! Pan, pinch-zoom and double-tap zoom-drag are mutually exclusive modes;
//! wheel zoom is instantaneous and works in any mode. Events that do not fit
//! the current mode are dropped.

use crate::core::data::canvas::CanvasRect;
use crate::core::data::point::ScreenPoint;
use crate::core::gesture::input_event::{InputEvent, TouchPoint};
use crate::core::gesture::state::{GestureMode, GestureState};
use crate::core::session::{InteractionRules, SessionState};
use std::mem::discriminant;
use std::time::Duration;

/// What an input event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateDelta {
    pub viewport_changed: bool,
    /// The level-of-detail ladder raised the render count.
    pub render_count_changed: bool,
}

impl StateDelta {
    #[must_use]
    pub fn needs_regeneration(&self) -> bool {
        self.render_count_changed
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.viewport_changed || self.render_count_changed
    }

    fn viewport_only() -> Self {
        Self {
            viewport_changed: true,
            render_count_changed: false,
        }
    }
}

pub fn handle_input_event(
    session: &mut SessionState,
    event: &InputEvent,
    canvas: &CanvasRect,
    rules: &InteractionRules,
) -> StateDelta {
    match event {
        InputEvent::Wheel { delta_y, client } => on_wheel(session, *delta_y, *client, canvas, rules),
        InputEvent::PointerDown { client } => {
            enter(
                &mut session.gesture,
                GestureMode::Panning {
                    last: canvas.to_local(*client),
                },
            );
            StateDelta::default()
        }
        InputEvent::PointerMove { client } => on_pointer_move(session, *client, canvas),
        InputEvent::PointerUp { .. } => {
            enter(&mut session.gesture, GestureMode::Idle);
            StateDelta::default()
        }
        InputEvent::TouchStart { touches, timestamp } => {
            on_touch_start(&mut session.gesture, touches, *timestamp, canvas, rules);
            StateDelta::default()
        }
        InputEvent::TouchMove { touches } => on_touch_move(session, touches, canvas, rules),
        InputEvent::TouchEnd { touches } => {
            on_touch_end(&mut session.gesture, touches, canvas);
            StateDelta::default()
        }
    }
}

fn on_wheel(
    session: &mut SessionState,
    delta_y: f64,
    client: ScreenPoint,
    canvas: &CanvasRect,
    rules: &InteractionRules,
) -> StateDelta {
    if !delta_y.is_finite() || delta_y == 0.0 {
        return StateDelta::default();
    }

    let factor = if delta_y < 0.0 {
        rules.view.wheel_zoom_factor
    } else {
        rules.view.wheel_zoom_factor.recip()
    };

    zoom_at(session, canvas.to_local(client), factor, canvas, rules)
}

fn on_pointer_move(session: &mut SessionState, client: ScreenPoint, canvas: &CanvasRect) -> StateDelta {
    let GestureMode::Panning { last } = session.gesture.mode else {
        return StateDelta::default();
    };

    pan_to(session, last, canvas.to_local(client))
}

fn on_touch_start(
    gesture: &mut GestureState,
    touches: &[TouchPoint],
    timestamp: Duration,
    canvas: &CanvasRect,
    rules: &InteractionRules,
) {
    match touches {
        [touch] => {
            let local = canvas.to_local(touch.client);
            let is_double_tap = gesture.last_tap.is_some_and(|last| {
                timestamp
                    .checked_sub(last)
                    .is_some_and(|elapsed| elapsed < rules.gesture.double_tap_delay)
            });

            let mode = if is_double_tap {
                GestureMode::ZoomDragging {
                    origin: local,
                    last: local,
                    factor: 1.0,
                }
            } else {
                GestureMode::Panning { last: local }
            };

            enter(gesture, mode);
            gesture.last_tap = Some(timestamp);
        }
        [first, second] => {
            let (distance, center) = pinch_geometry(first, second, canvas);
            enter(gesture, GestureMode::PinchZooming { distance, center });
        }
        _ => {}
    }
}

fn on_touch_move(
    session: &mut SessionState,
    touches: &[TouchPoint],
    canvas: &CanvasRect,
    rules: &InteractionRules,
) -> StateDelta {
    match (touches, session.gesture.mode) {
        ([touch], GestureMode::ZoomDragging { origin, last, .. }) => {
            let local = canvas.to_local(touch.client);
            let factor = rules.gesture.zoom_drag_factor(local.y - last.y);

            session.gesture.mode = GestureMode::ZoomDragging {
                origin,
                last: local,
                factor,
            };
            zoom_at(session, origin, factor, canvas, rules)
        }
        ([touch], GestureMode::Panning { last }) => pan_to(session, last, canvas.to_local(touch.client)),
        ([first, second], mode) => {
            let (distance, center) = pinch_geometry(first, second, canvas);

            let delta = match mode {
                GestureMode::PinchZooming {
                    distance: previous_distance,
                    center: previous_center,
                } if previous_distance > 0.0 && distance > 0.0 => {
                    let mut delta = zoom_at(session, center, distance / previous_distance, canvas, rules);
                    let drift = center - previous_center;
                    session.viewport.pan(drift.x, drift.y);
                    delta.viewport_changed = true;
                    delta
                }
                _ => StateDelta::default(),
            };

            enter(&mut session.gesture, GestureMode::PinchZooming { distance, center });
            delta
        }
        _ => StateDelta::default(),
    }
}

fn on_touch_end(gesture: &mut GestureState, remaining: &[TouchPoint], canvas: &CanvasRect) {
    match remaining {
        [] => enter(gesture, GestureMode::Idle),
        [touch] => enter(
            gesture,
            GestureMode::Panning {
                last: canvas.to_local(touch.client),
            },
        ),
        _ => {}
    }
}

fn pinch_geometry(first: &TouchPoint, second: &TouchPoint, canvas: &CanvasRect) -> (f64, ScreenPoint) {
    let a = canvas.to_local(first.client);
    let b = canvas.to_local(second.client);

    (a.distance_to(b), a.midpoint(b))
}

fn pan_to(session: &mut SessionState, last: ScreenPoint, current: ScreenPoint) -> StateDelta {
    let delta = current - last;
    session.viewport.pan(delta.x, delta.y);
    session.gesture.mode = GestureMode::Panning { last: current };

    StateDelta::viewport_only()
}

/// Anchor-preserving zoom followed by a level-of-detail check.
fn zoom_at(
    session: &mut SessionState,
    anchor: ScreenPoint,
    factor: f64,
    canvas: &CanvasRect,
    rules: &InteractionRules,
) -> StateDelta {
    session.viewport.zoom_at(anchor, factor, canvas.size(), &rules.view);

    let next = rules
        .detail
        .on_scale_changed(session.viewport.scale(), session.render_count);
    let render_count_changed = next != session.render_count;
    session.render_count = next;

    StateDelta {
        viewport_changed: true,
        render_count_changed,
    }
}

fn enter(gesture: &mut GestureState, mode: GestureMode) {
    if discriminant(&gesture.mode) != discriminant(&mode) {
        tracing::trace!(from = ?gesture.mode, to = ?mode, "gesture mode change");
    }
    gesture.mode = mode;
}
