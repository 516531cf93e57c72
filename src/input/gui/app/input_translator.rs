//! Translates winit window events into the explorer's input stream.

use crate::core::data::point::ScreenPoint;
use crate::core::gesture::{InputEvent, TouchPoint};
use std::collections::BTreeMap;
use std::time::Duration;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};

/// Pixels per wheel line when the platform reports line deltas.
const LINE_HEIGHT: f64 = 40.0;

/// winit reports one finger per event; the explorer wants every finger
/// still on the surface. Fingers are listed in id order.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: BTreeMap<u64, ScreenPoint>,
}

impl TouchTracker {
    pub fn update(&mut self, id: u64, phase: TouchPhase, position: ScreenPoint, now: Duration) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                self.active.insert(id, position);
                Some(InputEvent::TouchStart {
                    touches: self.touches(),
                    timestamp: now,
                })
            }
            TouchPhase::Moved => {
                let slot = self.active.get_mut(&id)?;
                *slot = position;
                Some(InputEvent::TouchMove { touches: self.touches() })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.remove(&id)?;
                Some(InputEvent::TouchEnd { touches: self.touches() })
            }
        }
    }

    fn touches(&self) -> Vec<TouchPoint> {
        self.active
            .iter()
            .map(|(&id, &client)| TouchPoint { id, client })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: ScreenPoint,
    touches: TouchTracker,
}

impl InputTranslator {
    /// Positions are physical pixels, the same space as the frame buffer.
    pub fn translate(&mut self, event: &WindowEvent, now: Duration) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = ScreenPoint::new(position.x, position.y);
                Some(InputEvent::PointerMove { client: self.cursor })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerDown { client: self.cursor },
                ElementState::Released => InputEvent::PointerUp { client: self.cursor },
            }),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerUp { client: self.cursor }),
            WindowEvent::MouseWheel { delta, .. } => {
                // Browser convention: positive delta scrolls down.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -f64::from(*y) * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(position) => -position.y,
                };
                Some(InputEvent::Wheel {
                    delta_y,
                    client: self.cursor,
                })
            }
            WindowEvent::Touch(touch) => self.touches.update(
                touch.id,
                touch.phase,
                ScreenPoint::new(touch.location.x, touch.location.y),
                now,
            ),
            _ => None,
        }
    }
}

/// Events that release a gesture are delivered even when egui claims them,
/// so a drag that ends over the panel does not stay latched.
#[must_use]
pub fn ends_interaction(event: &InputEvent) -> bool {
    matches!(event, InputEvent::PointerUp { .. } | InputEvent::TouchEnd { .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_second_finger_reports_both_touches() {
        let mut tracker = TouchTracker::default();

        tracker.update(7, TouchPhase::Started, ScreenPoint::new(1.0, 1.0), ms(0));
        let event = tracker.update(3, TouchPhase::Started, ScreenPoint::new(5.0, 5.0), ms(10));

        assert_eq!(
            event,
            Some(InputEvent::TouchStart {
                touches: vec![TouchPoint::new(3, 5.0, 5.0), TouchPoint::new(7, 1.0, 1.0)],
                timestamp: ms(10),
            })
        );
    }

    #[test]
    fn test_move_updates_only_that_finger() {
        let mut tracker = TouchTracker::default();
        tracker.update(1, TouchPhase::Started, ScreenPoint::new(1.0, 1.0), ms(0));
        tracker.update(2, TouchPhase::Started, ScreenPoint::new(9.0, 9.0), ms(0));

        let event = tracker.update(2, TouchPhase::Moved, ScreenPoint::new(8.0, 9.0), ms(5));

        assert_eq!(
            event,
            Some(InputEvent::TouchMove {
                touches: vec![TouchPoint::new(1, 1.0, 1.0), TouchPoint::new(2, 8.0, 9.0)],
            })
        );
    }

    #[test]
    fn test_end_reports_remaining_touches() {
        let mut tracker = TouchTracker::default();
        tracker.update(1, TouchPhase::Started, ScreenPoint::new(1.0, 1.0), ms(0));
        tracker.update(2, TouchPhase::Started, ScreenPoint::new(9.0, 9.0), ms(0));

        let event = tracker.update(1, TouchPhase::Cancelled, ScreenPoint::new(1.0, 1.0), ms(5));

        assert_eq!(
            event,
            Some(InputEvent::TouchEnd {
                touches: vec![TouchPoint::new(2, 9.0, 9.0)],
            })
        );
    }

    #[test]
    fn test_unknown_finger_is_dropped() {
        let mut tracker = TouchTracker::default();

        assert_eq!(tracker.update(4, TouchPhase::Moved, ScreenPoint::new(1.0, 1.0), ms(0)), None);
        assert_eq!(tracker.update(4, TouchPhase::Ended, ScreenPoint::new(1.0, 1.0), ms(0)), None);
    }

    #[test]
    fn test_release_events_end_interaction() {
        assert!(ends_interaction(&InputEvent::PointerUp {
            client: ScreenPoint::default()
        }));
        assert!(ends_interaction(&InputEvent::TouchEnd { touches: vec![] }));
        assert!(!ends_interaction(&InputEvent::PointerMove {
            client: ScreenPoint::default()
        }));
    }
}
