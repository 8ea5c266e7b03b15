//! Tap recognizer: a press and release that never travels past the slop.

use swipekit_graphics::Point;

use super::GestureState;
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::pointer::{PointerEvent, PointerEventKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub location: Point,
}

#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    state: GestureState,
    press: Option<Point>,
}

impl TapRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Feeds one pointer event; yields a tap on a qualifying release.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> Option<TapEvent> {
        match event.kind {
            PointerEventKind::Down => {
                self.state = GestureState::Possible;
                self.press = Some(event.position);
                None
            }
            PointerEventKind::Move => {
                if self.state != GestureState::Possible {
                    return None;
                }
                let press = self.press?;
                let dx = event.position.x - press.x;
                let dy = event.position.y - press.y;
                if dx.hypot(dy) > DRAG_THRESHOLD {
                    self.fail();
                }
                None
            }
            PointerEventKind::Up => {
                if self.state != GestureState::Possible {
                    self.reset();
                    return None;
                }
                self.state = GestureState::Ended;
                self.press = None;
                Some(TapEvent {
                    location: event.position,
                })
            }
            PointerEventKind::Cancel => {
                self.state = GestureState::Cancelled;
                self.press = None;
                None
            }
        }
    }

    /// Forces the current sequence to fail, e.g. once a pan has begun.
    pub fn fail(&mut self) {
        if self.state.is_tracking() {
            self.state = GestureState::Failed;
        }
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut tap = TapRecognizer::new();
        assert!(tap.on_pointer(&PointerEvent::down(Point::new(10.0, 10.0), 0)).is_none());
        let event = tap.on_pointer(&PointerEvent::up(Point::new(12.0, 11.0), 80));
        assert_eq!(
            event,
            Some(TapEvent {
                location: Point::new(12.0, 11.0)
            })
        );
    }

    #[test]
    fn travel_past_slop_fails_the_tap() {
        let mut tap = TapRecognizer::new();
        tap.on_pointer(&PointerEvent::down(Point::new(10.0, 10.0), 0));
        tap.on_pointer(&PointerEvent::moved(Point::new(40.0, 10.0), 16));
        assert_eq!(tap.state(), GestureState::Failed);
        assert!(tap.on_pointer(&PointerEvent::up(Point::new(10.0, 10.0), 32)).is_none());
    }

    #[test]
    fn explicit_fail_suppresses_release() {
        let mut tap = TapRecognizer::new();
        tap.on_pointer(&PointerEvent::down(Point::ZERO, 0));
        tap.fail();
        assert!(tap.on_pointer(&PointerEvent::up(Point::ZERO, 10)).is_none());
    }
}
