//! Horizontal pan recognizer.
//!
//! Begins once the pointer has travelled past [`DRAG_THRESHOLD`] with a
//! horizontal component at least as large as the vertical one. A mostly
//! vertical movement fails the recognizer for the rest of the sequence so
//! the hosting list keeps its vertical scroll.

use swipekit_graphics::Point;

use super::GestureState;
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::pointer::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Accumulated movement since the press, minus any rebase.
    pub translation: Point,
    /// Pointer velocity in px/second.
    pub velocity: Point,
    /// Current pointer position in list coordinates.
    pub location: Point,
}

#[derive(Clone, Debug, Default)]
pub struct PanRecognizer {
    state: GestureState,
    /// Position at which the translation reads zero.
    anchor: Point,
    location: Point,
    tracker: VelocityTracker,
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn translation(&self) -> Point {
        self.location - self.anchor
    }

    pub fn velocity(&self) -> Point {
        self.tracker.velocity()
    }

    pub fn location(&self) -> Point {
        self.location
    }

    /// Rebases the translation so that the current position reads as
    /// `translation`. Later events continue from the new value.
    pub fn set_translation(&mut self, translation: Point) {
        self.anchor = self.location - translation;
    }

    /// Feeds one pointer event and returns the resulting pan phase, if any.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> Option<PanEvent> {
        match event.kind {
            PointerEventKind::Down => {
                self.tracker.reset();
                self.tracker.add_position(event.time_ms, event.position);
                self.state = GestureState::Possible;
                self.anchor = event.position;
                self.location = event.position;
                None
            }
            PointerEventKind::Move => {
                if !self.state.is_tracking() {
                    return None;
                }
                self.tracker.add_position(event.time_ms, event.position);
                self.location = event.position;

                if self.state == GestureState::Possible {
                    let delta = self.translation();
                    if delta.x.hypot(delta.y) <= DRAG_THRESHOLD {
                        return None;
                    }
                    if delta.x.abs() < delta.y.abs() {
                        log::trace!("pan failed: vertical movement {:?}", delta);
                        self.state = GestureState::Failed;
                        return None;
                    }
                    self.state = GestureState::Active;
                    return Some(self.event(PanPhase::Began));
                }

                Some(self.event(PanPhase::Changed))
            }
            PointerEventKind::Up => {
                let was_active = self.state == GestureState::Active;
                self.tracker.add_position(event.time_ms, event.position);
                self.location = event.position;
                self.state = GestureState::Ended;
                was_active.then(|| self.event(PanPhase::Ended))
            }
            PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Cancels an active pan, producing a final `Cancelled` event.
    pub fn cancel(&mut self) -> Option<PanEvent> {
        let was_active = self.state == GestureState::Active;
        self.state = GestureState::Cancelled;
        was_active.then(|| self.event(PanPhase::Cancelled))
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.tracker.reset();
        self.anchor = Point::ZERO;
        self.location = Point::ZERO;
    }

    fn event(&self, phase: PanPhase) -> PanEvent {
        PanEvent {
            phase,
            translation: self.translation(),
            velocity: self.velocity(),
            location: self.location,
        }
    }
}

#[cfg(test)]
#[path = "../tests/pan_tests.rs"]
mod tests;
