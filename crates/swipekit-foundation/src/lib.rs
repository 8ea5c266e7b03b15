//! Pointer input and gesture recognition for SwipeKit
//!
//! Hosts translate their platform touch events into [`PointerEvent`]s.
//! Recognizers in [`gestures`] turn those into pan and tap phases.

pub mod clock;
pub mod gesture_constants;
pub mod gestures;
pub mod pointer;
pub mod velocity_tracker;

pub use clock::UptimeClock;
pub use gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
pub use gestures::{
    elastic_offset, GestureState, PanEvent, PanPhase, PanRecognizer, TapEvent, TapRecognizer,
};
pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::gestures::{PanEvent, PanPhase, PanRecognizer, TapRecognizer};
    pub use crate::pointer::{PointerEvent, PointerEventKind};
}
