//! Gesture recognizers driven by [`crate::PointerEvent`]s.

pub mod elastic;
pub mod pan;
pub mod tap;

pub use elastic::elastic_offset;
pub use pan::{PanEvent, PanPhase, PanRecognizer};
pub use tap::{TapEvent, TapRecognizer};

/// Lifecycle shared by the recognizers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No pointer down, or waiting for the first pointer down.
    #[default]
    Idle,
    /// Pointer is down; not yet decided.
    Possible,
    /// Recognized and delivering updates.
    Active,
    /// Finished normally on pointer up.
    Ended,
    /// Gave up; ignores the rest of this pointer sequence.
    Failed,
    /// Interrupted by the host.
    Cancelled,
}

impl GestureState {
    /// True while the recognizer is tracking a pointer sequence.
    pub fn is_tracking(&self) -> bool {
        matches!(self, GestureState::Possible | GestureState::Active)
    }
}
