//! Shared gesture constants for consistent touch/pointer handling.
//!
//! The pan and tap recognizers use the same slop so a touch is either a
//! tap or a drag, never both.

/// Drag threshold in logical pixels.
///
/// Once the pointer moves further than this from the press position the pan
/// recognizer decides between beginning (mostly horizontal) and failing
/// (mostly vertical), and any pending tap is cancelled.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
