//! Millisecond timestamps for pointer events.

use web_time::Instant;

/// Converts wall-clock instants into the `time_ms` carried by
/// [`crate::PointerEvent`], relative to the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct UptimeClock {
    origin: Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> i64 {
        self.millis_at(Instant::now())
    }

    /// Milliseconds between the origin and `instant`; instants before the
    /// origin map to zero.
    pub fn millis_at(&self, instant: Instant) -> i64 {
        instant
            .checked_duration_since(self.origin)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}
