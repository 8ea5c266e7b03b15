//! Synthetic frame timestamps for hosts without a display link.

/// Nanoseconds per frame at 60 FPS.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Produces monotonically increasing frame timestamps.
///
/// Real hosts pass their vsync timestamp straight to the list; headless
/// hosts and tests step this ticker instead.
#[derive(Debug, Clone, Copy)]
pub struct FrameTicker {
    frame_time_nanos: u64,
    interval_nanos: u64,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL_NANOS)
    }

    pub fn with_interval(interval_nanos: u64) -> Self {
        Self {
            frame_time_nanos: 0,
            interval_nanos: interval_nanos.max(1),
        }
    }

    /// Timestamp of the most recent frame.
    pub fn now_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Advances by one frame interval and returns the new timestamp.
    pub fn next_frame(&mut self) -> u64 {
        self.frame_time_nanos += self.interval_nanos;
        self.frame_time_nanos
    }

    /// Advances by an arbitrary amount, e.g. to simulate a dropped frame.
    pub fn advance(&mut self, nanos: u64) -> u64 {
        self.frame_time_nanos += nanos;
        self.frame_time_nanos
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_frame_steps_by_interval() {
        let mut ticker = FrameTicker::new();
        assert_eq!(ticker.next_frame(), FRAME_INTERVAL_NANOS);
        assert_eq!(ticker.next_frame(), 2 * FRAME_INTERVAL_NANOS);
        assert_eq!(ticker.now_nanos(), 2 * FRAME_INTERVAL_NANOS);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut ticker = FrameTicker::with_interval(0);
        assert_eq!(ticker.next_frame(), 1);
    }
}
