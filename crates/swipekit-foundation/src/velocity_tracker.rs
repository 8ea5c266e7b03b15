//! Velocity tracking for release velocities.
//!
//! Impulse strategy: velocity is derived from the kinetic energy imparted by
//! the recent samples, which is less noisy than a least-squares fit for the
//! short, fast flicks that open and close swipe cells.

use smallvec::SmallVec;
use swipekit_graphics::Point;

use crate::gesture_constants::MAX_FLING_VELOCITY;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Adds a position sample taken at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second; 0.0 with fewer than two recent samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        // Newest first: (position, time relative to newest).
        let mut window: SmallVec<[(f32, f32); HISTORY_SIZE]> = SmallVec::new();
        let mut cursor = self.index;
        let mut previous_time = newest.time_ms;

        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = sample.time_ms;
            window.push((sample.position, -(age as f32)));

            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
            if window.len() >= HISTORY_SIZE {
                break;
            }
        }

        if window.len() < 2 {
            return 0.0;
        }

        impulse_velocity(&window) * 1000.0
    }

    /// Velocity in units/second, capped to `max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Horizontal and vertical trackers fed from the same pointer stream.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Velocity in px/second, each axis capped to [`MAX_FLING_VELOCITY`].
    pub fn velocity(&self) -> Point {
        Point::new(
            self.x.calculate_velocity_with_max(MAX_FLING_VELOCITY),
            self.y.calculate_velocity_with_max(MAX_FLING_VELOCITY),
        )
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

/// Velocity per millisecond from newest-first `(position, time)` pairs.
fn impulse_velocity(window: &[(f32, f32)]) -> f32 {
    let oldest = window.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = window[oldest].1;

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = window[i - 1].1;
        if current_time == next_time {
            continue;
        }

        let delta = window[i].0 - window[i - 1].0;
        let v_curr = delta / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
