//! Frame-driven animator for a single `f32` value.
//!
//! The animator never schedules anything on its own. Its owner calls
//! [`Animator::tick`] with the host's frame timestamp and reacts to
//! [`AnimatorStatus::Finished`]. Dropping an animator is how it is
//! cancelled: a dropped animator never reports completion.

use crate::animation::{AnimationType, Lerp, SpringSpec};

/// Integration step for spring physics (~60fps).
const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// Longest frame gap simulated in one tick; longer gaps (a suspended host)
/// resume from where the spring was.
const MAX_FRAME_DELTA_SECS: f32 = 0.25;

/// Distance below which an animation is considered degenerate.
const MIN_DISTANCE: f32 = 1e-4;

/// Result of advancing an animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorStatus {
    /// Still moving; carries the value for this frame.
    Running(f32),
    /// Reached the target on this frame; carries the target.
    Finished(f32),
}

impl AnimatorStatus {
    pub fn value(&self) -> f32 {
        match *self {
            AnimatorStatus::Running(value) | AnimatorStatus::Finished(value) => value,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, AnimatorStatus::Finished(_))
    }
}

/// Animates one scalar from `start` to `target`.
#[derive(Debug, Clone)]
pub struct Animator {
    start: f32,
    target: f32,
    current: f32,
    /// Spring velocity in progress units (fraction of the distance) per second.
    velocity: f32,
    /// Spring progress, 0.0 at `start` and 1.0 at `target`.
    spring_progress: f32,
    animation: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    linear_progress: f32,
    finished: bool,
}

impl Animator {
    pub fn new(start: f32, target: f32, animation: AnimationType) -> Self {
        Self {
            start,
            target,
            current: start,
            velocity: 0.0,
            spring_progress: 0.0,
            animation,
            start_time_nanos: None,
            last_frame_nanos: None,
            linear_progress: 0.0,
            finished: false,
        }
    }

    /// Sets the spring's initial velocity, expressed as a fraction of the
    /// total distance per second. Tweens ignore it.
    ///
    /// Non-finite values (a release velocity divided by a zero distance)
    /// are dropped rather than propagated into the physics.
    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fraction of the way from `start` to `target`, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        let distance = self.target - self.start;
        if distance.abs() < MIN_DISTANCE {
            return 1.0;
        }
        ((self.current - self.start) / distance).clamp(0.0, 1.0)
    }

    /// Moves the target while keeping the current value and absolute velocity.
    pub fn retarget(&mut self, target: f32) {
        let old_distance = self.target - self.start;
        let absolute_velocity = self.velocity * old_distance;

        self.start = self.current;
        self.target = target;
        self.spring_progress = 0.0;
        self.linear_progress = 0.0;
        self.start_time_nanos = None;
        self.finished = false;

        let new_distance = target - self.current;
        self.velocity = if new_distance.abs() < MIN_DISTANCE {
            0.0
        } else {
            absolute_velocity / new_distance
        };
    }

    /// Advances the animation to `frame_time_nanos`.
    pub fn tick(&mut self, frame_time_nanos: u64) -> AnimatorStatus {
        if self.finished {
            return AnimatorStatus::Finished(self.target);
        }

        if (self.target - self.start).abs() < MIN_DISTANCE {
            return self.finish();
        }

        match self.animation {
            AnimationType::Tween(spec) => {
                let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                let delay_nanos = spec.delay_millis * 1_000_000;
                if elapsed_nanos < delay_nanos {
                    return AnimatorStatus::Running(self.current);
                }

                let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                let animation_elapsed = elapsed_nanos - delay_nanos;
                self.linear_progress =
                    (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                if self.linear_progress >= 1.0 {
                    return self.finish();
                }

                let eased = spec.easing.transform(self.linear_progress);
                self.current = self.start.lerp(&self.target, eased);
                AnimatorStatus::Running(self.current)
            }
            AnimationType::Spring(spec) => {
                let Some(last_frame) = self.last_frame_nanos.replace(frame_time_nanos) else {
                    // First frame anchors the clock.
                    self.start_time_nanos = Some(frame_time_nanos);
                    return AnimatorStatus::Running(self.current);
                };
                let dt = frame_time_nanos.saturating_sub(last_frame) as f32 / 1_000_000_000.0;
                if dt > 0.0 {
                    self.integrate_spring(spec, dt);
                }

                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target = (self.current - self.target).abs() < spec.position_threshold;
                if at_rest && near_target {
                    self.finish()
                } else {
                    log::trace!(
                        "spring tick value={:.2} velocity={:.3}",
                        self.current,
                        self.velocity
                    );
                    AnimatorStatus::Running(self.current)
                }
            }
        }
    }

    /// Semi-implicit Euler over the elapsed time since the previous frame.
    fn integrate_spring(&mut self, spec: SpringSpec, dt: f32) {
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let dt = dt.min(MAX_FRAME_DELTA_SECS);

        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - simulated);
            let displacement = self.spring_progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.spring_progress += self.velocity * step;
            simulated += step;
        }

        self.spring_progress = self.spring_progress.clamp(-1.0, 2.0);
        self.current = self.start.lerp(&self.target, self.spring_progress);
    }

    fn finish(&mut self) -> AnimatorStatus {
        self.current = self.target;
        self.spring_progress = 1.0;
        self.linear_progress = 1.0;
        self.velocity = 0.0;
        self.finished = true;
        AnimatorStatus::Finished(self.target)
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
