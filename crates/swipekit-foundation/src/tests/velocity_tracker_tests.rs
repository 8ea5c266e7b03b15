use super::*;

#[test]
fn empty_tracker_returns_zero() {
    let tracker = VelocityTracker1D::new();
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn single_point_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn constant_velocity() {
    let mut tracker = VelocityTracker1D::new();
    // 100 px per 10ms = 10000 px/s
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    tracker.add_data_point(20, 200.0);
    tracker.add_data_point(30, 300.0);

    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 10000.0).abs() < 1000.0,
        "Expected ~10000, got {}",
        velocity
    );
}

#[test]
fn leftward_drag_is_negative() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 300.0);
    tracker.add_data_point(10, 200.0);
    tracker.add_data_point(20, 100.0);

    let velocity = tracker.calculate_velocity();
    assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
}

#[test]
fn velocity_is_capped() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
}

#[test]
fn gap_over_stopped_threshold_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn pause_before_release_kills_velocity() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 50.0);
    tracker.add_data_point(20, 100.0);
    // Finger rests, then lifts at the same position.
    tracker.add_data_point(200, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn two_dimensional_tracker_separates_axes() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(10, Point::new(20.0, 1.0));
    tracker.add_position(20, Point::new(40.0, 2.0));

    let velocity = tracker.velocity();
    assert!(velocity.x > 1000.0);
    assert!(velocity.y.abs() < velocity.x.abs() / 10.0);

    tracker.reset();
    assert_eq!(tracker.velocity(), Point::ZERO);
}
