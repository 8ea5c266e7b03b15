use swipekit_cell::{
    Action, ActionId, ExpansionStyle, FulfillmentStyle, HandlerTiming, Orientation, RowId,
    SwipeOptions, SwipeState,
};
use swipekit_graphics::Point;
use swipekit_testing::robot_assertions::assert_closed;
use swipekit_testing::{HostEvent, RecordingDelegate, SwipeRobot};

fn robot_with(orientation: Orientation, actions: Vec<Action>, style: ExpansionStyle) -> SwipeRobot {
    let delegate = RecordingDelegate::new()
        .with_actions(orientation, actions)
        .with_options(
            orientation,
            SwipeOptions::default().with_expansion_style(style),
        );
    SwipeRobot::new(delegate, 3)
}

fn delete_robot(style: ExpansionStyle) -> SwipeRobot {
    robot_with(
        Orientation::Right,
        vec![
            Action::destructive("delete", "Delete"),
            Action::new("more", "More"),
        ],
        style,
    )
}

fn position_of(events: &[HostEvent], wanted: &HostEvent) -> usize {
    events
        .iter()
        .position(|event| event == wanted)
        .unwrap_or_else(|| panic!("missing {wanted:?} in {events:?}"))
}

#[test]
fn expanded_release_performs_action_even_when_moving_back() {
    let mut robot = delete_robot(ExpansionStyle::destructive());
    robot.swipe_back(0, -250.0, 40.0);

    let invocation = robot.delegate().last_invocation().expect("handler ran on release");
    assert_eq!(invocation.action.id, ActionId::from("delete"));
    assert_eq!(robot.state(0), SwipeState::Right);

    assert!(robot.wait_for_idle());
    assert_eq!(robot.delegate().deleted_rows(), vec![RowId(0)]);
    assert_closed(robot.list(), robot.cell(0));
    assert_eq!(robot.delegate().editing_changes(RowId(0)), vec![true, false]);
    assert_eq!(robot.delegate().invocations().len(), 1);
}

#[test]
fn crossing_expansion_gives_feedback_once() {
    let mut robot = delete_robot(ExpansionStyle::destructive());
    robot.swipe_and_hold(0, -250.0);

    let feedback = HostEvent::ExpansionFeedback {
        row: RowId(0),
        expanded: true,
    };
    assert_eq!(robot.delegate().count(&feedback), 1);
}

#[test]
fn fill_after_runs_handler_only_when_fill_ends() {
    let mut robot = delete_robot(ExpansionStyle::destructive_after_fill());
    robot.swipe_and_hold(0, -250.0);

    assert!(robot.delegate().invocations().is_empty());
    robot.pump_frames(5);
    assert!(robot.delegate().invocations().is_empty());
    assert!(robot.offset(0) < -250.0);

    assert!(robot.wait_for_idle());
    let events = robot.delegate().events();
    let handled = position_of(
        events,
        &HostEvent::ActionHandled {
            row: RowId(0),
            action: ActionId::from("delete"),
        },
    );
    let deleted = position_of(events, &HostEvent::RowDeleted { row: RowId(0) });
    assert!(handled < deleted);
    assert_closed(robot.list(), robot.cell(0));
}

#[test]
fn touches_elsewhere_do_not_interrupt_a_fill() {
    let mut robot = delete_robot(ExpansionStyle::destructive_after_fill());
    robot.swipe_and_hold(0, -250.0);
    robot.pump_frames(3);
    assert_eq!(robot.state(0), SwipeState::Right);

    let elsewhere = robot.row_center(2);
    robot.tap(elsewhere);
    robot.list_mut().on_list_scroll_began();
    robot.list_mut().hide_swipeables(true);
    let other = robot.cell(1);
    assert_eq!(
        robot.list_mut().show_swipe(other, Orientation::Right, true),
        Ok(None)
    );
    assert_eq!(robot.state(0), SwipeState::Right);
    assert_eq!(robot.state(1), SwipeState::Center);

    assert!(robot.wait_for_idle());
    assert_eq!(robot.delegate().invocations().len(), 1);
    assert_eq!(robot.delegate().deleted_rows(), vec![RowId(0)]);
    assert_closed(robot.list(), robot.cell(0));
}

#[test]
fn manual_fill_waits_for_reset() {
    let mut robot = delete_robot(ExpansionStyle::fill());
    robot.swipe_and_hold(0, -250.0);
    assert!(robot.wait_for_idle());

    assert_eq!(robot.state(0), SwipeState::Right);
    assert_eq!(robot.offset(0), -394.0);
    let token = robot
        .delegate()
        .last_invocation()
        .expect("handler ran after the fill")
        .token;

    // The filled cell ignores taps until the host decides.
    robot.tap(Point::new(100.0, 22.0));
    assert_eq!(robot.state(0), SwipeState::Right);

    robot
        .list_mut()
        .fulfill(token, FulfillmentStyle::Reset)
        .expect("live token");
    assert_eq!(robot.state(0), SwipeState::AnimatingToCenter);
    assert!(robot.wait_for_idle());
    assert_closed(robot.list(), robot.cell(0));
    assert!(robot.delegate().deleted_rows().is_empty());
}

#[test]
fn manual_delete_collapses_row() {
    let mut robot = delete_robot(ExpansionStyle::fill());
    robot.swipe_and_hold(0, -250.0);
    assert!(robot.wait_for_idle());
    let token = robot.delegate().last_invocation().expect("handler ran").token;

    robot
        .list_mut()
        .fulfill(token, FulfillmentStyle::Delete)
        .expect("live token");
    assert_eq!(robot.delegate().deleted_rows(), vec![RowId(0)]);
    robot.pump_frames(4);
    let mask = *robot
        .list()
        .cell(robot.cell(0))
        .and_then(|cell| cell.deletion_mask())
        .expect("collapsing");
    assert!(mask.current.height < mask.initial.height);

    assert!(robot.wait_for_idle());
    assert_closed(robot.list(), robot.cell(0));
    assert!(robot.list().cell(robot.cell(0)).and_then(|cell| cell.deletion_mask()).is_none());
}

#[test]
fn fulfillment_after_reuse_is_ignored() {
    let mut robot = delete_robot(ExpansionStyle::fill());
    robot.swipe_and_hold(0, -250.0);
    assert!(robot.wait_for_idle());
    let token = robot.delegate().last_invocation().expect("handler ran").token;

    let cell = robot.cell(0);
    robot.list_mut().prepare_for_reuse(cell).expect("known cell");
    robot
        .list_mut()
        .fulfill(token, FulfillmentStyle::Delete)
        .expect("stale tokens are not errors");

    assert!(robot.delegate().deleted_rows().is_empty());
    assert_closed(robot.list(), cell);
}

#[test]
fn fulfillment_during_fill_replaces_it() {
    let mut robot = delete_robot(ExpansionStyle::destructive_with(false, HandlerTiming::With));
    robot.swipe_and_hold(0, -250.0);
    let token = robot
        .delegate()
        .last_invocation()
        .expect("handler ran with the fill")
        .token;

    robot
        .list_mut()
        .fulfill(token, FulfillmentStyle::Reset)
        .expect("live token");
    assert_eq!(robot.state(0), SwipeState::AnimatingToCenter);
    let at_fulfill = robot.offset(0);
    robot.pump_frames(3);
    assert!(robot.offset(0) > at_fulfill);

    assert!(robot.wait_for_idle());
    assert_closed(robot.list(), robot.cell(0));
    assert_eq!(robot.delegate().invocations().len(), 1);
    assert!(robot.delegate().deleted_rows().is_empty());
}

#[test]
fn delete_during_fill_collapses_at_fill_end() {
    let mut robot = delete_robot(ExpansionStyle::destructive_with(false, HandlerTiming::With));
    robot.swipe_and_hold(0, -250.0);
    let token = robot
        .delegate()
        .last_invocation()
        .expect("handler ran with the fill")
        .token;
    assert!(robot.offset(0) > -394.0);

    robot
        .list_mut()
        .fulfill(token, FulfillmentStyle::Delete)
        .expect("live token");
    assert_eq!(robot.offset(0), -394.0);
    robot.pump_frames(4);
    assert_eq!(robot.offset(0), -394.0);
    assert_eq!(robot.delegate().deleted_rows(), vec![RowId(0)]);

    assert!(robot.wait_for_idle());
    assert_closed(robot.list(), robot.cell(0));
    assert_eq!(robot.delegate().invocations().len(), 1);
}

#[test]
fn selection_bounces_back_after_handler() {
    let mut robot = robot_with(
        Orientation::Left,
        vec![Action::new("read", "Read").hides_when_selected(true)],
        ExpansionStyle::selection(),
    );
    robot.swipe(0, 250.0);

    let invocation = robot.delegate().last_invocation().expect("handler ran");
    assert_eq!(invocation.action.id, ActionId::from("read"));
    assert_eq!(invocation.orientation, Orientation::Left);
    assert_eq!(robot.state(0), SwipeState::AnimatingToCenter);
    let feedback = HostEvent::ExpansionFeedback {
        row: RowId(0),
        expanded: true,
    };
    assert_eq!(robot.delegate().count(&feedback), 1);

    assert!(robot.wait_for_idle());
    assert_closed(robot.list(), robot.cell(0));
}

#[test]
fn selection_without_hide_settles_open() {
    let mut robot = robot_with(
        Orientation::Left,
        vec![Action::new("read", "Read")],
        ExpansionStyle::selection(),
    );
    robot.swipe(0, 250.0);

    assert_eq!(robot.delegate().invocations().len(), 1);
    assert_eq!(robot.state(0), SwipeState::Left);
    assert!(robot.wait_for_idle());
    assert_eq!(robot.state(0), SwipeState::Left);
    assert_eq!(robot.offset(0), 74.0);
    assert_eq!(
        robot.list().actions_row(robot.cell(0)).map(|row| row.is_expanded()),
        Some(false)
    );
    assert_eq!(robot.delegate().editing_changes(RowId(0)), vec![true]);
}

#[test]
fn dragging_back_out_of_expansion_cancels_it() {
    let mut robot = delete_robot(ExpansionStyle::fill());
    let y = 22.0;
    robot.press(Point::new(160.0, y));
    for x in [140.0, 115.0, 90.0, 65.0, 40.0, 15.0, -10.0, -35.0, -60.0] {
        robot.move_to(Point::new(x, y));
    }
    let expanded = |robot: &SwipeRobot| {
        robot
            .list()
            .actions_row(robot.cell(0))
            .is_some_and(|row| row.is_expanded())
    };
    assert!(expanded(&robot));

    for x in [-20.0, 40.0, 100.0, 160.0] {
        robot.move_to(Point::new(x, y));
    }
    robot.hold(500);
    robot.move_to(Point::new(161.0, y));
    assert!(!expanded(&robot));
    robot.release(Point::new(161.0, y));
    assert!(robot.wait_for_idle());

    assert!(robot.delegate().invocations().is_empty());
    for flag in [true, false] {
        let feedback = HostEvent::ExpansionFeedback {
            row: RowId(0),
            expanded: flag,
        };
        assert_eq!(robot.delegate().count(&feedback), 1);
    }
}
