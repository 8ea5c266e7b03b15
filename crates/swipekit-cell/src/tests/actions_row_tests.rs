use super::*;
use crate::expansion::ExpansionStyle;
use crate::options::TransitionStyle;

fn row(options: SwipeOptions, actions: Vec<Action>) -> ActionsRow {
    ActionsRow::new(
        Size::new(320.0, 44.0),
        options,
        Orientation::Right,
        actions,
        &FixedAdvanceMeasurer::default(),
        &SwipeTuning::default(),
    )
}

fn two_actions() -> Vec<Action> {
    vec![
        Action::destructive("delete", "Delete"),
        Action::new("more", "More"),
    ]
}

#[test]
fn short_titles_use_default_minimum_width() {
    let row = row(SwipeOptions::default(), two_actions());
    assert_eq!(row.minimum_button_width(), 74.0);
    assert_eq!(row.preferred_width(), 148.0);
}

#[test]
fn long_title_widens_every_button() {
    let actions = vec![
        Action::new("archive", "Archive conversation"),
        Action::new("more", "More"),
    ];
    let row = row(SwipeOptions::default(), actions);
    // natural width is clamped to (320 - 30) / 2
    assert_eq!(row.minimum_button_width(), 145.0);
    assert_eq!(row.preferred_width(), 290.0);
}

#[test]
fn natural_width_is_clamped_to_maximum() {
    let actions = vec![Action::new("a", "A very very long title for a button here")];
    let row = row(SwipeOptions::default().with_maximum_button_width(120.0), actions);
    assert_eq!(row.minimum_button_width(), 120.0);
}

#[test]
fn spacing_counts_toward_preferred_width() {
    let row = row(SwipeOptions::default().with_button_spacing(4.0), two_actions());
    assert_eq!(row.preferred_width(), 152.0);
}

#[test]
fn preferred_width_never_exceeds_cell() {
    let actions = (0..6).map(|i| Action::new(format!("a{i}").as_str(), "Go")).collect();
    let row = row(SwipeOptions::default().with_minimum_button_width(70.0), actions);
    assert_eq!(row.preferred_width(), 320.0);
}

#[test]
fn set_expanded_reports_only_real_transitions() {
    let mut row = row(
        SwipeOptions::default().with_expansion_style(ExpansionStyle::destructive()),
        two_actions(),
    );
    assert_eq!(row.set_expanded(false, true), None);
    assert_eq!(
        row.set_expanded(true, true),
        Some(ExpansionFeedback { expanded: true })
    );
    assert_eq!(row.set_expanded(true, true), None);
    assert_eq!(row.set_expanded(false, false), None);
    assert!(!row.is_expanded());
}

#[test]
fn expandable_action_requires_expansion_style() {
    let plain = row(SwipeOptions::default(), two_actions());
    assert!(plain.expandable_action().is_none());

    let expanding = row(
        SwipeOptions::default().with_expansion_style(ExpansionStyle::selection()),
        two_actions(),
    );
    assert_eq!(
        expanding.expandable_action().map(|action| action.id.clone()),
        Some("delete".into())
    );
}

#[test]
fn elastic_content_grows_slower_past_preferred() {
    let mut row = row(
        SwipeOptions::default().with_expansion_style(ExpansionStyle::selection()),
        two_actions(),
    );
    row.set_visible_width(248.0);
    assert_eq!(row.content_width(), 173.0);

    let mut rigid = self::row(SwipeOptions::default(), two_actions());
    rigid.set_visible_width(248.0);
    assert_eq!(rigid.content_width(), 248.0);
}

#[test]
fn button_at_follows_transition_layout() {
    let mut row = row(
        SwipeOptions::default().with_transition_style(TransitionStyle::Drag),
        two_actions(),
    );
    row.set_visible_width(148.0);
    assert_eq!(row.button_at(10.0), Some(1));
    assert_eq!(row.button_at(100.0), Some(0));
    assert_eq!(row.button_at(160.0), None);
}

#[test]
fn expanded_row_routes_taps_to_expandable_button() {
    let mut row = row(
        SwipeOptions::default().with_expansion_style(ExpansionStyle::destructive()),
        two_actions(),
    );
    row.set_visible_width(300.0);
    row.set_expanded(true, false);
    assert_eq!(row.button_at(10.0), Some(0));
    assert_eq!(row.button_layouts()[1].visible_width, 0.0);
}

#[test]
fn deletion_mask_collapses_to_zero_height() {
    let row = row(SwipeOptions::default(), two_actions());
    let mut mask = row.deletion_mask(Rect::new(0.0, 88.0, 320.0, 44.0));
    assert_eq!(mask.collapse(0.5).height, 22.0);
    assert_eq!(mask.collapse(1.0).height, 0.0);
    assert_eq!(mask.current.y, 88.0);
}

#[test]
fn background_prefers_options_then_outermost_action() {
    let plain = row(SwipeOptions::default(), two_actions());
    assert_eq!(plain.background_color(), Color::DESTRUCTIVE_RED);

    let tinted = row(
        SwipeOptions::default().with_background_color(Color::BLACK),
        two_actions(),
    );
    assert_eq!(tinted.background_color(), Color::BLACK);
}
