//! Assertions over a whole list, shared by scenario tests.

use swipekit_cell::{CellId, SwipeDelegate, SwipeList, SwipeState};

/// Panics if more than one cell is resting open.
pub fn assert_single_open<D: SwipeDelegate>(list: &SwipeList<D>) {
    let open: Vec<_> = list.swiped_cells().collect();
    assert!(open.len() <= 1, "more than one open cell: {open:?}");
}

/// Panics unless the cell is closed with no action row left behind.
pub fn assert_closed<D: SwipeDelegate>(list: &SwipeList<D>, cell: CellId) {
    assert_eq!(list.state(cell), Some(SwipeState::Center));
    assert_eq!(list.swipe_offset(cell), Some(0.0));
    assert!(
        list.actions_row(cell).is_none(),
        "closed cell kept its action row"
    );
}
