//! The host list collaborator and the messages exchanged with it.

use std::fmt;

use crate::action::Action;
use crate::options::SwipeOptions;
use crate::orientation::Orientation;

/// Stable identity of a row in the host's data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

/// Slot of a cell inside a [`SwipeList`](crate::list::SwipeList).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// Returned by animated programmatic calls and echoed back through
/// [`SwipeDelegate::swipe_animation_finished`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationTicket(pub u64);

/// Identifies one performed action awaiting fulfillment.
///
/// A token stops matching once its cell has been reset or reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FulfillmentToken {
    pub cell: CellId,
    pub generation: u64,
}

impl fmt::Display for FulfillmentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.cell, self.generation)
    }
}

/// An action the user selected, delivered to [`SwipeDelegate::handle_action`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActionInvocation {
    pub cell: CellId,
    pub row: RowId,
    pub orientation: Orientation,
    pub action: Action,
    /// Pass to [`SwipeList::fulfill`](crate::list::SwipeList::fulfill) to
    /// finish a fill completion.
    pub token: FulfillmentToken,
}

/// Everything the swipe machinery needs from the hosting list.
///
/// Called synchronously from inside [`SwipeList`](crate::list::SwipeList)
/// methods. Only [`edit_actions`](SwipeDelegate::edit_actions) is required.
pub trait SwipeDelegate {
    /// Actions for one edge of a row; `None` or empty disables that swipe.
    fn edit_actions(&mut self, row: RowId, orientation: Orientation) -> Option<Vec<Action>>;

    fn edit_options(&mut self, _row: RowId, _orientation: Orientation) -> SwipeOptions {
        SwipeOptions::default()
    }

    fn will_begin_editing(&mut self, _row: RowId, _orientation: Orientation) {}

    fn did_end_editing(&mut self, _row: RowId, _orientation: Orientation) {}

    /// Fires once per transition into or out of editing.
    fn editing_state_changed(&mut self, _row: RowId, _active: bool) {}

    fn handle_action(&mut self, _invocation: ActionInvocation) {}

    /// The row collapsed after a delete fulfillment; removing it from the
    /// data source is up to the host.
    fn delete_row(&mut self, _row: RowId) {}

    /// Enables or disables the list's own scroll pan.
    fn set_list_pan_enabled(&mut self, _enabled: bool) {}

    fn selected_rows(&self) -> Vec<RowId> {
        Vec::new()
    }

    fn deselect_row(&mut self, _row: RowId) {}

    /// Discrete cue when a drag crosses into or out of the expanded zone.
    fn expansion_feedback(&mut self, _row: RowId, _expanded: bool) {}

    /// `finished` is false when the animation was cancelled.
    fn swipe_animation_finished(&mut self, _cell: CellId, _ticket: AnimationTicket, _finished: bool) {}
}
