//! Swipeable list cells for SwipeKit
//!
//! A [`SwipeList`] owns the swipe state of every visible cell in a list.
//! Dragging a cell sideways uncovers a row of actions anchored to the
//! opposite edge; releasing settles it open or closed, and dragging far
//! enough can trigger the outermost action directly. The host supplies
//! actions and hears about selections through a [`SwipeDelegate`].

pub mod action;
pub mod actions_row;
pub mod cell;
mod controller;
mod coordinator;
pub mod delegate;
pub mod error;
pub mod expansion;
pub mod list;
pub mod options;
pub mod orientation;
pub mod transition;

pub use action::*;
pub use actions_row::*;
pub use cell::SwipeCell;
pub use delegate::*;
pub use error::SwipeError;
pub use expansion::*;
pub use list::SwipeList;
pub use options::*;
pub use orientation::*;
pub use transition::{ButtonLayout, ButtonLayouts};

pub mod prelude {
    pub use crate::action::{Action, ActionId, ActionStyle};
    pub use crate::delegate::{
        ActionInvocation, AnimationTicket, CellId, FulfillmentToken, RowId, SwipeDelegate,
    };
    pub use crate::expansion::{ExpansionStyle, FulfillmentStyle, HandlerTiming};
    pub use crate::list::SwipeList;
    pub use crate::options::{SwipeOptions, SwipeTuning, TransitionStyle};
    pub use crate::orientation::{Orientation, SwipeState};
}
