//! Per-cell swipe state owned by a [`SwipeList`](crate::list::SwipeList).

use swipekit_animation::Animator;
use swipekit_foundation::{PanRecognizer, TapRecognizer};
use swipekit_graphics::Rect;

use crate::actions_row::{ActionsRow, DeletionMask};
use crate::delegate::{AnimationTicket, RowId};
use crate::expansion::{FulfillmentStyle, HandlerTiming};
use crate::orientation::{Orientation, SwipeState};

/// What a running animation is for; decides what happens when it ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum AnimationPurpose {
    Settle {
        target: SwipeState,
    },
    ExpansionSnap,
    Fill {
        action: usize,
        timing: HandlerTiming,
        auto_fulfillment: Option<FulfillmentStyle>,
    },
    /// Animates deletion-mask progress from 0 to 1 instead of the offset.
    DeleteCollapse,
}

impl AnimationPurpose {
    /// Fill and collapse animations cannot be interrupted by a new drag.
    pub(crate) fn is_completion(self) -> bool {
        matches!(
            self,
            AnimationPurpose::Fill { .. } | AnimationPurpose::DeleteCollapse
        )
    }
}

#[derive(Debug)]
pub(crate) struct CellAnimation {
    pub(crate) animator: Animator,
    pub(crate) purpose: AnimationPurpose,
    pub(crate) ticket: Option<AnimationTicket>,
}

/// One swipeable cell.
///
/// The offset is the horizontal displacement of the cell's content from
/// its frame: positive values uncover the left actions.
#[derive(Debug)]
pub struct SwipeCell {
    pub(crate) row: Option<RowId>,
    pub(crate) frame: Rect,
    pub(crate) offset: f32,
    pub(crate) state: SwipeState,
    pub(crate) actions_row: Option<ActionsRow>,
    pub(crate) animation: Option<CellAnimation>,
    pub(crate) pan: PanRecognizer,
    pub(crate) tap: TapRecognizer,
    pub(crate) tracking_pan: bool,
    pub(crate) original_offset: f32,
    /// Ratio of finger travel applied to the offset during the last change.
    pub(crate) scroll_ratio: f32,
    pub(crate) deletion_mask: Option<DeletionMask>,
    /// Action index of a fill completion still waiting for fulfillment.
    pub(crate) pending_fill: Option<usize>,
    /// Orientation the host was told editing began for.
    pub(crate) editing: Option<Orientation>,
    /// Bumped on every reset so stale fulfillment tokens stop matching.
    pub(crate) generation: u64,
}

impl SwipeCell {
    pub(crate) fn new(frame: Rect) -> Self {
        Self {
            row: None,
            frame,
            offset: 0.0,
            state: SwipeState::Center,
            actions_row: None,
            animation: None,
            pan: PanRecognizer::new(),
            tap: TapRecognizer::new(),
            tracking_pan: false,
            original_offset: 0.0,
            scroll_ratio: 1.0,
            deletion_mask: None,
            pending_fill: None,
            editing: None,
            generation: 0,
        }
    }

    pub fn row(&self) -> Option<RowId> {
        self.row
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Horizontal center of the cell content after applying the offset.
    pub fn center_x(&self) -> f32 {
        self.frame.mid_x() + self.offset
    }

    /// Frame of the cell content after applying the offset.
    pub fn content_frame(&self) -> Rect {
        self.frame.translate(self.offset, 0.0)
    }

    pub fn actions_row(&self) -> Option<&ActionsRow> {
        self.actions_row.as_ref()
    }

    pub fn deletion_mask(&self) -> Option<&DeletionMask> {
        self.deletion_mask.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub(crate) fn running_purpose(&self) -> Option<AnimationPurpose> {
        self.animation.as_ref().map(|animation| animation.purpose)
    }

    /// Whether a fill or delete completion owns the cell right now.
    pub(crate) fn is_completing(&self) -> bool {
        self.pending_fill.is_some()
            || self
                .running_purpose()
                .is_some_and(AnimationPurpose::is_completion)
    }

    /// Position in reveal space of the action row for a list x coordinate.
    pub(crate) fn reveal_position(&self, x: f32) -> Option<f32> {
        let row = self.actions_row.as_ref()?;
        let position = match row.orientation() {
            Orientation::Left => (self.frame.min_x() + self.offset) - x,
            Orientation::Right => x - (self.frame.max_x() + self.offset),
        };
        (position >= 0.0 && position < row.visible_width()).then_some(position)
    }
}
