//! Robot-style driver for swipe lists
//!
//! The robot owns a [`SwipeList`] with a stack of equally sized rows and
//! feeds it pointer events and frames on a synthetic clock, so tests read
//! like a script of user interactions.
//!
//! ```
//! use swipekit_cell::{Action, Orientation, SwipeState};
//! use swipekit_testing::{RecordingDelegate, SwipeRobot};
//!
//! let delegate = RecordingDelegate::new()
//!     .with_actions(Orientation::Right, vec![Action::destructive("delete", "Delete")]);
//! let mut robot = SwipeRobot::new(delegate, 3);
//!
//! robot.swipe(0, -120.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.state(0), SwipeState::Right);
//! ```

use swipekit_animation::FrameTicker;
use swipekit_cell::{CellId, RowId, SwipeList, SwipeState, SwipeTuning};
use swipekit_graphics::{Point, Rect, Size};

use crate::recording::RecordingDelegate;

/// Milliseconds between synthetic pointer samples.
pub const POINTER_STEP_MS: i64 = 16;

const IDLE_FRAME_LIMIT: usize = 1_000;

pub struct SwipeRobot {
    list: SwipeList<RecordingDelegate>,
    cells: Vec<CellId>,
    row_size: Size,
    ticker: FrameTicker,
    clock_ms: i64,
}

impl SwipeRobot {
    /// A 320pt wide list of 44pt rows.
    pub fn new(delegate: RecordingDelegate, rows: usize) -> Self {
        Self::with_layout(delegate, rows, Size::new(320.0, 44.0), SwipeTuning::default())
    }

    pub fn with_layout(
        delegate: RecordingDelegate,
        rows: usize,
        row_size: Size,
        tuning: SwipeTuning,
    ) -> Self {
        let mut list = SwipeList::with_tuning(delegate, tuning);
        list.set_bounds(Rect::new(
            0.0,
            0.0,
            row_size.width,
            row_size.height * rows as f32,
        ));
        let cells = (0..rows)
            .map(|index| {
                let top = row_size.height * index as f32;
                let id = list.attach_cell(Rect::from_origin_size(Point::new(0.0, top), row_size));
                // Freshly attached ids are always known to the list.
                let _ = list.bind_row(id, Some(RowId(index as u64)));
                id
            })
            .collect();
        Self {
            list,
            cells,
            row_size,
            ticker: FrameTicker::new(),
            clock_ms: 0,
        }
    }

    pub fn list(&self) -> &SwipeList<RecordingDelegate> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SwipeList<RecordingDelegate> {
        &mut self.list
    }

    pub fn delegate(&self) -> &RecordingDelegate {
        self.list.delegate()
    }

    pub fn delegate_mut(&mut self) -> &mut RecordingDelegate {
        self.list.delegate_mut()
    }

    pub fn cell(&self, index: usize) -> CellId {
        self.cells[index]
    }

    pub fn state(&self, index: usize) -> SwipeState {
        self.list.state(self.cell(index)).unwrap_or_default()
    }

    pub fn offset(&self, index: usize) -> f32 {
        self.list.swipe_offset(self.cell(index)).unwrap_or(0.0)
    }

    /// Center of a row's frame, ignoring any swipe offset.
    pub fn row_center(&self, index: usize) -> Point {
        Point::new(
            self.row_size.width / 2.0,
            self.row_size.height * (index as f32 + 0.5),
        )
    }

    // --- pointer input ---

    pub fn press(&mut self, position: Point) {
        self.list.pointer_down(position, self.clock_ms);
    }

    /// Moves the pointer one sample later and renders a frame.
    pub fn move_to(&mut self, position: Point) {
        self.clock_ms += POINTER_STEP_MS;
        self.list.pointer_move(position, self.clock_ms);
        self.pump_frame();
    }

    pub fn release(&mut self, position: Point) {
        self.clock_ms += POINTER_STEP_MS;
        self.list.pointer_up(position, self.clock_ms);
    }

    pub fn cancel(&mut self, position: Point) {
        self.clock_ms += POINTER_STEP_MS;
        self.list.pointer_cancel(position, self.clock_ms);
    }

    /// Keeps the pointer still for `millis`, rendering frames meanwhile.
    pub fn hold(&mut self, millis: i64) {
        let frames = (millis / POINTER_STEP_MS).max(1);
        for _ in 0..frames {
            self.pump_frame();
        }
        self.clock_ms += millis;
    }

    /// Drags along a straight line in `steps` samples without releasing.
    pub fn drag_from(&mut self, from: Point, to: Point, steps: usize) -> Point {
        self.press(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ));
        }
        to
    }

    /// Flicks row `index` horizontally by `dx` and lets go while moving.
    pub fn swipe(&mut self, index: usize, dx: f32) {
        let from = self.row_center(index);
        let to = self.drag_from(from, Point::new(from.x + dx, from.y), 10);
        self.release(to);
    }

    /// Drags row `index` by `dx`, stops, then lets go with no velocity.
    pub fn swipe_and_hold(&mut self, index: usize, dx: f32) {
        let from = self.row_center(index);
        let to = self.drag_from(from, Point::new(from.x + dx, from.y), 10);
        self.hold(100);
        self.release(to);
    }

    /// Drags out by `dx_out` then back by `dx_back`, releasing mid-motion.
    pub fn swipe_back(&mut self, index: usize, dx_out: f32, dx_back: f32) {
        let from = self.row_center(index);
        let out = self.drag_from(from, Point::new(from.x + dx_out, from.y), 8);
        let back = Point::new(out.x + dx_back, out.y);
        for step in 1..=4 {
            let t = step as f32 / 4.0;
            self.move_to(Point::new(out.x + (back.x - out.x) * t, out.y));
        }
        self.release(back);
    }

    pub fn tap(&mut self, position: Point) {
        self.press(position);
        self.release(position);
    }

    // --- frames ---

    /// Renders one frame; returns true while animations remain.
    pub fn pump_frame(&mut self) -> bool {
        let now = self.ticker.next_frame();
        self.list.on_frame(now)
    }

    pub fn pump_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.pump_frame();
        }
    }

    /// Renders frames until no animation is running.
    ///
    /// Returns false if animations were still running after the frame limit.
    pub fn wait_for_idle(&mut self) -> bool {
        for _ in 0..IDLE_FRAME_LIMIT {
            if !self.list.needs_frame() {
                return true;
            }
            self.pump_frame();
        }
        !self.list.needs_frame()
    }
}
