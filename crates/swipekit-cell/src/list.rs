//! The list-level entry point: an arena of swipeable cells plus the
//! routing that keeps at most one of them open.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use swipekit_foundation::{PanEvent, PanPhase, PointerEvent, PointerEventKind, UptimeClock};
use swipekit_graphics::{Point, Rect};

use crate::actions_row::{ActionsRow, ButtonMeasurer, FixedAdvanceMeasurer};
use crate::cell::SwipeCell;
use crate::controller::CellContext;
use crate::coordinator::ListCoordinator;
use crate::delegate::{AnimationTicket, CellId, FulfillmentToken, RowId, SwipeDelegate};
use crate::error::SwipeError;
use crate::expansion::FulfillmentStyle;
use crate::options::SwipeTuning;
use crate::orientation::{Orientation, SwipeState};

type CellIds = SmallVec<[CellId; 2]>;

/// Owns every swipeable cell of one list and the host delegate.
///
/// Hosts attach a cell per visible row, bind it to a [`RowId`], forward
/// pointer events and frame callbacks, and hear back through `D`.
pub struct SwipeList<D: SwipeDelegate> {
    cells: Vec<Option<SwipeCell>>,
    free: Vec<usize>,
    rows: FxHashMap<RowId, CellId>,
    delegate: D,
    tuning: SwipeTuning,
    measurer: Box<dyn ButtonMeasurer>,
    bounds: Option<Rect>,
    coordinator: ListCoordinator,
    captured: Option<CellId>,
    next_ticket: u64,
    clock: UptimeClock,
}

impl<D: SwipeDelegate> SwipeList<D> {
    pub fn new(delegate: D) -> Self {
        Self::with_tuning(delegate, SwipeTuning::default())
    }

    pub fn with_tuning(delegate: D, tuning: SwipeTuning) -> Self {
        Self {
            cells: Vec::new(),
            free: Vec::new(),
            rows: FxHashMap::default(),
            delegate,
            tuning,
            measurer: Box::new(FixedAdvanceMeasurer::default()),
            bounds: None,
            coordinator: ListCoordinator::new(),
            captured: None,
            next_ticket: 0,
            clock: UptimeClock::new(),
        }
    }

    pub fn with_measurer(mut self, measurer: impl ButtonMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn tuning(&self) -> &SwipeTuning {
        &self.tuning
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Visible bounds of the list; expansion never triggers without them.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    // --- arena ---

    pub fn attach_cell(&mut self, frame: Rect) -> CellId {
        let cell = SwipeCell::new(frame);
        match self.free.pop() {
            Some(slot) => {
                self.cells[slot] = Some(cell);
                CellId(slot)
            }
            None => {
                self.cells.push(Some(cell));
                CellId(self.cells.len() - 1)
            }
        }
    }

    /// Resets and removes a cell. Its id may be handed out again.
    pub fn detach_cell(&mut self, id: CellId) -> Result<(), SwipeError> {
        self.prepare_for_reuse(id)?;
        let Some(cell) = self.cells.get_mut(id.0).and_then(Option::take) else {
            return Err(SwipeError::UnknownCell { id });
        };
        if let Some(row) = cell.row {
            if self.rows.get(&row) == Some(&id) {
                self.rows.remove(&row);
            }
        }
        self.free.push(id.0);
        Ok(())
    }

    /// Associates a cell with a row, resetting it when the row changes.
    ///
    /// A row can only be bound to one cell; binding it elsewhere unbinds
    /// the previous cell.
    pub fn bind_row(&mut self, id: CellId, row: Option<RowId>) -> Result<(), SwipeError> {
        let previous = self.require(id)?.row;
        if previous == row {
            return Ok(());
        }
        self.prepare_for_reuse(id)?;

        if let Some(previous) = previous {
            if self.rows.get(&previous) == Some(&id) {
                self.rows.remove(&previous);
            }
        }
        if let Some(row) = row {
            if let Some(other) = self.rows.insert(row, id) {
                if other != id {
                    log::debug!("{:?} moved from {} to {}", row, other, id);
                    self.prepare_for_reuse(other)?;
                    if let Some(cell) = self.cell_mut(other) {
                        cell.row = None;
                    }
                }
            }
        }
        if let Some(cell) = self.cell_mut(id) {
            cell.row = row;
        }
        Ok(())
    }

    pub fn set_cell_frame(&mut self, id: CellId, frame: Rect) -> Result<(), SwipeError> {
        let cell = self.cell_mut(id).ok_or(SwipeError::UnknownCell { id })?;
        cell.frame = frame;
        Ok(())
    }

    pub fn cell(&self, id: CellId) -> Option<&SwipeCell> {
        self.cells.get(id.0)?.as_ref()
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &SwipeCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(slot, cell)| cell.as_ref().map(|cell| (CellId(slot), cell)))
    }

    pub fn cell_for_row(&self, row: RowId) -> Option<CellId> {
        self.rows.get(&row).copied()
    }

    pub fn row_for_cell(&self, id: CellId) -> Option<RowId> {
        self.cell(id)?.row
    }

    /// Immediately returns a cell to center without animating, cancelling
    /// any gesture or animation in flight.
    pub fn prepare_for_reuse(&mut self, id: CellId) -> Result<(), SwipeError> {
        self.require(id)?;
        self.with_cell(id, |cell, ctx| cell.prepare_for_reuse(ctx));
        self.coordinator.forget(id, &mut self.delegate);
        if self.captured == Some(id) {
            self.captured = None;
        }
        Ok(())
    }

    // --- programmatic control ---

    pub fn swipe_offset(&self, id: CellId) -> Option<f32> {
        self.cell(id).map(SwipeCell::offset)
    }

    pub fn state(&self, id: CellId) -> Option<SwipeState> {
        self.cell(id).map(SwipeCell::state)
    }

    pub fn actions_row(&self, id: CellId) -> Option<&ActionsRow> {
        self.cell(id)?.actions_row()
    }

    /// Closes an open cell. Animated calls return a ticket reported through
    /// [`SwipeDelegate::swipe_animation_finished`].
    pub fn hide_swipe(
        &mut self,
        id: CellId,
        animated: bool,
    ) -> Result<Option<AnimationTicket>, SwipeError> {
        self.require(id)?;
        let ticket = animated.then(|| self.allocate_ticket());
        let hidden = self
            .with_cell(id, |cell, ctx| cell.hide(ctx, animated, ticket))
            .unwrap_or(false);
        Ok(if hidden { ticket } else { None })
    }

    /// Fully reveals the actions for `orientation`.
    pub fn show_swipe(
        &mut self,
        id: CellId,
        orientation: Orientation,
        animated: bool,
    ) -> Result<Option<AnimationTicket>, SwipeError> {
        self.set_swipe_offset(id, f32::INFINITY * orientation.scale(), animated)
    }

    /// Moves a cell to `offset`; zero is the same as [`SwipeList::hide_swipe`].
    pub fn set_swipe_offset(
        &mut self,
        id: CellId,
        offset: f32,
        animated: bool,
    ) -> Result<Option<AnimationTicket>, SwipeError> {
        self.require(id)?;
        let completing = self
            .cells()
            .find(|(other, cell)| *other != id && cell.is_completing());
        if let Some((other, _)) = completing.filter(|_| offset != 0.0) {
            log::debug!("{} stays closed while {} completes", id, other);
            return Ok(None);
        }
        let ticket = animated.then(|| self.allocate_ticket());
        let applied = self
            .with_cell(id, |cell, ctx| {
                cell.set_swipe_offset(ctx, offset, animated, ticket)
            })
            .unwrap_or(false);
        if !applied {
            return Ok(None);
        }
        if self.state(id).is_some_and(SwipeState::is_active) {
            self.coordinator.register_scroll_observer(id);
            self.hide_others(id);
        }
        Ok(ticket)
    }

    /// Cells currently resting open.
    pub fn swiped_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.state().is_active())
            .map(|(id, _)| id)
    }

    pub fn hide_swipeables(&mut self, animated: bool) {
        let open: CellIds = self.swiped_cells().collect();
        for id in open {
            self.hide_cell(id, animated);
        }
    }

    /// The list's own scroll began; close whichever cell last opened.
    pub fn on_list_scroll_began(&mut self) {
        if let Some(id) = self.coordinator.scroll_observer() {
            self.hide_cell(id, true);
        }
    }

    pub fn is_list_pan_enabled(&self) -> bool {
        self.coordinator.list_pan_enabled()
    }

    /// Finishes a fill completion started by an action invocation.
    ///
    /// Tokens for cells that were since reset or reused are ignored.
    pub fn fulfill(
        &mut self,
        token: FulfillmentToken,
        style: FulfillmentStyle,
    ) -> Result<(), SwipeError> {
        let cell = self
            .cell(token.cell)
            .ok_or(SwipeError::UnknownToken { token })?;
        if cell.generation != token.generation {
            log::debug!("stale fulfillment token {} ignored", token);
            return Ok(());
        }
        self.with_cell(token.cell, |cell, ctx| cell.fulfill(ctx, style));
        Ok(())
    }

    // --- frames ---

    /// Advances every running animation. Returns true while any remain.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let mut animating = false;
        for slot in 0..self.cells.len() {
            animating |= self
                .with_cell(CellId(slot), |cell, ctx| cell.tick(ctx, frame_time_nanos))
                .unwrap_or(false);
        }
        animating
    }

    pub fn needs_frame(&self) -> bool {
        self.cells().any(|(_, cell)| cell.is_animating())
    }

    // --- input ---

    /// Finds the cell a touch belongs to.
    ///
    /// A cell claims any touch inside its vertical span, wherever it lands
    /// horizontally. A touch outside an open cell's span closes that cell
    /// and is rejected.
    pub fn hit_test(&mut self, point: Point) -> Option<CellId> {
        let open: CellIds = self.swiped_cells().collect();
        for id in open {
            let outside = self
                .cell(id)
                .is_some_and(|cell| !cell.frame().contains_y(point.y));
            if outside {
                log::debug!("touch outside open {}, closing it", id);
                self.hide_cell(id, true);
                return None;
            }
        }

        self.cells()
            .find(|(_, cell)| {
                let frame = cell.frame();
                point.y >= frame.min_y() && point.y < frame.max_y()
            })
            .map(|(id, _)| id)
    }

    pub fn pointer_down(&mut self, position: Point, time_ms: i64) {
        self.dispatch_pointer(PointerEvent::down(position, time_ms));
    }

    pub fn pointer_move(&mut self, position: Point, time_ms: i64) {
        self.dispatch_pointer(PointerEvent::moved(position, time_ms));
    }

    pub fn pointer_up(&mut self, position: Point, time_ms: i64) {
        self.dispatch_pointer(PointerEvent::up(position, time_ms));
    }

    pub fn pointer_cancel(&mut self, position: Point, time_ms: i64) {
        self.dispatch_pointer(PointerEvent::cancel(position, time_ms));
    }

    /// Stamps a pointer event with the list's uptime clock, for hosts whose
    /// platform events carry no usable timestamp.
    pub fn pointer_now(&mut self, kind: PointerEventKind, position: Point) {
        let time_ms = self.clock.now_ms();
        self.dispatch_pointer(PointerEvent::new(kind, position, time_ms));
    }

    /// Routes a pointer event to the cell captured on the last down.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) {
        let target = if event.kind == PointerEventKind::Down {
            self.captured = self.hit_test(event.position);
            self.captured
        } else {
            self.captured
        };
        let Some(id) = target else {
            return;
        };

        let tap_allowed = self.swiped_cells().next().is_some();
        let Some(cell) = self.cell_mut(id) else {
            self.captured = None;
            return;
        };
        let pan = cell.pan.on_pointer(&event);
        let tap = if event.kind == PointerEventKind::Down && !tap_allowed {
            cell.tap.reset();
            None
        } else {
            cell.tap.on_pointer(&event)
        };

        if let Some(pan) = pan {
            self.dispatch_pan(id, pan);
        }
        if let Some(tap) = tap {
            self.handle_tap(id, tap.location);
        }
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.captured = None;
        }
    }

    fn dispatch_pan(&mut self, id: CellId, event: PanEvent) {
        match event.phase {
            PanPhase::Began => {
                if let Some(other) = self.coordinator.dragging().filter(|other| *other != id) {
                    log::debug!("{} pan ignored while {} drags", id, other);
                    return;
                }
                let began = self
                    .with_cell(id, |cell, ctx| cell.begin_pan(ctx, &event))
                    .unwrap_or(false);
                if !began {
                    return;
                }
                self.coordinator.begin_drag(id, &mut self.delegate);
                self.coordinator.register_scroll_observer(id);
                self.hide_others(id);
                self.with_cell(id, |cell, ctx| {
                    cell.tap.fail();
                    cell.change_pan(ctx, &event);
                });
            }
            PanPhase::Changed => {
                self.with_cell(id, |cell, ctx| cell.change_pan(ctx, &event));
            }
            PanPhase::Ended | PanPhase::Cancelled => {
                self.with_cell(id, |cell, ctx| cell.end_pan(ctx, &event));
                self.coordinator.end_drag(id, &mut self.delegate);
            }
        }
    }

    /// A tap on a revealed button performs it; anywhere else closes.
    fn handle_tap(&mut self, id: CellId, location: Point) {
        let Some(cell) = self.cell(id) else {
            return;
        };
        if !cell.state().is_active() {
            self.hide_swipeables(true);
            return;
        }
        if cell.is_completing() {
            return;
        }
        let button = cell
            .reveal_position(location.x)
            .and_then(|position| cell.actions_row()?.button_at(position));
        match button {
            Some(index) => {
                self.with_cell(id, |cell, ctx| cell.perform_action(ctx, index));
            }
            None => {
                self.hide_cell(id, true);
            }
        }
    }

    // --- helpers ---

    fn hide_cell(&mut self, id: CellId, animated: bool) -> bool {
        self.with_cell(id, |cell, ctx| cell.hide(ctx, animated, None))
            .unwrap_or(false)
    }

    fn hide_others(&mut self, id: CellId) {
        let others: CellIds = self.swiped_cells().filter(|other| *other != id).collect();
        for other in others {
            self.hide_cell(other, true);
        }
    }

    fn allocate_ticket(&mut self) -> AnimationTicket {
        self.next_ticket += 1;
        AnimationTicket(self.next_ticket)
    }

    fn require(&self, id: CellId) -> Result<&SwipeCell, SwipeError> {
        self.cell(id).ok_or_else(|| {
            log::warn!("operation on unknown {}", id);
            SwipeError::UnknownCell { id }
        })
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut SwipeCell> {
        self.cells.get_mut(id.0)?.as_mut()
    }

    fn with_cell<R>(
        &mut self,
        id: CellId,
        f: impl FnOnce(&mut SwipeCell, &mut CellContext<'_>) -> R,
    ) -> Option<R> {
        let cell = self.cells.get_mut(id.0)?.as_mut()?;
        let mut ctx = CellContext {
            id,
            delegate: &mut self.delegate,
            tuning: &self.tuning,
            measurer: self.measurer.as_ref(),
            list_bounds: self.bounds,
        };
        Some(f(cell, &mut ctx))
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
