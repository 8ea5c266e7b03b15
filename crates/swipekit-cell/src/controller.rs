//! Gesture and animation state machine for a single cell.
//!
//! Every entry point runs to completion before returning. The list hands
//! the cell a [`CellContext`] borrowing the delegate, so a delegate
//! callback can never re-enter the cell mid-transition.

use swipekit_animation::{AnimationType, Animator, AnimatorStatus};
use swipekit_foundation::{elastic_offset, PanEvent};
use swipekit_graphics::{Point, Rect};

use crate::action::Action;
use crate::actions_row::{ActionsRow, ButtonMeasurer, DeletionMask};
use crate::cell::{AnimationPurpose, CellAnimation, SwipeCell};
use crate::delegate::{ActionInvocation, AnimationTicket, CellId, FulfillmentToken, SwipeDelegate};
use crate::expansion::{CompletionAnimation, ExpansionContext, FulfillmentStyle, HandlerTiming};
use crate::options::{SwipeOptions, SwipeTuning};
use crate::orientation::{Orientation, SwipeState};

const MIN_SETTLE_DISTANCE: f32 = 1e-3;

/// Offset at which a fill leaves the cell: one button past its own width.
fn fill_end(frame: Rect, row: &ActionsRow) -> f32 {
    (frame.width + row.minimum_button_width()) * row.orientation().scale()
}

pub(crate) struct CellContext<'a> {
    pub id: CellId,
    pub delegate: &'a mut dyn SwipeDelegate,
    pub tuning: &'a SwipeTuning,
    pub measurer: &'a dyn ButtonMeasurer,
    pub list_bounds: Option<Rect>,
}

impl SwipeCell {
    // --- gesture phases ---

    /// Starts tracking a pan. Returns false if the cell refuses the drag.
    pub(crate) fn begin_pan(&mut self, ctx: &mut CellContext<'_>, event: &PanEvent) -> bool {
        if self.row.is_none() {
            log::debug!("{}: pan ignored, no row bound", ctx.id);
            return false;
        }
        if self.is_completing() {
            log::debug!("{}: pan ignored during completion", ctx.id);
            return false;
        }

        if matches!(self.state, SwipeState::Center | SwipeState::AnimatingToCenter) {
            let orientation = Orientation::for_offset(self.offset).unwrap_or_else(|| {
                if event.velocity.x != 0.0 {
                    Orientation::for_velocity(event.velocity.x)
                } else {
                    Orientation::for_velocity(event.translation.x)
                }
            });
            let Some((actions, options)) = self.load_actions(ctx, orientation) else {
                return false;
            };
            self.cancel_animation(ctx);
            self.install_actions_row(ctx, orientation, actions, options);
            self.state = SwipeState::Dragging;
            log::debug!("{}: Center -> Dragging ({:?})", ctx.id, orientation);
        } else {
            self.cancel_animation(ctx);
        }

        self.tracking_pan = true;
        self.original_offset = self.offset;
        self.scroll_ratio = 1.0;
        true
    }

    pub(crate) fn change_pan(&mut self, ctx: &mut CellContext<'_>, event: &PanEvent) {
        if !self.tracking_pan {
            return;
        }
        let Some(row) = self.actions_row.as_ref() else {
            return;
        };

        let orientation = row.orientation();
        let scale = orientation.scale();
        let preferred = row.preferred_width();
        let prospective = self.original_offset + event.translation.x;
        let ratio = ctx.tuning.elastic_ratio;
        log::trace!("{}: pan translation {:.1}", ctx.id, event.translation.x);

        if prospective * scale < 0.0 {
            // Dragging back past center toward the side with no actions.
            if self.running_purpose() == Some(AnimationPurpose::ExpansionSnap) {
                self.cancel_animation(ctx);
            }
            self.offset = elastic_offset(prospective, 0.0, ratio);
            self.scroll_ratio = ratio;
            self.sync_visible_width();
            return;
        }

        let Some(style) = row.options().expansion_style.as_ref() else {
            self.offset = elastic_offset(prospective, preferred, ratio);
            self.scroll_ratio = if prospective.abs() > preferred { ratio } else { 1.0 };
            self.sync_visible_width();
            return;
        };

        let expansion = ExpansionContext {
            translation: event.translation.x,
            offset: self.offset,
            location_x: event.location.x,
            cell_width: self.frame.width,
            preferred_width: preferred,
            orientation,
            list_bounds: ctx.list_bounds,
        };
        let expanded = style.should_expand(&expansion);
        let target = style.target_offset(self.frame.width, preferred);
        let elasticity = style.target_overscroll_elasticity;
        let was_expanded = row.is_expanded();

        if expanded && !was_expanded && target > prospective.abs() {
            let snap_to = target * scale;
            let delta = snap_to - self.original_offset;
            self.pan.set_translation(Point::new(delta, event.translation.y));
            let animator = Animator::new(
                self.offset,
                snap_to,
                AnimationType::Spring(ctx.tuning.snap_spring),
            );
            self.start_animation(ctx, animator, AnimationPurpose::ExpansionSnap, None);
            log::debug!("{}: snapped into expansion at {:.1}", ctx.id, snap_to);
        } else {
            let offset = elastic_offset(prospective, target, elasticity);
            if self.running_purpose() == Some(AnimationPurpose::ExpansionSnap) {
                if let Some(snap) = self.animation.as_mut() {
                    snap.animator.retarget(offset);
                }
            } else {
                self.offset = offset;
                self.sync_visible_width();
            }
        }
        self.scroll_ratio = 1.0;

        let feedback = self
            .actions_row
            .as_mut()
            .and_then(|row| row.set_expanded(expanded, true));
        if let (Some(feedback), Some(row)) = (feedback, self.row) {
            ctx.delegate.expansion_feedback(row, feedback.expanded);
        }
    }

    /// Handles both release and cancellation of a tracked pan.
    pub(crate) fn end_pan(&mut self, ctx: &mut CellContext<'_>, event: &PanEvent) {
        if !self.tracking_pan {
            return;
        }
        self.tracking_pan = false;
        let Some(row) = self.actions_row.as_ref() else {
            return;
        };

        let orientation = row.orientation();
        let expanded = row.is_expanded();
        let velocity = event.velocity.x;
        let target_state = match orientation {
            Orientation::Left if velocity < 0.0 && !expanded => SwipeState::Center,
            Orientation::Right if velocity > 0.0 && !expanded => SwipeState::Center,
            _ => SwipeState::from(orientation),
        };

        if expanded && row.expandable_action().is_some() {
            self.state = target_state;
            self.perform_action(ctx, 0);
            return;
        }

        let target_offset = if target_state == SwipeState::Center {
            0.0
        } else {
            row.preferred_width() * orientation.scale()
        };
        self.state = if target_state == SwipeState::Center {
            SwipeState::AnimatingToCenter
        } else {
            target_state
        };
        log::debug!("{}: pan ended, settling to {:?}", ctx.id, target_state);

        if target_state == SwipeState::Center {
            self.end_editing(ctx);
        }

        let distance = target_offset - self.offset;
        let initial_velocity = if distance.abs() < MIN_SETTLE_DISTANCE {
            0.0
        } else {
            velocity * self.scroll_ratio / distance
        };
        let animator = Animator::new(
            self.offset,
            target_offset,
            AnimationType::Spring(ctx.tuning.settle_spring),
        )
        .with_initial_velocity(initial_velocity);
        self.start_animation(
            ctx,
            animator,
            AnimationPurpose::Settle {
                target: target_state,
            },
            None,
        );
    }

    // --- actions ---

    /// Runs the completion for the action at `index` of the current row.
    pub(crate) fn perform_action(&mut self, ctx: &mut CellContext<'_>, index: usize) {
        let Some(row) = self.actions_row.as_mut() else {
            return;
        };
        let Some(action) = row.action(index) else {
            return;
        };
        let hides = action.hides_when_selected;
        let completion = if index == 0 {
            row.options()
                .expansion_style
                .as_ref()
                .map(|style| style.completion_animation)
        } else {
            None
        };
        let orientation = row.orientation();

        match completion {
            Some(CompletionAnimation::Bounce) => {
                row.set_expanded(true, false);
                self.invoke_action(ctx, index);
                if hides {
                    self.hide(ctx, true, None);
                } else {
                    self.settle_open(ctx);
                }
            }
            Some(CompletionAnimation::Fill(fill)) => {
                row.set_expanded(true, false);
                let end = fill_end(self.frame, row);
                self.pending_fill = Some(index);
                self.state = SwipeState::from(orientation);
                let animator = Animator::new(
                    self.offset,
                    end,
                    AnimationType::Tween(ctx.tuning.fill_animation),
                );
                self.start_animation(
                    ctx,
                    animator,
                    AnimationPurpose::Fill {
                        action: index,
                        timing: fill.timing,
                        auto_fulfillment: fill.auto_fulfillment,
                    },
                    None,
                );
                log::debug!("{}: filling toward {:.1}", ctx.id, end);
                if fill.timing == HandlerTiming::With {
                    self.invoke_action(ctx, index);
                }
            }
            None => {
                self.invoke_action(ctx, index);
                if hides {
                    self.hide(ctx, true, None);
                }
            }
        }
    }

    fn invoke_action(&mut self, ctx: &mut CellContext<'_>, index: usize) {
        let (Some(row), Some(actions_row)) = (self.row, self.actions_row.as_ref()) else {
            return;
        };
        let Some(action) = actions_row.action(index).cloned() else {
            return;
        };
        let invocation = ActionInvocation {
            cell: ctx.id,
            row,
            orientation: actions_row.orientation(),
            action,
            token: FulfillmentToken {
                cell: ctx.id,
                generation: self.generation,
            },
        };
        log::debug!("{}: invoking {:?}", ctx.id, invocation.action.id);
        ctx.delegate.handle_action(invocation);
    }

    /// Finishes a fill completion. Ignored unless one is pending.
    pub(crate) fn fulfill(&mut self, ctx: &mut CellContext<'_>, style: FulfillmentStyle) {
        if self.pending_fill.take().is_none() {
            log::debug!("{}: fulfillment {:?} ignored, nothing pending", ctx.id, style);
            return;
        }
        match style {
            FulfillmentStyle::Delete => {
                // A fill cut short jumps to where it would have ended.
                if let Some(end) = self.actions_row.as_ref().map(|row| fill_end(self.frame, row)) {
                    self.offset = end;
                    self.sync_visible_width();
                }
                self.state = SwipeState::AnimatingToCenter;
                self.end_editing(ctx);
                let mask = self
                    .actions_row
                    .as_ref()
                    .map(|row| row.deletion_mask(self.frame))
                    .unwrap_or_else(|| DeletionMask::new(self.frame));
                self.deletion_mask = Some(mask);
                if let Some(row) = self.row {
                    ctx.delegate.delete_row(row);
                }
                let animator =
                    Animator::new(0.0, 1.0, AnimationType::Tween(ctx.tuning.delete_animation));
                self.start_animation(ctx, animator, AnimationPurpose::DeleteCollapse, None);
            }
            FulfillmentStyle::Reset => {
                self.return_to_center(ctx, true, None);
            }
        }
    }

    // --- programmatic control ---

    /// Returns the cell to center. Only an active cell can be hidden, and
    /// never while a fill or delete completion owns it.
    pub(crate) fn hide(
        &mut self,
        ctx: &mut CellContext<'_>,
        animated: bool,
        ticket: Option<AnimationTicket>,
    ) -> bool {
        if !self.state.is_active() {
            return false;
        }
        if self.is_completing() {
            log::debug!("{}: hide ignored during completion", ctx.id);
            return false;
        }
        self.return_to_center(ctx, animated, ticket);
        true
    }

    fn return_to_center(
        &mut self,
        ctx: &mut CellContext<'_>,
        animated: bool,
        ticket: Option<AnimationTicket>,
    ) {
        log::debug!("{}: {:?} -> AnimatingToCenter", ctx.id, self.state);
        self.tracking_pan = false;
        self.pending_fill = None;
        self.state = SwipeState::AnimatingToCenter;
        self.end_editing(ctx);

        if animated {
            let animator = Animator::new(
                self.offset,
                0.0,
                AnimationType::Spring(ctx.tuning.settle_spring),
            );
            self.start_animation(
                ctx,
                animator,
                AnimationPurpose::Settle {
                    target: SwipeState::Center,
                },
                ticket,
            );
        } else {
            self.cancel_animation(ctx);
            self.reset(ctx);
        }
    }

    /// Collapses an expanded row back to the fully revealed actions.
    fn settle_open(&mut self, ctx: &mut CellContext<'_>) {
        let Some(row) = self.actions_row.as_mut() else {
            return;
        };
        row.set_expanded(false, false);
        let orientation = row.orientation();
        let target = row.preferred_width() * orientation.scale();
        let target_state = SwipeState::from(orientation);
        self.tracking_pan = false;
        self.state = target_state;
        let animator = Animator::new(
            self.offset,
            target,
            AnimationType::Spring(ctx.tuning.settle_spring),
        );
        self.start_animation(
            ctx,
            animator,
            AnimationPurpose::Settle {
                target: target_state,
            },
            None,
        );
    }

    /// Moves the cell to `offset`, showing the matching action row first.
    ///
    /// Zero hides, infinite magnitudes mean "fully revealed", and NaN is
    /// refused.
    pub(crate) fn set_swipe_offset(
        &mut self,
        ctx: &mut CellContext<'_>,
        offset: f32,
        animated: bool,
        ticket: Option<AnimationTicket>,
    ) -> bool {
        let Some(orientation) = Orientation::for_offset(offset) else {
            if offset.is_nan() {
                log::warn!("{}: refusing NaN swipe offset", ctx.id);
                return false;
            }
            return self.hide(ctx, animated, ticket);
        };
        if self.is_completing() {
            log::debug!("{}: offset change ignored during completion", ctx.id);
            return false;
        }

        let target_state = SwipeState::from(orientation);
        let has_row = self
            .actions_row
            .as_ref()
            .is_some_and(|row| row.orientation() == orientation);
        if self.state != target_state || !has_row {
            let Some((actions, options)) = self.load_actions(ctx, orientation) else {
                return false;
            };
            self.install_actions_row(ctx, orientation, actions, options);
        }
        let Some(row) = self.actions_row.as_ref() else {
            return false;
        };

        let magnitude = if offset.is_infinite() {
            row.preferred_width()
        } else {
            offset.abs().min(self.frame.width)
        };
        let target = magnitude * orientation.scale();
        self.tracking_pan = false;
        self.state = target_state;

        if animated {
            let animator = Animator::new(
                self.offset,
                target,
                AnimationType::Spring(ctx.tuning.settle_spring),
            );
            self.start_animation(
                ctx,
                animator,
                AnimationPurpose::Settle {
                    target: target_state,
                },
                ticket,
            );
        } else {
            self.cancel_animation(ctx);
            self.offset = target;
            self.sync_visible_width();
        }
        true
    }

    /// Cancels everything and returns to an idle, closed cell.
    pub(crate) fn prepare_for_reuse(&mut self, ctx: &mut CellContext<'_>) {
        self.cancel_animation(ctx);
        self.pan.reset();
        self.tap.reset();
        self.reset(ctx);
    }

    pub(crate) fn reset(&mut self, ctx: &mut CellContext<'_>) {
        self.end_editing(ctx);
        if self.state != SwipeState::Center {
            log::debug!("{}: {:?} -> Center", ctx.id, self.state);
        }
        self.state = SwipeState::Center;
        self.offset = 0.0;
        self.actions_row = None;
        self.deletion_mask = None;
        self.pending_fill = None;
        self.tracking_pan = false;
        self.scroll_ratio = 1.0;
        self.generation += 1;
    }

    // --- animation ---

    /// Advances the running animation. Returns true while still animating.
    pub(crate) fn tick(&mut self, ctx: &mut CellContext<'_>, frame_time_nanos: u64) -> bool {
        let (status, purpose) = match self.animation.as_mut() {
            Some(animation) => (animation.animator.tick(frame_time_nanos), animation.purpose),
            None => return false,
        };

        if purpose == AnimationPurpose::DeleteCollapse {
            if let Some(mask) = self.deletion_mask.as_mut() {
                mask.collapse(status.value());
            }
        } else {
            self.offset = status.value();
            self.sync_visible_width();
        }

        let AnimatorStatus::Finished(_) = status else {
            return true;
        };
        if let Some(finished) = self.animation.take() {
            self.finish_animation(ctx, finished.purpose);
            if let Some(ticket) = finished.ticket {
                ctx.delegate.swipe_animation_finished(ctx.id, ticket, true);
            }
        }
        self.animation.is_some()
    }

    fn finish_animation(&mut self, ctx: &mut CellContext<'_>, purpose: AnimationPurpose) {
        match purpose {
            AnimationPurpose::Settle {
                target: SwipeState::Center,
            }
            | AnimationPurpose::DeleteCollapse => self.reset(ctx),
            AnimationPurpose::Settle { target } => {
                log::debug!("{}: settled at {:?}", ctx.id, target);
            }
            AnimationPurpose::ExpansionSnap => {}
            AnimationPurpose::Fill {
                action,
                timing,
                auto_fulfillment,
            } => {
                if timing == HandlerTiming::After {
                    self.invoke_action(ctx, action);
                }
                if let Some(style) = auto_fulfillment {
                    self.fulfill(ctx, style);
                }
            }
        }
    }

    fn start_animation(
        &mut self,
        ctx: &mut CellContext<'_>,
        animator: Animator,
        purpose: AnimationPurpose,
        ticket: Option<AnimationTicket>,
    ) {
        self.cancel_animation(ctx);
        self.animation = Some(CellAnimation {
            animator,
            purpose,
            ticket,
        });
    }

    /// Drops the running animation where it stands; never reports it as
    /// finished.
    pub(crate) fn cancel_animation(&mut self, ctx: &mut CellContext<'_>) {
        let Some(previous) = self.animation.take() else {
            return;
        };
        log::debug!("{}: cancelled {:?} at {:.1}", ctx.id, previous.purpose, self.offset);
        if let Some(ticket) = previous.ticket {
            ctx.delegate.swipe_animation_finished(ctx.id, ticket, false);
        }
    }

    // --- helpers ---

    fn load_actions(
        &mut self,
        ctx: &mut CellContext<'_>,
        orientation: Orientation,
    ) -> Option<(Vec<Action>, SwipeOptions)> {
        let row = self.row?;
        let actions = ctx
            .delegate
            .edit_actions(row, orientation)
            .filter(|actions| !actions.is_empty());
        let Some(actions) = actions else {
            log::debug!("{}: no {:?} actions for {:?}", ctx.id, orientation, row);
            return None;
        };
        let options = ctx.delegate.edit_options(row, orientation);
        Some((actions, options))
    }

    fn install_actions_row(
        &mut self,
        ctx: &mut CellContext<'_>,
        orientation: Orientation,
        actions: Vec<Action>,
        options: SwipeOptions,
    ) {
        for selected in ctx.delegate.selected_rows() {
            ctx.delegate.deselect_row(selected);
        }
        self.actions_row = Some(ActionsRow::new(
            self.frame.size(),
            options,
            orientation,
            actions,
            ctx.measurer,
            ctx.tuning,
        ));
        self.sync_visible_width();
        self.begin_editing(ctx, orientation);
    }

    fn sync_visible_width(&mut self) {
        if let Some(row) = self.actions_row.as_mut() {
            let visible = (self.offset * row.orientation().scale()).max(0.0);
            row.set_visible_width(visible);
        }
    }

    fn begin_editing(&mut self, ctx: &mut CellContext<'_>, orientation: Orientation) {
        let Some(row) = self.row else {
            return;
        };
        match self.editing.replace(orientation) {
            Some(current) if current == orientation => {}
            Some(current) => {
                ctx.delegate.did_end_editing(row, current);
                ctx.delegate.will_begin_editing(row, orientation);
            }
            None => {
                ctx.delegate.will_begin_editing(row, orientation);
                ctx.delegate.editing_state_changed(row, true);
            }
        }
    }

    fn end_editing(&mut self, ctx: &mut CellContext<'_>) {
        let Some(orientation) = self.editing.take() else {
            return;
        };
        if let Some(row) = self.row {
            ctx.delegate.did_end_editing(row, orientation);
            ctx.delegate.editing_state_changed(row, false);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
