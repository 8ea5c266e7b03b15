//! Expansion policies: when a drag past the revealed actions snaps to
//! "fully expanded", and what happens once the expandable action fires.

use swipekit_graphics::Rect;

use crate::orientation::Orientation;

/// Default overscroll margin used by the built-in presets.
pub const DEFAULT_OVERSCROLL_MARGIN: f32 = 30.0;

/// Where a fully expanded cell rests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpansionTarget {
    /// Fraction of the cell width.
    Percentage(f32),
    /// Cell width minus a fixed inset.
    EdgeInset(f32),
}

impl ExpansionTarget {
    fn raw_offset(self, cell_width: f32) -> f32 {
        match self {
            ExpansionTarget::Percentage(fraction) => cell_width * fraction,
            ExpansionTarget::EdgeInset(inset) => cell_width - inset,
        }
    }
}

/// Extra conditions that expand before the target offset is reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpansionTrigger {
    /// Touch has travelled past this fraction of the list width, measured
    /// from the edge the actions are anchored to.
    TouchThreshold(f32),
    /// The cell has moved this far past the fully revealed actions.
    Overscroll(f32),
}

impl ExpansionTrigger {
    fn is_triggered(self, ctx: &ExpansionContext, list_bounds: Rect) -> bool {
        match self {
            ExpansionTrigger::TouchThreshold(threshold) => {
                if list_bounds.width <= 0.0 {
                    return false;
                }
                let location = ctx.location_x - list_bounds.x;
                let travelled = match ctx.orientation {
                    Orientation::Left => location,
                    Orientation::Right => list_bounds.width - location,
                };
                travelled / list_bounds.width > threshold
            }
            ExpansionTrigger::Overscroll(margin) => {
                ctx.offset.abs().floor() > ctx.preferred_width + margin
            }
        }
    }
}

/// When the action handler runs relative to the fill animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HandlerTiming {
    /// As the fill animation starts.
    #[default]
    With,
    /// Once the fill animation has reached its end position.
    After,
}

/// How a filled cell finishes once the action reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FulfillmentStyle {
    /// Collapse the row; removal itself is the host's job.
    Delete,
    /// Slide back to center as a normal hide.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FillOptions {
    /// Applied once the fill animation ends; `None` waits for the host.
    pub auto_fulfillment: Option<FulfillmentStyle>,
    pub timing: HandlerTiming,
}

impl FillOptions {
    pub fn automatic(style: FulfillmentStyle, timing: HandlerTiming) -> Self {
        Self {
            auto_fulfillment: Some(style),
            timing,
        }
    }

    pub fn manual(timing: HandlerTiming) -> Self {
        Self {
            auto_fulfillment: None,
            timing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionAnimation {
    /// Run the handler, then return to center.
    Bounce,
    /// Slide the cell off its own edge, then wait for fulfillment.
    Fill(FillOptions),
}

/// Inputs to [`ExpansionStyle::should_expand`], sampled on each pan change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpansionContext {
    /// Horizontal pan translation.
    pub translation: f32,
    /// Current cell offset.
    pub offset: f32,
    /// Touch position in list coordinates.
    pub location_x: f32,
    pub cell_width: f32,
    pub preferred_width: f32,
    pub orientation: Orientation,
    /// `None` when the host never reported the list's bounds.
    pub list_bounds: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpansionStyle {
    pub target: ExpansionTarget,
    pub additional_triggers: Vec<ExpansionTrigger>,
    /// Slow the action row's content growth once the cell passes the
    /// fully revealed width.
    pub elastic_overscroll: bool,
    pub completion_animation: CompletionAnimation,
    /// Minimum distance past the revealed actions before expansion counts.
    pub minimum_target_overscroll: f32,
    /// Ratio kept when dragging beyond the target offset.
    pub target_overscroll_elasticity: f32,
}

impl ExpansionStyle {
    pub fn new(target: ExpansionTarget, completion_animation: CompletionAnimation) -> Self {
        Self {
            target,
            additional_triggers: Vec::new(),
            elastic_overscroll: false,
            completion_animation,
            minimum_target_overscroll: 20.0,
            target_overscroll_elasticity: 0.2,
        }
    }

    /// Expands at half the cell width and bounces back after selecting.
    pub fn selection() -> Self {
        Self::new(ExpansionTarget::Percentage(0.5), CompletionAnimation::Bounce)
            .with_elastic_overscroll(true)
    }

    /// Expands once the actions are fully revealed plus a margin, fills,
    /// and deletes the row as the handler runs.
    pub fn destructive() -> Self {
        Self::destructive_with(true, HandlerTiming::With)
    }

    /// Like [`ExpansionStyle::destructive`], but the handler only runs once
    /// the fill animation has finished.
    pub fn destructive_after_fill() -> Self {
        Self::destructive_with(true, HandlerTiming::After)
    }

    pub fn destructive_with(automatically_delete: bool, timing: HandlerTiming) -> Self {
        let fill = if automatically_delete {
            FillOptions::automatic(FulfillmentStyle::Delete, timing)
        } else {
            FillOptions::manual(timing)
        };
        Self::new(
            ExpansionTarget::EdgeInset(DEFAULT_OVERSCROLL_MARGIN),
            CompletionAnimation::Fill(fill),
        )
        .with_trigger(ExpansionTrigger::Overscroll(DEFAULT_OVERSCROLL_MARGIN))
        .with_trigger(ExpansionTrigger::TouchThreshold(0.8))
    }

    /// Fills after overscrolling and waits for the host to fulfill.
    pub fn fill() -> Self {
        Self::new(
            ExpansionTarget::EdgeInset(DEFAULT_OVERSCROLL_MARGIN),
            CompletionAnimation::Fill(FillOptions::manual(HandlerTiming::After)),
        )
        .with_trigger(ExpansionTrigger::Overscroll(DEFAULT_OVERSCROLL_MARGIN))
    }

    pub fn with_trigger(mut self, trigger: ExpansionTrigger) -> Self {
        self.additional_triggers.push(trigger);
        self
    }

    pub fn with_elastic_overscroll(mut self, elastic: bool) -> Self {
        self.elastic_overscroll = elastic;
        self
    }

    pub fn with_minimum_target_overscroll(mut self, overscroll: f32) -> Self {
        self.minimum_target_overscroll = overscroll;
        self
    }

    pub fn with_target_overscroll_elasticity(mut self, elasticity: f32) -> Self {
        self.target_overscroll_elasticity = elasticity;
        self
    }

    /// Offset magnitude at which the cell counts as fully expanded.
    ///
    /// Never closer than the revealed actions plus the minimum overscroll.
    pub fn target_offset(&self, cell_width: f32, preferred_width: f32) -> f32 {
        let raw = self.target.raw_offset(cell_width);
        raw.max(preferred_width + self.minimum_target_overscroll)
    }

    /// Whether the drag described by `ctx` has crossed into the expanded zone.
    pub fn should_expand(&self, ctx: &ExpansionContext) -> bool {
        let Some(list_bounds) = ctx.list_bounds else {
            return false;
        };
        if ctx.translation.abs() <= self.minimum_target_overscroll {
            return false;
        }

        let x_delta = ctx.offset.abs().floor();
        if x_delta <= ctx.preferred_width {
            return false;
        }
        if x_delta > self.target_offset(ctx.cell_width, ctx.preferred_width) {
            return true;
        }

        self.additional_triggers
            .iter()
            .any(|trigger| trigger.is_triggered(ctx, list_bounds))
    }
}

#[cfg(test)]
#[path = "tests/expansion_tests.rs"]
mod tests;
