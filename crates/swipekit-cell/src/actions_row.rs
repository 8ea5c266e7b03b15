//! The row of action buttons uncovered behind a swiped cell.

use swipekit_graphics::{Color, EdgeInsets, Rect, Size};

use crate::action::Action;
use crate::options::{SwipeOptions, SwipeTuning};
use crate::orientation::Orientation;
use crate::transition::{layout_buttons, layout_expanded, ButtonLayout, ButtonLayouts, RowMetrics};

/// Natural width of a button before row-level sizing rules apply.
pub trait ButtonMeasurer {
    fn natural_width(&self, action: &Action, padding: EdgeInsets) -> f32;
}

/// Measures titles with a fixed per-character advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub char_advance: f32,
    pub icon_size: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            char_advance: 9.0,
            icon_size: 24.0,
        }
    }
}

impl ButtonMeasurer for FixedAdvanceMeasurer {
    fn natural_width(&self, action: &Action, padding: EdgeInsets) -> f32 {
        let title = action
            .title
            .as_deref()
            .map(|title| title.chars().count() as f32 * self.char_advance)
            .unwrap_or(0.0);
        let icon = if action.icon.is_some() {
            self.icon_size
        } else {
            0.0
        };
        padding.horizontal_sum() + title.max(icon)
    }
}

/// Emitted once per real change of the expanded flag when feedback was
/// requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpansionFeedback {
    pub expanded: bool,
}

/// Mask applied over a row while it collapses after a delete.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeletionMask {
    pub initial: Rect,
    pub current: Rect,
}

impl DeletionMask {
    pub fn new(bounds: Rect) -> Self {
        Self {
            initial: bounds,
            current: bounds,
        }
    }

    /// Shrinks the mask height toward zero as `progress` goes 0 to 1.
    pub fn collapse(&mut self, progress: f32) -> Rect {
        let remaining = 1.0 - progress.clamp(0.0, 1.0);
        self.current = self.initial.with_height(self.initial.height * remaining);
        self.current
    }
}

#[derive(Debug)]
pub struct ActionsRow {
    orientation: Orientation,
    actions: Vec<Action>,
    options: SwipeOptions,
    max_size: Size,
    minimum_button_width: f32,
    preferred_width: f32,
    visible_width: f32,
    content_width: f32,
    overscroll_content_ratio: f32,
    expanded: bool,
    layouts: ButtonLayouts,
}

impl ActionsRow {
    pub fn new(
        max_size: Size,
        options: SwipeOptions,
        orientation: Orientation,
        actions: Vec<Action>,
        measurer: &dyn ButtonMeasurer,
        tuning: &SwipeTuning,
    ) -> Self {
        let count = actions.len().max(1) as f32;
        let maximum = options
            .maximum_button_width
            .unwrap_or((max_size.width - tuning.button_edge_margin) / count)
            .max(0.0);
        let minimum = options
            .minimum_button_width
            .unwrap_or(maximum.min(tuning.default_minimum_button_width));

        let minimum_button_width = actions.iter().fold(minimum, |widest, action| {
            let natural = measurer.natural_width(action, options.button_padding);
            widest.max(natural.min(maximum))
        });

        let gaps = options.button_spacing * (actions.len().saturating_sub(1)) as f32;
        let preferred_width =
            (actions.len() as f32 * minimum_button_width + gaps).min(max_size.width.max(0.0));

        log::debug!(
            "actions row {:?}: {} buttons, button width {:.1}, preferred {:.1}",
            orientation,
            actions.len(),
            minimum_button_width,
            preferred_width
        );

        let mut row = Self {
            orientation,
            actions,
            options,
            max_size,
            minimum_button_width,
            preferred_width,
            visible_width: 0.0,
            content_width: 0.0,
            overscroll_content_ratio: tuning.overscroll_content_ratio,
            expanded: false,
            layouts: ButtonLayouts::new(),
        };
        row.relayout();
        row
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn options(&self) -> &SwipeOptions {
        &self.options
    }

    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Width every button is laid out at when not expanded.
    pub fn minimum_button_width(&self) -> f32 {
        self.minimum_button_width
    }

    /// Width needed to show every button, clamped to the cell width.
    pub fn preferred_width(&self) -> f32 {
        self.preferred_width
    }

    pub fn visible_width(&self) -> f32 {
        self.visible_width
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn set_visible_width(&mut self, width: f32) {
        let width = width.max(0.0);
        if width == self.visible_width && !self.layouts.is_empty() {
            return;
        }
        self.visible_width = width;
        self.relayout();
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Updates the expanded flag. Feedback is produced only when the flag
    /// actually flips.
    pub fn set_expanded(&mut self, expanded: bool, feedback: bool) -> Option<ExpansionFeedback> {
        if self.expanded == expanded {
            return None;
        }
        self.expanded = expanded;
        self.relayout();
        feedback.then_some(ExpansionFeedback { expanded })
    }

    /// The action triggered by a full-expansion drag, if this row has one.
    pub fn expandable_action(&self) -> Option<&Action> {
        self.options.expansion_style.as_ref()?;
        self.actions.first()
    }

    pub fn button_layouts(&self) -> &[ButtonLayout] {
        &self.layouts
    }

    /// Index of the action under `position` (reveal space).
    pub fn button_at(&self, position: f32) -> Option<usize> {
        self.layouts
            .iter()
            .find(|layout| layout.contains(position, self.visible_width))
            .map(|layout| layout.index)
    }

    pub fn background_color(&self) -> Color {
        self.options
            .background_color
            .or_else(|| self.actions.first().map(|action| action.background_color))
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn deletion_mask(&self, bounds: Rect) -> DeletionMask {
        DeletionMask::new(bounds)
    }

    fn elastic_content(&self) -> bool {
        self.options
            .expansion_style
            .as_ref()
            .is_some_and(|style| style.elastic_overscroll)
    }

    fn relayout(&mut self) {
        self.content_width = if self.elastic_content() && self.visible_width > self.preferred_width {
            self.preferred_width
                + (self.visible_width - self.preferred_width) * self.overscroll_content_ratio
        } else {
            self.visible_width
        };

        self.layouts = if self.expanded {
            layout_expanded(self.actions.len(), self.visible_width)
        } else {
            layout_buttons(
                self.options.transition_style,
                RowMetrics {
                    count: self.actions.len(),
                    button_width: self.minimum_button_width,
                    spacing: self.options.button_spacing,
                    preferred_width: self.preferred_width,
                    visible_width: self.visible_width,
                    content_width: self.content_width,
                },
            )
        };
    }
}

#[cfg(test)]
#[path = "tests/actions_row_tests.rs"]
mod tests;
