//! Per-orientation display options and list-wide tuning.

use swipekit_animation::{AnimationSpec, Easing, SpringSpec};
use swipekit_graphics::{Color, EdgeInsets};

use crate::expansion::ExpansionStyle;

/// How buttons become visible while the cell is dragged open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// Buttons share the exposed width evenly and grow with it.
    #[default]
    Border,
    /// Buttons ride along with the cell edge at full width.
    Drag,
    /// Buttons sit still under the cell and are uncovered as it moves.
    Reveal,
}

/// Display options for one orientation of one row.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeOptions {
    pub transition_style: TransitionStyle,
    pub expansion_style: Option<ExpansionStyle>,
    /// Fill behind the buttons; the row's outermost action color when `None`.
    pub background_color: Option<Color>,
    pub button_spacing: f32,
    pub minimum_button_width: Option<f32>,
    pub maximum_button_width: Option<f32>,
    pub button_padding: EdgeInsets,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            transition_style: TransitionStyle::Border,
            expansion_style: None,
            background_color: None,
            button_spacing: 0.0,
            minimum_button_width: None,
            maximum_button_width: None,
            button_padding: EdgeInsets::uniform(8.0),
        }
    }
}

impl SwipeOptions {
    pub fn with_transition_style(mut self, style: TransitionStyle) -> Self {
        self.transition_style = style;
        self
    }

    pub fn with_expansion_style(mut self, style: ExpansionStyle) -> Self {
        self.expansion_style = Some(style);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_button_spacing(mut self, spacing: f32) -> Self {
        self.button_spacing = spacing.max(0.0);
        self
    }

    pub fn with_minimum_button_width(mut self, width: f32) -> Self {
        self.minimum_button_width = Some(width);
        self
    }

    pub fn with_maximum_button_width(mut self, width: f32) -> Self {
        self.maximum_button_width = Some(width);
        self
    }

    pub fn with_button_padding(mut self, padding: EdgeInsets) -> Self {
        self.button_padding = padding;
        self
    }
}

/// List-wide constants for gesture feel and animation timing.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTuning {
    /// Fraction of finger travel applied past the revealed actions, or
    /// when dragging the wrong way past center.
    pub elastic_ratio: f32,
    /// Growth rate of an elastic action row's content past its preferred width.
    pub overscroll_content_ratio: f32,
    /// Spring used to settle at center or at a revealed edge.
    pub settle_spring: SpringSpec,
    /// Spring used when a drag snaps into the expanded zone.
    pub snap_spring: SpringSpec,
    pub fill_animation: AnimationSpec,
    pub delete_animation: AnimationSpec,
    pub default_minimum_button_width: f32,
    /// Width kept clear of buttons when deriving a maximum button width.
    pub button_edge_margin: f32,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            elastic_ratio: 0.4,
            overscroll_content_ratio: 0.25,
            settle_spring: SpringSpec::settle(),
            snap_spring: SpringSpec::bouncy(),
            fill_animation: AnimationSpec::tween(300, Easing::EaseOut),
            delete_animation: AnimationSpec::tween(300, Easing::EaseInOut),
            default_minimum_button_width: 74.0,
            button_edge_margin: 30.0,
        }
    }
}

impl SwipeTuning {
    pub fn with_elastic_ratio(mut self, ratio: f32) -> Self {
        self.elastic_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_settle_spring(mut self, spring: SpringSpec) -> Self {
        self.settle_spring = spring;
        self
    }

    pub fn with_snap_spring(mut self, spring: SpringSpec) -> Self {
        self.snap_spring = spring;
        self
    }

    pub fn with_fill_animation(mut self, spec: AnimationSpec) -> Self {
        self.fill_animation = spec;
        self
    }

    pub fn with_delete_animation(mut self, spec: AnimationSpec) -> Self {
        self.delete_animation = spec;
        self
    }

    pub fn with_default_minimum_button_width(mut self, width: f32) -> Self {
        self.default_minimum_button_width = width;
        self
    }
}
