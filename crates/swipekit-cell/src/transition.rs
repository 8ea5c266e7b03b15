//! Button placement for each [`TransitionStyle`].
//!
//! Positions are expressed in reveal space: `0` is the moving edge of the
//! cell and values grow outward toward the list edge the actions are
//! anchored to. Index 0 is the outermost button.

use smallvec::SmallVec;

use crate::options::TransitionStyle;

/// Where one button sits along the revealed strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonLayout {
    pub index: usize,
    pub start: f32,
    pub width: f32,
    /// Part of the button inside `[0, visible_width]`.
    pub visible_width: f32,
}

impl ButtonLayout {
    fn new(index: usize, start: f32, width: f32, visible_width: f32) -> Self {
        let end = start + width;
        let clipped = (end.min(visible_width) - start.max(0.0)).max(0.0);
        Self {
            index,
            start,
            width,
            visible_width: clipped,
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.width
    }

    /// Whether `position` lands on the visible part of this button.
    pub fn contains(&self, position: f32, visible_width: f32) -> bool {
        self.visible_width > 0.0
            && position >= self.start.max(0.0)
            && position < self.end().min(visible_width)
    }
}

pub type ButtonLayouts = SmallVec<[ButtonLayout; 4]>;

/// Sizes shared by every transition layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RowMetrics {
    pub count: usize,
    pub button_width: f32,
    pub spacing: f32,
    pub preferred_width: f32,
    pub visible_width: f32,
    pub content_width: f32,
}

pub(crate) fn layout_buttons(style: TransitionStyle, metrics: RowMetrics) -> ButtonLayouts {
    let RowMetrics {
        count,
        button_width,
        spacing,
        preferred_width,
        visible_width,
        content_width,
    } = metrics;
    let step = button_width + spacing;

    (0..count)
        .map(|index| {
            let slot = (count - 1 - index) as f32;
            let (start, width) = match style {
                TransitionStyle::Drag => (slot * step, button_width),
                TransitionStyle::Reveal => (visible_width - preferred_width + slot * step, button_width),
                TransitionStyle::Border => {
                    let gaps = spacing * (count - 1) as f32;
                    let width = ((content_width - gaps) / count as f32).max(0.0);
                    let start = slot * (width + spacing) + (visible_width - content_width);
                    (start, width)
                }
            };
            ButtonLayout::new(index, start, width, visible_width)
        })
        .collect()
}

/// Expanded rows hand the whole strip to the expandable button.
pub(crate) fn layout_expanded(count: usize, visible_width: f32) -> ButtonLayouts {
    (0..count)
        .map(|index| {
            let width = if index == 0 { visible_width } else { 0.0 };
            ButtonLayout::new(index, 0.0, width, visible_width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(visible_width: f32) -> RowMetrics {
        RowMetrics {
            count: 2,
            button_width: 74.0,
            spacing: 0.0,
            preferred_width: 148.0,
            visible_width,
            content_width: visible_width,
        }
    }

    #[test]
    fn drag_pins_buttons_to_cell_edge() {
        let layouts = layout_buttons(TransitionStyle::Drag, metrics(100.0));
        assert_eq!(layouts[1].start, 0.0);
        assert_eq!(layouts[1].visible_width, 74.0);
        assert_eq!(layouts[0].start, 74.0);
        assert_eq!(layouts[0].visible_width, 26.0);
    }

    #[test]
    fn reveal_uncovers_outermost_first() {
        let layouts = layout_buttons(TransitionStyle::Reveal, metrics(100.0));
        assert_eq!(layouts[0].end(), 100.0);
        assert_eq!(layouts[0].visible_width, 74.0);
        assert_eq!(layouts[1].visible_width, 26.0);
    }

    #[test]
    fn border_shares_visible_width() {
        let layouts = layout_buttons(TransitionStyle::Border, metrics(100.0));
        assert_eq!(layouts[0].width, 50.0);
        assert_eq!(layouts[1].width, 50.0);
        assert_eq!(layouts[1].start, 0.0);
        assert_eq!(layouts[0].start, 50.0);
    }

    #[test]
    fn expanded_gives_strip_to_first_button() {
        let layouts = layout_expanded(3, 250.0);
        assert_eq!(layouts[0].visible_width, 250.0);
        assert!(layouts[1..].iter().all(|layout| layout.visible_width == 0.0));
    }

    #[test]
    fn hidden_buttons_are_not_hit() {
        let layouts = layout_buttons(TransitionStyle::Drag, metrics(60.0));
        assert!(layouts[1].contains(30.0, 60.0));
        assert!(!layouts[0].contains(70.0, 60.0));
    }
}
