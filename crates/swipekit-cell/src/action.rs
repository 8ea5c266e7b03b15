//! Action descriptors shown in a cell's action row.

use swipekit_graphics::Color;

use crate::expansion::FulfillmentStyle;

/// Host-chosen identity of an action, echoed back on invocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionId(pub String);

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        ActionId(id.to_owned())
    }
}

/// Opaque icon handle resolved by the host's renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    Destructive,
}

impl ActionStyle {
    pub fn background_color(self) -> Color {
        match self {
            ActionStyle::Default => Color::ACTION_GRAY,
            ActionStyle::Destructive => Color::DESTRUCTIVE_RED,
        }
    }
}

/// One button in an action row.
///
/// Actions are plain values; what happens when one is selected is decided
/// by the host when it receives the matching
/// [`ActionInvocation`](crate::delegate::ActionInvocation).
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub id: ActionId,
    pub title: Option<String>,
    pub icon: Option<IconId>,
    pub style: ActionStyle,
    pub background_color: Color,
    pub text_color: Color,
    /// Return the cell to center once the action has been handled.
    pub hides_when_selected: bool,
    /// How the host intends to fulfill a fill completion for this action.
    pub fulfillment_style: Option<FulfillmentStyle>,
}

impl Action {
    pub fn new(id: impl Into<ActionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            icon: None,
            style: ActionStyle::Default,
            background_color: ActionStyle::Default.background_color(),
            text_color: Color::WHITE,
            hides_when_selected: false,
            fulfillment_style: None,
        }
    }

    /// Destructive action with the platform red background.
    pub fn destructive(id: impl Into<ActionId>, title: impl Into<String>) -> Self {
        Self::new(id, title).with_style(ActionStyle::Destructive)
    }

    /// Setting a style also resets the background to that style's color.
    pub fn with_style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self.background_color = style.background_color();
        self
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn hides_when_selected(mut self, hides: bool) -> Self {
        self.hides_when_selected = hides;
        self
    }

    pub fn with_fulfillment_style(mut self, style: FulfillmentStyle) -> Self {
        self.fulfillment_style = Some(style);
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.style == ActionStyle::Destructive
    }
}
