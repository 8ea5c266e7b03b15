//! Which edge a cell's actions are anchored to, and the cell's swipe state.

/// Edge of the cell the revealed action row is attached to.
///
/// Left actions are uncovered by dragging the cell to the right, so their
/// offsets are positive; right actions use negative offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// Sign that turns a magnitude into a cell offset for this orientation.
    pub fn scale(self) -> f32 {
        match self {
            Orientation::Left => 1.0,
            Orientation::Right => -1.0,
        }
    }

    /// Orientation whose actions an offset reveals; `None` at rest.
    pub fn for_offset(offset: f32) -> Option<Orientation> {
        if offset > 0.0 {
            Some(Orientation::Left)
        } else if offset < 0.0 {
            Some(Orientation::Right)
        } else {
            None
        }
    }

    /// Orientation implied by a drag's horizontal velocity.
    ///
    /// Rightward motion reveals the left actions.
    pub fn for_velocity(velocity_x: f32) -> Orientation {
        if velocity_x > 0.0 {
            Orientation::Left
        } else {
            Orientation::Right
        }
    }

    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }
}

/// Swipe lifecycle of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipeState {
    #[default]
    Center,
    Dragging,
    AnimatingToCenter,
    Left,
    Right,
}

impl SwipeState {
    /// Resting with the action row fully visible.
    pub fn is_active(self) -> bool {
        matches!(self, SwipeState::Left | SwipeState::Right)
    }

    pub fn is_dragging(self) -> bool {
        self == SwipeState::Dragging
    }

    /// Anything other than resting closed.
    pub fn is_engaged(self) -> bool {
        self != SwipeState::Center
    }

    pub fn orientation(self) -> Option<Orientation> {
        match self {
            SwipeState::Left => Some(Orientation::Left),
            SwipeState::Right => Some(Orientation::Right),
            _ => None,
        }
    }
}

impl From<Orientation> for SwipeState {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Left => SwipeState::Left,
            Orientation::Right => SwipeState::Right,
        }
    }
}
