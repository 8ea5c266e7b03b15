//! A host delegate that serves fixed actions and records every callback.

use swipekit_cell::{
    Action, ActionId, ActionInvocation, AnimationTicket, CellId, Orientation, RowId,
    SwipeDelegate, SwipeOptions,
};

/// One callback received from the list.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    WillBeginEditing { row: RowId, orientation: Orientation },
    DidEndEditing { row: RowId, orientation: Orientation },
    EditingStateChanged { row: RowId, active: bool },
    ActionHandled { row: RowId, action: ActionId },
    RowDeleted { row: RowId },
    ListPanEnabled(bool),
    Deselected { row: RowId },
    ExpansionFeedback { row: RowId, expanded: bool },
    AnimationFinished {
        cell: CellId,
        ticket: AnimationTicket,
        finished: bool,
    },
}

/// Serves the same actions and options to every row.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    left_actions: Vec<Action>,
    right_actions: Vec<Action>,
    left_options: SwipeOptions,
    right_options: SwipeOptions,
    selected: Vec<RowId>,
    events: Vec<HostEvent>,
    invocations: Vec<ActionInvocation>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(mut self, orientation: Orientation, actions: Vec<Action>) -> Self {
        match orientation {
            Orientation::Left => self.left_actions = actions,
            Orientation::Right => self.right_actions = actions,
        }
        self
    }

    pub fn with_options(mut self, orientation: Orientation, options: SwipeOptions) -> Self {
        match orientation {
            Orientation::Left => self.left_options = options,
            Orientation::Right => self.right_options = options,
        }
        self
    }

    pub fn with_selected_rows(mut self, rows: Vec<RowId>) -> Self {
        self.selected = rows;
        self
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn count(&self, event: &HostEvent) -> usize {
        self.events.iter().filter(|seen| *seen == event).count()
    }

    /// `true`/`false` editing transitions reported for `row`, in order.
    pub fn editing_changes(&self, row: RowId) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::EditingStateChanged { row: changed, active } if *changed == row => {
                    Some(*active)
                }
                _ => None,
            })
            .collect()
    }

    pub fn invocations(&self) -> &[ActionInvocation] {
        &self.invocations
    }

    pub fn last_invocation(&self) -> Option<&ActionInvocation> {
        self.invocations.last()
    }

    pub fn deleted_rows(&self) -> Vec<RowId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::RowDeleted { row } => Some(*row),
                _ => None,
            })
            .collect()
    }

    pub fn selected_rows_now(&self) -> &[RowId] {
        &self.selected
    }
}

impl SwipeDelegate for RecordingDelegate {
    fn edit_actions(&mut self, _row: RowId, orientation: Orientation) -> Option<Vec<Action>> {
        let actions = match orientation {
            Orientation::Left => &self.left_actions,
            Orientation::Right => &self.right_actions,
        };
        (!actions.is_empty()).then(|| actions.clone())
    }

    fn edit_options(&mut self, _row: RowId, orientation: Orientation) -> SwipeOptions {
        match orientation {
            Orientation::Left => self.left_options.clone(),
            Orientation::Right => self.right_options.clone(),
        }
    }

    fn will_begin_editing(&mut self, row: RowId, orientation: Orientation) {
        self.events.push(HostEvent::WillBeginEditing { row, orientation });
    }

    fn did_end_editing(&mut self, row: RowId, orientation: Orientation) {
        self.events.push(HostEvent::DidEndEditing { row, orientation });
    }

    fn editing_state_changed(&mut self, row: RowId, active: bool) {
        self.events.push(HostEvent::EditingStateChanged { row, active });
    }

    fn handle_action(&mut self, invocation: ActionInvocation) {
        self.events.push(HostEvent::ActionHandled {
            row: invocation.row,
            action: invocation.action.id.clone(),
        });
        self.invocations.push(invocation);
    }

    fn delete_row(&mut self, row: RowId) {
        self.events.push(HostEvent::RowDeleted { row });
    }

    fn set_list_pan_enabled(&mut self, enabled: bool) {
        self.events.push(HostEvent::ListPanEnabled(enabled));
    }

    fn selected_rows(&self) -> Vec<RowId> {
        self.selected.clone()
    }

    fn deselect_row(&mut self, row: RowId) {
        self.selected.retain(|selected| *selected != row);
        self.events.push(HostEvent::Deselected { row });
    }

    fn expansion_feedback(&mut self, row: RowId, expanded: bool) {
        self.events.push(HostEvent::ExpansionFeedback { row, expanded });
    }

    fn swipe_animation_finished(&mut self, cell: CellId, ticket: AnimationTicket, finished: bool) {
        self.events.push(HostEvent::AnimationFinished {
            cell,
            ticket,
            finished,
        });
    }
}
