//! Bookkeeping for the list-wide side of swiping: which cell is dragging,
//! which cell listens for list scrolls, and whether the list may scroll.

use crate::delegate::{CellId, SwipeDelegate};

#[derive(Debug)]
pub(crate) struct ListCoordinator {
    dragging: Option<CellId>,
    scroll_observer: Option<CellId>,
    list_pan_enabled: bool,
}

impl ListCoordinator {
    pub(crate) fn new() -> Self {
        Self {
            dragging: None,
            scroll_observer: None,
            list_pan_enabled: true,
        }
    }

    pub(crate) fn dragging(&self) -> Option<CellId> {
        self.dragging
    }

    pub(crate) fn scroll_observer(&self) -> Option<CellId> {
        self.scroll_observer
    }

    pub(crate) fn list_pan_enabled(&self) -> bool {
        self.list_pan_enabled
    }

    /// Suppresses the list's own scrolling while `id` is dragged.
    pub(crate) fn begin_drag(&mut self, id: CellId, delegate: &mut dyn SwipeDelegate) {
        self.dragging = Some(id);
        self.set_list_pan_enabled(false, delegate);
    }

    pub(crate) fn end_drag(&mut self, id: CellId, delegate: &mut dyn SwipeDelegate) {
        if self.dragging != Some(id) {
            return;
        }
        self.dragging = None;
        self.set_list_pan_enabled(true, delegate);
    }

    /// Only the most recently opened cell hears about list scrolls.
    pub(crate) fn register_scroll_observer(&mut self, id: CellId) {
        if let Some(previous) = self.scroll_observer.replace(id) {
            if previous != id {
                log::trace!("scroll observer {} -> {}", previous, id);
            }
        }
    }

    /// Drops every reference to a cell leaving the list.
    pub(crate) fn forget(&mut self, id: CellId, delegate: &mut dyn SwipeDelegate) {
        if self.scroll_observer == Some(id) {
            self.scroll_observer = None;
        }
        self.end_drag(id, delegate);
    }

    fn set_list_pan_enabled(&mut self, enabled: bool, delegate: &mut dyn SwipeDelegate) {
        if self.list_pan_enabled == enabled {
            return;
        }
        self.list_pan_enabled = enabled;
        delegate.set_list_pan_enabled(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::delegate::RowId;
    use crate::orientation::Orientation;

    #[derive(Default)]
    struct PanToggles(Vec<bool>);

    impl SwipeDelegate for PanToggles {
        fn edit_actions(&mut self, _row: RowId, _orientation: Orientation) -> Option<Vec<Action>> {
            None
        }

        fn set_list_pan_enabled(&mut self, enabled: bool) {
            self.0.push(enabled);
        }
    }

    #[test]
    fn drag_toggles_list_pan_once() {
        let mut host = PanToggles::default();
        let mut coordinator = ListCoordinator::new();
        coordinator.begin_drag(CellId(0), &mut host);
        coordinator.begin_drag(CellId(0), &mut host);
        assert!(!coordinator.list_pan_enabled());
        coordinator.end_drag(CellId(1), &mut host);
        assert!(!coordinator.list_pan_enabled());
        coordinator.end_drag(CellId(0), &mut host);
        assert_eq!(host.0, vec![false, true]);
    }

    #[test]
    fn forgetting_a_cell_releases_it() {
        let mut host = PanToggles::default();
        let mut coordinator = ListCoordinator::new();
        coordinator.register_scroll_observer(CellId(2));
        coordinator.begin_drag(CellId(2), &mut host);
        coordinator.forget(CellId(2), &mut host);
        assert_eq!(coordinator.scroll_observer(), None);
        assert_eq!(coordinator.dragging(), None);
        assert!(coordinator.list_pan_enabled());
    }
}
