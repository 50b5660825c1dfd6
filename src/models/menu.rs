use super::schedule::ScheduleId;

/// Page coordinates of a floating row menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuAnchor {
    pub left: f64,
    pub top: f64,
}

/// Which row action menu is open, if any. At most one is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    open: Option<(ScheduleId, MenuAnchor)>,
}

impl MenuState {
    pub fn open_menu(&self) -> Option<(ScheduleId, MenuAnchor)> {
        self.open
    }

    pub fn is_open(&self, id: ScheduleId) -> bool {
        matches!(self.open, Some((open_id, _)) if open_id == id)
    }

    /// Opens the menu for `id`, closing any other. Toggling the menu that is
    /// already open closes it.
    pub fn toggle(&mut self, id: ScheduleId, anchor: Option<MenuAnchor>) {
        self.open = match self.open {
            Some((open_id, _)) if open_id == id => None,
            _ => Some((id, anchor.unwrap_or_default())),
        };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Drops the open menu when its record no longer exists.
    pub fn retain(&mut self, exists: impl Fn(ScheduleId) -> bool) {
        if let Some((id, _)) = self.open {
            if !exists(id) {
                self.open = None;
            }
        }
    }
}
