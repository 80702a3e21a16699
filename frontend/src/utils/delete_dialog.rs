//! Tracks which announcement, if any, is waiting for delete confirmation.

use shared::Announcement;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteDialogState {
    #[default]
    Idle,
    PendingConfirmation(Announcement),
}

impl DeleteDialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DeleteDialogState::PendingConfirmation(_))
    }

    pub fn target(&self) -> Option<&Announcement> {
        match self {
            DeleteDialogState::Idle => None,
            DeleteDialogState::PendingConfirmation(announcement) => Some(announcement),
        }
    }

    /// Ask for confirmation to delete `announcement`. Ignored, returning
    /// `false`, while another confirmation is pending.
    pub fn open(&mut self, announcement: Announcement) -> bool {
        if self.is_open() {
            return false;
        }
        *self = DeleteDialogState::PendingConfirmation(announcement);
        true
    }

    pub fn close(&mut self) {
        *self = DeleteDialogState::Idle;
    }

    /// Close the dialog and hand out the announcement to delete.
    pub fn confirm(&mut self) -> Option<Announcement> {
        match std::mem::take(self) {
            DeleteDialogState::Idle => None,
            DeleteDialogState::PendingConfirmation(announcement) => Some(announcement),
        }
    }
}
