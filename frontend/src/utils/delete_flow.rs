//! Confirmed deletion of an announcement.
//!
//! The dialog is closed before the delete request goes out, the outcome is
//! reported through the alert sink, and the list is refreshed either way so
//! the grid reconciles with the server.

use leptos::logging::warn;
use leptos::*;
use shared::{AlertMessage, Announcement};

use crate::api::alerts::{AlertApi, AlertSink};
use crate::api::{AnnouncementsApi, RequestError};
use crate::utils::delete_dialog::DeleteDialogState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(RequestError),
}

/// Delete `announcement`, post the result, then call `refresh` exactly once.
///
/// A failed delete leaves the currently rendered list untouched.
pub async fn delete_and_refresh<C, S, R>(
    client: &C,
    alerts: &S,
    announcement: &Announcement,
    success_message: &str,
    refresh: R,
) -> DeleteOutcome
where
    C: AnnouncementsApi,
    S: AlertSink,
    R: FnOnce(),
{
    let outcome = match client.delete_announcement_by_id(&announcement.id).await {
        Ok(()) => {
            alerts.post(AlertMessage::success(success_message));
            DeleteOutcome::Deleted
        }
        Err(e) => {
            warn!("Failed to delete announcement {}: {}", announcement.id, e);
            alerts.post(AlertMessage::error(e.to_string()));
            DeleteOutcome::Failed(e)
        }
    };

    refresh();
    outcome
}

/// Creates the confirm handler of the delete dialog.
///
/// # Arguments
/// * `client` - Client used for the delete call
/// * `dialog` - Dialog state; closed synchronously when the handler runs
/// * `alerts` - Sink for the success or error notification
/// * `success_message` - Message posted after a successful delete
/// * `refresh` - Re-fetches the list once the delete has settled; it may
///   run after the grid is gone and must tolerate that
pub fn create_confirm_delete_handler<C, R>(
    client: C,
    dialog: RwSignal<DeleteDialogState>,
    alerts: AlertApi,
    success_message: String,
    refresh: R,
) -> impl Fn() + Clone + 'static
where
    C: AnnouncementsApi + Clone + 'static,
    R: Fn() + Copy + 'static,
{
    move || {
        let Some(target) = dialog.try_update(|d| d.confirm()).flatten() else {
            return;
        };

        let client = client.clone();
        let success_message = success_message.clone();
        wasm_bindgen_futures::spawn_local(async move {
            delete_and_refresh(&client, &alerts, &target, &success_message, refresh).await;
        });
    }
}
