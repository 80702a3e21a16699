use std::fmt::Display;

use leptos::logging::error;
use leptos::*;
use shared::{Announcement, AnnouncementsFilter};

use crate::api::AnnouncementsApi;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> FetchState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Hands out tickets for fetches so that only the most recently issued one
/// may write its result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTracker {
    latest: u64,
}

impl FetchTracker {
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Store `result` unless a newer fetch was issued after `ticket` or the
/// owner of `tracker` and `state` is gone. Returns whether it was stored.
pub fn settle_fetch<T: 'static>(
    tracker: StoredValue<FetchTracker>,
    ticket: FetchTicket,
    state: RwSignal<FetchState<T>>,
    result: FetchState<T>,
) -> bool {
    if tracker.try_with_value(|t| t.is_current(ticket)) != Some(true) {
        return false;
    }
    state.try_set(result).is_none()
}

/// Creates the loader of the announcement list.
///
/// Each call issues a new fetch and only the latest one ends up in `state`.
/// Calls made after the owning component was unmounted do nothing.
pub fn create_announcements_loader<C>(
    client: C,
    state: RwSignal<FetchState<Vec<Announcement>>>,
) -> impl Fn() + Copy + 'static
where
    C: AnnouncementsApi + Clone + 'static,
{
    let client = store_value(client);
    let tracker = store_value(FetchTracker::default());

    move || {
        let Some(ticket) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };
        let Some(client) = client.try_with_value(|c| c.clone()) else {
            return;
        };
        state.try_set(FetchState::Loading);

        wasm_bindgen_futures::spawn_local(async move {
            let result = client
                .announcements(&AnnouncementsFilter::default())
                .await;
            if let Err(e) = &result {
                error!("Failed to load announcements: {}", e);
            }
            settle_fetch(tracker, ticket, state, FetchState::from_result(result));
        });
    }
}
