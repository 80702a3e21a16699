//! Test doubles and mounting helpers shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{Duration, Utc};
use leptos::*;
use shared::{Announcement, AnnouncementsFilter};

use crate::api::{AnnouncementsApi, RequestError};
use crate::utils::delete_dialog::DeleteDialogState;

pub fn announcement(id: &str, title: &str) -> Announcement {
    Announcement {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("{} excerpt", title),
        body: String::new(),
        publisher: "group:default/platform".to_string(),
        created_at: Utc::now() - Duration::days(1),
    }
}

/// In-memory announcements backend that records every call.
#[derive(Clone, Default)]
pub struct MockAnnouncements {
    items: Rc<RefCell<Vec<Announcement>>>,
    delete_error: Rc<RefCell<Option<RequestError>>>,
    list_calls: Rc<Cell<usize>>,
    deleted: Rc<RefCell<Vec<String>>>,
    watched_dialog: Rc<Cell<Option<RwSignal<DeleteDialogState>>>>,
    dialog_open_during_delete: Rc<Cell<Option<bool>>>,
}

impl MockAnnouncements {
    pub fn with_items(items: Vec<Announcement>) -> Self {
        let mock = Self::default();
        *mock.items.borrow_mut() = items;
        mock
    }

    pub fn failing_deletes(self, error: RequestError) -> Self {
        *self.delete_error.borrow_mut() = Some(error);
        self
    }

    /// Record whether `dialog` is open at the moment a delete arrives.
    pub fn watch_dialog(&self, dialog: RwSignal<DeleteDialogState>) {
        self.watched_dialog.set(Some(dialog));
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }

    pub fn dialog_open_during_delete(&self) -> Option<bool> {
        self.dialog_open_during_delete.get()
    }
}

impl AnnouncementsApi for MockAnnouncements {
    async fn announcements(
        &self,
        _filter: &AnnouncementsFilter,
    ) -> Result<Vec<Announcement>, RequestError> {
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self.items.borrow().clone())
    }

    async fn delete_announcement_by_id(&self, id: &str) -> Result<(), RequestError> {
        if let Some(dialog) = self.watched_dialog.get() {
            self.dialog_open_during_delete
                .set(dialog.try_with_untracked(|d| d.is_open()));
        }
        self.deleted.borrow_mut().push(id.to_string());

        if let Some(error) = self.delete_error.borrow().clone() {
            return Err(error);
        }
        self.items.borrow_mut().retain(|a| a.id != id);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::*;

#[cfg(target_arch = "wasm32")]
mod dom {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::*;
    use shared::{Permission, PermissionResult};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test_configure;

    use crate::api::alerts::provide_alerts;
    use crate::api::permissions::PermissionCache;
    use crate::config::{provide_config, AnnouncementsConfig};
    use crate::i18n::provide_i18n;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Mount `view` with the app contexts into a fresh container. The
    /// returned cache stays live, so tests can resolve permissions later.
    pub fn mount<F, V>(
        presets: &[(Permission, PermissionResult)],
        view: F,
    ) -> (web_sys::Element, PermissionCache)
    where
        F: FnOnce() -> V + 'static,
        V: IntoView,
    {
        let document = leptos::document();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        let presets = presets.to_vec();
        let slot = Rc::new(Cell::new(None));
        let cache_slot = slot.clone();
        leptos::mount_to(container.clone().unchecked_into(), move || {
            provide_config(AnnouncementsConfig::default());
            provide_i18n("en");
            provide_alerts(0);

            let permissions = PermissionCache::new();
            for (permission, result) in presets {
                permissions.preset(permission, result);
            }
            provide_context(permissions);
            cache_slot.set(Some(permissions));

            view()
        });

        (container, slot.get().unwrap())
    }

    /// Let spawned futures run to completion.
    pub async fn tick() {
        gloo_timers::future::TimeoutFuture::new(0).await;
    }

    pub fn texts(container: &web_sys::Element, selector: &str) -> Vec<String> {
        let nodes = container.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.text_content())
            .collect()
    }

    pub fn find(container: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
        container.query_selector(selector).unwrap()
    }

    pub fn click(element: &web_sys::Element) {
        element.unchecked_ref::<web_sys::HtmlElement>().click();
    }
}
