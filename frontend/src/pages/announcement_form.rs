use leptos::*;
use leptos_router::*;
use shared::{
    AlertMessage, AlertSeverity, Announcement, CreateAnnouncementRequest, EntityRef, Permission,
    UpdateAnnouncementRequest,
};
use thiserror::Error;

use crate::api::alerts::{use_alerts, AlertSink};
use crate::api::permissions::use_permission;
use crate::api::use_api_client;
use crate::components::alert::Alert;
use crate::components::button::{Button, ButtonVariant};
use crate::components::loading::Loading;
use crate::components::markdown::MarkdownView;
use crate::i18n::use_i18n;
use crate::routes::{use_routes, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn permission(&self) -> Permission {
        match self {
            FormMode::Create => Permission::Create,
            FormMode::Edit => Permission::Update,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    TitleRequired,
    #[error("excerpt is required")]
    ExcerptRequired,
    #[error("publisher is not a valid entity reference")]
    InvalidPublisher,
}

impl DraftError {
    pub fn message_key(&self) -> &'static str {
        match self {
            DraftError::TitleRequired => "announcements.form.title_required",
            DraftError::ExcerptRequired => "announcements.form.excerpt_required",
            DraftError::InvalidPublisher => "announcements.form.publisher_invalid",
        }
    }
}

/// Field values of the announcement form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub excerpt: String,
    pub publisher: String,
    pub body: String,
}

impl AnnouncementDraft {
    pub fn from_announcement(announcement: &Announcement) -> Self {
        Self {
            title: announcement.title.clone(),
            excerpt: announcement.excerpt.clone(),
            publisher: announcement.publisher.clone(),
            body: announcement.body.clone(),
        }
    }

    /// Check the draft and normalize it into request fields.
    pub fn validate(&self) -> Result<AnnouncementDraft, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::TitleRequired);
        }
        let excerpt = self.excerpt.trim();
        if excerpt.is_empty() {
            return Err(DraftError::ExcerptRequired);
        }
        let publisher =
            EntityRef::parse(self.publisher.trim()).map_err(|_| DraftError::InvalidPublisher)?;

        Ok(AnnouncementDraft {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            publisher: publisher.to_string(),
            body: self.body.clone(),
        })
    }

    pub fn into_create_request(self) -> CreateAnnouncementRequest {
        CreateAnnouncementRequest {
            title: self.title,
            excerpt: self.excerpt,
            body: self.body,
            publisher: self.publisher,
        }
    }

    pub fn into_update_request(self) -> UpdateAnnouncementRequest {
        UpdateAnnouncementRequest {
            title: self.title,
            excerpt: self.excerpt,
            body: self.body,
            publisher: self.publisher,
        }
    }
}

/// Form for creating a new announcement or editing an existing one.
#[component]
pub fn AnnouncementFormPage(mode: FormMode) -> impl IntoView {
    let i18n = use_i18n();
    let routes = use_routes();
    let client = use_api_client();
    let alerts = use_alerts();
    let permission = use_permission(mode.permission());
    let navigate = use_navigate();

    let params = use_params_map();
    let announcement_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let title = create_rw_signal(String::new());
    let excerpt = create_rw_signal(String::new());
    let publisher = create_rw_signal(String::new());
    let body = create_rw_signal(String::new());

    let loading = create_rw_signal(mode == FormMode::Edit);
    let saving = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let preview_mode = create_rw_signal(false);

    let fill = move |draft: AnnouncementDraft| {
        title.set(draft.title);
        excerpt.set(draft.excerpt);
        publisher.set(draft.publisher);
        body.set(draft.body);
    };

    // Load the announcement being edited
    let client_for_load = client.clone();
    create_effect(move |_| {
        if mode != FormMode::Edit {
            return;
        }
        let id = announcement_id();
        if id.is_empty() {
            return;
        }

        let client = client_for_load.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match client.announcement_by_id(&id).await {
                Ok(announcement) => {
                    fill(AnnouncementDraft::from_announcement(&announcement));
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    });

    let on_submit = {
        let routes = routes.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let draft = AnnouncementDraft {
                title: title.get(),
                excerpt: excerpt.get(),
                publisher: publisher.get(),
                body: body.get(),
            };
            let draft = match draft.validate() {
                Ok(draft) => draft,
                Err(e) => {
                    error.set(Some(i18n.t(e.message_key())));
                    return;
                }
            };

            saving.set(true);
            error.set(None);

            let client = client.clone();
            let routes = routes.clone();
            let navigate = navigate.clone();
            let id = announcement_id();
            wasm_bindgen_futures::spawn_local(async move {
                let (result, success_key) = match mode {
                    FormMode::Create => (
                        client.create_announcement(draft.into_create_request()).await,
                        "announcements.created",
                    ),
                    FormMode::Edit => (
                        client
                            .update_announcement(&id, draft.into_update_request())
                            .await,
                        "announcements.updated",
                    ),
                };
                saving.try_set(false);

                match result {
                    Ok(saved) => {
                        alerts.post(AlertMessage::success(i18n.t(success_key)));
                        navigate(&routes.path(&Route::View { id: saved.id }), Default::default());
                    }
                    Err(e) => {
                        error.try_set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let heading = match mode {
        FormMode::Create => i18n.t("announcements.form.create_title"),
        FormMode::Edit => i18n.t("announcements.form.edit_title"),
    };
    let submit_text = store_value(match mode {
        FormMode::Create => i18n.t("announcements.form.create"),
        FormMode::Edit => i18n.t("announcements.form.save_changes"),
    });
    let cancel_href = match mode {
        FormMode::Create => routes.path(&Route::List),
        FormMode::Edit => routes.path(&Route::View {
            id: announcement_id(),
        }),
    };

    let body_signal = Signal::derive(move || body.get());
    let submit_disabled = move || saving.get() || !permission.get().granted();

    view! {
        <div class="page announcement-form-page">
            <h1 class="page-title">{heading}</h1>

            {move || error.get().map(|e| view! {
                <Alert severity=AlertSeverity::Error>{e}</Alert>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form class="announcement-form" on:submit=on_submit.clone()>
                    <div class="form-group">
                        <label class="form-label" for="announcement-title">
                            {i18n.t("announcements.form.title")}
                        </label>
                        <input
                            type="text"
                            id="announcement-title"
                            class="form-input"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="announcement-excerpt">
                            {i18n.t("announcements.form.excerpt")}
                        </label>
                        <input
                            type="text"
                            id="announcement-excerpt"
                            class="form-input"
                            prop:value=move || excerpt.get()
                            on:input=move |ev| excerpt.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="announcement-publisher">
                            {i18n.t("announcements.form.publisher")}
                        </label>
                        <input
                            type="text"
                            id="announcement-publisher"
                            class="form-input"
                            placeholder="group:default/platform"
                            prop:value=move || publisher.get()
                            on:input=move |ev| publisher.set(event_target_value(&ev))
                            required
                        />
                        <span class="form-hint">{i18n.t("announcements.form.publisher_hint")}</span>
                    </div>

                    <div class="form-group">
                        <div class="form-label-row">
                            <label class="form-label" for="announcement-body">
                                {i18n.t("announcements.form.body")}
                            </label>
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_| preview_mode.update(|v| *v = !*v))
                            >
                                {move || if preview_mode.get() {
                                    i18n.t("common.edit")
                                } else {
                                    i18n.t("announcements.form.preview")
                                }}
                            </Button>
                        </div>
                        <Show
                            when=move || !preview_mode.get()
                            fallback=move || view! { <MarkdownView content=body_signal /> }
                        >
                            <textarea
                                id="announcement-body"
                                class="form-input announcement-body-input"
                                rows="12"
                                prop:value=move || body.get()
                                on:input=move |ev| body.set(event_target_value(&ev))
                            />
                        </Show>
                    </div>

                    <div class="form-actions">
                        <a class="btn btn-outline" href=cancel_href.clone()>{i18n.t("common.cancel")}</a>
                        <Button
                            variant=ButtonVariant::Primary
                            button_type="submit"
                            disabled=Signal::derive(submit_disabled)
                        >
                            {move || if saving.get() {
                                i18n.t("announcements.form.saving")
                            } else {
                                submit_text.get_value()
                            }}
                        </Button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, excerpt: &str, publisher: &str) -> AnnouncementDraft {
        AnnouncementDraft {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            publisher: publisher.to_string(),
            body: "Details".to_string(),
        }
    }

    #[test]
    fn test_validate_normalizes_fields() {
        let valid = draft("  Outage ", " Tonight ", "Group:platform").validate().unwrap();
        assert_eq!(valid.title, "Outage");
        assert_eq!(valid.excerpt, "Tonight");
        assert_eq!(valid.publisher, "group:default/platform");
        assert_eq!(valid.body, "Details");
    }

    #[test]
    fn test_validate_reports_first_problem() {
        assert_eq!(
            draft(" ", "", "").validate(),
            Err(DraftError::TitleRequired)
        );
        assert_eq!(
            draft("Outage", "", "user:jdoe").validate(),
            Err(DraftError::ExcerptRequired)
        );
        assert_eq!(
            draft("Outage", "Tonight", "jdoe").validate(),
            Err(DraftError::InvalidPublisher)
        );
    }

    #[test]
    fn test_mode_permission() {
        assert_eq!(FormMode::Create.permission(), Permission::Create);
        assert_eq!(FormMode::Edit.permission(), Permission::Update);
    }

    #[test]
    fn test_error_message_keys_exist() {
        let en: std::collections::HashMap<String, String> =
            serde_json::from_str(include_str!("../translations/en.json")).unwrap();
        for e in [
            DraftError::TitleRequired,
            DraftError::ExcerptRequired,
            DraftError::InvalidPublisher,
        ] {
            assert!(en.contains_key(e.message_key()), "{}", e.message_key());
        }
    }
}
