use leptos::*;
use leptos_router::*;
use shared::{AlertSeverity, Announcement, Permission};

use crate::api::permissions::use_permission;
use crate::api::use_api_client;
use crate::components::alert::Alert;
use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::entity_peek::EntityRefLink;
use crate::components::loading::Loading;
use crate::components::markdown::MarkdownView;
use crate::i18n::use_i18n;
use crate::routes::{use_routes, Route};
use crate::utils::fetch_state::{settle_fetch, FetchState, FetchTracker};
use crate::utils::format_relative_now;

/// Body shown on the detail page; announcements without a body show their
/// excerpt instead.
pub fn display_body(announcement: &Announcement) -> &str {
    if announcement.body.trim().is_empty() {
        &announcement.excerpt
    } else {
        &announcement.body
    }
}

#[component]
pub fn AnnouncementPage() -> impl IntoView {
    let i18n = use_i18n();
    let routes = use_routes();
    let client = use_api_client();
    let can_update = use_permission(Permission::Update);

    let params = use_params_map();
    let announcement_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let state = create_rw_signal(FetchState::<Announcement>::Loading);
    let tracker = store_value(FetchTracker::default());

    // Reload whenever the id changes; a slower earlier response loses
    create_effect(move |_| {
        let id = announcement_id();
        if id.is_empty() {
            return;
        }
        let Some(ticket) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };

        state.set(FetchState::Loading);
        let client = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = client.announcement_by_id(&id).await;
            settle_fetch(tracker, ticket, state, FetchState::from_result(result));
        });
    });

    let list_href = routes.path(&Route::List);

    view! {
        <div class="page announcement-page">
            <a class="back-link" href=list_href>{i18n.t("announcements.back")}</a>

            {move || match state.get() {
                FetchState::Loading => view! { <Loading /> }.into_view(),
                FetchState::Failed(message) => view! {
                    <Alert severity=AlertSeverity::Error>{message}</Alert>
                }
                .into_view(),
                FetchState::Loaded(announcement) => {
                    let edit_href = routes.path(&Route::Edit { id: announcement.id.clone() });
                    let body = display_body(&announcement).to_string();
                    view! {
                        <article class="announcement">
                            <header class="announcement-header">
                                <h1 class="announcement-title">{announcement.title.clone()}</h1>
                                <p class="announcement-meta">
                                    {i18n.t("announcements.by")} " "
                                    <EntityRefLink reference=announcement.publisher.clone() />
                                    ", "
                                    <time datetime=announcement.created_at.to_rfc3339()>
                                        {format_relative_now(announcement.created_at)}
                                    </time>
                                </p>
                                <Show when=move || can_update.get().granted() fallback=|| ()>
                                    <LinkButton href=edit_href.clone() variant=ButtonVariant::Outline>
                                        {i18n.t("common.edit")}
                                    </LinkButton>
                                </Show>
                            </header>
                            <MarkdownView content=body />
                        </article>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn announcement(excerpt: &str, body: &str) -> Announcement {
        Announcement {
            id: "1".to_string(),
            title: "Title".to_string(),
            excerpt: excerpt.to_string(),
            body: body.to_string(),
            publisher: "user:jdoe".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_display_body_prefers_body() {
        assert_eq!(display_body(&announcement("short", "# Long")), "# Long");
    }

    #[test]
    fn test_display_body_falls_back_to_excerpt() {
        assert_eq!(display_body(&announcement("short", "  \n")), "short");
    }
}
