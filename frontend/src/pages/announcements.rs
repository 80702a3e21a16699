use leptos::*;
use shared::{AlertSeverity, Announcement, Permission, PermissionResult};

use crate::api::alerts::use_alerts;
use crate::api::permissions::use_permission;
use crate::api::{use_api_client, AnnouncementsApi};
use crate::components::alert::Alert;
use crate::components::announcement_card::AnnouncementCard;
use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::card::CardGrid;
use crate::components::delete_announcement_dialog::DeleteAnnouncementDialog;
use crate::components::loading::Loading;
use crate::components::page_header::{ContentHeader, Header};
use crate::config::use_config;
use crate::i18n::use_i18n;
use crate::routes::{use_routes, Route};
use crate::utils::delete_dialog::DeleteDialogState;
use crate::utils::delete_flow::create_confirm_delete_handler;
use crate::utils::fetch_state::{create_announcements_loader, FetchState};

/// The create button is always rendered; it only becomes usable once the
/// permission resolved to allowed.
pub fn create_button_disabled(permission: PermissionResult) -> bool {
    !permission.granted()
}

#[component]
pub fn AnnouncementsPage(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let config = use_config();
    let i18n = use_i18n();
    let can_create = use_permission(Permission::Create);

    let title = title.unwrap_or(config.page_title);
    let subtitle = subtitle.or(config.page_subtitle);
    let create_href = use_routes().path(&Route::Create);

    view! {
        <div class="page announcements-page">
            <Header title=title subtitle=subtitle />

            <div class="page-content">
                <ContentHeader>
                    <LinkButton
                        href=create_href
                        variant=ButtonVariant::Primary
                        disabled=Signal::derive(move || create_button_disabled(can_create.get()))
                    >
                        {i18n.t("announcements.new")}
                    </LinkButton>
                </ContentHeader>

                <AnnouncementsGrid />
            </div>
        </div>
    }
}

/// The announcement grid, backed by the configured API.
#[component]
pub fn AnnouncementsGrid() -> impl IntoView {
    view! { <AnnouncementsGridView client=use_api_client() /> }
}

/// Fetches the announcements through `client`, renders them as cards and
/// runs the delete confirmation flow.
#[component]
pub fn AnnouncementsGridView<C>(client: C) -> impl IntoView
where
    C: AnnouncementsApi + Clone + 'static,
{
    let i18n = use_i18n();
    let alerts = use_alerts();

    let state = create_rw_signal(FetchState::<Vec<Announcement>>::Loading);
    let dialog = create_rw_signal(DeleteDialogState::default());

    let refresh = create_announcements_loader(client.clone(), state);

    // Load on mount
    refresh();

    let on_confirm = create_confirm_delete_handler(
        client,
        dialog,
        alerts,
        i18n.t("announcements.deleted"),
        refresh,
    );

    let on_cancel = move |_| dialog.update(|d| d.close());

    let request_delete = move |announcement: Announcement| {
        dialog.update(|d| {
            d.open(announcement);
        });
    };

    view! {
        {move || match state.get() {
            FetchState::Loading => view! { <Loading /> }.into_view(),
            FetchState::Failed(message) => view! {
                <Alert severity=AlertSeverity::Error>{message}</Alert>
            }
            .into_view(),
            FetchState::Loaded(announcements) if announcements.is_empty() => view! {
                <div class="empty-state">
                    <p>{i18n.t("announcements.empty")}</p>
                </div>
            }
            .into_view(),
            FetchState::Loaded(announcements) => view! {
                <CardGrid>
                    {announcements
                        .into_iter()
                        .map(|announcement| {
                            let target = announcement.clone();
                            view! {
                                <AnnouncementCard
                                    announcement=announcement
                                    on_delete=Callback::new(move |_| request_delete(target.clone()))
                                />
                            }
                        })
                        .collect_view()}
                </CardGrid>
            }
            .into_view(),
        }}

        <DeleteAnnouncementDialog
            open=Signal::derive(move || dialog.with(|d| d.is_open()))
            on_cancel=Callback::new(on_cancel)
            on_confirm=Callback::new(move |_| on_confirm())
        />
    }
}
