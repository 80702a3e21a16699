use leptos::*;
use shared::{Announcement, Permission};

use crate::api::permissions::use_permission;
use crate::components::button::{Button, ButtonVariant, LinkButton};
use crate::components::card::{Card, CardActions, CardContent, CardHeader};
use crate::components::entity_peek::EntityRefLink;
use crate::i18n::use_i18n;
use crate::routes::{use_routes, Route};
use crate::utils::format_relative_now;

/// A card summarizing one announcement.
///
/// Edit and delete controls only appear once the matching permission has
/// resolved to allowed. The delete control only reports the request through
/// `on_delete`; it performs no request itself.
#[component]
pub fn AnnouncementCard(
    announcement: Announcement,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let routes = use_routes();
    let can_update = use_permission(Permission::Update);
    let can_delete = use_permission(Permission::Delete);

    let view_href = routes.path(&Route::View {
        id: announcement.id.clone(),
    });
    let edit_href = routes.path(&Route::Edit {
        id: announcement.id.clone(),
    });

    let created_at = announcement.created_at.to_rfc3339();
    let created_relative = format_relative_now(announcement.created_at);

    let title = view! {
        <a class="announcement-card-title" href=view_href>{announcement.title.clone()}</a>
    }
    .into_view();

    let subtitle = view! {
        <span class="announcement-card-subtitle">
            {i18n.t("announcements.by")} " "
            <EntityRefLink reference=announcement.publisher.clone() />
            ", "
            <time datetime=created_at>{created_relative}</time>
        </span>
    }
    .into_view();

    view! {
        <Card class="announcement-card">
            <CardHeader title=title subtitle=subtitle />
            <CardContent>{announcement.excerpt.clone()}</CardContent>
            <CardActions>
                <Show when=move || can_update.get().granted() fallback=|| ()>
                    <LinkButton
                        href=edit_href.clone()
                        variant=ButtonVariant::Outline
                        title=i18n.t("common.edit")
                    >
                        "✎"
                    </LinkButton>
                </Show>
                <Show when=move || can_delete.get().granted() fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Outline
                        title=i18n.t("common.delete")
                        on_click=Callback::new(move |_| on_delete.call(()))
                    >
                        "🗑"
                    </Button>
                </Show>
            </CardActions>
        </Card>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{Duration, Utc};
    use shared::PermissionResult;
    use wasm_bindgen_test::*;

    use crate::testing::{announcement, click, find, mount};

    fn mount_card(
        announcement: Announcement,
        permissions: &[(Permission, PermissionResult)],
    ) -> web_sys::Element {
        let (container, _) = mount(permissions, move || {
            view! { <AnnouncementCard announcement=announcement on_delete=Callback::new(|_| ()) /> }
        });
        container
    }

    fn text_of(container: &web_sys::Element, selector: &str) -> Option<String> {
        find(container, selector).and_then(|e| e.text_content())
    }

    #[wasm_bindgen_test]
    fn test_card_renders_title_publisher_and_age() {
        let mut item = announcement("1", "A");
        item.created_at = Utc::now() - Duration::days(3);
        let container = mount_card(item, &[]);

        assert_eq!(text_of(&container, ".announcement-card-title").as_deref(), Some("A"));
        assert_eq!(text_of(&container, ".entity-ref").as_deref(), Some("platform"));
        assert_eq!(text_of(&container, "time").as_deref(), Some("3 days ago"));
        assert_eq!(text_of(&container, ".card-body").as_deref(), Some("A excerpt"));
        assert_eq!(
            find(&container, ".announcement-card-title")
                .and_then(|e| e.get_attribute("href"))
                .as_deref(),
            Some("/announcements/view/1")
        );
    }

    #[wasm_bindgen_test]
    fn test_controls_hidden_while_permissions_load() {
        let container = mount_card(
            announcement("2", "B"),
            &[
                (Permission::Update, PermissionResult::LOADING),
                (Permission::Delete, PermissionResult::LOADING),
            ],
        );

        assert!(find(&container, ".card-actions .btn").is_none());
    }

    #[wasm_bindgen_test]
    fn test_denied_delete_hides_delete_whatever_update_says() {
        for update in [true, false] {
            let container = mount_card(
                announcement("3", "C"),
                &[
                    (Permission::Update, PermissionResult::resolved(update)),
                    (Permission::Delete, PermissionResult::resolved(false)),
                ],
            );

            assert!(find(&container, ".card-actions button.btn").is_none());
            assert_eq!(find(&container, ".card-actions a.btn").is_some(), update);
        }
    }

    #[wasm_bindgen_test]
    fn test_granted_controls_link_to_edit_and_report_delete() {
        let requested = Rc::new(Cell::new(0));
        let counter = requested.clone();
        let (container, _) = mount(
            &[
                (Permission::Update, PermissionResult::resolved(true)),
                (Permission::Delete, PermissionResult::resolved(true)),
            ],
            move || {
                view! {
                    <AnnouncementCard
                        announcement=announcement("4", "D")
                        on_delete=Callback::new(move |_| counter.set(counter.get() + 1))
                    />
                }
            },
        );

        assert_eq!(
            find(&container, ".card-actions a.btn")
                .and_then(|e| e.get_attribute("href"))
                .as_deref(),
            Some("/announcements/edit/4")
        );

        click(&find(&container, ".card-actions button.btn").unwrap());
        assert_eq!(requested.get(), 1);
    }
}
