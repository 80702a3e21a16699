use leptos::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::Modal;
use crate::i18n::use_i18n;

/// Asks the user to confirm deleting an announcement.
#[component]
pub fn DeleteAnnouncementDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <Modal title=i18n.t("announcements.delete_title") on_close=on_cancel>
                <p class="modal-text">{i18n.t("announcements.delete_confirm")}</p>
                <div class="modal-footer">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| on_cancel.call(()))
                    >
                        {i18n.t("common.cancel")}
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| on_confirm.call(()))
                    >
                        {i18n.t("common.delete")}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
