use leptos::*;

/// Modal dialog with a title bar. Closes on backdrop click.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let close = move |_| on_close.call(());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" role="dialog" aria-modal="true" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" type="button" on:click=close>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
