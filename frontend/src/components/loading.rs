use leptos::*;

/// Indeterminate progress indicator.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="progressbar" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
