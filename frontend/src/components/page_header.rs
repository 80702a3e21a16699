use leptos::*;

/// Title bar at the top of a page.
#[component]
pub fn Header(
    #[prop(into)] title: String,
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-subtitle">{s}</p> })}
        </header>
    }
}

/// Row above the page content holding page-level actions.
#[component]
pub fn ContentHeader(
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="content-header">
            <h2 class="content-header-title">{title}</h2>
            <div class="content-header-actions">{children()}</div>
        </div>
    }
}
