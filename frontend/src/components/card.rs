use leptos::*;

fn with_extra_class(base: &str, extra: Option<String>) -> String {
    match extra {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Card container component.
#[component]
pub fn Card(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=with_extra_class("card", class)>
            {children()}
        </div>
    }
}

/// Card header with a title line and an optional subtitle line.
#[component]
pub fn CardHeader(
    title: View,
    #[prop(optional)] subtitle: Option<View>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h3 class="card-title">{title}</h3>
            {subtitle.map(|s| view! { <div class="card-subtitle">{s}</div> })}
        </div>
    }
}

/// Card body section.
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! {
        <div class="card-body">
            {children()}
        </div>
    }
}

/// Row of actions at the bottom of a card.
#[component]
pub fn CardActions(children: Children) -> impl IntoView {
    view! {
        <div class="card-footer card-actions">
            {children()}
        </div>
    }
}

/// Responsive grid of cards.
#[component]
pub fn CardGrid(children: Children) -> impl IntoView {
    view! {
        <div class="card-grid">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_class() {
        assert_eq!(with_extra_class("card", None), "card");
        assert_eq!(
            with_extra_class("card", Some("announcement-card".to_string())),
            "card announcement-card"
        );
    }
}
