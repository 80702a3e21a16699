use leptos::logging::warn;
use leptos::*;
use shared::EntityRef;

use crate::routes::{use_routes, Route};

/// Small popover describing a catalog entity.
#[component]
fn EntityPeekCard(entity: EntityRef) -> impl IntoView {
    view! {
        <div class="entity-peek-card" role="tooltip">
            <div class="entity-peek-name">{entity.name.clone()}</div>
            <dl class="entity-peek-fields">
                <dt>"Kind"</dt>
                <dd>{entity.kind.clone()}</dd>
                <dt>"Namespace"</dt>
                <dd>{entity.namespace.clone()}</dd>
            </dl>
            <code class="entity-peek-ref">{entity.to_string()}</code>
        </div>
    }
}

/// Link to a catalog entity that shows a peek card while hovered.
///
/// References that cannot be parsed are shown verbatim without a link.
#[component]
pub fn EntityRefLink(#[prop(into)] reference: String) -> impl IntoView {
    let entity = match EntityRef::parse(&reference) {
        Ok(entity) => entity,
        Err(e) => {
            warn!("Cannot link publisher: {}", e);
            return view! { <span class="entity-ref">{reference}</span> }.into_view();
        }
    };

    let href = use_routes().path(&Route::CatalogEntity(entity.clone()));
    let hovered = create_rw_signal(false);
    let name = entity.name.clone();
    let peek = store_value(entity);

    view! {
        <span
            class="entity-peek"
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <a class="entity-ref" href=href>{name}</a>
            <Show when=move || hovered.get() fallback=|| ()>
                <EntityPeekCard entity=peek.get_value() />
            </Show>
        </span>
    }
    .into_view()
}
