use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

pub fn button_class(variant: ButtonVariant, disabled: bool) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Outline => "btn btn-outline",
        ButtonVariant::Danger => "btn btn-danger",
    };
    if disabled {
        format!("{} disabled", variant_class)
    } else {
        variant_class.to_string()
    }
}

/// Button component used for dialog and card actions.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or_else(|| "button".to_string());
    let disabled = Signal::derive(move || disabled.get());

    view! {
        <button
            type=button_type
            class=move || button_class(variant, disabled.get())
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Navigation link styled as a button. A disabled link stays visible but
/// has no target.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get());

    view! {
        <a
            class=move || button_class(variant, disabled.get())
            href=move || (!disabled.get()).then(|| href.clone())
            role="button"
            title=title
            aria-disabled=move || disabled.get().to_string()
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(button_class(ButtonVariant::Primary, false), "btn btn-primary");
        assert_eq!(button_class(ButtonVariant::Outline, false), "btn btn-outline");
        assert_eq!(button_class(ButtonVariant::Danger, true), "btn btn-danger disabled");
    }
}
