use leptos::*;
use shared::AlertSeverity;

use crate::api::alerts::use_alerts;

pub fn alert_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Info => "alert",
        AlertSeverity::Success => "alert alert-success",
        AlertSeverity::Warning => "alert alert-warning",
        AlertSeverity::Error => "alert alert-error",
    }
}

/// Inline alert box.
#[component]
pub fn Alert(
    severity: AlertSeverity,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=alert_class(severity) role="alert">
            {children()}
            {on_dismiss.map(|callback| view! {
                <button
                    class="alert-dismiss"
                    type="button"
                    on:click=move |_| callback.call(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}

/// Renders the alerts posted to the global alert sink, newest last.
#[component]
pub fn AlertDisplay() -> impl IntoView {
    let alerts = use_alerts();

    view! {
        <div class="alert-display">
            <For
                each=move || alerts.alerts()
                key=|queued| queued.id
                children=move |queued| {
                    let id = queued.id;
                    view! {
                        <Alert
                            severity=queued.alert.severity
                            on_dismiss=Callback::new(move |_| alerts.dismiss(id))
                        >
                            <span class="alert-message">{queued.alert.message}</span>
                        </Alert>
                    }
                }
            />
        </div>
    }
}
