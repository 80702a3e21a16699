use leptos::*;
use leptos_router::*;

use crate::api::alerts::provide_alerts;
use crate::api::permissions::provide_permissions;
use crate::components::alert::AlertDisplay;
use crate::config::{provide_config, AnnouncementsConfig};
use crate::i18n::provide_i18n;
use crate::pages::{
    announcement::AnnouncementPage,
    announcement_form::{AnnouncementFormPage, FormMode},
    announcements::AnnouncementsPage,
};
use crate::routes::RouteResolver;

#[component]
pub fn App() -> impl IntoView {
    let config = AnnouncementsConfig::load();

    provide_i18n(&config.language);
    provide_alerts(config.alert_timeout_ms);
    // Created here so cached permission signals live as long as the app
    provide_permissions();

    let mount_path = match RouteResolver::from_config(&config).mount_path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };
    provide_config(config);

    view! {
        <Router>
            <main>
                <AlertDisplay />
                <Routes>
                    <Route path=mount_path view=AnnouncementsLayout>
                        <Route path="" view=|| view! { <AnnouncementsPage /> } />
                        <Route path="view/:id" view=AnnouncementPage />
                        <Route path="edit/:id" view=|| view! { <AnnouncementFormPage mode=FormMode::Edit /> } />
                        <Route path="create" view=|| view! { <AnnouncementFormPage mode=FormMode::Create /> } />
                    </Route>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn AnnouncementsLayout() -> impl IntoView {
    view! {
        <div class="container">
            <Outlet />
        </div>
    }
}
