use crate::routes::routes::AppRoutes;
use crate::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Screens build their clients from this.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
