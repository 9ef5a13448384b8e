//! Top navigation bar: greeting and links to the two screens.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Display name until real accounts exist.
const CURRENT_USER: &str = "Juan Pérez";

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("user")}
                <span class="top-header__title">{format!("Welcome, {}", CURRENT_USER)}</span>
            </div>
            <nav class="top-header__nav">
                <A href="/products" attr:class="top-header__link">
                    {icon("products")}
                    <span>"Products"</span>
                </A>
                <A href="/suppliers" attr:class="top-header__link">
                    {icon("suppliers")}
                    <span>"Suppliers"</span>
                </A>
            </nav>
        </header>
    }
}
