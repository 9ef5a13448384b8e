//! Helpers shared by the entity list screens

use crate::shared::sync::{CollectionState, LoadPhase};
use leptos::prelude::*;

pub fn delete_prompt(element: &str) -> String {
    format!("Are you sure you want to delete this {}?", element)
}

/// Blocking browser confirmation; no window means no deletion.
pub fn confirm_delete(element: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(&delete_prompt(element)).ok())
        .unwrap_or(false)
}

/// Loading hint and inline error banner for a collection screen
#[component]
pub fn CollectionStatus<T>(
    state: RwSignal<CollectionState<T>>,
    /// e.g. "products"
    #[prop(into)]
    list_name: String,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let loading = move || state.with(|s| s.phase == LoadPhase::Loading);

    view! {
        <Show when=loading>
            <div class="list__loading">{format!("Loading {}...", list_name)}</div>
        </Show>
        {move || state.with(|s| s.error.clone()).map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}
