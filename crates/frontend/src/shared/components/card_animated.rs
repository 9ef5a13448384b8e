//! Thaw [`Card`] with the `card-appear` entrance animation from `layout.css`.

use leptos::prelude::*;
use thaw::Card;

/// Card with an optional heading; `delay_ms` staggers cards placed side by side.
#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card attr:style=full_style>
            {title.map(|t| view! { <h3 class="card__title">{t}</h3> })}
            {children()}
        </Card>
    }
}
