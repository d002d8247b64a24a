//! Category Pill Component
//!
//! Rounded filter button for one category.

use leptos::prelude::*;

use crate::models::Category;

/// Entrance delay between consecutive pills, seconds
pub const PILL_DELAY_STEP: f64 = 0.05;

/// Category filter pill
///
/// # Arguments
/// * `category` - Category this pill selects
/// * `is_active` - Whether the category is currently selected
/// * `on_click` - Called when the pill is clicked
/// * `delay` - Entrance animation delay in seconds
#[component]
pub fn CategoryPill(
    category: Category,
    is_active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    delay: f64,
) -> impl IntoView {
    view! {
        <button
            class=move || if is_active.get() { "category-pill active" } else { "category-pill" }
            style=format!("animation-delay: {}s;", delay)
            on:click=move |_| on_click.run(())
        >
            <span class="pill-content">
                <span>{category.emoji()}</span>
                <span class="pill-label">{category.label()}</span>
            </span>
            <Show when=move || is_active.get()>
                <span class="pill-ring"></span>
            </Show>
        </button>
    }
}
