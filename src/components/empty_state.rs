//! Empty State Component
//!
//! Shown when no item passes the current filter.

use leptos::prelude::*;

use crate::context::use_gallery;

#[component]
pub fn EmptyState() -> impl IntoView {
    let gallery = use_gallery();

    view! {
        <div class="empty-state">
            <div class="empty-icon">"😿"</div>
            <p class="empty-text">"No cats found in this dimension..."</p>
            <button class="empty-reset-btn" on:click=move |_| gallery.reset_filters()>
                "Show all cats"
            </button>
        </div>
    }
}
