//! GIF Card Component
//!
//! One catalog item: image with loading shimmer, category badge,
//! favorite button and hover sparkles.

use leptos::prelude::*;

use crate::models::Item;

/// Entrance delay between consecutive cards, seconds
pub const CARD_DELAY_STEP: f64 = 0.08;

/// Hover sparkles: (left, top, delay s)
const SPARKLES: &[(&str, &str, f64)] = &[
    ("20%", "30%", 0.0),
    ("70%", "20%", 0.1),
    ("80%", "60%", 0.2),
    ("30%", "70%", 0.15),
];

#[component]
fn Sparkles(visible: ReadSignal<bool>) -> impl IntoView {
    SPARKLES
        .iter()
        .map(|(left, top, delay)| {
            view! {
                <span
                    class=move || if visible.get() { "sparkle visible" } else { "sparkle" }
                    style=format!("left: {}; top: {}; animation-delay: {}s;", left, top, delay)
                >
                    "✦"
                </span>
            }
        })
        .collect_view()
}

/// Gallery card for a single item
#[component]
pub fn GifCard(
    item: Item,
    is_favorite: Signal<bool>,
    #[prop(into)] on_toggle_favorite: Callback<()>,
    delay: f64,
) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let (failed, set_failed) = signal(false);
    let (hovered, set_hovered) = signal(false);

    let id = item.id;
    let display_id = item.display_id();
    let category = item.category.as_str();

    view! {
        <article
            class="gif-card"
            style=format!("animation-delay: {}s;", delay)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class=move || if hovered.get() { "card-body hovered" } else { "card-body" }>
                <div class="card-image">
                    // Loading shimmer (stays up with a fallback glyph if the image fails)
                    <Show when=move || !loaded.get()>
                        <div class="card-shimmer">
                            <span class=move || if failed.get() { "shimmer-cat failed" } else { "shimmer-cat" }>
                                {move || if failed.get() { "🙀" } else { "🐱" }}
                            </span>
                        </div>
                    </Show>

                    <img
                        src=item.url.clone()
                        alt=item.title.clone()
                        class=move || if loaded.get() { "card-img loaded" } else { "card-img" }
                        loading="lazy"
                        on:load=move |_| set_loaded.set(true)
                        on:error=move |_| {
                            log::warn!("[CARD] Image {} failed to load", id);
                            set_failed.set(true);
                        }
                    />

                    <div class="card-overlay"></div>

                    <div class="category-badge">
                        <span>{category}</span>
                    </div>

                    <button
                        class="favorite-btn"
                        aria-label=move || {
                            if is_favorite.get() { "Remove from favorites" } else { "Add to favorites" }
                        }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_toggle_favorite.run(());
                        }
                    >
                        <span class=move || if is_favorite.get() { "heart pop" } else { "heart" }>
                            {move || if is_favorite.get() { "💖" } else { "🤍" }}
                        </span>
                    </button>

                    <Sparkles visible=hovered />
                </div>

                <div class="card-footer">
                    <h3 class="card-title">{item.title.clone()}</h3>
                    <div class="card-meta">
                        <span>"✨"</span>
                        <span>{display_id}</span>
                    </div>
                </div>
            </div>
        </article>
    }
}
