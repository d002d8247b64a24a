//! Star Decoration Component

use leptos::prelude::*;

/// Floating background stars: (placement class, size px, delay s)
pub const STARS: &[(&str, u32, f64)] = &[
    ("star-top-left yellow", 24, 0.0),
    ("star-top-right pink", 32, 0.5),
    ("star-mid-left cyan", 20, 1.0),
    ("star-mid-right purple", 28, 1.5),
    ("star-bottom-left pale-yellow", 22, 2.0),
];

/// Slowly spinning four-point star
#[component]
pub fn StarDecoration(
    #[prop(optional)] placement: &'static str,
    #[prop(default = 24)] size: u32,
    #[prop(default = 0.0)] delay: f64,
) -> impl IntoView {
    view! {
        <div
            class=format!("star-decoration {}", placement)
            style=format!("animation-delay: {}s;", delay)
        >
            <svg
                width=size.to_string()
                height=size.to_string()
                viewBox="0 0 24 24"
                fill="currentColor"
            >
                <path d="M12 0L14.59 9.41L24 12L14.59 14.59L12 24L9.41 14.59L0 12L9.41 9.41L12 0Z" />
            </svg>
        </div>
    }
}
