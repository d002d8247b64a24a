//! Favorites Toggle Component
//!
//! Header button switching between all cats and favorites only.

use leptos::prelude::*;

use crate::context::use_gallery;

/// Button label for the toggle
pub fn toggle_label(showing_favorites: bool, count: usize) -> String {
    if showing_favorites {
        format!("♥ Showing Favorites ({})", count)
    } else {
        format!("♡ Show Favorites ({})", count)
    }
}

#[component]
pub fn FavoritesToggle() -> impl IntoView {
    let gallery = use_gallery();
    let showing = move || gallery.filter().show_favorites_only;

    view! {
        <button
            class=move || if showing() { "favorites-toggle active" } else { "favorites-toggle" }
            on:click=move |_| gallery.toggle_show_favorites_only()
        >
            {move || toggle_label(showing(), gallery.favorite_count())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(false, 0), "♡ Show Favorites (0)");
        assert_eq!(toggle_label(true, 3), "♥ Showing Favorites (3)");
    }
}
