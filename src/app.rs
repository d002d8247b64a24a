//! Neko Gallery App
//!
//! Root component: header, category pills and the card grid.

use leptos::prelude::*;

use crate::catalog::cat_gifs;
use crate::components::{
    CategoryPill, EmptyState, FavoritesToggle, GifCard, StarDecoration, CARD_DELAY_STEP,
    PILL_DELAY_STEP, STARS,
};
use crate::config::GalleryConfig;
use crate::context::GalleryContext;
use crate::controller::GalleryController;
use crate::models::Category;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: GalleryConfig) -> impl IntoView {
    let mut controller = GalleryController::with_config(cat_gifs(), BrowserStorage, config);
    controller.initialize();

    let gallery = GalleryContext::new(controller);
    provide_context(gallery);

    let visible = Memo::new(move |_| gallery.visible_items());

    view! {
        <div class="app-layout">
            // Floating decorations
            {STARS.iter().map(|(placement, size, delay)| view! {
                <StarDecoration placement=*placement size=*size delay=*delay />
            }).collect_view()}

            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>

            <div class="gallery-shell">
                <header class="gallery-header">
                    <div class="title-wobble">
                        <h1 class="gallery-title">"Neko Gallery"</h1>
                    </div>
                    <p class="gallery-tagline">"✧ Your daily dose of feline magic ✧"</p>
                    <FavoritesToggle />
                </header>

                // Category pills
                <nav class="category-nav">
                    {Category::ALL.iter().enumerate().map(|(idx, category)| {
                        let category = *category;
                        let is_active = Signal::derive(move || {
                            gallery.filter().selected_category == category
                        });
                        view! {
                            <CategoryPill
                                category=category
                                is_active=is_active
                                on_click=Callback::new(move |_| gallery.set_category(category))
                                delay=idx as f64 * PILL_DELAY_STEP
                            />
                        }
                    }).collect_view()}
                </nav>

                <main class="gallery-main">
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! { <EmptyState /> }
                    >
                        <div class="gif-grid">
                            <For
                                each=move || visible.get().into_iter().enumerate()
                                key=|(_, item)| item.id
                                children=move |(idx, item)| {
                                    let id = item.id;
                                    let is_favorite = Signal::derive(move || gallery.is_favorite(id));
                                    view! {
                                        <GifCard
                                            item=item
                                            is_favorite=is_favorite
                                            on_toggle_favorite=Callback::new(move |_| {
                                                gallery.toggle_favorite(id);
                                            })
                                            delay=idx as f64 * CARD_DELAY_STEP
                                        />
                                    }
                                }
                            />
                        </div>
                    </Show>
                </main>

                <footer class="gallery-footer">
                    <p>"Requested by @orzxh97 · Built by @clonkbot"</p>
                </footer>
            </div>
        </div>
    }
}
