//! Gallery Context
//!
//! The controller held in a signal and shared via Leptos Context API.

use leptos::prelude::*;

use crate::controller::GalleryController;
use crate::models::{Category, FilterState, Item};
use crate::storage::BrowserStorage;

/// Reactive handle to the gallery controller
#[derive(Clone, Copy)]
pub struct GalleryContext {
    controller: RwSignal<GalleryController<BrowserStorage>>,
}

impl GalleryContext {
    /// Wrap an already initialized controller
    pub fn new(controller: GalleryController<BrowserStorage>) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Items passing the current filter
    pub fn visible_items(&self) -> Vec<Item> {
        self.controller
            .with(|c| c.visible_items().into_iter().cloned().collect())
    }

    pub fn filter(&self) -> FilterState {
        self.controller.with(|c| c.filter())
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.controller.with(|c| c.is_favorite(id))
    }

    pub fn favorite_count(&self) -> usize {
        self.controller.with(|c| c.favorite_count())
    }

    pub fn set_category(&self, category: Category) {
        self.controller.update(|c| c.set_category(category));
    }

    pub fn toggle_show_favorites_only(&self) {
        self.controller.update(|c| c.toggle_show_favorites_only());
    }

    /// Returns the new membership of `id`
    pub fn toggle_favorite(&self, id: u32) -> bool {
        self.controller
            .try_update(|c| c.toggle_favorite(id))
            .unwrap_or(false)
    }

    pub fn reset_filters(&self) {
        self.controller.update(|c| c.reset_filters());
    }
}

/// Get the gallery context provided by `App`
pub fn use_gallery() -> GalleryContext {
    expect_context::<GalleryContext>()
}
