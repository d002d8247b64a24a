//! Gallery State Controller
//!
//! Owns the filter state and the favorites set, derives the visible items
//! and persists favorites through a [`KeyValueStore`].
//!
//! Lifecycle: [`GalleryController::new`] -> [`GalleryController::initialize`]
//! -> user actions -> [`GalleryController::teardown`].

use crate::config::GalleryConfig;
use crate::favorites::{parse_favorites, serialize_favorites, FavoriteSet};
use crate::models::{Category, FilterState, Item};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct GalleryController<S: KeyValueStore> {
    catalog: Vec<Item>,
    store: S,
    config: GalleryConfig,
    filter: FilterState,
    favorites: FavoriteSet,
}

impl<S: KeyValueStore> GalleryController<S> {
    pub fn new(catalog: Vec<Item>, store: S) -> Self {
        Self::with_config(catalog, store, GalleryConfig::default())
    }

    pub fn with_config(catalog: Vec<Item>, store: S, config: GalleryConfig) -> Self {
        Self {
            catalog,
            store,
            config,
            filter: FilterState::default(),
            favorites: FavoriteSet::new(),
        }
    }

    /// Restore favorites from storage.
    ///
    /// Absent, unreadable or malformed values all yield an empty set.
    pub fn initialize(&mut self) {
        let key = &self.config.favorites_key;
        self.favorites = match self.store.get(key) {
            Ok(Some(raw)) => parse_favorites(&raw).unwrap_or_else(|e| {
                log::warn!("[GALLERY] Ignoring stored favorites under {}: {}", key, e);
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                log::warn!("[GALLERY] Could not read favorites: {}", e);
                FavoriteSet::new()
            }
        };
        log::info!("[GALLERY] Restored {} favorites", self.favorites.len());
    }

    /// End the lifecycle and hand the store back
    pub fn teardown(self) -> S {
        log::debug!("[GALLERY] Teardown with {} favorites", self.favorites.len());
        self.store
    }

    pub fn set_category(&mut self, category: Category) {
        log::debug!("[GALLERY] Category -> {}", category);
        self.filter.selected_category = category;
    }

    pub fn set_show_favorites_only(&mut self, flag: bool) {
        log::debug!("[GALLERY] Favorites only -> {}", flag);
        self.filter.show_favorites_only = flag;
    }

    pub fn toggle_show_favorites_only(&mut self) {
        self.set_show_favorites_only(!self.filter.show_favorites_only);
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Flip membership of `id` and persist the whole set.
    ///
    /// Returns whether `id` is a favorite afterwards. A failed write keeps
    /// the in-memory change.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        log::debug!("[GALLERY] Toggle favorite {} -> {}", id, now_favorite);

        let raw = serialize_favorites(&self.favorites);
        if let Err(e) = self.store.set(&self.config.favorites_key, &raw) {
            log::error!("[GALLERY] Failed to persist favorites: {}", e);
        }
        now_favorite
    }

    /// Catalog items passing the current filter, in catalog order
    pub fn visible_items(&self) -> Vec<&Item> {
        let FilterState { selected_category, show_favorites_only } = self.filter;
        self.catalog
            .iter()
            .filter(|item| selected_category.matches(item.category))
            .filter(|item| !show_favorites_only || self.favorites.contains(&item.id))
            .collect()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Includes stale ids that no longer exist in the catalog
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }
}
