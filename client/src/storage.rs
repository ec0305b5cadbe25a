use fauna_shared::FavoritesSet;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::config::FAVORITES_KEY;

/// Read the persisted favorites. Absent or malformed data yields an empty set.
pub(crate) fn load_favorites() -> FavoritesSet {
    match LocalStorage::get::<Vec<String>>(FAVORITES_KEY) {
        Ok(ids) => ids.into_iter().collect(),
        Err(StorageError::KeyNotFound(_)) => FavoritesSet::default(),
        Err(e) => {
            web_sys::console::warn_1(&format!("Ignoring stored favorites: {e}").into());
            FavoritesSet::default()
        }
    }
}

/// Write the full set back. Failures are logged and dropped.
pub(crate) fn save_favorites(favorites: &FavoritesSet) {
    if let Err(e) = LocalStorage::set(FAVORITES_KEY, favorites) {
        web_sys::console::warn_1(&format!("Failed to save favorites: {e}").into());
    }
}

/// Flip membership for `id` and persist. Blank identifiers are ignored.
pub(crate) fn toggle_favorite(favorites: RwSignal<FavoritesSet>, id: &str) -> Option<bool> {
    let mut membership = None;
    favorites.update(|set| membership = set.toggle(id));
    if membership.is_some() {
        favorites.with_untracked(save_favorites);
    }
    membership
}
