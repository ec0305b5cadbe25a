use std::collections::BTreeSet;

use serde::Serialize;

/// Set of favorited card identifiers.
///
/// Serializes as a JSON array in sorted order, so the persisted form of a set
/// depends only on its members and a double toggle restores it byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoritesSet(BTreeSet<String>);

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted value. Missing, malformed or non-array data yields an
    /// empty set; blank identifiers are dropped.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(_) => Self::default(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Flip membership for `id`. Returns the new membership, or `None` when the
    /// identifier is blank and nothing changed.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        if self.0.remove(id) {
            Some(false)
        } else {
            self.0.insert(id.to_string());
            Some(true)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect(),
        )
    }
}

/// Icon and pressed-state for a favorite toggle bound to a card.
pub fn indicator(favorited: bool) -> (&'static str, &'static str) {
    if favorited {
        ("\u{2605}", "true")
    } else {
        ("\u{2606}", "false")
    }
}
