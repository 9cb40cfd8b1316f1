//! Saved composites, newest first.
//!
//! The gallery is persisted as a JSON array of encoded image strings.
//! Storage access lives in `newface-io`; this module only owns the list
//! and its wire format.

use serde::{Deserialize, Serialize};

/// Errors from reading or writing the persisted gallery.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The stored value is not a JSON array of strings.
    #[error("stored gallery is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// Serializing the gallery failed.
    #[error("failed to serialize gallery: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// An ordered list of encoded composites (`data:` URLs), newest first.
///
/// When `max_entries` is set, saving past the cap drops the oldest
/// entries. Entries are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    entries: Vec<String>,
}

impl Gallery {
    /// An empty gallery.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a gallery from entries already ordered newest first.
    #[must_use]
    pub const fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Parse the persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Corrupt`] if `json` is not an array of
    /// strings.
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        serde_json::from_str(json).map_err(GalleryError::Corrupt)
    }

    /// Serialize to the persisted JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GalleryError> {
        serde_json::to_string(self).map_err(GalleryError::Serialize)
    }

    /// Prepend `entry`, then drop the oldest entries beyond `max_entries`.
    ///
    /// Returns how many entries were evicted.
    pub fn save(&mut self, entry: String, max_entries: Option<usize>) -> usize {
        self.entries.insert(0, entry);
        match max_entries {
            Some(cap) if self.entries.len() > cap => {
                let evicted = self.entries.len() - cap;
                self.entries.truncate(cap);
                evicted
            }
            _ => 0,
        }
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of saved composites.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been saved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gallery_of(n: usize) -> Gallery {
        Gallery::from_entries((0..n).map(|i| format!("data:image/png;base64,{i}")).collect())
    }

    #[test]
    fn save_prepends() {
        for k in [0, 1, 5] {
            let mut g = gallery_of(k);
            let evicted = g.save("new".into(), None);
            assert_eq!(evicted, 0);
            assert_eq!(g.len(), k + 1);
            assert_eq!(g.entries()[0], "new");
        }
    }

    #[test]
    fn save_past_cap_drops_oldest() {
        let mut g = gallery_of(3);
        let evicted = g.save("new".into(), Some(3));
        assert_eq!(evicted, 1);
        assert_eq!(g.len(), 3);
        assert_eq!(g.entries()[0], "new");
        assert_eq!(g.entries()[2], "data:image/png;base64,1");
    }

    #[test]
    fn cap_of_zero_keeps_nothing() {
        let mut g = Gallery::new();
        assert_eq!(g.save("a".into(), Some(0)), 1);
        assert!(g.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut g = Gallery::new();
        g.save("same".into(), None);
        g.save("same".into(), None);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn json_is_a_plain_string_array() {
        let g = Gallery::from_entries(vec!["b".into(), "a".into()]);
        assert_eq!(g.to_json().unwrap(), r#"["b","a"]"#);
    }

    #[test]
    fn reload_restores_order() {
        let g = gallery_of(4);
        let restored = Gallery::from_json(&g.to_json().unwrap()).unwrap();
        assert_eq!(restored, g);
    }

    #[test]
    fn empty_array_is_empty_gallery() {
        assert!(Gallery::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn corrupt_json_is_reported() {
        for bad in ["", "{", r#"{"a":1}"#, "[1,2]", "null"] {
            assert!(
                matches!(Gallery::from_json(bad), Err(GalleryError::Corrupt(_))),
                "expected Corrupt for {bad:?}"
            );
        }
    }
}
