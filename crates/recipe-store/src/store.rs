//! Whole-document JSON persistence.
//!
//! The store translates between the in-memory [`RecipeDocument`] and its
//! durable encoding: a single pretty-printed JSON file at a fixed location.
//! Indentation is cosmetic, not load-bearing.
//!
//! # Failure policy
//!
//! Reads never fail the caller. A missing, unreadable, or malformed file
//! degrades to an empty document with a `warn` diagnostic so the service
//! stays available with zero recipes. Writes do fail the caller: there is no
//! recovery path once the document cannot be persisted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::recipe::RecipeDocument;
use crate::StoreError;

/// Store bound to a single JSON file
///
/// Construction performs no I/O; the file is touched only by [`load`] and
/// [`save`]. The file does not need to exist up front — the first `save`
/// creates it.
///
/// [`load`]: JsonStore::load
/// [`save`]: JsonStore::save
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store bound to the given file location
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file location this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the document from disk
    ///
    /// On any failure — missing file, I/O error, malformed JSON — this
    /// returns an empty document and logs a warning instead of propagating
    /// an error. Degrade-to-empty is deliberate policy, not an oversight.
    pub fn load(&self) -> RecipeDocument {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Cannot read recipe file {}: {}", self.path.display(), e);
                return RecipeDocument::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Malformed recipe file {}: {}", self.path.display(), e);
                RecipeDocument::default()
            }
        }
    }

    /// Serialises the full document and overwrites the file
    ///
    /// The write is a plain overwrite, not a temp-file-plus-rename, so a
    /// crash mid-write can truncate the file. `load` recovers from that by
    /// degrading to an empty document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialisation or the file write fails.
    pub fn save(&self, document: &RecipeDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use tempfile::TempDir;

    fn tea() -> Recipe {
        Recipe {
            id: 1,
            title: "Tea".into(),
            ingredients: vec!["water".into(), "tea leaf".into()],
            instructions: "Boil.".into(),
            cooking_time: 5,
            difficulty: "easy".into(),
            image_url: None,
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty_document() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("missing.json"));

        let document = store.load();

        assert!(document.recipes.is_empty());
    }

    #[test]
    fn test_load_malformed_file_returns_empty_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonStore::new(&path);
        let document = store.load();

        assert!(document.recipes.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("data.json"));

        let document = RecipeDocument {
            recipes: vec![tea()],
        };
        store.save(&document).unwrap();

        assert_eq!(store.load(), document);
    }

    #[test]
    fn test_save_creates_file_on_first_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        let store = JsonStore::new(&path);

        assert!(!path.exists());
        store.save(&RecipeDocument::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_of_loaded_document_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        let store = JsonStore::new(&path);

        store
            .save(&RecipeDocument {
                recipes: vec![tea()],
            })
            .unwrap();

        let first = fs::read_to_string(&path).unwrap();
        store.save(&store.load()).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("data.json"));

        store
            .save(&RecipeDocument {
                recipes: vec![tea()],
            })
            .unwrap();
        store.save(&RecipeDocument::default()).unwrap();

        assert!(store.load().recipes.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_location_fails() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("no-such-dir").join("data.json"));

        let result = store.save(&RecipeDocument::default());

        assert!(matches!(result, Err(StoreError::FileWrite(_))));
    }
}
