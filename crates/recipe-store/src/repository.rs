//! Id-scoped CRUD operations over the recipe document.
//!
//! Every operation is a full load → scan/mutate → save round trip against
//! the JSON file; the repository holds no document state between calls.
//! Mutating operations run under a single lock so two in-flight requests
//! cannot interleave their read-modify-write cycles and silently drop each
//! other's writes. Reads are a single whole-file load and take no lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::recipe::Recipe;
use crate::store::JsonStore;
use crate::RepositoryError;

/// Repository exposing id-scoped operations over the recipe document
///
/// Built entirely on [`JsonStore::load`] and [`JsonStore::save`]. Each call
/// is atomic from the caller's perspective: failures (`NotFound`,
/// `DuplicateId`) are detected before anything is written, so a failed call
/// leaves the document unchanged.
#[derive(Debug)]
pub struct RecipeRepository {
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl RecipeRepository {
    /// Creates a repository over the given store
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns every recipe in document order
    pub fn list(&self) -> Vec<Recipe> {
        self.store.load().recipes
    }

    /// Returns the first recipe whose id matches
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no recipe carries the requested id.
    pub fn get(&self, id: i64) -> Result<Recipe, RepositoryError> {
        self.store
            .load()
            .recipes
            .into_iter()
            .find(|recipe| recipe.id == id)
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Appends a recipe with a fresh id and returns it unchanged
    ///
    /// Arrival order is preserved: new recipes always land at the end of the
    /// document.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` before anything is written if the id is already
    /// taken, or `Store` if the save fails.
    pub fn insert(&self, recipe: Recipe) -> Result<Recipe, RepositoryError> {
        let _guard = self.write_guard();

        let mut document = self.store.load();
        if document
            .recipes
            .iter()
            .any(|existing| existing.id == recipe.id)
        {
            return Err(RepositoryError::DuplicateId(recipe.id));
        }

        document.recipes.push(recipe.clone());
        self.store.save(&document)?;
        Ok(recipe)
    }

    /// Replaces the recipe at `id` wholesale and returns the stored record
    ///
    /// The replacement occupies the same position in the document; callers
    /// must supply every field, there is no partial-update semantics. The
    /// path `id` is authoritative: the stored record keeps `id` even when
    /// the supplied body carries a different one, so a mismatched body can
    /// never break id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` before anything is written if `id` is absent, or
    /// `Store` if the save fails.
    pub fn replace(&self, id: i64, mut recipe: Recipe) -> Result<Recipe, RepositoryError> {
        recipe.id = id;

        let _guard = self.write_guard();

        let mut document = self.store.load();
        let slot = document
            .recipes
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        *slot = recipe.clone();
        self.store.save(&document)?;
        Ok(recipe)
    }

    /// Removes the recipe at `id` and returns the removed record
    ///
    /// Later recipes shift down to fill the vacated position.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` before anything is written if `id` is absent, or
    /// `Store` if the save fails.
    pub fn remove(&self, id: i64) -> Result<Recipe, RepositoryError> {
        let _guard = self.write_guard();

        let mut document = self.store.load();
        let position = document
            .recipes
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        let removed = document.recipes.remove(position);
        self.store.save(&document)?;
        Ok(removed)
    }

    // A poisoned lock means another request panicked mid-cycle; every cycle
    // starts from a fresh load, so continuing is safe.
    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
