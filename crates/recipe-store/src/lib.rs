//! # Recipe Store
//!
//! Flat-file persistence for the recipe service.
//!
//! ## Design Principles
//!
//! - The JSON file is the sole source of truth; nothing is cached between
//!   requests
//! - Every repository operation is a whole-document load, an in-memory
//!   mutation, and (for writes) a whole-document save
//! - An unreadable or malformed file degrades to an empty document rather
//!   than failing the request
//! - Mutations are serialised behind a single lock so concurrent
//!   read-modify-write cycles cannot silently drop each other's effects
//!
//! ## Example Usage
//!
//! ```no_run
//! use recipe_store::{JsonStore, RecipeRepository};
//!
//! let store = JsonStore::new("data.json");
//! let repository = RecipeRepository::new(store);
//! let recipes = repository.list();
//! ```

mod recipe;
mod repository;
mod store;

pub use recipe::{Recipe, RecipeDocument};
pub use repository::RecipeRepository;
pub use store::JsonStore;

/// Errors that can occur while writing the recipe document to disk
///
/// Read failures never surface here: `JsonStore::load` degrades to an empty
/// document instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be serialised to JSON
    #[error("failed to serialize recipe document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The serialised document could not be written to the file
    #[error("failed to write recipe file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Errors surfaced by id-scoped repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No recipe with the requested id exists in the document
    #[error("recipe not found: {0}")]
    NotFound(i64),

    /// An insert collided with an existing id
    #[error("recipe id already exists: {0}")]
    DuplicateId(i64),

    /// The mutated document could not be saved
    #[error(transparent)]
    Store(#[from] StoreError),
}
