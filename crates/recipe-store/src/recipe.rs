//! Domain types for the persisted recipe document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single recipe record
///
/// `id` is caller-assigned and must be unique across the document. Uniqueness
/// is checked at insert time only, not structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Caller-assigned identifier, unique within the document
    pub id: i64,

    /// Display title of the recipe
    pub title: String,

    /// Ordered list of ingredient lines
    pub ingredients: Vec<String>,

    /// Free-text preparation instructions
    pub instructions: String,

    /// Cooking time in minutes; positivity is not enforced
    pub cooking_time: i64,

    /// Free-form difficulty label, e.g. "easy"
    pub difficulty: String,

    /// Optional link to an image of the finished dish
    ///
    /// Absent and `null` both deserialise to `None`; `None` serialises as
    /// `null`, matching the original file format.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The whole persisted state: an ordered sequence of recipes
///
/// This is the single top-level shape of the JSON file. An empty document is
/// the fallback value whenever the file cannot be read or parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub recipes: Vec<Recipe>,
}
