//! # API REST
//!
//! REST API implementation for the recipe service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, HTML image page)
//!
//! Uses `recipe-store` for persistence; handlers map repository failures to
//! HTTP status codes (`NotFound` → 404, `DuplicateId` → 400, write failures
//! → 500) and hold no state of their own.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use recipe_store::{Recipe, RecipeRepository, RepositoryError};

/// Application state shared across REST API handlers
///
/// Holds the repository used by every endpoint. The repository itself is
/// stateless between calls, so cloning the state is cheap and safe.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<RecipeRepository>,
}

/// Health check response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Response envelope for a successful delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedRecipeRes {
    pub deleted: Recipe,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_recipes,
        get_recipe,
        add_recipe,
        update_recipe,
        delete_recipe,
        show_recipe_image,
    ),
    components(schemas(Recipe, HealthRes, DeletedRecipeRes))
)]
struct ApiDoc;

/// Builds the REST API router
///
/// Wires every recipe endpoint, the Swagger UI, and a permissive CORS layer
/// onto the given application state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/recipes", get(list_recipes))
        .route("/recipes", post(add_recipe))
        .route("/recipes/:id", get(get_recipe))
        .route("/recipes/:id", put(update_recipe))
        .route("/recipes/:id", delete(delete_recipe))
        .route("/recipes/:id/image", get(show_recipe_image))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the recipe service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Recipe API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "List of all recipes", body = [Recipe])
    )
)]
/// List all recipes
///
/// Returns every recipe in the document, in stored order. An unreadable or
/// missing data file yields an empty list rather than an error.
///
/// # Returns
/// * `Json<Vec<Recipe>>` - All recipes in document order
#[axum::debug_handler]
async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.repository.list())
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    responses(
        (status = 200, description = "The requested recipe", body = Recipe),
        (status = 404, description = "Recipe not found")
    )
)]
/// Return a single recipe by its id
///
/// # Returns
/// * `Ok(Json<Recipe>)` - The first recipe whose id matches
/// * `Err((StatusCode, &str))` - 404 if no recipe carries the id
///
/// # Errors
/// Returns `404 Not Found` if:
/// - no recipe with the requested id exists.
#[axum::debug_handler]
async fn get_recipe(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
) -> Result<Json<Recipe>, (StatusCode, &'static str)> {
    match state.repository.get(id) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(RepositoryError::NotFound(_)) => Err((StatusCode::NOT_FOUND, "Recipe not found")),
        Err(e) => {
            tracing::error!("Get recipe error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = Recipe,
    responses(
        (status = 200, description = "Recipe created", body = Recipe),
        (status = 400, description = "Recipe id already exists"),
        (status = 500, description = "Internal server error")
    )
)]
/// Add a new recipe
///
/// Appends the recipe to the document. The id is caller-assigned and must
/// not collide with an existing recipe; a collision is rejected before
/// anything is written.
///
/// # Arguments
/// * `recipe` - Request body carrying every recipe field
///
/// # Returns
/// * `Ok(Json<Recipe>)` - The inserted recipe, unchanged
/// * `Err((StatusCode, &str))` - 400 on a duplicate id, 500 if the save fails
///
/// # Errors
/// Returns `400 Bad Request` if the id already exists, or
/// `500 Internal Server Error` if the document cannot be written.
#[axum::debug_handler]
async fn add_recipe(
    State(state): State<AppState>,
    Json(recipe): Json<Recipe>,
) -> Result<Json<Recipe>, (StatusCode, &'static str)> {
    match state.repository.insert(recipe) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(RepositoryError::DuplicateId(_)) => {
            Err((StatusCode::BAD_REQUEST, "Recipe id already exists"))
        }
        Err(e) => {
            tracing::error!("Add recipe error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    request_body = Recipe,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 404, description = "Recipe not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Update an existing recipe identified by its id
///
/// Replaces the stored recipe wholesale; callers must supply every field.
/// The path id is authoritative and overrides any id carried in the body.
///
/// # Arguments
/// * `id` - Path id of the recipe to replace
/// * `recipe` - Full replacement body
///
/// # Returns
/// * `Ok(Json<Recipe>)` - The stored record, carrying the path id
/// * `Err((StatusCode, &str))` - 404 if the id is absent, 500 if the save fails
///
/// # Errors
/// Returns `404 Not Found` if no recipe with the path id exists, or
/// `500 Internal Server Error` if the document cannot be written.
#[axum::debug_handler]
async fn update_recipe(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
    Json(recipe): Json<Recipe>,
) -> Result<Json<Recipe>, (StatusCode, &'static str)> {
    match state.repository.replace(id, recipe) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(RepositoryError::NotFound(_)) => Err((StatusCode::NOT_FOUND, "Recipe not found")),
        Err(e) => {
            tracing::error!("Update recipe error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    responses(
        (status = 200, description = "Recipe deleted", body = DeletedRecipeRes),
        (status = 404, description = "Recipe not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Delete a recipe by its id
///
/// Removes the recipe from the document; later entries shift down.
///
/// # Returns
/// * `Ok(Json<DeletedRecipeRes>)` - Envelope carrying the removed record
/// * `Err((StatusCode, &str))` - 404 if the id is absent, 500 if the save fails
///
/// # Errors
/// Returns `404 Not Found` if no recipe with the id exists, or
/// `500 Internal Server Error` if the document cannot be written.
#[axum::debug_handler]
async fn delete_recipe(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
) -> Result<Json<DeletedRecipeRes>, (StatusCode, &'static str)> {
    match state.repository.remove(id) {
        Ok(deleted) => Ok(Json(DeletedRecipeRes { deleted })),
        Err(RepositoryError::NotFound(_)) => Err((StatusCode::NOT_FOUND, "Recipe not found")),
        Err(e) => {
            tracing::error!("Delete recipe error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{id}/image",
    responses(
        (status = 200, description = "HTML page embedding the recipe image", body = String),
        (status = 404, description = "Recipe not found or no image URL")
    )
)]
/// Show an HTML page with the recipe image embedded
///
/// Demonstrates returning HTML instead of JSON. A recipe without an
/// `image_url` is treated the same as an absent recipe: 404.
///
/// # Returns
/// * `Ok(Html<String>)` - Page embedding the image and the recipe fields
/// * `Err((StatusCode, &str))` - 404 if the recipe is absent or has no image
///
/// # Errors
/// Returns `404 Not Found` if no recipe with the id exists or the recipe
/// carries no `image_url`.
#[axum::debug_handler]
async fn show_recipe_image(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    match state.repository.get(id) {
        Ok(recipe) if recipe.image_url.is_some() => Ok(Html(render_image_page(&recipe))),
        Ok(_) | Err(RepositoryError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, "Recipe not found or no image URL"))
        }
        Err(e) => {
            tracing::error!("Show recipe image error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

/// Renders the image-view page for a recipe
///
/// Pure templating: title, id, difficulty, cooking time, the ingredient
/// list, the instructions, and the image itself.
fn render_image_page(recipe: &Recipe) -> String {
    let image_url = recipe.image_url.as_deref().unwrap_or_default();
    let ingredients: String = recipe
        .ingredients
        .iter()
        .map(|ingredient| format!("<li>{}</li>", ingredient))
        .collect();

    format!(
        r#"<html>
    <head><title>{title}</title></head>
    <body style='text-align:center; font-family:sans-serif;'>
        <h1>{title} (ID: {id})</h1>
        <p><b>Difficulty:</b> {difficulty} | <b>Cooking Time:</b> {cooking_time} min</p>
        <h2>Ingredients</h2>
        <ul>{ingredients}</ul>
        <h2>Instructions</h2>
        <p>{instructions}</p>
        <img src="{image_url}" alt="recipe image" style="max-width:80%; height:auto; margin-top:20px;" />
    </body>
</html>
"#,
        title = recipe.title,
        id = recipe.id,
        difficulty = recipe.difficulty,
        cooking_time = recipe.cooking_time,
        ingredients = ingredients,
        instructions = recipe.instructions,
        image_url = image_url,
    )
}
