//! Recipe REST API server binary.
//!
//! Resolves configuration from the environment once at startup, wires the
//! flat-file store into the repository, and serves the REST API built in the
//! `api-rest` crate.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, app};
use recipe_store::{JsonStore, RecipeRepository};

/// Main entry point for the recipe API server
///
/// Starts the REST server on the configured address (default: 0.0.0.0:3000).
/// Recipes are persisted as a single JSON document at the configured file
/// location, created on the first write.
///
/// # Environment Variables
/// - `RECIPE_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `RECIPE_DATA_FILE`: Path of the recipe JSON file (default: "data.json")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_store=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("RECIPE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_file = std::env::var("RECIPE_DATA_FILE").unwrap_or_else(|_| "data.json".into());

    tracing::info!("-- Starting Recipe REST API on {}", addr);
    tracing::info!("-- Recipe data file: {}", data_file);

    let store = JsonStore::new(data_file);
    let state = AppState {
        repository: Arc::new(RecipeRepository::new(store)),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
