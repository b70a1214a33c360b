pub mod config;
pub mod utils;
pub mod services;
pub mod models;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use services::catalog::{NotFoundReason, Resolution, ResourceCatalog};

use crate::handlers::navigation::{self, ApiDoc};

#[derive(Clone)]
pub struct AppState {
    /// Immutable resource catalog, fully built before the router exists
    pub catalog: Arc<ResourceCatalog>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Builds the compiled-in catalog against the configured base URLs.
    pub fn new(config: Arc<AppConfig>) -> services::catalog::CatalogResult<Self> {
        let catalog = ResourceCatalog::builtin(config.resources.clone())?;
        Ok(Self {
            catalog: Arc::new(catalog),
            config,
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    // Wizard steps, mirroring the public /digital/resource pages
    let navigation_routes = Router::new()
        .route("/program", get(navigation::program_page))
        .route("/grades", get(navigation::grade_page))
        .route("/subjects", get(navigation::subject_page))
        .route("/lessons", get(navigation::lesson_page));

    // API Documentation - Swagger UI
    let api_docs_routes = Router::new()
        .merge(SwaggerUi::new("/digital/resource/api-docs")
            .url("/digital/resource/api-docs/openapi.json", ApiDoc::openapi()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .nest("/digital/resource", navigation_routes)
        .merge(api_docs_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
