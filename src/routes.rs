// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::MAX_BODY_BYTES,
    handlers::{assessment, health},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the assessment routes under `/api/assessment`.
/// * Applies global middleware (Trace, CORS, body limit).
/// * Injects global state.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let assessment_routes = Router::new()
        .route("/questions", get(assessment::list_questions))
        .route("/score", post(assessment::submit_assessment))
        .route("/score/batch", post(assessment::submit_batch))
        .route("/traits/{name}", get(assessment::get_trait))
        .route("/colors/{name}", get(assessment::get_color));

    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/assessment", assessment_routes)
        // Enforced by the `Json` extractor with a 413.
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Global Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
