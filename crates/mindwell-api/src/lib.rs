//! mindwell-api
//!
//! HTTP surface of the Mindwell service: PHQ-9 submission and scoring, the
//! companion chat, and the caller's assessment history.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod triage;

use config::ConfigError;
use error::ApiError;
use state::AppState;

/// Build the full application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    // Protected routes
    let protected = Router::new()
        .route("/chatbot/chat", post(routes::chatbot::chat))
        .route("/chatbot/assessment/phq9", post(routes::chatbot::submit_phq9))
        .route(
            "/chatbot/assessments",
            get(routes::assessments::list_assessments),
        )
        .route(
            "/chatbot/assessments/{id}",
            get(routes::assessments::get_assessment),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    // Public (no auth)
    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/phq9/score",
            post(routes::instruments::score_phq9),
        );

    Router::new()
        .nest("/api", public.merge(protected))
        .fallback(route_not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

/// CORS policy: a single credentialed origin when configured, otherwise any.
pub fn cors_layer(client_url: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = client_url else {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::Invalid {
            key: "MINDWELL_CLIENT_URL",
            message: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}
