pub mod error;
pub mod routes;
pub mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// build the axum application with all routes
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/countries", get(routes::countries))
        .route("/get_rate", get(routes::get_rate))
        .route("/calculate", post(routes::calculate))
        .route("/affordability", post(routes::affordability_estimate))
        .route("/export_txt", post(routes::export_txt))
        .route("/export_pdf", post(routes::export_pdf))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
