use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub mod debug;
pub mod jumpers;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route(
            "/api/generate-jumpers-excel",
            post(jumpers::generate_jumpers_excel).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/debug-last-file", get(debug::debug_last_file))
}
