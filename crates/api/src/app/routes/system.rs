use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto::{HealthResponse, RootResponse, TemplatesStatus};
use crate::app::services::AppServices;

pub const ENDPOINTS: [&str; 3] = [
    "/health",
    "/api/generate-jumpers-excel",
    "/api/debug-last-file",
];

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        ok: true,
        service: "Excel Generator Service",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS.to_vec(),
    })
}

pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.jumpers_template_exists() {
        Ok(jumpers) => Json(HealthResponse {
            ok: true,
            templates: TemplatesStatus { jumpers },
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "ok": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
