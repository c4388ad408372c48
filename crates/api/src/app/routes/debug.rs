use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use crate::app::dto::DebugFileResponse;
use crate::app::errors;
use crate::app::services::AppServices;

/// `GET /api/debug-last-file`: write the last generated file to the debug dir.
pub async fn debug_last_file(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.dump_last_file().await {
        Ok(dumped) => Json(DebugFileResponse::from(dumped)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
