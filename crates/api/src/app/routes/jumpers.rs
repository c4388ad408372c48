use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
};

use excelgen_core::ServiceError;
use excelgen_inventory::parse_items;

use crate::app::errors;
use crate::app::services::AppServices;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `POST /api/generate-jumpers-excel`: fill the jumpers template and return it as a download.
///
/// The body is parsed by hand so malformed JSON gets the same error shape as
/// any other validation failure. The route carries no body size limit.
pub async fn generate_jumpers_excel(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            return errors::service_error_to_response(ServiceError::validation(format!(
                "invalid JSON body: {e}"
            )));
        }
    };

    let items = match parse_items(&payload) {
        Ok(items) => items,
        Err(e) => return errors::service_error_to_response(e),
    };

    let file = match services.generate_jumpers(items).await {
        Ok(file) => file,
        Err(e) => return errors::service_error_to_response(e),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)],
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        )],
        // The slot keeps its own copy for the debug endpoint.
        file.bytes.clone(),
    )
        .into_response()
}
