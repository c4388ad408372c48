use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use excelgen_core::ServiceError;

pub fn service_error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Configuration(_) | ServiceError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Log `err` and turn it into a JSON error response.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    let status = service_error_status(&err);
    match &err {
        ServiceError::Validation(_) | ServiceError::NotFound(_) => {
            tracing::warn!(error = %err, code = err.code(), "request rejected");
        }
        ServiceError::Configuration(_) | ServiceError::Internal(_) => {
            tracing::error!(error = ?err, code = err.code(), "request failed");
        }
    }
    json_error(status, err.code(), err.message())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "ok": false,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            service_error_status(&ServiceError::validation("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            service_error_status(&ServiceError::not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            service_error_status(&ServiceError::configuration("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            service_error_status(&ServiceError::internal("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_carries_status() {
        let res = service_error_to_response(ServiceError::not_found("nothing yet"));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
