use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parlor_llm::error::ProviderError;

/// Application error type that maps to HTTP responses.
///
/// Every variant renders as the uniform envelope `{"success": false,
/// "error": ...}` so browser clients handle one shape regardless of where
/// the failure happened.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Provider(ProviderError),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Provider(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Provider(ProviderError::InvalidApiKey(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            // Upstream status and message pass through unchanged.
            AppError::Provider(ProviderError::Upstream { status, message }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message,
            ),
            AppError::Provider(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_returns_400() {
        let resp = AppError::BadRequest("Missing API key or prompt".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_key_returns_400() {
        let err = AppError::Provider(ProviderError::InvalidApiKey("bad format".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_status_passes_through() {
        let err = AppError::Provider(ProviderError::Upstream {
            status: 429,
            message: "quota exceeded".into(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn invalid_upstream_status_falls_back_to_500() {
        let err = AppError::Provider(ProviderError::Upstream {
            status: 99,
            message: "weird".into(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn transport_error_returns_500() {
        let err = AppError::Provider(ProviderError::Request("connection refused".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_error_returns_500() {
        let err = AppError::Provider(ProviderError::InvalidResponse("no text".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_shape_on_error() {
        let resp = AppError::BadRequest("Missing API key or prompt".into()).into_response();
        assert_eq!(
            resp.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
