/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses and adapts
 * library errors (sqlx, bcrypt) into the internal-error variant.
 *
 * # Response Format
 *
 * Error responses are JSON with the shape:
 * ```json
 * { "success": false, "message": "..." }
 * ```
 * Internal errors created with detail echoing enabled additionally carry an
 * `error` field with the underlying message.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = match &self {
            ApiError::Internal {
                detail: Some(detail),
                ..
            } => serde_json::json!({
                "success": false,
                "message": message,
                "error": detail,
            }),
            _ => serde_json::json!({
                "success": false,
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        ApiError::Internal {
            message: "Internal server error".to_string(),
            detail: None,
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        ApiError::Internal {
            message: "Internal server error".to_string(),
            detail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_into_response_status() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_error() {
        let api_error: ApiError = sqlx::Error::RowNotFound.into();
        match api_error {
            ApiError::Internal { detail, .. } => assert!(detail.is_none()),
            _ => panic!("Expected Internal"),
        }
    }
}
