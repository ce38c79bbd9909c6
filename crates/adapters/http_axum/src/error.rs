//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use monty_domain::error::MontyError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MontyError`] to an HTTP response with appropriate status code.
pub struct ApiError(MontyError);

impl From<MontyError> for ApiError {
    fn from(err: MontyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MontyError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MontyError::Parse(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MontyError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            MontyError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use monty_domain::error::{DateParseError, NotFoundError, ValidationError};

    use super::*;

    fn status_of(err: MontyError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn should_map_missing_field_to_bad_request() {
        let status = status_of(ValidationError::MissingField("name").into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_parse_error_to_bad_request() {
        let status = status_of(
            DateParseError {
                value: "soon".to_string(),
                expected: "MM-DD-YYYY HH:MM:SS",
            }
            .into(),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let status = status_of(
            NotFoundError {
                entity: "Room",
                id: "9".to_string(),
            }
            .into(),
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_storage_error_to_500_without_leaking_detail() {
        let err = MontyError::Storage("db exploded".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
