//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catpoint_domain::error::{CatpointError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatpointError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CatpointError);

impl From<CatpointError> for ApiError {
    fn from(err: CatpointError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CatpointError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CatpointError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        tracing::debug!(%status, error = %message, "request rejected");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catpoint_domain::error::NotFoundError;

    #[test]
    fn should_map_validation_to_bad_request() {
        let response = ApiError::from(ValidationError::EmptyImage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = CatpointError::from(NotFoundError {
            entity: "Sensor",
            id: "x".to_string(),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
