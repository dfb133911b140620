use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use railnet_core::Error;
use serde_json::json;
use tower::BoxError;

/// Error returned by every handler, rendered as `{"error": message}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Core(Error),
    Timeout,
    Overloaded,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Core(
                Error::InvalidNode(_) | Error::UnknownAlgorithm(_) | Error::UnknownDimension(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Core(Error::NoPath { .. }) => StatusCode::NOT_FOUND,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Overloaded => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Core(err) => err.to_string(),
            ApiError::Timeout => "Request timed out".to_string(),
            ApiError::Overloaded => "Server is busy, try again later".to_string(),
        }
    }

    /// Maps failures raised by the timeout and load-shed middleware
    pub async fn from_middleware(err: BoxError) -> Self {
        if err.is::<tower::timeout::error::Elapsed>() {
            ApiError::Timeout
        } else if err.is::<tower::load_shed::error::Overloaded>() {
            ApiError::Overloaded
        } else {
            ApiError::Core(Error::InvalidData(format!("Unhandled middleware error: {err}")))
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "{}", self.message());
        } else {
            tracing::debug!(%status, "{}", self.message());
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Core(Error::InvalidNode("Q".into())), StatusCode::BAD_REQUEST),
            (ApiError::Core(Error::UnknownAlgorithm("x".into())), StatusCode::BAD_REQUEST),
            (
                ApiError::Core(Error::NoPath {
                    start: "A".into(),
                    end: "C".into(),
                }),
                StatusCode::NOT_FOUND,
            ),
            (ApiError::Core(Error::InvalidData("bad".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (ApiError::Overloaded, StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err:?}");
        }
    }
}
