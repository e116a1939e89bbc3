use axum::Json;
use axum::response::{IntoResponse, Response};
use compass_config::error::ResponseRejection;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("request body did not contain a responses object")]
    ResponsesRequired,

    #[error(transparent)]
    InvalidResponse(#[from] ResponseRejection),

    #[error("assessment generation failed")]
    Generation,
}

/// Wire shape of every error body this API returns.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ResponsesRequired | Self::InvalidResponse(_) => StatusCode::BAD_REQUEST,
            Self::Generation => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message. Validation failures name the first offending
    /// field; everything behind the relay stays a fixed sentence, the
    /// concrete cause only goes to the server log.
    fn message(&self) -> String {
        match self {
            Self::ResponsesRequired => "Responses are required".to_owned(),
            Self::InvalidResponse(rejection) => {
                format!(
                    "Invalid or missing value for {}. Must be between 1 and 5.",
                    rejection.question
                )
            }
            Self::Generation => "Failed to generate assessment".to_owned(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}
