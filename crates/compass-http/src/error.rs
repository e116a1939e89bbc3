use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("reqwest client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("response failed with status {status}")]
    Status { status: http::StatusCode, body: String },

    #[error("received invalid json data: {0}")]
    Json(#[from] serde_json::Error),
}
