use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] compass_http::Error),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}
