use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

/// Transport seam for API clients. Implementations resolve non-success
/// statuses and undecodable bodies into their error type, so callers only
/// ever see a typed body or an error.
#[async_trait]
pub trait BaseHttpClient: Send + Sync {
    type Error;

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Self::Error>;

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, Self::Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned;
}
