use crate::error::Error;
use async_trait::async_trait;
use compass_http::{BaseHttpClient, HttpClient};
use compass_model::assessment::Assessment;
use compass_model::responses::ResponseSet;
use compass_model::status::Status;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: ApiUrl,
}

impl Config {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl { url: base_url },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiUrl {
    url: Url,
}

impl ApiUrl {
    pub fn for_api(&self, api_path: &str) -> Result<Url, url::ParseError> {
        self.url.join("api/")?.join(api_path)
    }
}

#[async_trait]
pub trait BaseClient {
    fn http_client(&self) -> &HttpClient;
    fn config(&self) -> &Config;

    async fn api_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.config().base_url.for_api(path)?;
        tracing::debug!(%url, "sending API request");
        self.http_client().get_json(url).await.map_err(Into::into)
    }

    async fn api_post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.config().base_url.for_api(path)?;
        tracing::debug!(%url, "sending API request");
        self.http_client().post_json(url, body).await.map_err(Into::into)
    }
}

#[async_trait]
pub trait PublicClient: BaseClient {
    async fn status(&self) -> Result<Status, Error> {
        self.api_get("status").await
    }
}

impl<T> PublicClient for T where T: BaseClient {}

/// Submission seam of the questionnaire: one request carrying the complete
/// answer set, one assessment back. Transport failures, non-success
/// statuses and undecodable bodies all surface through [`Error`]; there is
/// no retry and no caching, resubmitting always re-posts.
#[async_trait]
pub trait AssessClient {
    async fn assess(&self, responses: &ResponseSet) -> Result<Assessment, Error>;
}
