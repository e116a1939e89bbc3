use crate::core::BaseHttpClient;
use crate::error::Error;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new().expect("failed to create default client")
    }
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status { status, body: text });
        }
        serde_json::from_str(&text).map_err(Into::into)
    }
}

#[async_trait]
impl BaseHttpClient for ReqwestHttpClient {
    type Error = Error;

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Self::Error> {
        tracing::debug!(%url, "sending GET request");
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, Self::Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "sending POST request");
        let response = self.client.post(url).json(body).send().await?;
        Self::decode(response).await
    }
}
