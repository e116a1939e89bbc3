use crate::client::base::{AssessClient, BaseClient, Config};
use crate::error::Error;
use async_trait::async_trait;
use compass_http::HttpClient;
use compass_model::assessment::{AssessRequest, Assessment};
use compass_model::responses::ResponseSet;

pub struct SimpleClient {
    config: Config,
    http_client: HttpClient,
}

impl SimpleClient {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: HttpClient::default(),
        }
    }
}

impl BaseClient for SimpleClient {
    fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl AssessClient for SimpleClient {
    async fn assess(&self, responses: &ResponseSet) -> Result<Assessment, Error> {
        let request = AssessRequest {
            responses: responses.clone(),
        };
        self.api_post("assess", &request).await
    }
}
