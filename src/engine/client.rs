use crate::{Error, Result, service::ServiceDescription};
use async_trait::async_trait;
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineClient: Send + Sync {
    /// Registers (or updates) `description` with the engine at `engine_url`.
    async fn announce(&self, engine_url: &str, description: &ServiceDescription) -> Result<()>;
}

pub struct HttpEngineClient {
    client: reqwest::Client,
}

impl HttpEngineClient {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpEngineClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngineClient for HttpEngineClient {
    async fn announce(&self, engine_url: &str, description: &ServiceDescription) -> Result<()> {
        let url = format!("{}/services", engine_url.trim_end_matches('/'));
        debug!("Announcing service {} to {}", description.slug, url);

        let response = self
            .client
            .post(&url)
            .json(description)
            .send()
            .await
            .map_err(|e| Error::engine(format!("Failed to reach engine {engine_url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::engine(format!(
                "Engine {engine_url} rejected the announcement with status {status}: {body}"
            )));
        }

        Ok(())
    }
}
