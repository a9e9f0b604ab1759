use super::types::RawResponse;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// POSTs `image` as the literal request body to `endpoint`.
    async fn call(&self, endpoint: &str, bearer_token: &str, image: Vec<u8>)
    -> Result<RawResponse>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
}

impl HttpInferenceClient {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn call(
        &self,
        endpoint: &str,
        bearer_token: &str,
        image: Vec<u8>,
    ) -> Result<RawResponse> {
        debug!("Sending {} image bytes to {}", image.len(), endpoint);

        let response = self
            .client
            .post(endpoint)
            .header(AUTHORIZATION, format!("Bearer {bearer_token}"))
            .body(image)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(
            "Received inference response with status {} ({} bytes)",
            status,
            body.len()
        );

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
