use async_trait::async_trait;
use hf_image_to_text::{Error, Result, inference::InferenceClient, inference::RawResponse};
use std::sync::{Arc, Mutex};

/// A recorded call to the inference API
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub bearer_token: String,
    pub image: Vec<u8>,
}

/// Mock inference client returning canned responses
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<RawResponse>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub error: Option<String>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_body(status, serde_json::to_vec(&body).unwrap())
    }

    pub fn with_body(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(RawResponse::new(status, body));
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn call(
        &self,
        endpoint: &str,
        bearer_token: &str,
        image: Vec<u8>,
    ) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            bearer_token: bearer_token.to_string(),
            image,
        });

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
