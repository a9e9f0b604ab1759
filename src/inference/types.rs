use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied `json_description` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub api_token: String,
    pub api_url: String,
    #[serde(default)]
    pub desired_output: Option<String>,
}

impl Descriptor {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::invalid_descriptor(format!("not valid UTF-8: {e}")))?;
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::invalid_descriptor(e.to_string()))?;

        for key in ["api_token", "api_url"] {
            if value.get(key).is_none() {
                return Err(Error::invalid_descriptor(format!(
                    "api_url or api_token missing from json_description: '{key}'"
                )));
            }
        }

        serde_json::from_value(value).map_err(|e| Error::invalid_descriptor(e.to_string()))
    }
}

/// Status and body exactly as the inference endpoint returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Top-level kind of a decoded inference response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Scalar(Value),
}

impl From<Value> for ResponseShape {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            other => Self::Scalar(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapedOutput {
    /// Whole response, pretty-printed
    Document(String),
    /// Pretty-printed list of single-key objects
    Projection(String),
    /// Value found under the desired key of an object response
    Field(Value),
}

impl ShapedOutput {
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Document(text) | Self::Projection(text) => Ok(text.into_bytes()),
            Self::Field(Value::String(text)) => Ok(text.into_bytes()),
            Self::Field(value) => Ok(serde_json::to_vec(&value)?),
        }
    }
}
