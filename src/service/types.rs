use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldDescriptionType {
    #[serde(rename = "application/json")]
    ApplicationJson,
    #[serde(rename = "image/jpeg")]
    ImageJpeg,
    #[serde(rename = "image/png")]
    ImagePng,
}

impl FieldDescriptionType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Parameters such as "; charset=utf-8" do not change the type
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/json" => Some(Self::ApplicationJson),
            "image/jpeg" | "image/jpg" => Some(Self::ImageJpeg),
            "image/png" => Some(Self::ImagePng),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub types: Vec<FieldDescriptionType>,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, types: Vec<FieldDescriptionType>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }

    pub fn accepts(&self, field_type: FieldDescriptionType) -> bool {
        self.types.contains(&field_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionUnitTag {
    pub name: String,
    pub acronym: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Available,
    Unavailable,
}

/// Metadata a service is constructed with and announces to engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub summary: String,
    pub description: String,
    pub status: ServiceStatus,
    pub data_in_fields: Vec<FieldDescription>,
    pub data_out_fields: Vec<FieldDescription>,
    #[serde(default)]
    pub tags: Vec<ExecutionUnitTag>,
    #[serde(default)]
    pub has_ai: bool,
    #[serde(default)]
    pub docs_url: Option<String>,
}

impl ServiceDescription {
    pub fn input_field(&self, name: &str) -> Option<&FieldDescription> {
        self.data_in_fields.iter().find(|field| field.name == name)
    }

    pub fn with_status(&self, status: ServiceStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// One named input or output part of a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskData {
    pub data: Vec<u8>,
    pub data_type: FieldDescriptionType,
}

impl TaskData {
    pub fn new(data: impl Into<Vec<u8>>, data_type: FieldDescriptionType) -> Self {
        Self {
            data: data.into(),
            data_type,
        }
    }

    pub fn json(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, FieldDescriptionType::ApplicationJson)
    }
}
