use hf_image_to_text::service::{
    FieldDescriptionType, INPUT_DESCRIPTION, INPUT_IMAGE, TaskData, TaskInputs,
};
use serde_json::Value;

pub const MULTIPART_BOUNDARY: &str = "X-TEST-BOUNDARY";

/// Smallest PNG signature, enough to stand in for an image
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0xFF];

pub fn descriptor(api_url: &str, desired_output: Option<&str>) -> Value {
    let mut value = serde_json::json!({
        "api_token": "hf_test_token",
        "api_url": api_url,
    });
    if let Some(desired_output) = desired_output {
        value["desired_output"] = Value::String(desired_output.to_string());
    }
    value
}

/// Builds the two inputs the image-to-text service expects
pub fn create_task_inputs(descriptor: &Value) -> TaskInputs {
    let mut inputs = TaskInputs::new();
    inputs.insert(
        INPUT_DESCRIPTION.to_string(),
        TaskData::json(descriptor.to_string()),
    );
    inputs.insert(
        INPUT_IMAGE.to_string(),
        TaskData::new(PNG_BYTES.to_vec(), FieldDescriptionType::ImagePng),
    );
    inputs
}

/// One part of a multipart/form-data body
pub struct Part<'a> {
    pub name: &'a str,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, part.name
            )
            .as_bytes(),
        );
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
}
