use super::{
    ExecutionUnitTag, FieldDescription, FieldDescriptionType, Service, ServiceDescription,
    ServiceStatus, TaskData, TaskInputs, TaskOutputs,
};
use crate::{
    Error, Result,
    inference::{Descriptor, InferenceClient, shape},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub const INPUT_DESCRIPTION: &str = "json_description";
pub const INPUT_IMAGE: &str = "input_image";
pub const OUTPUT_RESULT: &str = "result";

const NAME: &str = "Hugging Face image-to-text";
const SLUG: &str = "hugging-face-image-to-text";
const DOCS_URL: &str =
    "https://docs.swiss-ai-center.ch/reference/services/hugging-face-image-to-text/";

const SUMMARY: &str = "This service is used to query image-to-text models from Hugging Face";

const DESCRIPTION: &str = r#"The service is used to query image-to-text AI models from the Hugging Face inference API.

You can choose from any model available on the inference API from the Hugging Face Hub
that takes an image as input and outputs text (json).

This service has two inputs:
 - A json file that defines the model you want to use, your access token and optionally a specific field
   of the json answer to use as the output. If you specify nothing, the whole json is returned.
 - The image file used as input.

json_description.json example:
{
    "api_token": "your_token",
    "api_url": "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-base",
    "desired_output": "generated_text"
}

The model may need some time to load on Hugging Face's side and the first request can fail with a
loading error. Submit the task again once the model is loaded."#;

pub struct ImageToTextService {
    description: ServiceDescription,
    inference: Arc<dyn InferenceClient>,
}

impl ImageToTextService {
    pub fn new(url: impl Into<String>, inference: Arc<dyn InferenceClient>) -> Self {
        let description = ServiceDescription {
            name: NAME.to_string(),
            slug: SLUG.to_string(),
            url: url.into(),
            summary: SUMMARY.to_string(),
            description: DESCRIPTION.to_string(),
            status: ServiceStatus::Available,
            data_in_fields: vec![
                FieldDescription::new(
                    INPUT_DESCRIPTION,
                    vec![FieldDescriptionType::ApplicationJson],
                ),
                FieldDescription::new(
                    INPUT_IMAGE,
                    vec![FieldDescriptionType::ImageJpeg, FieldDescriptionType::ImagePng],
                ),
            ],
            data_out_fields: vec![FieldDescription::new(
                OUTPUT_RESULT,
                vec![FieldDescriptionType::ApplicationJson],
            )],
            tags: vec![ExecutionUnitTag {
                name: "Image Recognition".to_string(),
                acronym: "IR".to_string(),
            }],
            has_ai: true,
            docs_url: Some(DOCS_URL.to_string()),
        };

        Self {
            description,
            inference,
        }
    }
}

#[async_trait]
impl Service for ImageToTextService {
    fn description(&self) -> &ServiceDescription {
        &self.description
    }

    async fn process(&self, mut inputs: TaskInputs) -> Result<TaskOutputs> {
        let descriptor = inputs
            .get(INPUT_DESCRIPTION)
            .ok_or_else(|| Error::missing_input(INPUT_DESCRIPTION))
            .and_then(|data| Descriptor::from_slice(&data.data))?;

        let image = inputs
            .remove(INPUT_IMAGE)
            .ok_or_else(|| Error::missing_input(INPUT_IMAGE))?;

        info!(
            "Querying inference API {} with a {} byte image",
            descriptor.api_url,
            image.data.len()
        );

        let raw = self
            .inference
            .call(&descriptor.api_url, &descriptor.api_token, image.data)
            .await?;

        let output = shape(&raw, descriptor.desired_output.as_deref())?;
        debug!("Shaped inference response: {:?}", output);

        let mut outputs = TaskOutputs::new();
        outputs.insert(OUTPUT_RESULT.to_string(), TaskData::json(output.into_bytes()?));
        Ok(outputs)
    }
}
