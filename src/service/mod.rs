mod image_to_text;
mod types;

pub use image_to_text::{INPUT_DESCRIPTION, INPUT_IMAGE, ImageToTextService, OUTPUT_RESULT};
pub use types::*;

use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub type TaskInputs = HashMap<String, TaskData>;
pub type TaskOutputs = HashMap<String, TaskData>;

/// A unit of work the hosting runtime can describe, announce and invoke.
#[async_trait]
pub trait Service: Send + Sync {
    fn description(&self) -> &ServiceDescription;

    async fn process(&self, inputs: TaskInputs) -> Result<TaskOutputs>;
}
