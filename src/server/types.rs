use crate::service::{FieldDescriptionType, TaskData};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub task_id: String,
    pub outputs: BTreeMap<String, TaskOutput>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskOutput {
    #[serde(rename = "type")]
    pub data_type: FieldDescriptionType,
    pub data: String,
}

impl From<TaskData> for TaskOutput {
    fn from(task_data: TaskData) -> Self {
        Self {
            data_type: task_data.data_type,
            data: String::from_utf8_lossy(&task_data.data).into_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
