use super::types::{ComputeResponse, ErrorResponse, TaskOutput};
use crate::{
    Error, Result,
    service::{FieldDescriptionType, Service, ServiceDescription, TaskData, TaskInputs},
};
use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn Service>,
}

pub async fn status(State(state): State<AppState>) -> Json<ServiceDescription> {
    Json(state.service.description().clone())
}

pub async fn compute(
    State(state): State<AppState>,
    multipart: Multipart,
) -> std::result::Result<Json<ComputeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let task_id = Uuid::new_v4().to_string();
    info!("Received compute request, task: {}", task_id);

    let outcome = match read_inputs(state.service.description(), multipart).await {
        Ok(inputs) => state.service.process(inputs).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(outputs) => {
            info!("Task {} completed", task_id);
            Ok(Json(ComputeResponse {
                task_id,
                outputs: outputs
                    .into_iter()
                    .map(|(name, data)| (name, TaskOutput::from(data)))
                    .collect(),
            }))
        }
        Err(e) => {
            error!("Task {} failed: {}", task_id, e);
            Err((
                e.status_code(),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// Collects one part per input field, checking names and content types
/// against the service description.
async fn read_inputs(
    description: &ServiceDescription,
    mut multipart: Multipart,
) -> Result<TaskInputs> {
    let mut inputs = TaskInputs::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        let field_description = description
            .input_field(&name)
            .ok_or_else(|| Error::invalid_input(format!("Unknown field {name}")))?;

        let data_type = match field.content_type() {
            Some(content_type) => FieldDescriptionType::from_mime(content_type)
                .filter(|data_type| field_description.accepts(*data_type))
                .ok_or_else(|| Error::UnsupportedMediaType {
                    name: name.clone(),
                    content_type: content_type.to_string(),
                })?,
            None => field_description
                .types
                .first()
                .copied()
                .ok_or_else(|| Error::internal(format!("Field {name} declares no type")))?,
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, &format!("Failed to read field {name}")))?;

        inputs.insert(name, TaskData::new(bytes.to_vec(), data_type));
    }

    if let Some(missing) = description
        .data_in_fields
        .iter()
        .find(|field| !inputs.contains_key(&field.name))
    {
        return Err(Error::missing_input(missing.name.clone()));
    }

    Ok(inputs)
}

/// Keeps the extractor's verdict on oversized bodies instead of folding
/// every multipart failure into a bad request.
fn multipart_error(error: MultipartError, context: &str) -> Error {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge(error.body_text())
    } else {
        Error::invalid_input(format!("{context}: {error}"))
    }
}
