use super::types::{RawResponse, ResponseShape, ShapedOutput};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Turns a raw inference response into the service output.
///
/// Without `desired_output` the whole response is returned pretty-printed.
/// With it, an array response is flattened one level and projected onto
/// `{desired_output: value}` objects, while an object response yields the
/// value under that key as is.
pub fn shape(raw: &RawResponse, desired_output: Option<&str>) -> Result<ShapedOutput> {
    let value: Value = serde_json::from_slice(&raw.body).map_err(|e| {
        Error::InvalidResponse(format!("status {}, body is not JSON: {}", raw.status, e))
    })?;

    if let Some(error) = value.as_object().and_then(|object| object.get("error")) {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(Error::remote(message));
    }

    let Some(key) = desired_output else {
        return Ok(ShapedOutput::Document(to_pretty_json(&value)?));
    };

    match ResponseShape::from(value) {
        ResponseShape::Array(items) => {
            let projection = project(flatten(items), key);
            debug!("Projected {} elements onto '{}'", projection.len(), key);
            Ok(ShapedOutput::Projection(to_pretty_json(&projection)?))
        }
        ResponseShape::Object(mut object) => object
            .remove(key)
            .map(ShapedOutput::Field)
            .ok_or_else(|| Error::missing_field(key)),
        ResponseShape::Scalar(_) => Err(Error::missing_field(key)),
    }
}

/// Splices nested arrays into their parent, one level deep.
pub fn flatten(items: Vec<Value>) -> Vec<Value> {
    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    flat
}

fn project(items: Vec<Value>, key: &str) -> Vec<Value> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(mut object) => object.remove(key).map(|value| {
                let mut single = Map::with_capacity(1);
                single.insert(key.to_string(), value);
                Value::Object(single)
            }),
            _ => None,
        })
        .collect()
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::internal(format!("Invalid UTF-8 in JSON output: {e}")))
}
