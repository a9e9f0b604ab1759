mod client;
mod shaper;
mod types;

pub use client::{HttpInferenceClient, InferenceClient};
pub use shaper::{flatten, shape, to_pretty_json};
pub use types::{Descriptor, RawResponse, ResponseShape, ShapedOutput};
