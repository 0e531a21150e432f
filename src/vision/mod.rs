mod client;
mod types;

pub use client::{HttpVisionClient, VisionClient};
pub use types::{LabelAnnotation, Likelihood, SafeSearchAnnotation};
