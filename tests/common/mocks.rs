use async_trait::async_trait;
use photogate::{
    Error, Result,
    vision::{LabelAnnotation, Likelihood, SafeSearchAnnotation, VisionClient},
};
use std::sync::{Arc, Mutex};

/// Fake vision client for testing. Returns the same configured annotations
/// on every call (deterministic, so idempotence can be asserted) and records
/// which features were requested.
pub struct MockVisionClient {
    safe_search: Option<SafeSearchAnnotation>,
    labels: Vec<LabelAnnotation>,
    safe_search_error: Option<String>,
    label_error: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self {
            safe_search: None,
            labels: Vec::new(),
            safe_search_error: None,
            label_error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_safe_search(mut self, annotation: SafeSearchAnnotation) -> Self {
        self.safe_search = Some(annotation);
        self
    }

    pub fn with_labels(mut self, labels: Vec<LabelAnnotation>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_safe_search_error(mut self, error: &str) -> Self {
        self.safe_search_error = Some(error.to_string());
        self
    }

    pub fn with_label_error(mut self, error: &str) -> Self {
        self.label_error = Some(error.to_string());
        self
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionClient for MockVisionClient {
    async fn safe_search(&self, image_base64: &str) -> Result<Option<SafeSearchAnnotation>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("safe_search:{}", image_base64));

        if let Some(ref error) = self.safe_search_error {
            return Err(Error::vision(error.clone()));
        }

        Ok(self.safe_search.clone())
    }

    async fn detect_labels(&self, image_base64: &str) -> Result<Vec<LabelAnnotation>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("detect_labels:{}", image_base64));

        if let Some(ref error) = self.label_error {
            return Err(Error::vision(error.clone()));
        }

        Ok(self.labels.clone())
    }
}

// Helper functions for creating test data

pub fn label(description: &str, score: f32) -> LabelAnnotation {
    LabelAnnotation {
        description: description.to_string(),
        score,
    }
}

pub fn safe_annotation(
    adult: Likelihood,
    racy: Likelihood,
    violence: Likelihood,
) -> SafeSearchAnnotation {
    SafeSearchAnnotation {
        adult,
        racy,
        violence,
        ..Default::default()
    }
}
