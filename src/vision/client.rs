use super::types::*;
use crate::{Error, Result, config::VisionConfig};
use async_trait::async_trait;
use tracing::debug;

/// The external annotation service. Both handlers consume it through this
/// trait so tests can substitute a fake.
#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Safe-search detection. `None` when the service returned no
    /// annotation for the image.
    async fn safe_search(&self, image_base64: &str) -> Result<Option<SafeSearchAnnotation>>;

    /// Label detection.
    async fn detect_labels(&self, image_base64: &str) -> Result<Vec<LabelAnnotation>>;
}

/// Client for the Vision REST `images:annotate` endpoint. Construct once at
/// startup and share; the inner reqwest client pools connections.
pub struct HttpVisionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpVisionClient {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    async fn annotate(
        &self,
        image_base64: &str,
        feature: FeatureType,
    ) -> Result<AnnotateImageResponse> {
        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: image_base64.to_string(),
                },
                features: vec![Feature {
                    feature_type: feature,
                }],
            }],
        };

        let url = format!("{}/v1/images:annotate", self.base_url);

        debug!("Sending annotate request for feature {:?}", feature);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::vision(format!(
                "annotate returned {}: {}",
                status, body
            )));
        }

        let parsed: AnnotateResponse = response.json().await?;

        let entry = parsed
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| Error::vision("annotate response contained no entries"))?;

        if let Some(error) = entry.error {
            return Err(Error::vision(format!(
                "annotate error {}: {}",
                error.code, error.message
            )));
        }

        Ok(entry)
    }
}

#[async_trait]
impl VisionClient for HttpVisionClient {
    async fn safe_search(&self, image_base64: &str) -> Result<Option<SafeSearchAnnotation>> {
        let entry = self
            .annotate(image_base64, FeatureType::SafeSearchDetection)
            .await?;
        Ok(entry.safe_search_annotation)
    }

    async fn detect_labels(&self, image_base64: &str) -> Result<Vec<LabelAnnotation>> {
        let entry = self
            .annotate(image_base64, FeatureType::LabelDetection)
            .await?;

        debug!("Received {} label annotations", entry.label_annotations.len());

        Ok(entry.label_annotations)
    }
}
