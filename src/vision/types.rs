use serde::{Deserialize, Serialize};

/// Ordinal likelihood scale of the safe-search annotation. Variant order
/// matters: `Ord` follows declaration order, from no verdict up to
/// VERY_LIKELY.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    #[default]
    Unknown,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl Likelihood {
    /// LIKELY and VERY_LIKELY gate display; everything below does not.
    pub fn blocks(self) -> bool {
        self >= Likelihood::Likely
    }
}

/// Per-image likelihood scores for sensitive categories. Only adult, racy
/// and violence participate in the display gate; spoof and medical are
/// carried through as returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafeSearchAnnotation {
    pub adult: Likelihood,
    pub spoof: Likelihood,
    pub medical: Likelihood,
    pub violence: Likelihood,
    pub racy: Likelihood,
}

/// A free-text tag with a confidence score describing image contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelAnnotation {
    pub description: String,
    pub score: f32,
}

// Wire envelope of the `images:annotate` endpoint.

#[derive(Debug, Serialize)]
pub(crate) struct AnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageContent {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum FeatureType {
    #[serde(rename = "SAFE_SEARCH_DETECTION")]
    SafeSearchDetection,
    #[serde(rename = "LABEL_DETECTION")]
    LabelDetection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct AnnotateImageResponse {
    pub safe_search_annotation: Option<SafeSearchAnnotation>,
    pub label_annotations: Vec<LabelAnnotation>,
    pub error: Option<ApiStatus>,
}

/// Per-entry error status the annotate endpoint reports inline.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiStatus {
    pub code: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_likelihood_parses_wire_names() {
        let likelihood: Likelihood = serde_json::from_value(json!("VERY_LIKELY")).unwrap();
        assert_eq!(likelihood, Likelihood::VeryLikely);

        let likelihood: Likelihood = serde_json::from_value(json!("VERY_UNLIKELY")).unwrap();
        assert_eq!(likelihood, Likelihood::VeryUnlikely);
    }

    #[test]
    fn test_likelihood_ordering() {
        assert!(Likelihood::Unknown < Likelihood::VeryUnlikely);
        assert!(Likelihood::Possible < Likelihood::Likely);
        assert!(Likelihood::Likely < Likelihood::VeryLikely);
    }

    #[test]
    fn test_safe_search_annotation_defaults_missing_fields() {
        let annotation: SafeSearchAnnotation =
            serde_json::from_value(json!({ "adult": "LIKELY" })).unwrap();

        assert_eq!(annotation.adult, Likelihood::Likely);
        assert_eq!(annotation.racy, Likelihood::Unknown);
        assert_eq!(annotation.violence, Likelihood::Unknown);
    }

    #[test]
    fn test_annotate_request_wire_format() {
        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: "aGVsbG8=".to_string(),
                },
                features: vec![Feature {
                    feature_type: FeatureType::LabelDetection,
                }],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "requests": [{
                    "image": { "content": "aGVsbG8=" },
                    "features": [{ "type": "LABEL_DETECTION" }]
                }]
            })
        );
    }

    #[test]
    fn test_annotate_response_parses_labels_and_error() {
        let response: AnnotateResponse = serde_json::from_value(json!({
            "responses": [{
                "labelAnnotations": [
                    { "description": "Cat", "score": 0.97, "topicality": 0.97 }
                ]
            }]
        }))
        .unwrap();

        let entry = &response.responses[0];
        assert!(entry.error.is_none());
        assert!(entry.safe_search_annotation.is_none());
        assert_eq!(entry.label_annotations[0].description, "Cat");

        let response: AnnotateResponse = serde_json::from_value(json!({
            "responses": [{
                "error": { "code": 3, "message": "Bad image data." }
            }]
        }))
        .unwrap();

        let error = response.responses[0].error.as_ref().unwrap();
        assert_eq!(error.code, 3);
        assert_eq!(error.message, "Bad image data.");
    }
}
