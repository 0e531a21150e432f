use crate::config::ModerationConfig;
use crate::vision::{LabelAnnotation, SafeSearchAnnotation};
use crate::{Error, Result};
use regex::Regex;
use tracing::debug;

/// Display gate over the safe-search annotation. LIKELY or VERY_LIKELY on
/// any of adult, racy, violence blocks. A missing annotation also blocks:
/// the classifier returned no verdict, so the image is not cleared.
pub fn is_allowed(annotation: Option<&SafeSearchAnnotation>) -> bool {
    match annotation {
        Some(a) => !(a.adult.blocks() || a.racy.blocks() || a.violence.blocks()),
        None => false,
    }
}

/// Matches label annotations against the cat vocabulary. Shared by both
/// handlers so the vocabulary, floor and predicate cannot drift apart.
pub struct CatMatcher {
    terms: Vec<String>,
    min_score: f32,
    cat_word: Regex,
}

impl CatMatcher {
    pub fn new(config: &ModerationConfig) -> Result<Self> {
        let terms = config
            .cat_terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let cat_word = Regex::new(r"\bcat\b")
            .map_err(|e| Error::config(format!("Invalid cat word pattern: {}", e)))?;

        Ok(Self {
            terms,
            min_score: config.min_label_score,
            cat_word,
        })
    }

    /// True if any label at or above the confidence floor names a cat.
    /// Stops at the first hit.
    pub fn contains_cat(&self, labels: &[LabelAnnotation]) -> bool {
        for label in labels {
            if label.score < self.min_score {
                continue;
            }
            let description = label.description.trim().to_lowercase();
            debug!(
                "Label above threshold: {} ({:.2})",
                description, label.score
            );
            if let Some(term) = self.matching_term(&description) {
                debug!("Label '{}' matched cat term '{}'", description, term);
                return true;
            }
        }
        false
    }

    fn matching_term(&self, description: &str) -> Option<&str> {
        for term in &self.terms {
            if description.contains(term.as_str()) {
                return Some(term);
            }
        }
        if self.cat_word.is_match(description) {
            return Some("cat");
        }
        None
    }
}
