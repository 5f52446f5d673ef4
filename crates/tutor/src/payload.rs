//! The structured tutorial returned by the model and its conversion into an
//! [`Article`].

use chrono::{DateTime, Utc};
use rand::Rng;
use saber_tudo_core::images::placeholder_image_url;
use saber_tudo_core::paths::encode_segment;
use saber_tudo_core::{Article, Category, Difficulty, FaqItem, ReferenceLink, Step};
use serde::{Deserialize, Serialize};

use crate::{GenerationError, Result};

/// Keyword appended to the topic word when picking a generated article's image
const GENERATED_IMAGE_KEYWORD: &str = "diy";

/// Upper bound (exclusive) for the generated image lock
const GENERATED_IMAGE_LOCK_MAX: u32 = 100;

/// Every field except `materials` is required; a payload missing any of them
/// fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTutorial {
    pub title: String,
    pub category: String,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub introduction: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
    pub common_errors: Vec<String>,
    pub faq: Vec<FaqItem>,
    pub references: Vec<ReferenceLink>,
    pub conclusion: String,
}

impl GeneratedTutorial {
    /// Reject payloads that parse but cannot be shown as a tutorial
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GenerationError::Malformed("empty title".to_string()));
        }
        if self.steps.is_empty() {
            return Err(GenerationError::Malformed("no steps".to_string()));
        }
        Ok(())
    }

    /// Attach the local fields (id, image, timestamp) and produce an article.
    pub fn into_article<R: Rng + ?Sized>(
        self,
        topic: &str,
        image_host: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Article {
        let keywords = format!("{},{}", encode_segment(topic_keyword(topic)), GENERATED_IMAGE_KEYWORD);
        let lock = rng.gen_range(0..GENERATED_IMAGE_LOCK_MAX);

        Article {
            id: generated_id(now),
            title: self.title.trim().to_string(),
            category: normalize_category(&self.category),
            image_url: placeholder_image_url(image_host, &keywords, Some(lock)),
            estimated_time: self.estimated_time,
            difficulty: self.difficulty,
            introduction: self.introduction,
            context: self.context,
            materials: self.materials,
            steps: self.steps,
            tips: self.tips,
            common_errors: self.common_errors,
            faq: self.faq,
            references: self.references,
            conclusion: self.conclusion,
            created_at: now,
            is_generated: true,
        }
    }
}

pub fn generated_id(now: DateTime<Utc>) -> String {
    format!("gen-{}", now.timestamp_millis())
}

/// First whitespace-separated word of the topic
fn topic_keyword(topic: &str) -> &str {
    topic.split_whitespace().next().unwrap_or(topic)
}

/// Snap a model-supplied category onto a known one when it differs only in
/// case or surrounding whitespace. Anything else is kept as given.
fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    Category::ALL
        .iter()
        .find(|c| c.as_str().to_lowercase() == trimmed.to_lowercase())
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
