//! Tutorial generation through an external language model.
//!
//! The boundary is one asynchronous call with two outcomes: a complete
//! [`GeneratedTutorial`] or a [`GenerationError`]. There are no partial
//! results and no retries; timeouts are imposed by [`generate_article`].

pub mod gemini;
pub mod payload;

use async_trait::async_trait;
use chrono::Utc;
use saber_tudo_core::Article;
use std::time::Duration;

pub use gemini::GeminiClient;
pub use payload::GeneratedTutorial;

/// What readers see when a generation fails, whatever the cause
pub const USER_NOTICE: &str = "Erro ao gerar tutorial. Verifique a API Key ou tente novamente.";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured (set {0})")]
    MissingCredentials(String),

    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("generation timed out after {0:?}")]
    TimedOut(Duration),
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[async_trait]
pub trait TutorialGenerator: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Produce a tutorial for `topic`, or fail with no payload
    async fn generate(&self, topic: &str) -> Result<GeneratedTutorial>;
}

/// Run one generation under `timeout` and finalize the result into an article.
///
/// The returned article is not stored anywhere; the caller decides whether
/// to add it to the library.
pub async fn generate_article(
    generator: &dyn TutorialGenerator,
    topic: &str,
    image_host: &str,
    timeout: Duration,
) -> Result<Article> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(GenerationError::EmptyTopic);
    }

    tracing::info!(generator = generator.name(), topic, "generating tutorial");
    let tutorial = match tokio::time::timeout(timeout, generator.generate(topic)).await {
        Ok(result) => result?,
        Err(_) => return Err(GenerationError::TimedOut(timeout)),
    };
    tutorial.validate()?;

    let article = tutorial.into_article(topic, image_host, Utc::now(), &mut rand::thread_rng());
    tracing::info!(id = %article.id, title = %article.title, "tutorial generated");
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::tests::sample_tutorial;

    struct Canned(Option<GeneratedTutorial>);

    #[async_trait]
    impl TutorialGenerator for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, _topic: &str) -> Result<GeneratedTutorial> {
            self.0
                .clone()
                .ok_or_else(|| GenerationError::Malformed("empty".to_string()))
        }
    }

    struct Stalled;

    #[async_trait]
    impl TutorialGenerator for Stalled {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn generate(&self, _topic: &str) -> Result<GeneratedTutorial> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(GenerationError::EmptyTopic)
        }
    }

    #[tokio::test]
    async fn test_generate_article_finalizes_payload() {
        let generator = Canned(Some(sample_tutorial()));
        let article = generate_article(&generator, "  sushi em casa ", "loremflickr.com", Duration::from_secs(5))
            .await
            .unwrap();

        assert!(article.id.starts_with("gen-"));
        assert!(article.is_generated);
        assert!(article.image_url.starts_with("https://loremflickr.com/800/400/sushi,diy?lock="));
        assert_eq!(article.title, "Como Fazer Sushi em Casa");
    }

    #[tokio::test]
    async fn test_generate_article_rejects_blank_topic() {
        let generator = Canned(Some(sample_tutorial()));
        let result = generate_article(&generator, "   ", "loremflickr.com", Duration::from_secs(5)).await;
        assert!(matches!(result, Err(GenerationError::EmptyTopic)));
    }

    #[tokio::test]
    async fn test_generate_article_propagates_failure() {
        let generator = Canned(None);
        let result = generate_article(&generator, "bonsai", "loremflickr.com", Duration::from_secs(5)).await;
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_generate_article_rejects_unusable_payload() {
        let mut tutorial = sample_tutorial();
        tutorial.steps.clear();
        let generator = Canned(Some(tutorial));
        let result = generate_article(&generator, "bonsai", "loremflickr.com", Duration::from_secs(5)).await;
        assert!(matches!(result, Err(GenerationError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_generate_article_times_out() {
        let result = generate_article(&Stalled, "bonsai", "loremflickr.com", Duration::from_millis(20)).await;
        assert!(matches!(result, Err(GenerationError::TimedOut(_))));
    }
}
