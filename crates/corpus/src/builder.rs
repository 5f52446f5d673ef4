use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use saber_tudo_core::images::placeholder_image_url;
use saber_tudo_core::{Article, Category, Difficulty};

use crate::catalog::titles_for;
use crate::featured::{FEATURED_ID_CEILING, featured_articles};
use crate::templates::content_for;

/// Backward window for randomized creation dates (about 115 days)
pub const DATE_WINDOW_MS: i64 = 10_000_000_000;

/// Minutes range for the estimated time, inclusive
pub const MIN_MINUTES: u32 = 10;
pub const MAX_MINUTES: u32 = 49;

/// Map a uniform draw in `[0, 1)` to a difficulty: 30% hard, 30% medium, 40% easy
pub fn difficulty_from_draw(draw: f64) -> Difficulty {
    if draw < 0.3 {
        Difficulty::Hard
    } else if draw < 0.6 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Expands the title catalog into full articles.
///
/// Ids, titles and categories depend only on the catalog. Time, difficulty,
/// image lock and creation date are cosmetic and come from the RNG and clock.
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    image_host: String,
    first_id: u32,
}

impl CorpusBuilder {
    pub fn new(image_host: impl Into<String>) -> Self {
        Self {
            image_host: image_host.into(),
            first_id: FEATURED_ID_CEILING,
        }
    }

    /// Build with the thread RNG and the system clock
    pub fn build(&self) -> Vec<Article> {
        self.build_with(&mut rand::thread_rng(), Utc::now())
    }

    pub fn build_with<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> Vec<Article> {
        let mut articles = Vec::new();
        let mut counter = self.first_id;

        for category in Category::ALL {
            let keywords = category.image_keywords();

            for (index, title) in titles_for(category).iter().enumerate() {
                let id = counter;
                counter += 1;
                let lock = index as u32 + counter;
                let content = content_for(category, title);

                articles.push(Article {
                    id: id.to_string(),
                    title: title.to_string(),
                    category: category.as_str().to_string(),
                    image_url: placeholder_image_url(&self.image_host, keywords, Some(lock)),
                    estimated_time: format!("{} min", rng.gen_range(MIN_MINUTES..=MAX_MINUTES)),
                    difficulty: difficulty_from_draw(rng.gen_range(0.0..1.0)),
                    introduction: content.introduction,
                    context: content.context,
                    materials: Some(content.materials),
                    steps: content.steps,
                    tips: content.tips,
                    common_errors: content.common_errors,
                    faq: content.faq,
                    references: content.references,
                    conclusion: content.conclusion,
                    created_at: random_date(rng, now),
                    is_generated: false,
                });
            }
        }

        articles
    }
}

/// A midnight-UTC date somewhere in the window ending at `now`
fn random_date<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = Duration::milliseconds(rng.gen_range(0..DATE_WINDOW_MS));
    (now - offset)
        .date_naive()
        .and_time(NaiveTime::default())
        .and_utc()
}

/// Generated corpus only
pub fn build_corpus(image_host: &str) -> Vec<Article> {
    CorpusBuilder::new(image_host).build()
}

/// Featured articles followed by the generated corpus
pub fn build_library(image_host: &str) -> Vec<Article> {
    let mut articles = featured_articles(image_host);
    let corpus = build_corpus(image_host);
    tracing::debug!(
        featured = articles.len(),
        corpus = corpus.len(),
        "library built"
    );
    articles.extend(corpus);
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::title_count;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use saber_tudo_core::query::{by_category, search};
    use std::collections::HashSet;

    const HOST: &str = "loremflickr.com";

    fn seeded(seed: u64) -> Vec<Article> {
        CorpusBuilder::new(HOST).build_with(&mut StdRng::seed_from_u64(seed), Utc::now())
    }

    #[test]
    fn test_difficulty_from_draw_bands() {
        assert_eq!(difficulty_from_draw(0.0), Difficulty::Hard);
        assert_eq!(difficulty_from_draw(0.29), Difficulty::Hard);
        assert_eq!(difficulty_from_draw(0.3), Difficulty::Medium);
        assert_eq!(difficulty_from_draw(0.59), Difficulty::Medium);
        assert_eq!(difficulty_from_draw(0.6), Difficulty::Easy);
        assert_eq!(difficulty_from_draw(0.999), Difficulty::Easy);
    }

    #[test]
    fn test_one_article_per_catalog_title() {
        let corpus = seeded(1);
        assert_eq!(corpus.len(), title_count());
    }

    #[test]
    fn test_ids_are_sequential_from_100() {
        let corpus = seeded(2);
        assert_eq!(corpus[0].id, "100");
        assert_eq!(corpus[corpus.len() - 1].id, (100 + corpus.len() - 1).to_string());
        let unique: HashSet<_> = corpus.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(unique.len(), corpus.len());
    }

    #[test]
    fn test_category_major_order() {
        let corpus = seeded(3);
        assert_eq!(corpus[0].title, "Bolo de Cenoura com Chocolate");
        assert_eq!(corpus[50].category, "Casa e Organização");
        assert_eq!(corpus[50].title, "Como Organizar o Guarda-Roupa");
        assert_eq!(corpus.last().unwrap().title, "Dicas para Cultivar Salsa");
    }

    #[test]
    fn test_by_category_matches_catalog_counts() {
        let corpus = seeded(4);
        for category in Category::ALL {
            let found = by_category(&corpus, category.as_str());
            assert_eq!(found.len(), titles_for(category).len());
            assert!(found.iter().all(|a| a.category == category.as_str()));
        }
    }

    #[test]
    fn test_every_article_is_complete() {
        for article in seeded(5) {
            assert!(!article.steps.is_empty());
            assert!(Difficulty::ALL.contains(&article.difficulty));
            assert!(article.context.contains(&article.title));
            assert!(!article.is_generated);
        }
    }

    #[test]
    fn test_cosmetic_fields_in_range() {
        let now = Utc::now();
        let corpus = CorpusBuilder::new(HOST).build_with(&mut StdRng::seed_from_u64(6), now);
        let earliest = now - Duration::milliseconds(DATE_WINDOW_MS) - Duration::days(1);

        for article in &corpus {
            let minutes: u32 = article
                .estimated_time
                .strip_suffix(" min")
                .unwrap()
                .parse()
                .unwrap();
            assert!((MIN_MINUTES..=MAX_MINUTES).contains(&minutes));
            assert!(article.created_at <= now);
            assert!(article.created_at >= earliest);
            assert_eq!(article.created_at.time(), NaiveTime::default());
        }
    }

    #[test]
    fn test_image_url_uses_category_keywords_and_lock() {
        let corpus = seeded(7);
        // first kitchen title: index 0, counter already advanced to 101
        assert_eq!(
            corpus[0].image_url,
            "https://loremflickr.com/800/400/food,cooking,kitchen,recipe?lock=101"
        );
        // first home title: index 0, id 150, counter 151
        assert_eq!(
            corpus[50].image_url,
            "https://loremflickr.com/800/400/house,livingroom,cleaning,organization?lock=151"
        );
    }

    #[test]
    fn test_all_difficulties_occur() {
        let corpus = seeded(8);
        for difficulty in Difficulty::ALL {
            assert!(corpus.iter().any(|a| a.difficulty == difficulty));
        }
    }

    #[test]
    fn test_two_builds_share_identity_fields() {
        let first = build_corpus(HOST);
        let second = build_corpus(HOST);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.category, b.category);
        }
    }

    #[test]
    fn test_library_starts_with_featured() {
        let library = build_library(HOST);
        assert_eq!(library[0].id, "1");
        assert_eq!(library.len(), title_count() + 1);

        let kitchen = by_category(&library, "Cozinha");
        assert_eq!(kitchen.len(), 51);
        assert!(kitchen.iter().all(|a| a.category == "Cozinha"));
    }

    #[test]
    fn test_search_finds_featured_bread() {
        let library = build_library(HOST);
        let found = search(&library, "pão");
        assert!(found.iter().any(|a| a.title == "Como Fazer Pão Caseiro Perfeito"));
        assert!(!found.iter().any(|a| a.category == "Finanças Pessoais"));

        let upper: Vec<&str> = search(&library, "BOLO").iter().map(|a| a.id.as_str()).collect();
        let lower: Vec<&str> = search(&library, "bolo").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn test_search_empty_query_is_identity() {
        let library = build_library(HOST);
        let found = search(&library, "");
        assert_eq!(found.len(), library.len());
        assert!(found.iter().zip(library.iter()).all(|(a, b)| a.id == b.id));
    }
}
