use std::sync::{Arc, PoisonError, RwLock};

use crate::types::Article;

/// The in-memory article collection for one process.
///
/// Readers take a snapshot (a cheap `Arc` clone) and query it without
/// holding the lock. The only mutation, [`Library::prepend`], builds a new
/// list of shared article handles and swaps it in whole; articles themselves
/// are never copied.
#[derive(Debug, Default)]
pub struct Library {
    articles: RwLock<Arc<Vec<Arc<Article>>>>,
}

impl Library {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(Arc::new(articles.into_iter().map(Arc::new).collect())),
        }
    }

    /// Current list in display order
    pub fn snapshot(&self) -> Arc<Vec<Arc<Article>>> {
        self.articles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an article at the front of the list and return it as stored.
    ///
    /// If the id is already taken a numeric suffix is appended, so ids stay
    /// unique even when two generations land in the same millisecond.
    pub fn prepend(&self, mut article: Article) -> Arc<Article> {
        let mut guard = self
            .articles
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let base_id = article.id.clone();
        let mut suffix = 2;
        while guard.iter().any(|a| a.id == article.id) {
            article.id = format!("{}-{}", base_id, suffix);
            suffix += 1;
        }

        let article = Arc::new(article);
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(Arc::clone(&article));
        next.extend(guard.iter().map(Arc::clone));
        *guard = Arc::new(next);

        tracing::info!(id = %article.id, title = %article.title, total = guard.len(), "article added");
        article
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;
    use chrono::Utc;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Artigo {}", id),
            category: "Tecnologia".to_string(),
            image_url: String::new(),
            estimated_time: "15 min".to_string(),
            difficulty: Difficulty::Hard,
            introduction: String::new(),
            context: String::new(),
            materials: None,
            steps: vec![],
            tips: vec![],
            common_errors: vec![],
            faq: vec![],
            references: vec![],
            conclusion: String::new(),
            created_at: Utc::now(),
            is_generated: false,
        }
    }

    #[test]
    fn test_prepend_puts_article_first() {
        let library = Library::new(vec![article("100"), article("101")]);
        library.prepend(article("gen-1"));

        let ids: Vec<String> = library.snapshot().iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec!["gen-1", "100", "101"]);
    }

    #[test]
    fn test_prepend_keeps_ids_unique() {
        let library = Library::new(vec![article("gen-5")]);
        let stored = library.prepend(article("gen-5"));
        assert_eq!(stored.id, "gen-5-2");
        let stored = library.prepend(article("gen-5"));
        assert_eq!(stored.id, "gen-5-3");
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_prepend() {
        let library = Library::new(vec![article("100")]);
        let before = library.snapshot();
        library.prepend(article("gen-1"));
        assert_eq!(before.len(), 1);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_prepend_shares_existing_articles() {
        let library = Library::new(vec![article("100"), article("101")]);
        let before = library.snapshot();
        let stored = library.prepend(article("gen-1"));
        let after = library.snapshot();

        assert!(Arc::ptr_eq(&after[0], &stored));
        assert!(Arc::ptr_eq(&before[0], &after[1]));
        assert!(Arc::ptr_eq(&before[1], &after[2]));
    }

    #[test]
    fn test_empty_library() {
        let library = Library::default();
        assert!(library.is_empty());
    }
}
