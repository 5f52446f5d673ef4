//! Read-only selections over an article list.
//!
//! None of these functions fail. An empty result is the "nothing found"
//! state, not an error.

use std::borrow::Borrow;

use crate::types::Article;

// Accepts both owned articles and the shared `Arc<Article>` list held by the library.
fn view<A: Borrow<Article>>(article: &A) -> &Article {
    Borrow::<Article>::borrow(article)
}

/// Articles whose category equals `category` exactly (case-sensitive)
pub fn by_category<'a, A: Borrow<Article>>(articles: &'a [A], category: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .map(view)
        .filter(|a| a.category == category)
        .collect()
}

/// Case-insensitive substring match on title, introduction or category.
///
/// An empty query matches everything. The query is used as given, so
/// surrounding whitespace is part of the match.
pub fn search<'a, A: Borrow<Article>>(articles: &'a [A], query: &str) -> Vec<&'a Article> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .map(view)
        .filter(|a| matches_lowercase(a, &needle))
        .collect()
}

/// The predicate behind [`search`]; `needle` must already be lowercased.
pub fn matches_lowercase(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article.introduction.to_lowercase().contains(needle)
        || article.category.to_lowercase().contains(needle)
}

/// The first `n` articles in their current order (insertion order, not date)
pub fn recent<A>(articles: &[A], n: usize) -> &[A] {
    &articles[..n.min(articles.len())]
}

pub fn find_by_id<'a, A: Borrow<Article>>(articles: &'a [A], id: &str) -> Option<&'a Article> {
    articles.iter().map(view).find(|a| a.id == id)
}
