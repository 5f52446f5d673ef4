// Article library validation

use saber_tudo_core::{Article, Category, query};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check the invariants every served article list must hold.
///
/// Errors break the site (duplicate ids, articles with nothing to show);
/// warnings flag content that renders but looks wrong.
pub fn validate_library(articles: &[Article]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen = HashSet::new();

    for article in articles {
        let label = format!("article {}", article.id);

        if !seen.insert(article.id.as_str()) {
            report.errors.push(format!("Duplicate id '{}'", article.id));
        }
        if article.id.trim().is_empty() {
            report.errors.push(format!("Article '{}' has an empty id", article.title));
        }
        if article.title.trim().is_empty() {
            report.errors.push(format!("{}: empty title", label));
        }
        if article.steps.is_empty() {
            report.errors.push(format!("{}: no steps", label));
        }
        for (i, step) in article.steps.iter().enumerate() {
            if step.title.trim().is_empty() {
                report
                    .errors
                    .push(format!("{}: step {} has an empty title", label, i + 1));
            }
        }

        if article.category_kind().is_none() {
            report.warnings.push(format!(
                "{}: category '{}' is not one of the site categories",
                label, article.category
            ));
        }
        if !article.image_url.starts_with("https://") {
            report
                .warnings
                .push(format!("{}: image URL is not https: '{}'", label, article.image_url));
        }
        if article.faq.is_empty() {
            report.warnings.push(format!("{}: no FAQ entries", label));
        }
        if article.references.is_empty() {
            report.warnings.push(format!("{}: no references", label));
        }
    }

    report.info.push(format!("{} articles", articles.len()));
    for category in Category::ALL {
        let count = query::by_category(articles, category.as_str()).len();
        report.info.push(format!("{}: {}", category, count));
    }
    let generated = articles.iter().filter(|a| a.is_generated).count();
    if generated > 0 {
        report.info.push(format!("{} generated by AI", generated));
    }

    report
}
