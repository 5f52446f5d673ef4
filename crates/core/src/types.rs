use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Image keywords used when an article's category is outside the enumeration
pub const FALLBACK_IMAGE_KEYWORDS: &str = "learning,book";

/// The fixed set of tutorial categories.
///
/// The display value doubles as the data value stored on each article and
/// as the routable path segment, so it must never be translated or trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Cozinha")]
    Kitchen,
    #[serde(rename = "Casa e Organização")]
    Home,
    #[serde(rename = "Tecnologia")]
    Tech,
    #[serde(rename = "DIY e Artesanato")]
    Diy,
    #[serde(rename = "Finanças Pessoais")]
    Finance,
    #[serde(rename = "Cuidados Pessoais")]
    SelfCare,
    #[serde(rename = "Ferramentas e Truques")]
    Tools,
    #[serde(rename = "Jardinagem")]
    Gardening,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Category; 8] = [
        Category::Kitchen,
        Category::Home,
        Category::Tech,
        Category::Diy,
        Category::Finance,
        Category::SelfCare,
        Category::Tools,
        Category::Gardening,
    ];

    /// Canonical display value
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kitchen => "Cozinha",
            Category::Home => "Casa e Organização",
            Category::Tech => "Tecnologia",
            Category::Diy => "DIY e Artesanato",
            Category::Finance => "Finanças Pessoais",
            Category::SelfCare => "Cuidados Pessoais",
            Category::Tools => "Ferramentas e Truques",
            Category::Gardening => "Jardinagem",
        }
    }

    /// Comma-joined keywords for placeholder images
    pub fn image_keywords(&self) -> &'static str {
        match self {
            Category::Kitchen => "food,cooking,kitchen,recipe",
            Category::Home => "house,livingroom,cleaning,organization",
            Category::Tech => "technology,computer,code,screen",
            Category::Diy => "crafts,handmade,art,tools",
            Category::Finance => "money,calculator,office,graph",
            Category::SelfCare => "spa,yoga,relax,nature",
            Category::Tools => "construction,tools,repair,workshop",
            Category::Gardening => "garden,plants,flowers,nature,farm",
        }
    }

    /// Look up a category by its exact display value
    pub fn from_display(value: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_display(s)
            .ok_or_else(|| Error::InvalidData(format!("Unknown category '{}'", s)))
    }
}

/// Image keywords for an arbitrary category string
pub fn image_keywords_for(category: &str) -> &'static str {
    Category::from_display(category)
        .map(|c| c.image_keywords())
        .unwrap_or(FALLBACK_IMAGE_KEYWORDS)
}

/// Tutorial difficulty. Serialized with the exact Portuguese tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Fácil")]
    Easy,
    #[serde(rename = "Médio")]
    Medium,
    #[serde(rename = "Difícil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One numbered instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// External link shown under "further reading"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub title: String,
    pub url: String,
}

/// A complete tutorial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub introduction: String,
    /// Long-form narrative. HTML for built-in articles, plain text for generated ones.
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
    pub common_errors: Vec<String>,
    pub faq: Vec<FaqItem>,
    pub references: Vec<ReferenceLink>,
    pub conclusion: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_generated: bool,
}

impl Article {
    /// The category as a member of the enumeration, if it is one
    pub fn category_kind(&self) -> Option<Category> {
        Category::from_display(&self.category)
    }

    /// Introduction cut to `max_chars` characters for listing cards
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.introduction.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_display(category.as_str()), Some(category));
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!(Category::from_display("cozinha").is_none());
        assert!("Unknown".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_display_value() {
        let json = serde_json::to_string(&Category::Home).unwrap();
        assert_eq!(json, "\"Casa e Organização\"");
    }

    #[test]
    fn test_image_keywords_fallback() {
        assert_eq!(image_keywords_for("Jardinagem"), "garden,plants,flowers,nature,farm");
        assert_eq!(image_keywords_for("Astronomia"), FALLBACK_IMAGE_KEYWORDS);
    }

    #[test]
    fn test_difficulty_tokens() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"Fácil\"");
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"Médio\"");
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"Difícil\"");
        assert!(serde_json::from_str::<Difficulty>("\"Facil\"").is_err());
    }

    fn sample_article(introduction: &str) -> Article {
        Article {
            id: "7".to_string(),
            title: "Teste".to_string(),
            category: "Cozinha".to_string(),
            image_url: "https://loremflickr.com/800/400/food?lock=1".to_string(),
            estimated_time: "12 min".to_string(),
            difficulty: Difficulty::Easy,
            introduction: introduction.to_string(),
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
    fn test_excerpt() {
        assert_eq!(sample_article("curto").excerpt(10), "curto");
        assert_eq!(sample_article("ação ação ação").excerpt(4), "ação...");
    }

    #[test]
    fn test_article_json_uses_camel_case() {
        let json = serde_json::to_value(sample_article("x")).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("commonErrors").is_some());
        assert!(json.get("isGenerated").is_some());
        assert!(json.get("materials").is_none());
    }
}
