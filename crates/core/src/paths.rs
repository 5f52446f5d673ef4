//! Site paths shared by the server and the static export.

use url::form_urlencoded;

pub const HOME: &str = "/";
pub const SEARCH: &str = "/busca";
pub const GENERATE: &str = "/gerar";

/// Percent-encode a single path segment (spaces become `%20`, not `+`)
pub fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn category_path(category: &str) -> String {
    format!("/categoria/{}", encode_segment(category))
}

pub fn tutorial_path(id: &str) -> String {
    format!("/tutorial/{}", encode_segment(id))
}

pub fn search_path(query: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("{}?{}", SEARCH, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_category_path_encodes_spaces_and_accents() {
        assert_eq!(category_path("Cozinha"), "/categoria/Cozinha");
        assert_eq!(
            category_path(Category::Home.as_str()),
            "/categoria/Casa%20e%20Organiza%C3%A7%C3%A3o"
        );
        assert_eq!(
            category_path(Category::Finance.as_str()),
            "/categoria/Finan%C3%A7as%20Pessoais"
        );
    }

    #[test]
    fn test_encode_segment_keeps_plus_distinct_from_space() {
        assert_eq!(encode_segment("a+b c"), "a%2Bb%20c");
        assert_eq!(encode_segment("x/y"), "x%2Fy");
    }

    #[test]
    fn test_tutorial_and_search_paths() {
        assert_eq!(tutorial_path("gen-1700000000000"), "/tutorial/gen-1700000000000");
        assert_eq!(search_path("pão caseiro"), "/busca?q=p%C3%A3o+caseiro");
    }
}
