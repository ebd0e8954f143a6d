//! Blog post entity.

use serde::{Deserialize, Serialize};

/// A published article.
///
/// Created only by the seeder and immutable thereafter. `contentHTML` is
/// pre-rendered, trusted markup and is served as-is. `publishedAt` and
/// `readTime` are display strings, not structured timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(rename = "contentHTML")]
    pub content_html: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author_name: String,
    pub published_at: String,
    pub read_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let post = BlogPost {
            id: "1".to_string(),
            slug: "what-is-nexus-letter".to_string(),
            title: "What is a Nexus Letter?".to_string(),
            excerpt: "Plain-English explanation.".to_string(),
            content_html: "<h2>Understanding Nexus Letters</h2>".to_string(),
            category: "nexus-letters".to_string(),
            tags: vec!["nexus".to_string()],
            author_name: "Dr. Sarah Johnson".to_string(),
            published_at: "SEPT 2025".to_string(),
            read_time: "5 min read".to_string(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["contentHTML"], "<h2>Understanding Nexus Letters</h2>");
        assert_eq!(value["authorName"], "Dr. Sarah Johnson");
        assert_eq!(value["publishedAt"], "SEPT 2025");
        assert_eq!(value["readTime"], "5 min read");
    }
}
