//! Blog posts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An editorial article.
///
/// Posts are addressed by `slug` in URLs; `id` stays stable across slug
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique identifier within the blog collection.
    pub id: String,
    /// Unique URL slug.
    pub slug: String,
    /// Headline.
    pub title: String,
    /// Teaser shown on listing cards.
    pub excerpt: String,
    /// Article body (Markdown).
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Publication date.
    pub publish_date: NaiveDate,
    /// Editorial category.
    pub category: String,
    /// Topic tags such as `Wandern`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl BlogPost {
    /// `true` when the post carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}
