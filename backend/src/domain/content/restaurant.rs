//! Restaurants, cafés and bars.

use serde::{Deserialize, Serialize};

use crate::domain::filter::{Filterable, TagGroup};

/// A place to eat or drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Unique identifier within the restaurant collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Venue type such as `Restaurant`, `Café` or `Imbiss`.
    #[serde(rename = "type")]
    pub category: String,
    /// Cuisine tags.
    #[serde(default)]
    pub cuisine: Vec<String>,
    /// Marketing description.
    pub description: String,
    /// Village or street.
    pub location: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Amenities such as `Terrasse` or `Hunde erlaubt`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Human-readable opening hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    /// Average guest rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Filterable for Restaurant {
    const TAG_GROUPS: &'static [TagGroup] = &[TagGroup::Features, TagGroup::Cuisine];

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ];
        fields.extend(self.cuisine.iter().map(String::as_str));
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }

    fn tags(&self, group: TagGroup) -> &[String] {
        match group {
            TagGroup::Features => &self.features,
            TagGroup::Cuisine => &self.cuisine,
            TagGroup::Seasons => &[],
        }
    }
}
