//! Accommodation listings (hotels, holiday flats, guest houses, camping).

use serde::{Deserialize, Serialize};

use crate::domain::filter::{Filterable, TagGroup};

/// A place to stay on the island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    /// Unique identifier within the accommodation collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Accommodation type such as `Hotel` or `Ferienwohnung`.
    #[serde(rename = "type")]
    pub category: String,
    /// Marketing description.
    pub description: String,
    /// Village or street.
    pub location: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Amenities.
    #[serde(default)]
    pub features: Vec<String>,
    /// Free-form price indication such as `€€`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    /// Average guest rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Booking or home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Filterable for Accommodation {
    const TAG_GROUPS: &'static [TagGroup] = &[TagGroup::Features];

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
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }

    fn tags(&self, group: TagGroup) -> &[String] {
        match group {
            TagGroup::Features => &self.features,
            TagGroup::Seasons | TagGroup::Cuisine => &[],
        }
    }
}
