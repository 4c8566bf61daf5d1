//! Activities and excursions.

use serde::{Deserialize, Serialize};

use crate::domain::filter::{Filterable, TagGroup};

/// Something to do on or around the island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier within the activity collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Activity category such as `Natur`, `Sport` or `Kultur`.
    pub category: String,
    /// Description.
    pub description: String,
    /// Meeting point or venue.
    pub location: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Characteristics such as `Familienfreundlich` or `Barrierefrei`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Seasons the activity is offered.
    #[serde(default)]
    pub seasons: Vec<String>,
    /// Typical duration, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Price indication, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Filterable for Activity {
    const TAG_GROUPS: &'static [TagGroup] = &[TagGroup::Features, TagGroup::Seasons];

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
            TagGroup::Seasons => &self.seasons,
            TagGroup::Cuisine => &[],
        }
    }
}
