//! Beaches and bathing spots.

use serde::{Deserialize, Serialize};

use crate::domain::filter::{Filterable, TagGroup};

/// A beach section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beach {
    /// Unique identifier within the beach collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Beach type such as `Badestrand`, `Hundestrand` or `FKK`.
    #[serde(rename = "type")]
    pub category: String,
    /// Description.
    pub description: String,
    /// Nearest village.
    pub location: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Facilities such as `Strandkorbvermietung` or `Rettungsschwimmer`.
    #[serde(default)]
    pub features: Vec<String>,
    /// Seasons the beach is staffed or recommended.
    #[serde(default)]
    pub seasons: Vec<String>,
}

impl Filterable for Beach {
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
