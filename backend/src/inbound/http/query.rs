//! Query-string parsing shared by the list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, FilterCriteria, Filterable, ListLayout, TagGroup};

/// Split a comma-separated parameter into trimmed, non-empty values.
pub fn split_csv(raw: Option<&str>) -> Vec<&str> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Filters accepted by the content list endpoints.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring over name, description, location and features.
    pub search: Option<String>,
    /// Exact category (`type`) match.
    pub category: Option<String>,
    /// Comma-separated features; every one must be present.
    pub features: Option<String>,
    /// Comma-separated seasons; every one must be present.
    pub seasons: Option<String>,
    /// Comma-separated cuisines; every one must be present.
    pub cuisine: Option<String>,
    /// Requested presentation layout.
    #[param(value_type = Option<String>, example = "grid")]
    pub layout: Option<ListLayout>,
}

impl ListQuery {
    fn raw_tags(&self, group: TagGroup) -> Option<&str> {
        match group {
            TagGroup::Features => self.features.as_deref(),
            TagGroup::Seasons => self.seasons.as_deref(),
            TagGroup::Cuisine => self.cuisine.as_deref(),
        }
    }

    /// Build filter criteria for content type `T`.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] when a tag group is supplied that
    /// `T` does not carry.
    pub fn criteria_for<T: Filterable>(&self) -> Result<FilterCriteria, Error> {
        let mut criteria = FilterCriteria::new()
            .with_search(self.search.as_deref().unwrap_or_default())
            .with_category(self.category.as_deref().unwrap_or_default());
        for group in TagGroup::ALL {
            let values = split_csv(self.raw_tags(group));
            if values.is_empty() {
                continue;
            }
            if !T::TAG_GROUPS.contains(&group) {
                return Err(Error::invalid_request(format!(
                    "filter `{group}` is not supported for this listing"
                ))
                .with_details(serde_json::json!({
                    "parameter": group.as_str(),
                    "supported": T::TAG_GROUPS.iter().map(|g| g.as_str()).collect::<Vec<_>>(),
                })));
            }
            criteria = criteria.with_tags(group, values);
        }
        Ok(criteria)
    }

    /// Requested layout, defaulting to grid.
    pub fn layout(&self) -> ListLayout {
        self.layout.unwrap_or_default()
    }
}
