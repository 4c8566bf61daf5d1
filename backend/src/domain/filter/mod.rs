//! Generic list filtering shared by every browsable content type.
//!
//! A [`FilterCriteria`] bundles the active predicates: a free-text search, an
//! exact category match and any number of multi-value tag groups. Groups
//! compose conjunctively, and so do the values selected within a group.
//! Filtering never reorders items and never fails; an empty result is a
//! normal outcome.

mod list_view;

pub use list_view::{ListLayout, ListView};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Multi-value tag groups that list views can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagGroup {
    /// Amenities and characteristics ("WLAN", "Hunde erlaubt", ...).
    Features,
    /// Seasons an item is available in ("Sommer", "Winter", ...).
    Seasons,
    /// Restaurant cuisine tags ("Fisch", "Regional", ...).
    Cuisine,
}

impl TagGroup {
    /// Every group, in canonical order.
    pub const ALL: [Self; 3] = [Self::Features, Self::Seasons, Self::Cuisine];

    /// Query-parameter style name of the group.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Seasons => "seasons",
            Self::Cuisine => "cuisine",
        }
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tag group name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag group: {0}")]
pub struct UnknownTagGroup(pub String);

impl FromStr for TagGroup {
    type Err = UnknownTagGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| UnknownTagGroup(s.to_owned()))
    }
}

/// Content that can be listed and filtered.
pub trait Filterable {
    /// Tag groups this content type carries.
    const TAG_GROUPS: &'static [TagGroup];

    /// Stable identifier, unique within the collection.
    fn id(&self) -> &str;

    /// Exact-match category of the item.
    fn category(&self) -> &str;

    /// Text fields searched by the free-text predicate.
    fn search_fields(&self) -> Vec<&str>;

    /// Values of a tag group; empty when the type does not carry the group.
    fn tags(&self, group: TagGroup) -> &[String];
}

/// Active predicates for one list view.
///
/// # Examples
/// ```
/// use island_guide::domain::{FilterCriteria, TagGroup};
///
/// let criteria = FilterCriteria::new()
///     .with_search("  Strand ")
///     .with_tag(TagGroup::Features, "WLAN");
/// assert_eq!(criteria.search(), Some("strand"));
/// assert!(!criteria.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: Option<String>,
    category: Option<String>,
    tags: BTreeMap<TagGroup, BTreeSet<String>>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term; blank terms clear the search.
    #[must_use]
    pub fn with_search(mut self, term: &str) -> Self {
        self.set_search(term);
        self
    }

    /// Set the exact category; blank values clear the category.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.set_category(category);
        self
    }

    /// Select one value in a tag group.
    #[must_use]
    pub fn with_tag(mut self, group: TagGroup, value: &str) -> Self {
        self.select_tag(group, value);
        self
    }

    /// Select several values in a tag group.
    #[must_use]
    pub fn with_tags<'a>(mut self, group: TagGroup, values: impl IntoIterator<Item = &'a str>) -> Self {
        for value in values {
            self.select_tag(group, value);
        }
        self
    }

    pub(crate) fn set_search(&mut self, term: &str) {
        let normalised = term.trim().to_lowercase();
        self.search = (!normalised.is_empty()).then_some(normalised);
    }

    pub(crate) fn set_category(&mut self, category: &str) {
        let trimmed = category.trim();
        self.category = (!trimmed.is_empty()).then(|| trimmed.to_owned());
    }

    pub(crate) fn select_tag(&mut self, group: TagGroup, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        self.tags.entry(group).or_default().insert(trimmed.to_owned());
    }

    /// Flip selection of one tag value; returns `true` when it is now selected.
    pub(crate) fn toggle_tag(&mut self, group: TagGroup, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        let selected = self.tags.entry(group).or_default();
        let now_selected = if selected.remove(trimmed) {
            false
        } else {
            selected.insert(trimmed.to_owned())
        };
        if selected.is_empty() {
            self.tags.remove(&group);
        }
        now_selected
    }

    /// Normalised (trimmed, lowercased) search term.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Selected category.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Values selected in a tag group.
    pub fn selected(&self, group: TagGroup) -> impl Iterator<Item = &str> {
        self.tags
            .get(&group)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    /// Groups with at least one selected value.
    pub fn active_groups(&self) -> impl Iterator<Item = TagGroup> + '_ {
        self.tags.keys().copied()
    }

    /// `true` when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.tags.is_empty()
    }

    /// Evaluate every active predicate against `item`.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.matches_search(item) && self.matches_category(item) && self.matches_tags(item)
    }

    fn matches_search<T: Filterable>(&self, item: &T) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        item.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(term))
    }

    fn matches_category<T: Filterable>(&self, item: &T) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| item.category() == category)
    }

    /// Item tags must be a superset of the selection in every group.
    fn matches_tags<T: Filterable>(&self, item: &T) -> bool {
        self.tags.iter().all(|(group, selected)| {
            let present = item.tags(*group);
            selected
                .iter()
                .all(|value| present.iter().any(|tag| tag == value))
        })
    }
}

/// Apply `criteria` to `items`, preserving relative order.
///
/// # Examples
/// ```
/// use island_guide::domain::{filter_items, Beach, FilterCriteria};
///
/// let beaches: Vec<Beach> = Vec::new();
/// assert!(filter_items(&beaches, &FilterCriteria::new()).is_empty());
/// ```
pub fn filter_items<'a, T: Filterable>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    items.iter().filter(|item| criteria.matches(*item)).collect()
}

/// Distinct categories in first-seen order.
pub fn distinct_categories<T: Filterable>(items: &[T]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    items
        .iter()
        .map(Filterable::category)
        .filter(|category| !category.is_empty() && seen.insert(*category))
        .collect()
}

/// Distinct values of one tag group in first-seen order.
pub fn distinct_tags<T: Filterable>(items: &[T], group: TagGroup) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    items
        .iter()
        .flat_map(|item| item.tags(group))
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect()
}
