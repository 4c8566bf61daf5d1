//! Stateful list view over an immutable collection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{FilterCriteria, Filterable, TagGroup, filter_items};

/// Presentation layout requested for a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Card grid.
    #[default]
    Grid,
    /// Single-column rows.
    List,
}

impl ListLayout {
    /// The other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// A full collection plus the predicates and layout currently applied to it.
///
/// The collection itself is shared and never copied; [`ListView::visible`]
/// recomputes the filtered subset on demand.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use island_guide::domain::{Beach, ListView};
///
/// let beaches: Arc<[Beach]> = Arc::from(Vec::new());
/// let mut view = ListView::new(Arc::clone(&beaches));
/// view.set_search("Kniepsand");
/// view.reset();
/// assert!(Arc::ptr_eq(view.all(), &beaches));
/// ```
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Arc<[T]>,
    criteria: FilterCriteria,
    layout: ListLayout,
}

impl<T: Filterable> ListView<T> {
    /// View with no active predicates and the default layout.
    pub fn new(items: Arc<[T]>) -> Self {
        Self {
            items,
            criteria: FilterCriteria::new(),
            layout: ListLayout::default(),
        }
    }

    /// Replace the active criteria.
    #[must_use]
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Replace the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: ListLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Update the free-text search.
    pub fn set_search(&mut self, term: &str) {
        self.criteria.set_search(term);
    }

    /// Update the category filter.
    pub fn set_category(&mut self, category: &str) {
        self.criteria.set_category(category);
    }

    /// Flip one tag selection; returns `true` when the tag is now selected.
    pub fn toggle_tag(&mut self, group: TagGroup, value: &str) -> bool {
        self.criteria.toggle_tag(group, value)
    }

    /// Switch between grid and list layouts.
    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }

    /// Clear every predicate. The layout is kept.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::new();
    }

    /// Items that pass the active predicates, in collection order.
    pub fn visible(&self) -> Vec<&T> {
        filter_items(&self.items, &self.criteria)
    }

    /// The unfiltered collection.
    pub fn all(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Size of the unfiltered collection.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Active predicates.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current layout.
    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    /// `true` when any predicate is active.
    pub fn is_filtered(&self) -> bool {
        !self.criteria.is_empty()
    }
}
