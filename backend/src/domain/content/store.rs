//! In-memory content store and its data-access operations.
//!
//! Lookups return `Option`/`Vec`; absence is never an error. Errors only
//! arise while assembling the store from raw collections.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use super::{Accommodation, Activity, Beach, BlogPost, Restaurant};
use crate::domain::ferry::{Departure, FerryRoute, FerrySchedule, FerrySeason};
use crate::domain::filter::Filterable;
use crate::domain::slug::is_valid_slug;

/// Raw collections as read from fixtures, before validation.
#[derive(Debug, Clone)]
pub struct ContentCollections {
    /// Accommodation listings.
    pub accommodations: Vec<Accommodation>,
    /// Restaurant listings.
    pub restaurants: Vec<Restaurant>,
    /// Beach listings.
    pub beaches: Vec<Beach>,
    /// Activity listings.
    pub activities: Vec<Activity>,
    /// Blog posts in any order.
    pub blog_posts: Vec<BlogPost>,
    /// Ferry timetable.
    pub ferry: FerrySchedule,
}

/// Invariant violations detected while assembling a [`ContentStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentValidationError {
    /// An item has a blank identifier.
    #[error("{collection}: item at index {index} has an empty id")]
    EmptyId {
        /// Collection name.
        collection: &'static str,
        /// Position of the offending item.
        index: usize,
    },
    /// Two items in one collection share an identifier.
    #[error("{collection}: duplicate id {id}")]
    DuplicateId {
        /// Collection name.
        collection: &'static str,
        /// The repeated identifier.
        id: String,
    },
    /// A blog post slug is not lowercase ASCII letters, digits and hyphens.
    #[error("blog post {id}: invalid slug {slug:?}")]
    InvalidSlug {
        /// Post identifier.
        id: String,
        /// Offending slug.
        slug: String,
    },
    /// Two blog posts share a slug.
    #[error("duplicate blog slug {slug}")]
    DuplicateSlug {
        /// The repeated slug.
        slug: String,
    },
}

/// Immutable content tables shared by every request.
///
/// Blog posts are held newest first; posts published on the same day keep
/// their fixture order.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
///
/// use island_guide::domain::{ContentCollections, ContentStore, FerrySchedule};
///
/// let ferry = FerrySchedule::new(Vec::new(), BTreeMap::new()).expect("empty schedule");
/// let store = ContentStore::new(ContentCollections {
///     accommodations: Vec::new(),
///     restaurants: Vec::new(),
///     beaches: Vec::new(),
///     activities: Vec::new(),
///     blog_posts: Vec::new(),
///     ferry,
/// })
/// .expect("empty collections are valid");
/// assert!(store.accommodation_by_id("missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ContentStore {
    accommodations: Arc<[Accommodation]>,
    restaurants: Arc<[Restaurant]>,
    beaches: Arc<[Beach]>,
    activities: Arc<[Activity]>,
    blog_posts: Arc<[BlogPost]>,
    ferry: Arc<FerrySchedule>,
}

impl ContentStore {
    /// Validate collections and build the store.
    ///
    /// # Errors
    /// Returns [`ContentValidationError`] when ids are blank or repeated, or
    /// when blog slugs are malformed or repeated.
    pub fn new(collections: ContentCollections) -> Result<Self, ContentValidationError> {
        let ContentCollections {
            accommodations,
            restaurants,
            beaches,
            activities,
            mut blog_posts,
            ferry,
        } = collections;

        ensure_unique_ids("accommodations", &accommodations)?;
        ensure_unique_ids("restaurants", &restaurants)?;
        ensure_unique_ids("beaches", &beaches)?;
        ensure_unique_ids("activities", &activities)?;
        validate_blog_posts(&blog_posts)?;

        // `sort_by` is stable, so same-day posts keep fixture order.
        blog_posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

        Ok(Self {
            accommodations: accommodations.into(),
            restaurants: restaurants.into(),
            beaches: beaches.into(),
            activities: activities.into(),
            blog_posts: blog_posts.into(),
            ferry: Arc::new(ferry),
        })
    }

    /// All accommodations in fixture order.
    pub fn accommodations(&self) -> &Arc<[Accommodation]> {
        &self.accommodations
    }

    /// Accommodation by id.
    pub fn accommodation_by_id(&self, id: &str) -> Option<&Accommodation> {
        find_by_id(&self.accommodations, id)
    }

    /// Accommodations of one type.
    pub fn accommodations_by_category(&self, category: &str) -> Vec<&Accommodation> {
        filter_by_category(&self.accommodations, category)
    }

    /// All restaurants in fixture order.
    pub fn restaurants(&self) -> &Arc<[Restaurant]> {
        &self.restaurants
    }

    /// Restaurant by id.
    pub fn restaurant_by_id(&self, id: &str) -> Option<&Restaurant> {
        find_by_id(&self.restaurants, id)
    }

    /// Restaurants of one type.
    pub fn restaurants_by_category(&self, category: &str) -> Vec<&Restaurant> {
        filter_by_category(&self.restaurants, category)
    }

    /// Restaurants tagged with `cuisine`.
    pub fn restaurants_by_cuisine(&self, cuisine: &str) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|restaurant| restaurant.cuisine.iter().any(|c| c == cuisine))
            .collect()
    }

    /// All beaches in fixture order.
    pub fn beaches(&self) -> &Arc<[Beach]> {
        &self.beaches
    }

    /// Beach by id.
    pub fn beach_by_id(&self, id: &str) -> Option<&Beach> {
        find_by_id(&self.beaches, id)
    }

    /// Beaches of one type.
    pub fn beaches_by_category(&self, category: &str) -> Vec<&Beach> {
        filter_by_category(&self.beaches, category)
    }

    /// All activities in fixture order.
    pub fn activities(&self) -> &Arc<[Activity]> {
        &self.activities
    }

    /// Activity by id.
    pub fn activity_by_id(&self, id: &str) -> Option<&Activity> {
        find_by_id(&self.activities, id)
    }

    /// Activities in one category.
    pub fn activities_by_category(&self, category: &str) -> Vec<&Activity> {
        filter_by_category(&self.activities, category)
    }

    /// Activities offered in `season`.
    pub fn activities_by_season(&self, season: &str) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.seasons.iter().any(|s| s == season))
            .collect()
    }

    /// Blog posts, newest first.
    pub fn blog_posts(&self) -> &Arc<[BlogPost]> {
        &self.blog_posts
    }

    /// Blog post by URL slug.
    pub fn blog_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|post| post.slug == slug)
    }

    /// Blog post by id.
    pub fn blog_post_by_id(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|post| post.id == id)
    }

    /// Posts carrying `tag`, newest first.
    pub fn blog_posts_by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.blog_posts.iter().filter(|post| post.has_tag(tag)).collect()
    }

    /// Posts in one category, newest first.
    pub fn blog_posts_by_category(&self, category: &str) -> Vec<&BlogPost> {
        self.blog_posts
            .iter()
            .filter(|post| post.category == category)
            .collect()
    }

    /// The `limit` newest posts.
    pub fn recent_blog_posts(&self, limit: usize) -> &[BlogPost] {
        self.blog_posts
            .get(..limit)
            .unwrap_or_else(|| self.blog_posts.as_ref())
    }

    /// Distinct blog tags in alphabetical order.
    pub fn blog_tags(&self) -> Vec<&str> {
        self.blog_posts
            .iter()
            .flat_map(|post| post.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The complete ferry timetable.
    pub fn ferry_schedule(&self) -> &FerrySchedule {
        &self.ferry
    }

    /// Ferry season by name, ignoring case.
    pub fn ferry_season(&self, name: &str) -> Option<&FerrySeason> {
        self.ferry.season(name)
    }

    /// Departures for one route in one season.
    ///
    /// `None` means the season is unknown; an empty slice means the route does
    /// not run that season.
    pub fn ferry_departures(&self, season: &str, route: FerryRoute) -> Option<&[Departure]> {
        self.ferry.departures(season, route)
    }
}

fn find_by_id<'a, T: Filterable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn filter_by_category<'a, T: Filterable>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.category() == category).collect()
}

fn ensure_unique_ids<T: Filterable>(
    collection: &'static str,
    items: &[T],
) -> Result<(), ContentValidationError> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let id = item.id();
        if id.trim().is_empty() {
            return Err(ContentValidationError::EmptyId { collection, index });
        }
        if !seen.insert(id) {
            return Err(ContentValidationError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

fn validate_blog_posts(posts: &[BlogPost]) -> Result<(), ContentValidationError> {
    let mut ids = HashSet::with_capacity(posts.len());
    let mut slugs = HashSet::with_capacity(posts.len());
    for (index, post) in posts.iter().enumerate() {
        if post.id.trim().is_empty() {
            return Err(ContentValidationError::EmptyId {
                collection: "blog_posts",
                index,
            });
        }
        if !ids.insert(post.id.as_str()) {
            return Err(ContentValidationError::DuplicateId {
                collection: "blog_posts",
                id: post.id.clone(),
            });
        }
        if !is_valid_slug(&post.slug) {
            return Err(ContentValidationError::InvalidSlug {
                id: post.id.clone(),
                slug: post.slug.clone(),
            });
        }
        if !slugs.insert(post.slug.as_str()) {
            return Err(ContentValidationError::DuplicateSlug {
                slug: post.slug.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
