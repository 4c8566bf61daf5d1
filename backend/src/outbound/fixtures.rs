//! Loads the static content store from a directory of JSON fixtures.
//!
//! Expected files, all required:
//!
//! | file | shape |
//! |---|---|
//! | `accommodations.json` | array |
//! | `restaurants.json` | array |
//! | `beaches.json` | array |
//! | `activities.json` | array |
//! | `blog_posts.json` | array |
//! | `ferry_schedule.json` | `{seasons, notes}` |

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{ContentCollections, ContentStore, ContentValidationError};

/// Accommodation fixture file name.
pub const ACCOMMODATIONS_FILE: &str = "accommodations.json";
/// Restaurant fixture file name.
pub const RESTAURANTS_FILE: &str = "restaurants.json";
/// Beach fixture file name.
pub const BEACHES_FILE: &str = "beaches.json";
/// Activity fixture file name.
pub const ACTIVITIES_FILE: &str = "activities.json";
/// Blog fixture file name.
pub const BLOG_POSTS_FILE: &str = "blog_posts.json";
/// Ferry timetable fixture file name.
pub const FERRY_SCHEDULE_FILE: &str = "ferry_schedule.json";

/// Errors that abort fixture loading.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture directory or a file in it could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A file is not valid JSON for its collection.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying parse error, including line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The parsed collections break a store invariant.
    #[error("invalid content in {dir}: {source}")]
    Invalid {
        /// Fixture directory.
        dir: Utf8PathBuf,
        /// Violated invariant.
        #[source]
        source: ContentValidationError,
    },
}

fn read_json<T: DeserializeOwned>(
    dir: &Dir,
    root: &Utf8Path,
    file_name: &str,
) -> Result<T, FixtureError> {
    let path = root.join(file_name);
    let raw = dir
        .read_to_string(file_name)
        .map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse { path, source })
}

/// Read and validate every fixture under `root`.
///
/// # Errors
///
/// Returns [`FixtureError`] for the first unreadable, malformed or invalid
/// file.
pub fn load_content_store(root: &Utf8Path) -> Result<ContentStore, FixtureError> {
    let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(|source| {
        FixtureError::Io {
            path: root.to_owned(),
            source,
        }
    })?;

    let collections = ContentCollections {
        accommodations: read_json(&dir, root, ACCOMMODATIONS_FILE)?,
        restaurants: read_json(&dir, root, RESTAURANTS_FILE)?,
        beaches: read_json(&dir, root, BEACHES_FILE)?,
        activities: read_json(&dir, root, ACTIVITIES_FILE)?,
        blog_posts: read_json(&dir, root, BLOG_POSTS_FILE)?,
        ferry: read_json(&dir, root, FERRY_SCHEDULE_FILE)?,
    };
    let store = ContentStore::new(collections).map_err(|source| FixtureError::Invalid {
        dir: root.to_owned(),
        source,
    })?;

    info!(
        dir = %root,
        accommodations = store.accommodations().len(),
        restaurants = store.restaurants().len(),
        beaches = store.beaches().len(),
        activities = store.activities().len(),
        blog_posts = store.blog_posts().len(),
        ferry_seasons = store.ferry_schedule().seasons().len(),
        "content fixtures loaded"
    );
    Ok(store)
}
