//! Static island content: listings, blog posts and the ferry timetable.
//!
//! Collections are loaded once at startup and never mutated afterwards.
//! [`ContentStore`] owns them behind `Arc` slices and exposes the lookup and
//! filter operations used by the HTTP adapter.

mod accommodation;
mod activity;
mod beach;
mod blog_post;
mod restaurant;
mod store;

pub use accommodation::Accommodation;
pub use activity::Activity;
pub use beach::Beach;
pub use blog_post::BlogPost;
pub use restaurant::Restaurant;
pub use store::{ContentCollections, ContentStore, ContentValidationError};
