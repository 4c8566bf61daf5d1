//! Formats scraped accommodation and restaurant listings into the JSON
//! fixtures served by the island guide backend.
//!
//! Scraped records arrive with inconsistent key names and free text. The
//! pipeline cleans the text, derives slug ids, normalises phone numbers,
//! prices and ratings, and classifies type, village, amenities and cuisine
//! against keyword vocabularies. The crate is independent of the backend
//! domain types; the fixture field names are the only contract.
//!
//! # Example
//!
//! ```
//! use content_etl::{Term, Vocabulary, classify};
//!
//! let villages = Vocabulary::new(
//!     vec![
//!         Term::new("Nebel", ["nebel"]).expect("valid term"),
//!         Term::new("Norddorf", ["norddorf"]).expect("valid term"),
//!     ],
//!     Some("Amrum"),
//! );
//!
//! assert_eq!(classify("Strunwai 5, 25946 Norddorf", &villages), Some("Norddorf"));
//! assert_eq!(classify("am Leuchtturm", &villages), Some("Amrum"));
//! ```

mod atomic_io;
pub mod cli;
mod error;
mod extract;
mod format;
mod raw;
mod vocabulary;

pub use error::EtlError;
pub use format::{
    AccommodationRecord, Formatted, RestaurantRecord, SkippedRecord, format_hotels,
    format_restaurants,
};
pub use raw::{NumberOrText, RawHotel, RawRestaurant, TextOrList};
pub use vocabulary::{Term, Vocabulary, VocabularySet, classify, matching_labels};
