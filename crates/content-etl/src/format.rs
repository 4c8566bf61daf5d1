//! Turns scraped records into fixture records.
//!
//! Output field names match the backend's `accommodations.json` and
//! `restaurants.json` fixtures. Records without a name are skipped and
//! reported; everything else is formatted on a best-effort basis.

use serde::Serialize;
use tracing::warn;

use crate::extract::{
    HOTEL_PRICE_BANDS, IdAllocator, clean_text, phone, price_range, rating, website,
};
use crate::raw::{NumberOrText, RawHotel, RawRestaurant, TextOrList};
use crate::vocabulary::{Vocabulary, VocabularySet, classify, matching_labels};

/// Accommodation fixture entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationRecord {
    /// Slug derived from the name, unique within the output.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Classified accommodation type.
    #[serde(rename = "type")]
    pub category: String,
    /// Cleaned marketing text.
    pub description: String,
    /// Classified village.
    pub location: String,
    /// Image path or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Classified amenities.
    pub features: Vec<String>,
    /// Euro-sign price band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    /// Rating out of five, one decimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Phone in international notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Home page with scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Restaurant fixture entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    /// Slug derived from the name, unique within the output.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Classified venue type.
    #[serde(rename = "type")]
    pub category: String,
    /// Classified cuisine tags.
    pub cuisine: Vec<String>,
    /// Cleaned marketing text.
    pub description: String,
    /// Classified village.
    pub location: String,
    /// Image path or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Classified amenities.
    pub features: Vec<String>,
    /// Opening hours as published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    /// Rating out of five, one decimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Phone in international notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Home page with scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// An input record that produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position in the input array.
    pub index: usize,
    /// Why the record was dropped.
    pub reason: String,
}

/// Formatter output: records in input order plus whatever was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatted<T> {
    /// Formatted records.
    pub records: Vec<T>,
    /// Dropped inputs.
    pub skipped: Vec<SkippedRecord>,
}

impl<T> Default for Formatted<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> Formatted<T> {
    fn skip(&mut self, index: usize, reason: &str) {
        warn!(index, reason, "skipping input record");
        self.skipped.push(SkippedRecord {
            index,
            reason: reason.to_owned(),
        });
    }
}

/// Join the present text fragments with spaces.
fn corpus<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

fn labels(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    matching_labels(text, vocabulary)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn label(text: &str, vocabulary: &Vocabulary) -> String {
    classify(text, vocabulary).unwrap_or_default().to_owned()
}

fn joined(value: Option<&TextOrList>) -> Option<String> {
    value.map(TextOrList::joined)
}

/// Format scraped accommodation listings.
///
/// Type and village are classified from the source type or address plus
/// name and description; features from the amenity list and description.
#[must_use]
pub fn format_hotels(
    raw: &[RawHotel],
    vocabulary: &VocabularySet,
) -> Formatted<AccommodationRecord> {
    let mut ids = IdAllocator::default();
    let mut out = Formatted::default();
    for (index, hotel) in raw.iter().enumerate() {
        let Some(name) = clean_text(hotel.name.as_deref()) else {
            out.skip(index, "missing name");
            continue;
        };
        let description = clean_text(hotel.description.as_deref()).unwrap_or_default();
        let with_context = |source: Option<&str>| {
            corpus([source, Some(name.as_str()), Some(description.as_str())])
        };
        let category_text = with_context(hotel.category.as_deref());
        let location_text = with_context(clean_text(hotel.address.as_deref()).as_deref());
        let features_text = corpus([
            joined(hotel.amenities.as_ref()).as_deref(),
            Some(description.as_str()),
        ]);

        out.records.push(AccommodationRecord {
            id: ids.allocate(&name),
            category: label(&category_text, &vocabulary.categories),
            location: label(&location_text, &vocabulary.locations),
            features: labels(&features_text, &vocabulary.features),
            price_range: price_range(
                hotel.price.as_ref().and_then(NumberOrText::as_text),
                hotel.price.as_ref().and_then(NumberOrText::value),
                HOTEL_PRICE_BANDS,
            ),
            rating: rating(hotel.rating.as_ref().and_then(NumberOrText::value)),
            phone: phone(hotel.phone.as_deref()),
            website: website(hotel.website.as_deref()),
            image: clean_text(hotel.image.as_deref()),
            description,
            name,
        });
    }
    out
}

/// Format scraped restaurant listings.
///
/// Cuisine tags come from the source cuisine field, name and description;
/// a vocabulary set without a cuisine table yields no tags.
#[must_use]
pub fn format_restaurants(
    raw: &[RawRestaurant],
    vocabulary: &VocabularySet,
) -> Formatted<RestaurantRecord> {
    let mut ids = IdAllocator::default();
    let mut out = Formatted::default();
    for (index, restaurant) in raw.iter().enumerate() {
        let Some(name) = clean_text(restaurant.name.as_deref()) else {
            out.skip(index, "missing name");
            continue;
        };
        let description = clean_text(restaurant.description.as_deref()).unwrap_or_default();
        let with_context = |source: Option<&str>| {
            corpus([source, Some(name.as_str()), Some(description.as_str())])
        };
        let category_text = with_context(restaurant.category.as_deref());
        let location_text = with_context(clean_text(restaurant.address.as_deref()).as_deref());
        let cuisine_text = with_context(joined(restaurant.cuisine.as_ref()).as_deref());
        let features_text = corpus([
            joined(restaurant.amenities.as_ref()).as_deref(),
            Some(description.as_str()),
        ]);

        out.records.push(RestaurantRecord {
            id: ids.allocate(&name),
            category: label(&category_text, &vocabulary.categories),
            cuisine: vocabulary
                .cuisine
                .as_ref()
                .map(|table| labels(&cuisine_text, table))
                .unwrap_or_default(),
            location: label(&location_text, &vocabulary.locations),
            features: labels(&features_text, &vocabulary.features),
            opening_hours: clean_text(restaurant.opening_hours.as_deref()),
            rating: rating(restaurant.rating.as_ref().and_then(NumberOrText::value)),
            phone: phone(restaurant.phone.as_deref()),
            website: website(restaurant.website.as_deref()),
            image: clean_text(restaurant.image.as_deref()),
            description,
            name,
        });
    }
    out
}
