//! Scraped input records.
//!
//! Scrapers disagree on key names and value shapes, so every field is
//! optional, common aliases are accepted and unknown keys are ignored.

use serde::Deserialize;

use crate::extract::first_number;

/// Text that arrives either as one string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    /// A single, possibly comma-separated, string.
    Text(String),
    /// Separate entries.
    List(Vec<String>),
}

impl TextOrList {
    /// Entries joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

/// A number that may arrive as JSON number or as text such as `"4,6 / 5"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// Plain JSON number.
    Number(f64),
    /// Text containing a number.
    Text(String),
}

impl NumberOrText {
    /// The numeric value, taking the first number found in text.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => first_number(text),
        }
    }

    /// The raw text, when the value arrived as text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// One scraped accommodation listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHotel {
    /// Listing title.
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    /// Listing type as the source labels it.
    #[serde(default, alias = "type", alias = "kind")]
    pub category: Option<String>,
    /// Marketing text.
    #[serde(default, alias = "text")]
    pub description: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Amenity list or text.
    #[serde(default, alias = "features", alias = "equipment")]
    pub amenities: Option<TextOrList>,
    /// Price per night, as number, text or euro signs.
    #[serde(default, alias = "priceFrom", alias = "priceRange")]
    pub price: Option<NumberOrText>,
    /// Guest rating out of five.
    #[serde(default, alias = "score")]
    pub rating: Option<NumberOrText>,
    /// Contact phone number in any notation.
    #[serde(default, alias = "tel", alias = "telephone")]
    pub phone: Option<String>,
    /// Home page, with or without scheme.
    #[serde(default, alias = "url", alias = "homepage")]
    pub website: Option<String>,
    /// Image path or URL.
    #[serde(default, alias = "imageUrl", alias = "photo")]
    pub image: Option<String>,
}

/// One scraped restaurant listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRestaurant {
    /// Venue name.
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    /// Venue type as the source labels it.
    #[serde(default, alias = "type", alias = "kind")]
    pub category: Option<String>,
    /// Cuisine list or text.
    #[serde(default, alias = "kitchen")]
    pub cuisine: Option<TextOrList>,
    /// Marketing text.
    #[serde(default, alias = "text")]
    pub description: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Amenity list or text.
    #[serde(default, alias = "features")]
    pub amenities: Option<TextOrList>,
    /// Opening hours text.
    #[serde(default, alias = "hours", alias = "openingTimes")]
    pub opening_hours: Option<String>,
    /// Guest rating out of five.
    #[serde(default, alias = "score")]
    pub rating: Option<NumberOrText>,
    /// Contact phone number in any notation.
    #[serde(default, alias = "tel", alias = "telephone")]
    pub phone: Option<String>,
    /// Home page, with or without scheme.
    #[serde(default, alias = "url", alias = "homepage")]
    pub website: Option<String>,
    /// Image path or URL.
    #[serde(default, alias = "imageUrl", alias = "photo")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn aliases_and_loose_shapes_are_accepted() {
        let raw: RawHotel = serde_json::from_value(json!({
            "title": "Hotel Seeblick",
            "type": "Hotel garni",
            "equipment": ["WLAN", "Sauna"],
            "priceFrom": "ab 89 €",
            "score": 4.6,
            "tel": "04682 9210",
            "scrapedAt": "2024-03-01"
        }))
        .expect("loose record parses");

        assert_eq!(raw.name.as_deref(), Some("Hotel Seeblick"));
        assert_eq!(raw.amenities.map(|a| a.joined()).as_deref(), Some("WLAN, Sauna"));
        assert_eq!(raw.price.and_then(|p| p.value()), Some(89.0));
        assert_eq!(raw.rating, Some(NumberOrText::Number(4.6)));
    }

    #[rstest]
    fn restaurant_cuisine_may_be_text() {
        let raw: RawRestaurant = serde_json::from_value(json!({
            "name": "Teestube",
            "cuisine": "Kuchen, Friesisch",
            "hours": "Di–So 13–18"
        }))
        .expect("record parses");

        assert_eq!(
            raw.cuisine,
            Some(TextOrList::Text("Kuchen, Friesisch".to_owned()))
        );
        assert_eq!(raw.opening_hours.as_deref(), Some("Di–So 13–18"));
    }
}
