//! Events and locations managed through the island data gateway.
//!
//! Both collections are replaced wholesale; there is no partial update.
//!
//! ## Invariants
//! - Event, location and opening period ids are non-empty and unique.
//! - Event titles and location names are non-empty.
//! - An opening period only ever belongs to the location that encloses it
//!   in the payload.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A dated happening on the island.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Calendar day (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Start time (`HH:MM`).
    #[serde(default, with = "crate::domain::hh_mm::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Venue name or address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping such as `Konzert` or `Führung`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// External link with further details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Event {
    /// Order by date, then time (untimed events last), then id.
    pub fn chronological(a: &Self, b: &Self) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| match (a.time, b.time) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// A named time window during which a location is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningPeriod {
    /// Unique identifier.
    pub id: String,
    /// Owning location; filled from the enclosing location when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "location_id")]
    pub location_id: Option<String>,
    /// Label such as `Hauptsaison`.
    pub name: String,
    /// Days of operation such as `Mo–Fr`.
    pub days: String,
    /// Hours such as `10:00–18:00`.
    pub hours: String,
}

/// A place with opening periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Grouping such as `Museum`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Opening periods in display order.
    #[serde(default, alias = "opening_periods")]
    pub opening_periods: Vec<OpeningPeriod>,
}

impl Location {
    /// Copy with every period's `location_id` set to this location.
    #[must_use]
    pub fn with_owned_periods(mut self) -> Self {
        for period in &mut self.opening_periods {
            period.location_id = Some(self.id.clone());
        }
        self
    }
}

/// Payload validation failures for gateway writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IslandDataValidationError {
    /// A record has a blank identifier.
    #[error("{kind} at index {index} has an empty id")]
    EmptyId {
        /// Record kind (`event`, `location` or `opening period`).
        kind: &'static str,
        /// Position in the payload.
        index: usize,
    },
    /// A required text field is blank.
    #[error("{kind} {id} has an empty {field}")]
    EmptyField {
        /// Record kind.
        kind: &'static str,
        /// Record identifier.
        id: String,
        /// Field name.
        field: &'static str,
    },
    /// Two records of one kind share an id.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Record kind.
        kind: &'static str,
        /// The repeated identifier.
        id: String,
    },
    /// A period names a different location than the one enclosing it.
    #[error("opening period {period_id} references location {referenced} but is nested in {location_id}")]
    ForeignPeriod {
        /// Offending period.
        period_id: String,
        /// Enclosing location.
        location_id: String,
        /// Location named by the period.
        referenced: String,
    },
}

impl IslandDataValidationError {
    /// Structured details for error envelopes.
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::EmptyId { kind, index } => {
                serde_json::json!({"kind": kind, "index": index, "code": "empty_id"})
            }
            Self::EmptyField { kind, id, field } => {
                serde_json::json!({"kind": kind, "id": id, "field": field, "code": "empty_field"})
            }
            Self::DuplicateId { kind, id } => {
                serde_json::json!({"kind": kind, "id": id, "code": "duplicate_id"})
            }
            Self::ForeignPeriod {
                period_id,
                location_id,
                referenced,
            } => serde_json::json!({
                "kind": "opening period",
                "id": period_id,
                "locationId": location_id,
                "referencedLocationId": referenced,
                "code": "foreign_period",
            }),
        }
    }
}

/// Check an events payload before it is written.
///
/// # Errors
/// Returns the first [`IslandDataValidationError`] found.
pub fn validate_events(events: &[Event]) -> Result<(), IslandDataValidationError> {
    let mut ids = HashSet::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        check_id("event", index, &event.id, &mut ids)?;
        check_field("event", &event.id, "title", &event.title)?;
    }
    Ok(())
}

/// Check a locations payload, including nested periods, before it is written.
///
/// # Errors
/// Returns the first [`IslandDataValidationError`] found.
pub fn validate_locations(locations: &[Location]) -> Result<(), IslandDataValidationError> {
    let mut location_ids = HashSet::with_capacity(locations.len());
    let mut period_ids = HashSet::new();
    for (index, location) in locations.iter().enumerate() {
        check_id("location", index, &location.id, &mut location_ids)?;
        check_field("location", &location.id, "name", &location.name)?;
        for (period_index, period) in location.opening_periods.iter().enumerate() {
            check_id("opening period", period_index, &period.id, &mut period_ids)?;
            if let Some(referenced) = period.location_id.as_deref()
                && referenced != location.id
            {
                return Err(IslandDataValidationError::ForeignPeriod {
                    period_id: period.id.clone(),
                    location_id: location.id.clone(),
                    referenced: referenced.to_owned(),
                });
            }
        }
    }
    Ok(())
}

fn check_id<'a>(
    kind: &'static str,
    index: usize,
    id: &'a str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), IslandDataValidationError> {
    if id.trim().is_empty() {
        return Err(IslandDataValidationError::EmptyId { kind, index });
    }
    if !seen.insert(id) {
        return Err(IslandDataValidationError::DuplicateId {
            kind,
            id: id.to_owned(),
        });
    }
    Ok(())
}

fn check_field(
    kind: &'static str,
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<(), IslandDataValidationError> {
    if value.trim().is_empty() {
        return Err(IslandDataValidationError::EmptyField {
            kind,
            id: id.to_owned(),
            field,
        });
    }
    Ok(())
}
