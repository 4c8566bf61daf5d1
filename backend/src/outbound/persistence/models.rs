//! Internal Diesel row structs for the gateway tables.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain [`Event`]s and [`Location`]s.

use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::{Event, Location, OpeningPeriod};

use super::schema::{events, locations, opening_periods};

/// Row read from `events`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: String,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            date: row.event_date,
            time: row.event_time,
            location: row.location,
            description: row.description,
            category: row.category,
            image: row.image,
            link: row.link,
        }
    }
}

/// Insertable borrowing from a domain [`Event`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub image: Option<&'a str>,
    pub link: Option<&'a str>,
}

impl<'a> From<&'a Event> for NewEventRow<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            id: &event.id,
            title: &event.title,
            event_date: event.date,
            event_time: event.time,
            location: event.location.as_deref(),
            description: event.description.as_deref(),
            category: event.category.as_deref(),
            image: event.image.as_deref(),
            link: event.link.as_deref(),
        }
    }
}

/// Row read from `locations`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LocationRow {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl LocationRow {
    pub(crate) fn into_location(self, opening_periods: Vec<OpeningPeriod>) -> Location {
        Location {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            address: self.address,
            phone: self.phone,
            website: self.website,
            opening_periods,
        }
    }
}

/// Insertable borrowing from a domain [`Location`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = locations)]
pub(crate) struct NewLocationRow<'a> {
    pub id: &'a str,
    pub position: i32,
    pub name: &'a str,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
}

impl<'a> NewLocationRow<'a> {
    pub(crate) fn new(location: &'a Location, position: i32) -> Self {
        Self {
            id: &location.id,
            position,
            name: &location.name,
            category: location.category.as_deref(),
            description: location.description.as_deref(),
            address: location.address.as_deref(),
            phone: location.phone.as_deref(),
            website: location.website.as_deref(),
        }
    }
}

/// Row read from `opening_periods`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = opening_periods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OpeningPeriodRow {
    pub id: String,
    pub location_id: String,
    pub name: String,
    pub days: String,
    pub hours: String,
}

impl From<OpeningPeriodRow> for OpeningPeriod {
    fn from(row: OpeningPeriodRow) -> Self {
        Self {
            id: row.id,
            location_id: Some(row.location_id),
            name: row.name,
            days: row.days,
            hours: row.hours,
        }
    }
}

/// Insertable for one period of a location.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = opening_periods)]
pub(crate) struct NewOpeningPeriodRow<'a> {
    pub id: &'a str,
    pub location_id: &'a str,
    pub position: i32,
    pub name: &'a str,
    pub days: &'a str,
    pub hours: &'a str,
}
