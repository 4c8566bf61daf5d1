//! Driving port for reading gateway data.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Event, Location};

/// Bookkeeping attached to every gateway response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IslandDataMeta {
    /// When the response was assembled.
    pub generated_at: DateTime<Utc>,
    /// Number of events in the response, when events are included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_count: Option<usize>,
    /// Number of locations in the response, when locations are included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_count: Option<usize>,
}

impl IslandDataMeta {
    /// Metadata stamped with the current time.
    pub fn now(event_count: Option<usize>, location_count: Option<usize>) -> Self {
        Self {
            generated_at: Utc::now(),
            event_count,
            location_count,
        }
    }
}

/// Both gateway collections read together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IslandDataSnapshot {
    /// Events in chronological order.
    pub events: Vec<Event>,
    /// Locations with nested opening periods.
    pub locations: Vec<Location>,
    /// Response metadata.
    #[serde(rename = "_meta")]
    pub meta: IslandDataMeta,
}

/// Driving port for gateway reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IslandDataQuery: Send + Sync {
    /// Read events and locations concurrently.
    async fn snapshot(&self) -> Result<IslandDataSnapshot, Error>;
}
