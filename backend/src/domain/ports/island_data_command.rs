//! Driving port for replacing gateway data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::IslandDataMeta;
use crate::domain::{Error, Event, Location};

/// Replacement payload; each present collection replaces its stored
/// counterpart in full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceIslandDataRequest {
    /// New event collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    /// New location collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
}

impl ReplaceIslandDataRequest {
    /// `true` when neither collection is present.
    pub fn is_empty(&self) -> bool {
        self.events.is_none() && self.locations.is_none()
    }
}

/// Stored collections after a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceIslandDataResponse {
    /// Stored events, when events were replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    /// Stored locations, when locations were replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    /// Response metadata.
    #[serde(rename = "_meta")]
    pub meta: IslandDataMeta,
}

/// Driving port for gateway writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IslandDataCommand: Send + Sync {
    /// Validate the payload, then replace events and locations in that order.
    async fn replace(
        &self,
        request: ReplaceIslandDataRequest,
    ) -> Result<ReplaceIslandDataResponse, Error>;
}
