//! Ferry timetable between Dagebüll, Föhr and Amrum.
//!
//! ## Invariants
//! - Route keys form the closed set [`FerryRoute::ALL`]; unknown keys fail
//!   deserialisation.
//! - Every note code on a departure exists in the shared notes glossary.
//! - Season names are non-empty and unique.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One of the six directional ferry connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FerryRoute {
    /// Dagebüll → Amrum (Wittdün).
    DagebullAmrum,
    /// Amrum (Wittdün) → Dagebüll.
    AmrumDagebull,
    /// Dagebüll → Föhr (Wyk).
    DagebullFoehr,
    /// Föhr (Wyk) → Dagebüll.
    FoehrDagebull,
    /// Föhr (Wyk) → Amrum (Wittdün).
    FoehrAmrum,
    /// Amrum (Wittdün) → Föhr (Wyk).
    AmrumFoehr,
}

impl FerryRoute {
    /// Every route, in timetable order.
    pub const ALL: [Self; 6] = [
        Self::DagebullAmrum,
        Self::AmrumDagebull,
        Self::DagebullFoehr,
        Self::FoehrDagebull,
        Self::FoehrAmrum,
        Self::AmrumFoehr,
    ];

    /// Wire name of the route key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DagebullAmrum => "DagebullAmrum",
            Self::AmrumDagebull => "AmrumDagebull",
            Self::DagebullFoehr => "DagebullFoehr",
            Self::FoehrDagebull => "FoehrDagebull",
            Self::FoehrAmrum => "FoehrAmrum",
            Self::AmrumFoehr => "AmrumFoehr",
        }
    }

    /// Departure harbour.
    pub const fn origin(self) -> &'static str {
        match self {
            Self::DagebullAmrum | Self::DagebullFoehr => "Dagebüll",
            Self::AmrumDagebull | Self::AmrumFoehr => "Amrum (Wittdün)",
            Self::FoehrDagebull | Self::FoehrAmrum => "Föhr (Wyk)",
        }
    }

    /// Arrival harbour.
    pub const fn destination(self) -> &'static str {
        match self {
            Self::AmrumDagebull | Self::FoehrDagebull => "Dagebüll",
            Self::DagebullAmrum | Self::FoehrAmrum => "Amrum (Wittdün)",
            Self::DagebullFoehr | Self::AmrumFoehr => "Föhr (Wyk)",
        }
    }
}

impl fmt::Display for FerryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a route key outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ferry route: {0}")]
pub struct UnknownFerryRoute(pub String);

impl FromStr for FerryRoute {
    type Err = UnknownFerryRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFerryRoute(s.to_owned()))
    }
}

/// A single sailing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    /// Local departure time.
    #[serde(with = "crate::domain::hh_mm")]
    pub time: NaiveTime,
    /// Glossary code qualifying the sailing (e.g. `"S"` for Saturdays only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A named timetable period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FerrySeason {
    /// Season name such as `Sommer`.
    pub name: String,
    /// Human-readable validity period such as `01.04. – 31.10.`.
    pub period: String,
    /// Departures per route; routes without sailings may be absent.
    pub routes: BTreeMap<FerryRoute, Vec<Departure>>,
}

impl FerrySeason {
    /// Departures for `route`; empty when the route does not run this season.
    pub fn departures(&self, route: FerryRoute) -> &[Departure] {
        self.routes.get(&route).map_or(&[], Vec::as_slice)
    }
}

/// Validation failures for a ferry schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FerryScheduleError {
    /// A season has a blank name.
    #[error("ferry season at index {index} has an empty name")]
    EmptySeasonName {
        /// Position of the season in the schedule.
        index: usize,
    },
    /// Two seasons share a name.
    #[error("duplicate ferry season: {name}")]
    DuplicateSeason {
        /// The repeated name.
        name: String,
    },
    /// A departure references a note code missing from the glossary.
    #[error("season {season}, route {route}: note {note} is not defined in the notes glossary")]
    UnknownNote {
        /// Season containing the departure.
        season: String,
        /// Route containing the departure.
        route: FerryRoute,
        /// Missing note code.
        note: String,
    },
}

/// Validated ferry timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "FerryScheduleDto")]
pub struct FerrySchedule {
    seasons: Vec<FerrySeason>,
    notes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FerryScheduleDto {
    seasons: Vec<FerrySeason>,
    #[serde(default)]
    notes: BTreeMap<String, String>,
}

impl TryFrom<FerryScheduleDto> for FerrySchedule {
    type Error = FerryScheduleError;

    fn try_from(dto: FerryScheduleDto) -> Result<Self, Self::Error> {
        Self::new(dto.seasons, dto.notes)
    }
}

impl FerrySchedule {
    /// Validate and assemble a schedule.
    ///
    /// # Errors
    /// Returns [`FerryScheduleError`] when a season name is blank or repeated,
    /// or when a departure references an undefined note.
    pub fn new(
        seasons: Vec<FerrySeason>,
        notes: BTreeMap<String, String>,
    ) -> Result<Self, FerryScheduleError> {
        let mut names = BTreeSet::new();
        for (index, season) in seasons.iter().enumerate() {
            if season.name.trim().is_empty() {
                return Err(FerryScheduleError::EmptySeasonName { index });
            }
            if !names.insert(season.name.as_str()) {
                return Err(FerryScheduleError::DuplicateSeason {
                    name: season.name.clone(),
                });
            }
            for (route, departures) in &season.routes {
                let unknown = departures
                    .iter()
                    .filter_map(|departure| departure.note.as_deref())
                    .find(|note| !notes.contains_key(*note));
                if let Some(note) = unknown {
                    return Err(FerryScheduleError::UnknownNote {
                        season: season.name.clone(),
                        route: *route,
                        note: note.to_owned(),
                    });
                }
            }
        }
        Ok(Self { seasons, notes })
    }

    /// Seasons in timetable order.
    pub fn seasons(&self) -> &[FerrySeason] {
        &self.seasons
    }

    /// Shared notes glossary.
    pub fn notes(&self) -> &BTreeMap<String, String> {
        &self.notes
    }

    /// Season by name, ignoring case.
    pub fn season(&self, name: &str) -> Option<&FerrySeason> {
        self.seasons
            .iter()
            .find(|season| season.name.to_lowercase() == name.to_lowercase())
    }

    /// Departures for `route` in the named season.
    ///
    /// Returns `None` when the season is unknown and an empty slice when the
    /// route does not run that season.
    pub fn departures(&self, season: &str, route: FerryRoute) -> Option<&[Departure]> {
        self.season(season).map(|found| found.departures(route))
    }

    /// Glossary text for a note code.
    pub fn note(&self, code: &str) -> Option<&str> {
        self.notes.get(code).map(String::as_str)
    }
}
