//! `HH:MM` serde format for wall-clock times.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";

pub(crate) fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(FORMAT).to_string())
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Accepts `HH:MM` and, for values echoed back from the database, `HH:MM:SS`.
fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
}

/// Optional variant; blank strings deserialise as `None`.
pub(crate) mod option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse(value).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
