use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a valid IANA timezone identifier")]
pub struct TimezoneError(String);

/// An IANA timezone identifier backed by the tz database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(Tz);

impl Timezone {
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Offset from UTC at the given instant, formatted `+HH:MM`.
    pub fn utc_offset_at(&self, at: DateTime<Utc>) -> String {
        let seconds = self
            .0
            .offset_from_utc_datetime(&at.naive_utc())
            .fix()
            .local_minus_utc();
        let sign = if seconds < 0 { '-' } else { '+' };
        let seconds = seconds.abs();
        format!("{sign}{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(Tz::UTC)
    }
}

impl TryFrom<&str> for Timezone {
    type Error = TimezoneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| TimezoneError(value.to_owned()))
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
