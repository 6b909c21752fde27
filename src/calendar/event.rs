use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::color::Color;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid start '{0}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM.")]
pub struct StartParseError(pub String);

/// Start of an event: either a whole day or a minute-precision local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventStart {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl EventStart {
    pub fn date(&self) -> NaiveDate {
        match self {
            EventStart::Date(date) => *date,
            EventStart::DateTime(date_time) => date_time.date(),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventStart::Date(_))
    }

    /// Date-only starts are pinned to midnight, the way an edit form shows them.
    pub fn to_date_time(&self) -> NaiveDateTime {
        match self {
            EventStart::Date(date) => date.and_time(NaiveTime::MIN),
            EventStart::DateTime(date_time) => *date_time,
        }
    }
}

impl From<NaiveDate> for EventStart {
    fn from(date: NaiveDate) -> Self {
        EventStart::Date(date)
    }
}

impl From<NaiveDateTime> for EventStart {
    fn from(date_time: NaiveDateTime) -> Self {
        EventStart::DateTime(date_time)
    }
}

impl FromStr for EventStart {
    type Err = StartParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(EventStart::Date(date));
        }
        NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
            .map(EventStart::DateTime)
            .map_err(|_| StartParseError(s.to_string()))
    }
}

impl fmt::Display for EventStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventStart::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            EventStart::DateTime(date_time) => write!(f, "{}", date_time.format(DATE_TIME_FORMAT)),
        }
    }
}

impl TryFrom<String> for EventStart {
    type Error = StartParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventStart> for String {
    fn from(start: EventStart) -> Self {
        start.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: EventStart,
    pub color: Color,
}

impl CalendarEvent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: impl Into<EventStart>, color: Color) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start: start.into(),
            color,
        }
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }
}

/// Fields an edit may touch. Ids never change, so there is no `id` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<EventStart>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl EventPatch {
    pub fn apply_to(self, event: &mut CalendarEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
    }
}
