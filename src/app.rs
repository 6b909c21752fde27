use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::calendar::{
    derive_from_challenge, CalendarEvent, CalendarEventStore, Color, ColorError, EventPatch,
    EventStart, Palette, PaletteEntry, PaletteError, StartParseError, StoreError,
};
use crate::challenge::{Challenge, ChallengeError, ChallengeProgress, Comment, Progress};
use crate::challenge::sample::{sample_challenge, sample_comments};
use crate::storage::config::{Config, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    DuplicateId,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Start(#[from] StartParseError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Store(StoreError::DuplicateId(_)) => ErrorKind::DuplicateId,
            AppError::Store(StoreError::NotFound(_)) => ErrorKind::NotFound,
            AppError::Palette(PaletteError::Consumed(_)) => ErrorKind::NotFound,
            _ => ErrorKind::Validation,
        }
    }
}

/// Settings the state needs from the config file, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub new_event_color: Color,
    pub default_author: String,
    pub consume_palette_on_drop: bool,
}

impl AppSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            new_event_color: config.new_event_color()?,
            default_author: config.comments.default_author.clone(),
            consume_palette_on_drop: config.calendar.consume_palette_on_drop,
        })
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            new_event_color: Color::new_event_default(),
            default_author: "You".to_string(),
            consume_palette_on_drop: true,
        }
    }
}

/// Snapshot shown while an event is being edited. The start is always a
/// minute-precision date-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub event_id: String,
    pub title: String,
    pub start: EventStart,
    pub color: Color,
}

impl EventForm {
    pub fn for_event(event: &CalendarEvent) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            start: EventStart::DateTime(event.start.to_date_time()),
            color: event.color.clone(),
        }
    }
}

/// Read-only view of everything the presentation layer renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot<'a> {
    pub challenge: &'a Challenge,
    pub progress: Progress,
    pub completed_days: Vec<u32>,
    pub comments: &'a [Comment],
    pub events: &'a [CalendarEvent],
    pub palette: Vec<&'a PaletteEntry>,
    pub editing: Option<&'a EventForm>,
}

pub struct AppState {
    challenge: Challenge,
    progress: ChallengeProgress,
    calendar: CalendarEventStore,
    palette: Palette,
    event_form: Option<EventForm>,
    settings: AppSettings,
}

impl AppState {
    /// Builds the state for `challenge`, placing its day 1 on `anchor`.
    pub fn new(challenge: Challenge, anchor: NaiveDate, settings: AppSettings) -> Result<Self, AppError> {
        let calendar = CalendarEventStore::from_events(derive_from_challenge(&challenge, anchor)?)?;
        let progress = ChallengeProgress::new(challenge.duration_days());
        let palette = Palette::new(settings.consume_palette_on_drop);

        tracing::info!(
            "Loaded challenge {} ({} days) anchored at {}",
            challenge.id(),
            challenge.duration_days(),
            anchor
        );

        Ok(Self {
            challenge,
            progress,
            calendar,
            palette,
            event_form: None,
            settings,
        })
    }

    /// The demo challenge with its two seeded comments.
    pub fn sample(anchor: NaiveDate, settings: AppSettings) -> Result<Self, AppError> {
        let mut app = Self::new(sample_challenge()?, anchor, settings)?;
        app.progress = app.progress.with_comments(sample_comments());
        Ok(app)
    }

    pub fn get_challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn get_progress(&self) -> Progress {
        self.progress.progress()
    }

    pub fn challenge_progress(&self) -> &ChallengeProgress {
        &self.progress
    }

    pub fn get_comments(&self) -> &[Comment] {
        self.progress.comments()
    }

    pub fn get_events(&self) -> &[CalendarEvent] {
        self.calendar.events()
    }

    pub fn calendar(&self) -> &CalendarEventStore {
        &self.calendar
    }

    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }

    pub fn editing_event(&self) -> Option<&EventForm> {
        self.event_form.as_ref()
    }

    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            challenge: &self.challenge,
            progress: self.get_progress(),
            completed_days: self.progress.completed_days().collect(),
            comments: self.get_comments(),
            events: self.get_events(),
            palette: self.palette.available().collect(),
            editing: self.editing_event(),
        }
    }

    pub fn toggle_day(&mut self, day: u32) -> Result<bool, AppError> {
        self.progress.toggle_day(day)?;
        Ok(self.progress.is_completed(day))
    }

    pub fn add_comment(&mut self, text: &str) -> Result<Comment, AppError> {
        let author = self.settings.default_author.clone();
        Ok(self.progress.add_comment(&author, text)?.clone())
    }

    pub fn reschedule_event(&mut self, id: &str, new_date: NaiveDate) -> Result<CalendarEvent, AppError> {
        Ok(self.calendar.reschedule(id, EventStart::Date(new_date))?.clone())
    }

    pub fn create_event_on(&mut self, date: NaiveDate, title: &str) -> Result<CalendarEvent, AppError> {
        let color = self.settings.new_event_color.clone();
        Ok(self.calendar.create_on_date(date, title, color)?.clone())
    }

    pub fn open_edit(&mut self, id: &str) -> Result<&EventForm, AppError> {
        let event = self
            .calendar
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(&*self.event_form.insert(EventForm::for_event(event)))
    }

    pub fn save_edit(&mut self, id: &str, title: &str, start: &str, color: &str) -> Result<CalendarEvent, AppError> {
        let patch = EventPatch {
            title: Some(title.to_string()),
            start: Some(start.parse()?),
            color: Some(Color::parse(color)?),
        };
        let updated = self.calendar.update(id, patch)?.clone();
        self.close_form_for(id);
        Ok(updated)
    }

    pub fn cancel_edit(&mut self) {
        self.event_form = None;
    }

    pub fn delete_event(&mut self, id: &str) -> Option<CalendarEvent> {
        let removed = self.calendar.remove(id);
        self.close_form_for(id);
        removed
    }

    pub fn drop_palette_item(&mut self, category: &str, date: NaiveDate) -> Result<CalendarEvent, AppError> {
        let entry = self.palette.entry(category)?.clone();
        let created = self.calendar.receive_external(&entry, date)?.clone();
        self.palette.mark_dropped(entry.category);
        Ok(created)
    }

    fn close_form_for(&mut self, id: &str) {
        if self.event_form.as_ref().is_some_and(|form| form.event_id == id) {
            self.event_form = None;
        }
    }
}
