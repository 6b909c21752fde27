use chrono::{Days, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::calendar::color::Color;
use crate::calendar::event::{CalendarEvent, EventPatch, EventStart};
use crate::calendar::palette::PaletteEntry;
use crate::challenge::Challenge;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Event '{0}' already exists")]
    DuplicateId(String),
    #[error("Event '{0}' not found")]
    NotFound(String),
    #[error("Event title must not be empty")]
    EmptyTitle,
    #[error("Day {0} cannot be placed on the calendar")]
    DateOutOfRange(u32),
}

/// One all-day event per challenge task, starting at `anchor` for day 1.
pub fn derive_from_challenge(challenge: &Challenge, anchor: NaiveDate) -> Result<Vec<CalendarEvent>, StoreError> {
    let color = challenge.category().color();

    challenge
        .tasks()
        .iter()
        .map(|task| -> Result<CalendarEvent, StoreError> {
            let offset = u64::from(task.day.saturating_sub(1));
            let start = anchor
                .checked_add_days(Days::new(offset))
                .ok_or(StoreError::DateOutOfRange(task.day))?;

            Ok(CalendarEvent::new(
                format!("{}-{}", challenge.id(), task.day),
                format!("{} - Day {}", challenge.title(), task.day),
                start,
                color.clone(),
            ))
        })
        .collect()
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Events in insertion order, keyed by unique id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarEventStore {
    events: Vec<CalendarEvent>,
}

impl CalendarEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: impl IntoIterator<Item = CalendarEvent>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for event in events {
            store.insert(event)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut CalendarEvent, StoreError> {
        self.events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> = self.events
            .iter()
            .filter(|event| event.occurs_on(date))
            .collect();
        events.sort_by_key(|event| event.start.to_date_time());
        events
    }

    pub fn insert(&mut self, event: CalendarEvent) -> Result<&CalendarEvent, StoreError> {
        if self.get(&event.id).is_some() {
            tracing::warn!("Rejecting duplicate event id {}", event.id);
            return Err(StoreError::DuplicateId(event.id));
        }

        tracing::debug!("Inserting event {} on {}", event.id, event.start);
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    pub fn reschedule(&mut self, id: &str, new_start: EventStart) -> Result<&CalendarEvent, StoreError> {
        let event = self.get_mut(id)?;
        tracing::debug!("Rescheduling event {} from {} to {}", id, event.start, new_start);
        event.start = new_start;
        Ok(&*event)
    }

    pub fn update(&mut self, id: &str, patch: EventPatch) -> Result<&CalendarEvent, StoreError> {
        let event = self.get_mut(id)?;
        if patch.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(StoreError::EmptyTitle);
        }

        patch.apply_to(event);
        tracing::debug!("Updated event {}", id);
        Ok(&*event)
    }

    /// Removing an unknown id is a no-op and returns `None`.
    pub fn remove(&mut self, id: &str) -> Option<CalendarEvent> {
        let index = self.events.iter().position(|event| event.id == id)?;
        tracing::debug!("Removing event {}", id);
        Some(self.events.remove(index))
    }

    /// Creates an event for a date slot the user clicked.
    pub fn create_on_date(&mut self, date: NaiveDate, title: &str, color: Color) -> Result<&CalendarEvent, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        self.insert(CalendarEvent::new(fresh_id(), title, date, color))
    }

    /// Turns a palette entry dropped on `date` into a new event.
    pub fn receive_external(&mut self, entry: &PaletteEntry, date: NaiveDate) -> Result<&CalendarEvent, StoreError> {
        let event = CalendarEvent::new(fresh_id(), entry.category.name(), date, entry.color.clone());
        tracing::info!("Received '{}' from palette on {}", entry.category, date);
        self.insert(event)
    }
}
