//! In-memory calendar event store backing the events view.
//!
//! Events carry no durable state; the store lives for the process and the
//! calendar widget re-fetches per navigation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FscanError, Result};

/// One calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub start_date: NaiveDate,
    /// Defaults to `start_date` when the creator omits it.
    pub end_date: NaiveDate,
    /// `HH:MM`, empty when unset.
    pub time: String,
    pub location: String,
}

/// Creation payload; `title` and `start_date` are required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event with a fresh id.
    pub fn add(&mut self, new: NewEvent) -> Result<&Event> {
        if new.title.is_empty() {
            return Err(FscanError::invalid_query("event title is required"));
        }
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date.unwrap_or(new.start_date),
            time: new.time,
            location: new.location,
        };
        self.events.push(event);
        Ok(self.events.last().expect("just pushed"))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Apply a partial update to an existing event.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> Result<&Event> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| FscanError::EventNotFound { id: id.to_string() })?;
        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(start_date) = patch.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            event.end_date = end_date;
        }
        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(location) = patch.location {
            event.location = location;
        }
        Ok(event)
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Err(FscanError::EventNotFound { id: id.to_string() });
        }
        Ok(())
    }

    #[must_use]
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Events whose start date falls within `[start, end]`, inclusive.
    #[must_use]
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| start <= e.start_date && e.start_date <= end)
            .collect()
    }
}
