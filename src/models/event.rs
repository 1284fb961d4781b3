//! Event models

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::HostIdentity;
use crate::utils::errors::{FiestaError, Result};

/// A published event shown in the list and detail views.
///
/// Summaries come from the event store and are read-only to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub attendees: i32,
    pub max_attendees: Option<i32>,
    pub description: Option<String>,
}

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventField {
    Title,
    Description,
    Date,
    Time,
    Location,
    MaxAttendees,
}

impl EventField {
    /// All form fields, in display order
    pub fn all() -> [EventField; 6] {
        [
            EventField::Title,
            EventField::Description,
            EventField::Date,
            EventField::Time,
            EventField::Location,
            EventField::MaxAttendees,
        ]
    }

    /// Whether the field must be filled in before submission
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            EventField::Title | EventField::Date | EventField::Time | EventField::Location
        )
    }

    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::Description => "description",
            EventField::Date => "date",
            EventField::Time => "time",
            EventField::Location => "location",
            EventField::MaxAttendees => "max_attendees",
        }
    }
}

/// In-progress event draft holding the raw field values as typed.
///
/// The draft is mutable during editing and finalized into a
/// [`CreateEventRequest`] at submission. Failure paths never clear it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// Date as typed, "YYYY-MM-DD"
    pub date: String,
    /// Time as typed, "HH:MM"
    pub time: String,
    pub location: String,
    /// Raw capacity limit; empty means unlimited
    pub max_attendees: String,
    pub is_private: bool,
}

impl EventDraft {
    /// Read a text field value
    pub fn field(&self, field: EventField) -> &str {
        match field {
            EventField::Title => &self.title,
            EventField::Description => &self.description,
            EventField::Date => &self.date,
            EventField::Time => &self.time,
            EventField::Location => &self.location,
            EventField::MaxAttendees => &self.max_attendees,
        }
    }

    /// Write a text field value
    pub fn set(&mut self, field: EventField, value: &str) {
        let slot = match field {
            EventField::Title => &mut self.title,
            EventField::Description => &mut self.description,
            EventField::Date => &mut self.date,
            EventField::Time => &mut self.time,
            EventField::Location => &mut self.location,
            EventField::MaxAttendees => &mut self.max_attendees,
        };
        *slot = value.to_string();
    }

    /// Combine the date and time fields into a single instant.
    ///
    /// Returns `None` while either field does not parse.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M").ok()?;
        Some(date.and_time(time).and_utc())
    }

    /// Parsed capacity limit. `Ok(None)` means unlimited.
    pub fn capacity(&self) -> Result<Option<i32>> {
        let raw = self.max_attendees.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        match raw.parse::<i32>() {
            Ok(value) if value > 0 => Ok(Some(value)),
            _ => Err(FiestaError::InvalidInput(format!(
                "Max attendees must be a positive integer, got: {}",
                raw
            ))),
        }
    }

    /// Finalize the draft into a creation request, attaching the creator
    /// identity when the host supplies one.
    pub fn finalize(&self, identity: Option<&HostIdentity>) -> Result<CreateEventRequest> {
        let starts_at = self.starts_at().ok_or_else(|| {
            FiestaError::InvalidInput("Date and time do not form a valid instant".to_string())
        })?;

        let description = self.description.trim();

        Ok(CreateEventRequest {
            title: self.title.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            starts_at,
            location: self.location.trim().to_string(),
            max_attendees: self.capacity()?,
            is_private: self.is_private,
            created_by: identity.cloned(),
            creator_id: identity.map(|i| i.id),
        })
    }
}

/// Finalized draft handed to the event store for creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub max_attendees: Option<i32>,
    pub is_private: bool,
    pub created_by: Option<HostIdentity>,
    pub creator_id: Option<i64>,
}

/// Validity of each form field, derived by validation and never persisted.
///
/// Fields that have not been checked yet count as valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValidity {
    fields: HashMap<EventField, bool>,
}

impl FieldValidity {
    /// Record a validation result for a field
    pub fn mark(&mut self, field: EventField, valid: bool) {
        self.fields.insert(field, valid);
    }

    /// Whether a field is currently considered valid
    pub fn is_valid(&self, field: EventField) -> bool {
        self.fields.get(&field).copied().unwrap_or(true)
    }

    /// Whether every checked field is valid
    pub fn all_valid(&self) -> bool {
        self.fields.values().all(|valid| *valid)
    }

    /// Fields currently marked invalid
    pub fn invalid_fields(&self) -> Vec<EventField> {
        self.fields
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(field, _)| *field)
            .collect()
    }

    /// Forget all recorded results
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
