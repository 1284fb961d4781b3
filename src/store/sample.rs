//! Stand-in event store with fixed sample data
//!
//! Mirrors what a backend would return: a short list of upcoming events,
//! delivered after a configurable artificial delay. Accepted drafts are
//! kept in memory and appear in subsequent loads.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::models::event::{CreateEventRequest, EventSummary};
use crate::utils::errors::StoreResult;

use super::EventStore;

/// In-memory event store stand-in
pub struct SampleEventStore {
    delay: Duration,
    created: Mutex<Vec<EventSummary>>,
    next_id: AtomicI64,
}

impl SampleEventStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.simulated_delay_ms),
            created: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1000),
        }
    }

    /// Events accepted through [`EventStore::create_event`] so far
    pub fn created(&self) -> Vec<EventSummary> {
        self.locked().clone()
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, Vec<EventSummary>> {
        self.created.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sample_events() -> Vec<EventSummary> {
        let base = Utc::now().date_naive();
        vec![
            EventSummary {
                id: 1,
                title: "Tech Meetup".to_string(),
                starts_at: (base + ChronoDuration::days(10))
                    .and_hms_opt(19, 0, 0)
                    .unwrap_or_default()
                    .and_utc(),
                location: "Downtown Co-working Space".to_string(),
                attendees: 24,
                max_attendees: None,
                description: Some(
                    "Monthly tech meetup with guest speakers and networking.".to_string(),
                ),
            },
            EventSummary {
                id: 2,
                title: "Startup Pitch Night".to_string(),
                starts_at: (base + ChronoDuration::days(15))
                    .and_hms_opt(18, 30, 0)
                    .unwrap_or_default()
                    .and_utc(),
                location: "Innovation Hub".to_string(),
                attendees: 15,
                max_attendees: Some(40),
                description: Some("Local startups pitch their ideas to investors.".to_string()),
            },
        ]
    }
}

#[async_trait]
impl EventStore for SampleEventStore {
    async fn load_events(&self) -> StoreResult<Vec<EventSummary>> {
        tokio::time::sleep(self.delay).await;

        let mut events = Self::sample_events();
        events.extend(self.locked().iter().cloned());
        debug!(count = events.len(), "Sample store served event list");
        Ok(events)
    }

    async fn create_event(&self, request: CreateEventRequest) -> StoreResult<()> {
        tokio::time::sleep(self.delay).await;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let summary = EventSummary {
            id,
            title: request.title,
            starts_at: request.starts_at,
            location: request.location,
            attendees: 1,
            max_attendees: request.max_attendees,
            description: request.description,
        };

        info!(event_id = id, "Sample store accepted new event");
        self.locked().push(summary);
        Ok(())
    }
}
