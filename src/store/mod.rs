//! Event store collaborator
//!
//! Supplies the event summaries shown in the list and accepts finalized
//! drafts for creation. The shipped implementation is a stand-in that
//! answers with fixed data after a simulated delay; a real implementation
//! would call a backend.

pub mod sample;

pub use sample::SampleEventStore;

use async_trait::async_trait;

use crate::models::event::{CreateEventRequest, EventSummary};
use crate::utils::errors::StoreResult;

/// Store seam consumed by the controllers
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Load the current set of event summaries
    async fn load_events(&self) -> StoreResult<Vec<EventSummary>>;

    /// Create a new event from a finalized draft
    async fn create_event(&self, request: CreateEventRequest) -> StoreResult<()>;
}
