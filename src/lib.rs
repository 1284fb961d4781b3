//! Fiesta Mini App core
//!
//! The interaction core of a Telegram Mini App for browsing and creating
//! social events. This library provides the navigation and event-form
//! controllers, the capability interface they consume from the embedding
//! host, an event store seam, and no-op stubs so the whole core runs in
//! headless and test environments.

pub mod app;
pub mod bridge;
pub mod config;
pub mod controllers;
pub mod i18n;
pub mod models;
pub mod store;
pub mod surface;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FiestaError, Result};

// Re-export main components for easy access
pub use app::FiestaApp;
pub use bridge::{HostBridge, NullBridge};
pub use controllers::{EventFormController, NavigationController, View};
pub use i18n::I18n;
pub use store::{EventStore, SampleEventStore};
pub use surface::{NullSurface, RenderSurface};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
