//! Fiesta Mini App
//!
//! Headless entry point: boots the core against the no-op host bridge
//! and the sample store, runs the launch sequence and walks the main
//! flows once.

use std::sync::Arc;

use tracing::info;

use fiesta::models::event::EventField;
use fiesta::utils::logging;
use fiesta::{FiestaApp, NullBridge, NullSurface, SampleEventStore, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the app
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", fiesta::info());

    let bridge = Arc::new(NullBridge);
    let surface = Arc::new(NullSurface);
    let store = Arc::new(SampleEventStore::new(&settings.store));

    let app = FiestaApp::new(settings, bridge, surface, store)?;
    app.launch().await?;
    info!(count = app.navigation.events().len(), "Event list ready");

    // Walk the main flows once so a headless run exercises the core
    app.open_detail(1);
    app.handle_history_pop();

    app.show_create();
    app.form.set_field(EventField::Title, "Tech Meetup");
    app.form.set_field(EventField::Location, "Innovation Hub");
    let outcome = app.submit_event().await?;
    info!(outcome = ?outcome, "Demo submission finished");

    app.show_profile();
    app.show_events();

    info!(
        count = app.navigation.events().len(),
        "Shutting down"
    );
    Ok(())
}
