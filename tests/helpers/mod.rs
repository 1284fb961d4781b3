//! Shared fixtures for integration tests
//!
//! Recording stubs for the host bridge, the rendering surface and the
//! event store, plus builders for settings and draft data.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::Notify;

use fiesta::bridge::{
    BackHandler, Capability, CapabilityState, ColorScheme, GeoPosition, HostBridge, PopupConfig,
};
use fiesta::config::Settings;
use fiesta::controllers::View;
use fiesta::models::event::{CreateEventRequest, EventField, EventSummary};
use fiesta::models::user::{HostIdentity, ProfileSummary};
use fiesta::store::EventStore;
use fiesta::surface::RenderSurface;
use fiesta::utils::errors::{BridgeError, BridgeResult, StoreError, StoreResult};
use fiesta::FiestaApp;

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What the recording bridge answers for position requests
#[derive(Debug, Clone)]
pub enum PositionScript {
    Respond(GeoPosition),
    Fail(BridgeError),
    /// Never resolve; exercises the caller-side timeout
    Hang,
}

/// Host bridge that records every interaction
pub struct RecordingBridge {
    pub back_visible: Mutex<bool>,
    pub back_shown_count: AtomicUsize,
    pub back_handler: Mutex<Option<BackHandler>>,
    pub popups: Mutex<Vec<PopupConfig>>,
    pub popup_answer: Mutex<String>,
    pub scan_result: Mutex<BridgeResult<String>>,
    pub position: Mutex<PositionScript>,
    pub identity: Mutex<Option<HostIdentity>>,
    pub capabilities: Mutex<HashMap<Capability, CapabilityState>>,
    pub expanded: AtomicUsize,
}

impl Default for RecordingBridge {
    fn default() -> Self {
        Self {
            back_visible: Mutex::new(false),
            back_shown_count: AtomicUsize::new(0),
            back_handler: Mutex::new(None),
            popups: Mutex::new(Vec::new()),
            popup_answer: Mutex::new("ok".to_string()),
            scan_result: Mutex::new(Err(BridgeError::Unavailable)),
            position: Mutex::new(PositionScript::Fail(BridgeError::Unavailable)),
            identity: Mutex::new(None),
            capabilities: Mutex::new(HashMap::new()),
            expanded: AtomicUsize::new(0),
        }
    }
}

impl RecordingBridge {
    pub fn with_identity(identity: HostIdentity) -> Self {
        let bridge = Self::default();
        *locked(&bridge.identity) = Some(identity);
        bridge
    }

    pub fn grant(&self, capability: Capability) {
        locked(&self.capabilities).insert(capability, CapabilityState::Available);
    }

    pub fn set_popup_answer(&self, id: &str) {
        *locked(&self.popup_answer) = id.to_string();
    }

    pub fn set_position(&self, script: PositionScript) {
        *locked(&self.position) = script;
    }

    pub fn set_scan_result(&self, result: BridgeResult<String>) {
        *locked(&self.scan_result) = result;
    }

    pub fn back_visible(&self) -> bool {
        *locked(&self.back_visible)
    }

    pub fn popup_titles(&self) -> Vec<String> {
        locked(&self.popups)
            .iter()
            .map(|popup| popup.title.clone())
            .collect()
    }

    /// Activate the host back control, as the host would
    pub fn press_back(&self) {
        if let Some(handler) = locked(&self.back_handler).as_ref() {
            handler();
        }
    }
}

#[async_trait]
impl HostBridge for RecordingBridge {
    fn expand(&self) {
        self.expanded.fetch_add(1, Ordering::SeqCst);
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Dark
    }

    fn enable_closing_confirmation(&self) {}

    fn show_back_control(&self) {
        *locked(&self.back_visible) = true;
        self.back_shown_count.fetch_add(1, Ordering::SeqCst);
    }

    fn hide_back_control(&self) {
        *locked(&self.back_visible) = false;
    }

    fn set_back_handler(&self, handler: BackHandler) {
        *locked(&self.back_handler) = Some(handler);
    }

    async fn show_popup(&self, config: PopupConfig) -> BridgeResult<String> {
        locked(&self.popups).push(config);
        Ok(locked(&self.popup_answer).clone())
    }

    async fn show_scan_popup(&self, _prompt: &str) -> BridgeResult<String> {
        locked(&self.scan_result).clone()
    }

    fn identity(&self) -> Option<HostIdentity> {
        locked(&self.identity).clone()
    }

    async fn request_current_position(&self, _timeout: Duration) -> BridgeResult<GeoPosition> {
        let script = locked(&self.position).clone();
        match script {
            PositionScript::Respond(position) => Ok(position),
            PositionScript::Fail(error) => Err(error),
            PositionScript::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }

    fn capability(&self, capability: Capability) -> CapabilityState {
        locked(&self.capabilities)
            .get(&capability)
            .copied()
            .unwrap_or(CapabilityState::Unavailable)
    }
}

/// Rendering surface that records every instruction
#[derive(Default)]
pub struct RecordingSurface {
    pub shown_views: Mutex<Vec<View>>,
    pub loading: Mutex<bool>,
    pub rendered_event_sets: Mutex<Vec<Vec<EventSummary>>>,
    pub rendered_details: Mutex<Vec<EventSummary>>,
    pub rendered_profiles: Mutex<Vec<ProfileSummary>>,
    pub field_validity: Mutex<HashMap<EventField, bool>>,
    pub field_values: Mutex<Vec<(EventField, String)>>,
    pub form_errors: Mutex<Vec<String>>,
    pub submit_enabled: Mutex<bool>,
    pub cleared_forms: AtomicUsize,
    pub assist_visible: Mutex<Option<bool>>,
    pub theme: Mutex<Option<ColorScheme>>,
}

impl RecordingSurface {
    pub fn last_view(&self) -> Option<View> {
        locked(&self.shown_views).last().copied()
    }

    pub fn field_valid(&self, field: EventField) -> Option<bool> {
        locked(&self.field_validity).get(&field).copied()
    }

    pub fn submit_enabled(&self) -> bool {
        *locked(&self.submit_enabled)
    }

    pub fn form_errors(&self) -> Vec<String> {
        locked(&self.form_errors).clone()
    }

    pub fn last_rendered_events(&self) -> Option<Vec<EventSummary>> {
        locked(&self.rendered_event_sets).last().cloned()
    }
}

impl RenderSurface for RecordingSurface {
    fn show_view(&self, view: View) {
        locked(&self.shown_views).push(view);
    }

    fn set_loading(&self, visible: bool) {
        *locked(&self.loading) = visible;
    }

    fn render_events(&self, events: &[EventSummary]) {
        locked(&self.rendered_event_sets).push(events.to_vec());
    }

    fn render_detail(&self, event: &EventSummary) {
        locked(&self.rendered_details).push(event.clone());
    }

    fn render_profile(&self, profile: &ProfileSummary) {
        locked(&self.rendered_profiles).push(profile.clone());
    }

    fn set_field_validity(&self, field: EventField, valid: bool) {
        locked(&self.field_validity).insert(field, valid);
    }

    fn set_field_value(&self, field: EventField, value: &str) {
        locked(&self.field_values).push((field, value.to_string()));
    }

    fn show_form_error(&self, message: &str) {
        locked(&self.form_errors).push(message.to_string());
    }

    fn clear_form_error(&self) {}

    fn set_submit_enabled(&self, enabled: bool) {
        *locked(&self.submit_enabled) = enabled;
    }

    fn clear_form(&self) {
        self.cleared_forms.fetch_add(1, Ordering::SeqCst);
    }

    fn set_location_assist_visible(&self, visible: bool) {
        *locked(&self.assist_visible) = Some(visible);
    }

    fn apply_theme(&self, scheme: ColorScheme) {
        *locked(&self.theme) = Some(scheme);
    }
}

/// Event store with scriptable behavior
pub struct ScriptedStore {
    pub events: Mutex<Vec<EventSummary>>,
    pub created: Mutex<Vec<CreateEventRequest>>,
    pub load_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub fail_load: Mutex<bool>,
    pub fail_create: Mutex<bool>,
    /// When set, create_event waits for a permit before resolving
    pub create_gate: Mutex<Option<Arc<Notify>>>,
}

impl Default for ScriptedStore {
    fn default() -> Self {
        Self {
            events: Mutex::new(vec![summary(1, "Tech Meetup", 10), summary(2, "Pitch Night", 15)]),
            created: Mutex::new(Vec::new()),
            load_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            fail_load: Mutex::new(false),
            fail_create: Mutex::new(false),
            create_gate: Mutex::new(None),
        }
    }
}

impl ScriptedStore {
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let store = Self::default();
        *locked(&store.create_gate) = Some(gate.clone());
        (store, gate)
    }

    pub fn set_fail_create(&self, fail: bool) {
        *locked(&self.fail_create) = fail;
    }

    pub fn set_fail_load(&self, fail: bool) {
        *locked(&self.fail_load) = fail;
    }

    pub fn created(&self) -> Vec<CreateEventRequest> {
        locked(&self.created).clone()
    }
}

#[async_trait]
impl EventStore for ScriptedStore {
    async fn load_events(&self) -> StoreResult<Vec<EventSummary>> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if *locked(&self.fail_load) {
            return Err(StoreError::Unavailable);
        }
        Ok(locked(&self.events).clone())
    }

    async fn create_event(&self, request: CreateEventRequest) -> StoreResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let gate = locked(&self.create_gate).clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if *locked(&self.fail_create) {
            return Err(StoreError::Rejected("backend said no".to_string()));
        }
        locked(&self.created).push(request);
        Ok(())
    }
}

/// An event summary starting `days_ahead` days from now
pub fn summary(id: i64, title: &str, days_ahead: i64) -> EventSummary {
    EventSummary {
        id,
        title: title.to_string(),
        starts_at: Utc::now() + ChronoDuration::days(days_ahead),
        location: "Innovation Hub".to_string(),
        attendees: 10,
        max_attendees: None,
        description: None,
    }
}

pub fn test_identity() -> HostIdentity {
    HostIdentity {
        id: 987654321,
        first_name: "Ada".to_string(),
        last_name: Some("Lovelace".to_string()),
        username: Some("ada".to_string()),
        language_code: Some("en".to_string()),
    }
}

pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.store.simulated_delay_ms = 0;
    settings
}

/// Assemble an app over recording collaborators
pub fn build_app(
    bridge: Arc<RecordingBridge>,
    surface: Arc<RecordingSurface>,
    store: Arc<ScriptedStore>,
) -> FiestaApp {
    FiestaApp::new(test_settings(), bridge, surface, store).expect("app should assemble")
}

/// Fill the form with a draft that passes validation
pub fn fill_valid_draft(app: &FiestaApp) {
    let start = Utc::now() + ChronoDuration::days(1);
    app.form.set_field(EventField::Title, "Tech Meetup");
    app.form
        .set_field(EventField::Date, &start.format("%Y-%m-%d").to_string());
    app.form.set_field(EventField::Time, "19:00");
    app.form.set_field(EventField::Location, "Hub");
}
