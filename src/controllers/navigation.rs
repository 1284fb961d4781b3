//! View navigation controller
//!
//! Owns the active view and the view-history stack, and reconciles the
//! back-navigation sources (host back control, surface history pop, the
//! in-app back affordance) into one consistent transition. Back-control
//! visibility is re-derived from stack depth after every mutation, so
//! the two can never disagree.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bridge::{HostBridge, PopupConfig};
use crate::i18n::I18n;
use crate::models::event::EventSummary;
use crate::store::EventStore;
use crate::surface::RenderSurface;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Views of the single-page interface; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    List,
    Detail,
    Create,
    Profile,
}

impl View {
    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            View::List => "list",
            View::Detail => "detail",
            View::Create => "create",
            View::Profile => "profile",
        }
    }
}

struct NavigationState {
    /// View history; the top entry is always the active view and the
    /// bottom entry is always the list view
    stack: Vec<View>,
    /// The last-rendered set of summaries, used for detail lookup
    events: Vec<EventSummary>,
}

/// Navigation controller
pub struct NavigationController {
    bridge: Arc<dyn HostBridge>,
    surface: Arc<dyn RenderSurface>,
    store: Arc<dyn EventStore>,
    i18n: Arc<I18n>,
    language: String,
    state: Mutex<NavigationState>,
}

impl NavigationController {
    pub fn new(
        bridge: Arc<dyn HostBridge>,
        surface: Arc<dyn RenderSurface>,
        store: Arc<dyn EventStore>,
        i18n: Arc<I18n>,
        language: String,
    ) -> Self {
        Self {
            bridge,
            surface,
            store,
            i18n,
            language,
            state: Mutex::new(NavigationState {
                stack: vec![View::List],
                events: Vec::new(),
            }),
        }
    }

    /// The currently active view
    pub fn active_view(&self) -> View {
        self.locked().stack.last().copied().unwrap_or(View::List)
    }

    /// Current history depth
    pub fn depth(&self) -> usize {
        self.locked().stack.len()
    }

    /// Snapshot of the last-rendered event summaries
    pub fn events(&self) -> Vec<EventSummary> {
        self.locked().events.clone()
    }

    /// Reveal a view, pushing it onto the history when it differs from
    /// the current top.
    pub fn show_view(&self, view: View) {
        let (previous, depth) = {
            let mut state = self.locked();
            let previous = state.stack.last().copied().unwrap_or(View::List);
            if previous != view {
                state.stack.push(view);
            }
            (previous, state.stack.len())
        };

        self.surface.show_view(view);
        self.sync_back_control(depth);
        logging::log_view_transition(previous.name(), view.name(), depth);
    }

    /// Open the detail view for an event from the last-rendered set.
    ///
    /// Summaries are ephemeral client-side data, so an unknown id is a
    /// silent no-op rather than an error.
    pub fn show_detail(&self, event_id: i64) {
        let (event, depth) = {
            let mut state = self.locked();
            let found = state
                .events
                .iter()
                .find(|event| event.id == event_id)
                .cloned();

            let event = match found {
                Some(event) => event,
                None => {
                    debug!(event_id = event_id, "Detail requested for unknown event, ignoring");
                    return;
                }
            };

            if state.stack.last() != Some(&View::Detail) {
                state.stack.push(View::Detail);
            }
            (event, state.stack.len())
        };

        self.surface.render_detail(&event);
        self.surface.show_view(View::Detail);
        self.sync_back_control(depth);
        info!(event_id = event_id, depth = depth, "Event detail shown");
    }

    /// Navigate one step back and return the now-active view.
    ///
    /// All back sources funnel into this transition; at depth 1 it is a
    /// no-op, so repeated activations are harmless.
    pub fn go_back(&self) -> View {
        let (restored, depth, popped) = {
            let mut state = self.locked();
            let popped = if state.stack.len() > 1 {
                state.stack.pop();
                true
            } else {
                false
            };
            let restored = state.stack.last().copied().unwrap_or(View::List);
            (restored, state.stack.len(), popped)
        };

        if popped {
            self.surface.show_view(restored);
            debug!(view = restored.name(), depth = depth, "Navigated back");
        }
        self.sync_back_control(depth);
        restored
    }

    /// Refresh the event list from the store and render it.
    ///
    /// A store failure is surfaced through a host popup and leaves the
    /// last-rendered set in place.
    pub async fn reload_events(&self) -> Result<()> {
        self.surface.set_loading(true);
        let loaded = self.store.load_events().await;
        self.surface.set_loading(false);

        match loaded {
            Ok(events) => {
                info!(count = events.len(), "Event list loaded");
                self.surface.render_events(&events);
                self.locked().events = events;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load events");
                let config = PopupConfig::alert(
                    self.i18n.t("popup.load_failed.title", &self.language, None),
                    self.i18n.t("popup.load_failed.message", &self.language, None),
                );
                if let Err(popup_error) = self.bridge.show_popup(config).await {
                    debug!(error = %popup_error, "Load-failure popup not shown");
                }
            }
        }

        Ok(())
    }

    /// Refresh the event list and reveal it; used after a successful
    /// event creation.
    pub async fn return_to_list(&self) -> Result<()> {
        self.reload_events().await?;
        self.show_view(View::List);
        Ok(())
    }

    fn locked(&self) -> MutexGuard<'_, NavigationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // The host back control is visible exactly when there is history to
    // go back to.
    fn sync_back_control(&self, depth: usize) {
        if depth > 1 {
            self.bridge.show_back_control();
        } else {
            self.bridge.hide_back_control();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::NullBridge;
    use crate::config::{I18nConfig, StoreConfig};
    use crate::store::SampleEventStore;
    use crate::surface::NullSurface;

    fn controller() -> NavigationController {
        let i18n = Arc::new(I18n::new(&I18nConfig::default()).unwrap());
        NavigationController::new(
            Arc::new(NullBridge),
            Arc::new(NullSurface),
            Arc::new(SampleEventStore::new(&StoreConfig {
                simulated_delay_ms: 0,
            })),
            i18n,
            "en".to_string(),
        )
    }

    #[test]
    fn test_starts_on_list_view() {
        let nav = controller();
        assert_eq!(nav.active_view(), View::List);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_show_view_pushes_only_on_change() {
        let nav = controller();
        nav.show_view(View::Create);
        nav.show_view(View::Create);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.active_view(), View::Create);

        nav.show_view(View::Profile);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_go_back_restores_previous_view() {
        let nav = controller();
        nav.show_view(View::Create);
        nav.show_view(View::Profile);

        assert_eq!(nav.go_back(), View::Create);
        assert_eq!(nav.go_back(), View::List);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_go_back_at_floor_is_a_no_op() {
        let nav = controller();
        assert_eq!(nav.go_back(), View::List);
        assert_eq!(nav.go_back(), View::List);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.active_view(), View::List);
    }

    #[tokio::test]
    async fn test_show_detail_for_loaded_event() {
        let nav = controller();
        nav.reload_events().await.unwrap();

        nav.show_detail(1);
        assert_eq!(nav.active_view(), View::Detail);
        assert_eq!(nav.depth(), 2);

        // A second detail from detail view does not grow the stack
        nav.show_detail(2);
        assert_eq!(nav.depth(), 2);
    }

    #[tokio::test]
    async fn test_show_detail_unknown_id_is_silent() {
        let nav = controller();
        nav.reload_events().await.unwrap();

        nav.show_detail(404);
        assert_eq!(nav.active_view(), View::List);
        assert_eq!(nav.depth(), 1);
    }
}
