//! Application wiring
//!
//! Builds the controllers, injects the host capabilities and the event
//! store, registers the back-control handler, and owns the launch
//! sequence. The thin methods here are the entry points user actions
//! are wired to.

use std::sync::Arc;

use tracing::info;

use crate::bridge::{Capability, HostBridge};
use crate::config::Settings;
use crate::controllers::form::SubmitOutcome;
use crate::controllers::{EventFormController, NavigationController, View};
use crate::i18n::I18n;
use crate::models::user::ProfileSummary;
use crate::store::EventStore;
use crate::surface::RenderSurface;
use crate::utils::errors::Result;

/// The assembled mini app
pub struct FiestaApp {
    settings: Settings,
    bridge: Arc<dyn HostBridge>,
    surface: Arc<dyn RenderSurface>,
    pub navigation: Arc<NavigationController>,
    pub form: Arc<EventFormController>,
    language: String,
}

impl FiestaApp {
    /// Assemble the app from its collaborators.
    ///
    /// The host back control and the surface history pop both funnel
    /// into the same navigation transition; the back handler is
    /// registered once, here.
    pub fn new(
        settings: Settings,
        bridge: Arc<dyn HostBridge>,
        surface: Arc<dyn RenderSurface>,
        store: Arc<dyn EventStore>,
    ) -> Result<Self> {
        let i18n = Arc::new(I18n::new(&settings.i18n)?);
        let language = i18n.resolve_language(
            bridge
                .identity()
                .and_then(|identity| identity.language_code)
                .as_deref(),
        );

        let navigation = Arc::new(NavigationController::new(
            bridge.clone(),
            surface.clone(),
            store.clone(),
            i18n.clone(),
            language.clone(),
        ));
        let form = Arc::new(EventFormController::new(
            bridge.clone(),
            surface.clone(),
            store,
            i18n,
            &settings,
            language.clone(),
        ));

        let back_navigation = navigation.clone();
        bridge.set_back_handler(Box::new(move || {
            back_navigation.go_back();
        }));

        Ok(Self {
            settings,
            bridge,
            surface,
            navigation,
            form,
            language,
        })
    }

    /// Startup sequence: host chrome, theme, initial event list
    pub async fn launch(&self) -> Result<()> {
        if self.settings.app.expand_on_launch {
            self.bridge.expand();
        }
        if self.settings.app.closing_confirmation
            && self
                .bridge
                .capability(Capability::ClosingConfirmation)
                .is_available()
        {
            self.bridge.enable_closing_confirmation();
        }

        self.surface.apply_theme(self.bridge.color_scheme());
        self.bridge.hide_back_control();

        self.navigation.reload_events().await?;
        self.navigation.show_view(View::List);

        info!(language = %self.language, "Mini app launched");
        Ok(())
    }

    /// Navigation button: event list
    pub fn show_events(&self) {
        self.navigation.show_view(View::List);
    }

    /// Navigation button: create form, starting a fresh draft
    pub fn show_create(&self) {
        self.form.begin();
        self.navigation.show_view(View::Create);
    }

    /// Navigation button: profile view
    pub fn show_profile(&self) {
        let profile = ProfileSummary::new(self.bridge.identity());
        self.surface.render_profile(&profile);
        self.navigation.show_view(View::Profile);
    }

    /// Event card tapped in the list
    pub fn open_detail(&self, event_id: i64) {
        self.navigation.show_detail(event_id);
    }

    /// History pop from the rendering surface, reconciled with the host
    /// back control
    pub fn handle_history_pop(&self) {
        self.navigation.go_back();
    }

    /// Submit control on the create form
    pub async fn submit_event(&self) -> Result<SubmitOutcome> {
        self.form.submit(&self.navigation).await
    }

    /// Location assist control on the create form
    pub async fn assist_location(&self) -> Result<bool> {
        self.form.assist_location().await
    }

    /// Language the interface texts resolve in
    pub fn language(&self) -> &str {
        &self.language
    }
}
