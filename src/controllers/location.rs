//! Location assist for the event form
//!
//! Capability-gated helpers that resolve a location text through the
//! host: either a fresh position fix or the scan popup. When neither
//! capability is available the affordance is hidden and manual entry is
//! the only path.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::bridge::{
    Capability, CapabilityState, HostBridge, PopupButton, PopupConfig,
};
use crate::config::Settings;
use crate::i18n::I18n;
use crate::utils::errors::{BridgeError, BridgeResult};
use crate::utils::logging;

/// The two assisted paths to a location text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationChoice {
    CurrentPosition,
    Scan,
}

/// Assisted location lookup
pub struct LocationAssist {
    bridge: Arc<dyn HostBridge>,
    lookup_timeout: Duration,
    coordinate_precision: usize,
    position_enabled: bool,
    scan_enabled: bool,
}

impl LocationAssist {
    pub fn new(bridge: Arc<dyn HostBridge>, settings: &Settings) -> Self {
        Self {
            bridge,
            lookup_timeout: Duration::from_secs(settings.location.lookup_timeout_seconds),
            coordinate_precision: settings.location.coordinate_precision,
            position_enabled: settings.features.location_assist,
            scan_enabled: settings.features.scan_lookup,
        }
    }

    /// Whether the assist affordance should be visible at all
    pub fn is_available(&self) -> bool {
        self.position_available() || self.scan_available()
    }

    /// Ask the user which path to take. Only available paths are
    /// offered; `None` means cancelled or nothing to offer.
    pub async fn prompt_choice(&self, i18n: &I18n, language: &str) -> Option<LocationChoice> {
        let mut buttons = Vec::new();
        if self.position_available() {
            buttons.push(PopupButton::labeled(
                "current",
                i18n.t("buttons.current_position", language, None),
            ));
        }
        if self.scan_available() {
            buttons.push(PopupButton::labeled(
                "scan",
                i18n.t("buttons.scan", language, None),
            ));
        }
        if buttons.is_empty() {
            return None;
        }
        buttons.push(PopupButton::cancel());

        let config = PopupConfig {
            title: i18n.t("popup.location_choice.title", language, None),
            message: i18n.t("popup.location_choice.message", language, None),
            buttons,
        };

        match self.bridge.show_popup(config).await {
            Ok(id) if id == "current" => Some(LocationChoice::CurrentPosition),
            Ok(id) if id == "scan" => Some(LocationChoice::Scan),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "Location choice popup not shown");
                None
            }
        }
    }

    /// Resolve the chosen path to a plain location text.
    ///
    /// The position path enforces the configured timeout and never
    /// retries; the failure is reported to the caller.
    pub async fn resolve(&self, choice: LocationChoice, scan_prompt: &str) -> BridgeResult<String> {
        match choice {
            LocationChoice::CurrentPosition => {
                let request = self.bridge.request_current_position(self.lookup_timeout);
                match tokio::time::timeout(self.lookup_timeout, request).await {
                    Ok(result) => {
                        let position = result?;
                        Ok(position.as_location_text(self.coordinate_precision))
                    }
                    Err(_) => Err(BridgeError::Timeout),
                }
            }
            LocationChoice::Scan => self.bridge.show_scan_popup(scan_prompt).await,
        }
    }

    fn position_available(&self) -> bool {
        let state = self.bridge.capability(Capability::Geolocation);
        if !self.position_enabled {
            return false;
        }
        logging::log_capability_probe(Capability::Geolocation.name(), probe_name(state));
        state.is_available()
    }

    fn scan_available(&self) -> bool {
        self.scan_enabled && self.bridge.capability(Capability::ScanPopup).is_available()
    }
}

fn probe_name(state: CapabilityState) -> &'static str {
    match state {
        CapabilityState::Available => "available",
        CapabilityState::Unavailable => "unavailable",
        CapabilityState::Unknown => "unknown",
    }
}
