//! No-op host bridge for headless and test environments
//!
//! Every capability probes as unavailable, chrome calls do nothing, and
//! popups resolve with their first button so flows complete without a
//! real host.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::models::user::HostIdentity;
use crate::utils::errors::{BridgeError, BridgeResult};

use super::{
    BackHandler, Capability, CapabilityState, ColorScheme, GeoPosition, HostBridge, PopupConfig,
};

/// Host bridge stub with no host behind it
#[derive(Debug, Default)]
pub struct NullBridge;

#[async_trait]
impl HostBridge for NullBridge {
    fn expand(&self) {}

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }

    fn enable_closing_confirmation(&self) {}

    fn show_back_control(&self) {}

    fn hide_back_control(&self) {}

    fn set_back_handler(&self, _handler: BackHandler) {}

    async fn show_popup(&self, config: PopupConfig) -> BridgeResult<String> {
        debug!(title = %config.title, "Headless popup auto-resolved");
        Ok(config
            .buttons
            .first()
            .map(|button| button.id.clone())
            .unwrap_or_default())
    }

    async fn show_scan_popup(&self, _prompt: &str) -> BridgeResult<String> {
        Err(BridgeError::Unavailable)
    }

    fn identity(&self) -> Option<HostIdentity> {
        None
    }

    async fn request_current_position(&self, _timeout: Duration) -> BridgeResult<GeoPosition> {
        Err(BridgeError::Unavailable)
    }

    fn capability(&self, _capability: Capability) -> CapabilityState {
        CapabilityState::Unavailable
    }
}
