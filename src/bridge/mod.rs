//! Host platform capability interface
//!
//! The embedding runtime supplies identity, modal dialogs, a back control,
//! theming and geolocation. The controllers consume this surface through
//! the [`HostBridge`] trait so the same core runs against a real host or
//! the no-op stub.

pub mod null;

pub use null::NullBridge;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::user::HostIdentity;
use crate::utils::errors::BridgeResult;

/// Colour scheme reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// Capabilities the host may or may not provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Popup,
    ScanPopup,
    Geolocation,
    BackControl,
    ClosingConfirmation,
}

impl Capability {
    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Popup => "popup",
            Capability::ScanPopup => "scan_popup",
            Capability::Geolocation => "geolocation",
            Capability::BackControl => "back_control",
            Capability::ClosingConfirmation => "closing_confirmation",
        }
    }
}

/// Result of probing the host for a capability.
///
/// `Unknown` means the probe has not resolved yet; affordances that
/// depend on the capability stay hidden until it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityState {
    Available,
    Unavailable,
    Unknown,
}

impl CapabilityState {
    pub fn is_available(&self) -> bool {
        matches!(self, CapabilityState::Available)
    }
}

/// Kind of a popup button, mirroring the host's button styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupButtonKind {
    Ok,
    Default,
    Cancel,
}

/// A button in a host popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupButton {
    pub id: String,
    pub kind: PopupButtonKind,
    pub text: Option<String>,
}

impl PopupButton {
    /// A confirmation button with the host's default label
    pub fn ok(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: PopupButtonKind::Ok,
            text: None,
        }
    }

    /// A regular button with a custom label
    pub fn labeled(id: &str, text: String) -> Self {
        Self {
            id: id.to_string(),
            kind: PopupButtonKind::Default,
            text: Some(text),
        }
    }

    /// A cancel button with the host's default label
    pub fn cancel() -> Self {
        Self {
            id: "cancel".to_string(),
            kind: PopupButtonKind::Cancel,
            text: None,
        }
    }
}

/// Configuration of a host popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    pub title: String,
    pub message: String,
    pub buttons: Vec<PopupButton>,
}

impl PopupConfig {
    /// A single-button notification popup
    pub fn alert(title: String, message: String) -> Self {
        Self {
            title,
            message,
            buttons: vec![PopupButton::ok("ok")],
        }
    }
}

/// Geographic position reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// Render the position as a plain location text
    pub fn as_location_text(&self, precision: usize) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.latitude,
            self.longitude,
            prec = precision
        )
    }
}

/// Handler invoked when the host back control is activated
pub type BackHandler = Box<dyn Fn() + Send + Sync>;

/// Capability surface the mini app consumes from its host.
///
/// All methods must be safe to call regardless of capability state; the
/// async ones report missing capabilities through [`BridgeResult`].
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Expand the app to full height
    fn expand(&self);

    /// Colour scheme currently active on the host
    fn color_scheme(&self) -> ColorScheme;

    /// Ask the host to confirm before closing the app
    fn enable_closing_confirmation(&self);

    /// Show the host back control
    fn show_back_control(&self);

    /// Hide the host back control
    fn hide_back_control(&self);

    /// Register the handler invoked on back-control activation.
    /// The last registration wins.
    fn set_back_handler(&self, handler: BackHandler);

    /// Show a modal popup; resolves with the chosen button id
    async fn show_popup(&self, config: PopupConfig) -> BridgeResult<String>;

    /// Show the host scan popup; resolves with the scanned text
    async fn show_scan_popup(&self, prompt: &str) -> BridgeResult<String>;

    /// Identity data, when the host knows the user
    fn identity(&self) -> Option<HostIdentity>;

    /// Request the current position. The reading must be fresh, never a
    /// cached fix, and the host must give up after `timeout`.
    async fn request_current_position(&self, timeout: Duration) -> BridgeResult<GeoPosition>;

    /// Probe whether the host provides a capability
    fn capability(&self, capability: Capability) -> CapabilityState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_formatting() {
        let position = GeoPosition {
            latitude: 59.4372,
            longitude: 24.7536,
        };
        assert_eq!(position.as_location_text(6), "59.437200, 24.753600");
        assert_eq!(position.as_location_text(2), "59.44, 24.75");
    }

    #[test]
    fn test_alert_popup_has_single_ok_button() {
        let config = PopupConfig::alert("Done".to_string(), "All good".to_string());
        assert_eq!(config.buttons.len(), 1);
        assert_eq!(config.buttons[0].id, "ok");
        assert_eq!(config.buttons[0].kind, PopupButtonKind::Ok);
    }
}
