//! Rendering surface seam
//!
//! The DOM-equivalent the controllers write into. Rendering itself is
//! host plumbing and lives outside this crate; the trait names the side
//! effects the core performs so the state machines stay testable without
//! a real surface.

use crate::bridge::ColorScheme;
use crate::controllers::View;
use crate::models::event::{EventField, EventSummary};
use crate::models::user::ProfileSummary;

/// Side effects the controllers perform on the rendering surface
pub trait RenderSurface: Send + Sync {
    /// Reveal the given view and update the navigation highlighting.
    /// Transient UI of the previous view is cleared by the surface.
    fn show_view(&self, view: View);

    /// Toggle the loading indicator
    fn set_loading(&self, visible: bool);

    /// Render the event list
    fn render_events(&self, events: &[EventSummary]);

    /// Render the detail view for one event
    fn render_detail(&self, event: &EventSummary);

    /// Render the profile view
    fn render_profile(&self, profile: &ProfileSummary);

    /// Toggle the invalid marking on a form field
    fn set_field_validity(&self, field: EventField, valid: bool);

    /// Write a value into a form field on behalf of the user
    fn set_field_value(&self, field: EventField, value: &str);

    /// Show a message in the whole-form error area
    fn show_form_error(&self, message: &str);

    /// Clear the whole-form error area
    fn clear_form_error(&self);

    /// Enable or disable the submit control
    fn set_submit_enabled(&self, enabled: bool);

    /// Reset every form field to its empty state
    fn clear_form(&self);

    /// Show or hide the location assist affordance
    fn set_location_assist_visible(&self, visible: bool);

    /// Apply the host colour scheme
    fn apply_theme(&self, scheme: ColorScheme);
}

/// Surface that ignores every instruction, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn show_view(&self, _view: View) {}
    fn set_loading(&self, _visible: bool) {}
    fn render_events(&self, _events: &[EventSummary]) {}
    fn render_detail(&self, _event: &EventSummary) {}
    fn render_profile(&self, _profile: &ProfileSummary) {}
    fn set_field_validity(&self, _field: EventField, _valid: bool) {}
    fn set_field_value(&self, _field: EventField, _value: &str) {}
    fn show_form_error(&self, _message: &str) {}
    fn clear_form_error(&self) {}
    fn set_submit_enabled(&self, _enabled: bool) {}
    fn clear_form(&self) {}
    fn set_location_assist_visible(&self, _visible: bool) {}
    fn apply_theme(&self, _scheme: ColorScheme) {}
}
