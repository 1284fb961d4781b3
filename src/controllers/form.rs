//! Event creation form controller
//!
//! A multi-field validation and asynchronous-submission state machine.
//! Field values survive every failure path; only a successful submission
//! clears the draft. At most one submission is in flight per controller
//! instance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};

use crate::bridge::{HostBridge, PopupConfig};
use crate::config::Settings;
use crate::controllers::location::LocationAssist;
use crate::controllers::navigation::NavigationController;
use crate::i18n::I18n;
use crate::models::event::{EventDraft, EventField, FieldValidity};
use crate::store::EventStore;
use crate::surface::RenderSurface;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Durable states of the form machine.
///
/// Validation passes are instantaneous within a call and are not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Event created; the draft is cleared and the list view restored
    Created,
    /// Validation failed; invalid fields are marked on the surface
    Invalid,
    /// The store rejected the creation; the draft is preserved
    Rejected,
    /// A submission is already in flight; the call was ignored
    InFlight,
}

impl SubmitOutcome {
    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SubmitOutcome::Created => "created",
            SubmitOutcome::Invalid => "invalid",
            SubmitOutcome::Rejected => "rejected",
            SubmitOutcome::InFlight => "in_flight",
        }
    }
}

/// Outcome of a whole-form validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub validity: FieldValidity,
    /// The combined date+time instant is not in the future. This is a
    /// whole-form error marking both schedule fields.
    pub schedule_in_past: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.validity.all_valid() && !self.schedule_in_past
    }
}

struct FormInner {
    draft: EventDraft,
    validity: FieldValidity,
    state: FormState,
}

/// Event creation form controller
pub struct EventFormController {
    bridge: Arc<dyn HostBridge>,
    surface: Arc<dyn RenderSurface>,
    store: Arc<dyn EventStore>,
    i18n: Arc<I18n>,
    location_assist: LocationAssist,
    language: String,
    inner: Mutex<FormInner>,
}

impl EventFormController {
    pub fn new(
        bridge: Arc<dyn HostBridge>,
        surface: Arc<dyn RenderSurface>,
        store: Arc<dyn EventStore>,
        i18n: Arc<I18n>,
        settings: &Settings,
        language: String,
    ) -> Self {
        Self {
            location_assist: LocationAssist::new(bridge.clone(), settings),
            bridge,
            surface,
            store,
            i18n,
            language,
            inner: Mutex::new(FormInner {
                draft: EventDraft::default(),
                validity: FieldValidity::default(),
                state: FormState::Idle,
            }),
        }
    }

    /// Open a fresh draft when the create view opens.
    ///
    /// Seeds the schedule fields with the next hour and shows or hides
    /// the location assist from the capability probe.
    pub fn begin(&self) {
        {
            let mut inner = self.locked();
            if inner.state == FormState::Submitting {
                warn!("Create view opened while a submission is in flight, keeping state");
                return;
            }
            inner.draft = EventDraft::default();
            inner.validity.clear();
        }

        self.surface.clear_form();
        self.surface.clear_form_error();
        self.surface.set_submit_enabled(true);
        self.prefill_schedule();
        self.surface
            .set_location_assist_visible(self.location_assist.is_available());
        debug!("Event form opened with a fresh draft");
    }

    /// Discard the draft on explicit cancellation
    pub fn reset(&self) {
        {
            let mut inner = self.locked();
            inner.draft = EventDraft::default();
            inner.validity.clear();
        }
        self.surface.clear_form();
        self.surface.clear_form_error();
    }

    /// Current machine state
    pub fn state(&self) -> FormState {
        self.locked().state
    }

    /// Snapshot of the draft as currently typed
    pub fn draft(&self) -> EventDraft {
        self.locked().draft.clone()
    }

    /// Snapshot of the recorded field validity
    pub fn validity(&self) -> FieldValidity {
        self.locked().validity.clone()
    }

    /// Whether the location assist affordance should be visible
    pub fn location_assist_available(&self) -> bool {
        self.location_assist.is_available()
    }

    /// Record a field edit
    pub fn set_field(&self, field: EventField, value: &str) {
        self.locked().draft.set(field, value);
    }

    /// Record the private-event flag
    pub fn set_private(&self, is_private: bool) {
        self.locked().draft.is_private = is_private;
    }

    /// Validate a single field, as on loss of focus.
    ///
    /// Toggles the invalid marking on the surface and returns the result.
    pub fn validate_field(&self, field: EventField) -> bool {
        let valid = {
            let mut inner = self.locked();
            let valid = field_constraint_holds(&inner.draft, field);
            inner.validity.mark(field, valid);
            valid
        };

        self.surface.set_field_validity(field, valid);
        if !valid {
            debug!(field = field.name(), "Field failed validation");
        }
        valid
    }

    /// Run every field check plus the whole-form schedule check.
    ///
    /// The schedule check fires even when both schedule fields are
    /// individually well-formed; a violation marks both date and time
    /// and is reported as one combined error. Marks go to the surface;
    /// no host or store calls are made.
    pub fn validate_all(&self) -> ValidationReport {
        let report = {
            let mut inner = self.locked();
            let report = compute_report(&inner.draft);
            inner.validity = report.validity.clone();
            report
        };

        self.apply_report(&report);
        report
    }

    /// Submit the current draft.
    ///
    /// A call made while a submission is pending is ignored. Validation
    /// failure leaves the machine in `Idle` with the typed values and
    /// surface marks intact. Store rejection also preserves the values,
    /// so the user can resubmit without re-entry.
    pub async fn submit(&self, navigation: &NavigationController) -> Result<SubmitOutcome> {
        let identity = self.bridge.identity();

        let prepared = {
            let mut inner = self.locked();
            if inner.state == FormState::Submitting {
                debug!("Submission already in flight, ignoring");
                return Ok(SubmitOutcome::InFlight);
            }

            let report = compute_report(&inner.draft);
            inner.validity = report.validity.clone();

            if report.is_valid() {
                let request = inner.draft.finalize(identity.as_ref())?;
                inner.state = FormState::Submitting;
                (report, Some(request))
            } else {
                (report, None)
            }
        };

        let (report, request) = prepared;
        self.apply_report(&report);

        let request = match request {
            Some(request) => request,
            None => {
                warn!(
                    invalid = ?report.validity.invalid_fields(),
                    schedule_in_past = report.schedule_in_past,
                    "Submission blocked by validation"
                );
                logging::log_submission(SubmitOutcome::Invalid.name(), None);
                return Ok(SubmitOutcome::Invalid);
            }
        };

        self.surface.set_submit_enabled(false);
        info!(title = %request.title, "Submitting event creation");
        let title = request.title.clone();

        let created = self.store.create_event(request).await;
        self.surface.set_submit_enabled(true);

        match created {
            Ok(()) => {
                {
                    let mut inner = self.locked();
                    inner.draft = EventDraft::default();
                    inner.validity.clear();
                    inner.state = FormState::Idle;
                }
                self.surface.clear_form();
                logging::log_submission(SubmitOutcome::Created.name(), Some(&title));

                self.notify("popup.create_success").await;
                navigation.return_to_list().await?;
                Ok(SubmitOutcome::Created)
            }
            Err(e) => {
                self.locked().state = FormState::Idle;
                warn!(error = %e, "Event creation failed, draft preserved");
                logging::log_submission(SubmitOutcome::Rejected.name(), Some(&title));

                self.notify("popup.create_failed").await;
                Ok(SubmitOutcome::Rejected)
            }
        }
    }

    /// Offer the location assist and write the result into the location
    /// field. Returns whether the field was written; failures leave the
    /// field unchanged and surface a recoverable popup.
    pub async fn assist_location(&self) -> Result<bool> {
        let choice = match self
            .location_assist
            .prompt_choice(&self.i18n, &self.language)
            .await
        {
            Some(choice) => choice,
            None => return Ok(false),
        };

        let scan_prompt = self.i18n.t("scan.location_prompt", &self.language, None);
        match self.location_assist.resolve(choice, &scan_prompt).await {
            Ok(text) => {
                self.locked().draft.location = text.clone();
                self.surface.set_field_value(EventField::Location, &text);
                self.validate_field(EventField::Location);
                info!(choice = ?choice, "Location field filled from assist");

                self.notify("popup.location_done").await;
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, choice = ?choice, "Location assist failed");
                self.notify("popup.location_failed").await;
                Ok(false)
            }
        }
    }

    fn prefill_schedule(&self) {
        let start = Utc::now() + chrono::Duration::hours(1);
        let date = start.format("%Y-%m-%d").to_string();
        let time = start.format("%H:%M").to_string();

        {
            let mut inner = self.locked();
            inner.draft.date = date.clone();
            inner.draft.time = time.clone();
        }
        self.surface.set_field_value(EventField::Date, &date);
        self.surface.set_field_value(EventField::Time, &time);
    }

    fn apply_report(&self, report: &ValidationReport) {
        for field in EventField::all() {
            self.surface
                .set_field_validity(field, report.validity.is_valid(field));
        }

        if report.schedule_in_past {
            self.surface
                .show_form_error(&self.i18n.t("form.future_date", &self.language, None));
        } else {
            self.surface.clear_form_error();
        }
    }

    async fn notify(&self, key: &str) {
        let config = PopupConfig::alert(
            self.i18n
                .t(&format!("{}.title", key), &self.language, None),
            self.i18n
                .t(&format!("{}.message", key), &self.language, None),
        );

        if let Err(e) = self.bridge.show_popup(config).await {
            debug!(error = %e, key = key, "Popup not shown");
        }
    }

    fn locked(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The field's own constraint, independent of the rest of the form
fn field_constraint_holds(draft: &EventDraft, field: EventField) -> bool {
    match field {
        EventField::Title => !draft.title.trim().is_empty(),
        EventField::Description => true,
        EventField::Date => match NaiveDate::parse_from_str(draft.date.trim(), "%Y-%m-%d") {
            Ok(date) => date >= Utc::now().date_naive(),
            Err(_) => false,
        },
        EventField::Time => NaiveTime::parse_from_str(draft.time.trim(), "%H:%M").is_ok(),
        EventField::Location => !draft.location.trim().is_empty(),
        EventField::MaxAttendees => draft.capacity().is_ok(),
    }
}

fn compute_report(draft: &EventDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in EventField::all() {
        report
            .validity
            .mark(field, field_constraint_holds(draft, field));
    }

    // The combined check only makes sense once both schedule fields
    // parse on their own.
    if report.validity.is_valid(EventField::Date) && report.validity.is_valid(EventField::Time) {
        match draft.starts_at() {
            Some(instant) if instant > Utc::now() => {}
            _ => {
                report.schedule_in_past = true;
                report.validity.mark(EventField::Date, false);
                report.validity.mark(EventField::Time, false);
            }
        }
    }

    report
}
