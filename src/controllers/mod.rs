//! Interaction controllers
//!
//! The two state machines at the heart of the mini app: view navigation
//! and the event-creation form, plus the form's location assist. The
//! controllers are decoupled from how user actions are delivered, so the
//! machines are testable without a rendering surface.

pub mod form;
pub mod location;
pub mod navigation;

pub use form::{EventFormController, FormState, SubmitOutcome, ValidationReport};
pub use location::{LocationAssist, LocationChoice};
pub use navigation::{NavigationController, View};
