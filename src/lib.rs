#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod config;
pub mod error;
pub mod notify;
pub mod store;
pub mod tags;
pub mod workflow;

pub use config::Config;
pub use error::{MutationError, Result, TagsmithError, ValidationError, WorkflowError};
pub use notify::{Notification, NotificationSink, Severity};
pub use store::{ContactStore, HttpStore, TagStore};
pub use tags::{ColorIndex, ContactId, Tag, TagId};
pub use workflow::{Outcome, SubmitOutcome, TagWorkflow, WorkflowDeps};
