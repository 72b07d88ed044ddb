pub mod apply;
pub mod mutation;
pub mod outcome;


pub use apply::ApplicationController;
pub use mutation::TagMutationController;
pub use outcome::{Outcome, OutcomeNotifier};

use std::sync::Arc;

use strum::Display;
use uuid::Uuid;

use crate::error::{Result, ValidationError, WorkflowError};
use crate::notify::NotificationSink;
use crate::store::{ContactStore, TagStore};
use crate::tags::validate::{self, NameCheck};
use crate::tags::{ColorIndex, ContactId, DEFAULT_COLOR, Tag, TagId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Create,
    Edit,
}

/// Session lifecycle. `Closed` is terminal: a new session requires a new
/// `TagWorkflow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SessionState {
    Editing,
    Submitting,
    Succeeded,
    Failed,
    Closed,
}

/// What a `submit()` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session settled; exactly one notification was emitted.
    Settled(Outcome),
    /// The session was not in `Editing`; nothing happened.
    Ignored,
}

/// One tag-creation/edit session, from open to `Closed`.
///
/// Holds the transient editable state (name, color), gates submission on
/// validation, dispatches the remote mutations, and reports the terminal
/// outcome through the injected notification sink. The editing surface is
/// dismissed unconditionally on settlement — failure is communicated via
/// notification, not by keeping the surface open.
pub struct TagWorkflow {
    session_id: Uuid,
    mode: Mode,
    state: SessionState,
    name: String,
    color: ColorIndex,
    target_tag: Option<Tag>,
    target_contact: Option<ContactId>,
    mutations: TagMutationController,
    application: ApplicationController,
    notifier: OutcomeNotifier,
}

/// The external collaborators a session needs. Bundled so the two
/// constructors stay readable.
pub struct WorkflowDeps {
    pub tags: Arc<dyn TagStore>,
    pub contacts: Arc<dyn ContactStore>,
    pub sink: Arc<dyn NotificationSink>,
}

impl TagWorkflow {
    /// Open a create session, optionally targeting a contact the new tag
    /// should be attached to.
    pub fn create(target_contact: Option<ContactId>, deps: WorkflowDeps) -> Self {
        Self::new(Mode::Create, String::new(), DEFAULT_COLOR, None, target_contact, deps)
    }

    /// Open an edit session prefilled from the tag being edited. The tag
    /// must already exist on the server.
    pub fn edit(tag: Tag, deps: WorkflowDeps) -> Result<Self> {
        if tag.id.is_none() {
            return Err(WorkflowError::MissingTagId.into());
        }
        let name = tag.name.clone();
        let color = tag.color;
        Ok(Self::new(Mode::Edit, name, color, Some(tag), None, deps))
    }

    fn new(
        mode: Mode,
        name: String,
        color: ColorIndex,
        target_tag: Option<Tag>,
        target_contact: Option<ContactId>,
        deps: WorkflowDeps,
    ) -> Self {
        let session_id = Uuid::new_v4();
        tracing::debug!(session_id = %session_id, mode = %mode, "tag session opened");
        Self {
            session_id,
            mode,
            state: SessionState::Editing,
            name,
            color,
            target_tag,
            target_contact,
            mutations: TagMutationController::new(deps.tags),
            application: ApplicationController::new(deps.contacts),
            notifier: OutcomeNotifier::new(deps.sink),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> ColorIndex {
        self.color
    }

    /// Localized dialog title for this session.
    pub fn title(&self) -> String {
        match (self.mode, &self.target_tag) {
            (Mode::Edit, Some(tag)) => {
                t!("label.edit_tag_name", name = tag.name).into_owned()
            }
            _ => t!("label.create_tag").into_owned(),
        }
    }

    /// Name/color edits are only accepted while `Editing`.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.state == SessionState::Editing {
            self.name = name.into();
        }
    }

    pub fn set_color(&mut self, color: ColorIndex) {
        if self.state == SessionState::Editing {
            self.color = color;
        }
    }

    /// Validation flags for the current name; the presentation layer shows
    /// both warnings independently.
    pub fn name_check(&self) -> NameCheck {
        validate::validate(&self.name)
    }

    /// Localized inline warning texts for the current name, one per failing
    /// check. Empty when the name passes both.
    pub fn warnings(&self) -> Vec<String> {
        let check = self.name_check();
        let mut warnings = Vec::new();
        if check.too_long {
            warnings.push(t!("label.tag_max_length").into_owned());
        }
        if check.has_invalid_chars {
            warnings.push(t!("label.no_special_char_allowed").into_owned());
        }
        warnings
    }

    /// Localized confirm-button label for this session.
    pub fn confirm_label(&self) -> String {
        match self.mode {
            Mode::Create => t!("label.create").into_owned(),
            Mode::Edit => t!("label.edit").into_owned(),
        }
    }

    /// Whether submit is currently enabled: in `Editing` with a non-empty
    /// name passing both validation checks.
    pub fn can_submit(&self) -> bool {
        self.state == SessionState::Editing && validate::is_submittable(&self.name)
    }

    /// Submit the session: dispatch the mutations, emit exactly one outcome
    /// notification, and close.
    ///
    /// Only reachable from `Editing`; any later call is a no-op
    /// (`SubmitOutcome::Ignored`). A name failing validation refuses with a
    /// `ValidationError`, stays in `Editing`, and issues no mutation and no
    /// notification.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.state != SessionState::Editing {
            tracing::debug!(session_id = %self.session_id, state = %self.state, "submit ignored");
            return Ok(SubmitOutcome::Ignored);
        }
        self.check_submittable()?;

        self.state = SessionState::Submitting;
        let outcome = match self.mode {
            Mode::Create => self.run_create().await,
            Mode::Edit => self.run_update().await?,
        };

        self.state = match outcome.severity() {
            crate::notify::Severity::Info => SessionState::Succeeded,
            crate::notify::Severity::Error => SessionState::Failed,
        };
        self.notifier.notify(&outcome);
        self.state = SessionState::Closed;
        tracing::info!(session_id = %self.session_id, outcome = ?outcome, "tag session settled");
        Ok(SubmitOutcome::Settled(outcome))
    }

    /// Abandon the session from `Editing`: no mutation, no notification.
    /// Ignored in any other state.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Editing {
            tracing::debug!(session_id = %self.session_id, "tag session cancelled");
            self.state = SessionState::Closed;
        }
    }

    fn check_submittable(&self) -> std::result::Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let check = self.name_check();
        if check.too_long {
            return Err(ValidationError::NameTooLong);
        }
        if check.has_invalid_chars {
            return Err(ValidationError::ReservedCharacters);
        }
        Ok(())
    }

    async fn run_create(&self) -> Outcome {
        let created = match self.mutations.create_tag(&self.name, self.color).await {
            Ok(tag) => tag,
            Err(_) => return Outcome::CreateFailed,
        };

        let Some(contact_id) = &self.target_contact else {
            return Outcome::Created { name: created.name };
        };

        // Association is by the name the server reported, not the typed one.
        match self
            .application
            .apply_to_contact(contact_id, &created.name)
            .await
        {
            Ok(()) => Outcome::CreatedAndApplied { name: created.name },
            Err(_) => Outcome::ApplyFailed,
        }
    }

    async fn run_update(&self) -> Result<Outcome> {
        let id: &TagId = self
            .target_tag
            .as_ref()
            .and_then(|tag| tag.id.as_ref())
            .ok_or(WorkflowError::MissingTagId)?;

        Ok(
            match self.mutations.update_tag(id, &self.name, self.color).await {
                Ok(()) => Outcome::Updated,
                Err(_) => Outcome::UpdateFailed,
            },
        )
    }
}
