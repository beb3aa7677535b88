//! Selection controller - the interactive question sequence.
//!
//! ```text
//!  AwaitingTemplate ──select──▶ AwaitingName ──valid name──▶ Ready
//!         │                        │    ▲
//!         │ abort                  │    │ invalid name (re-prompt)
//!         ▼                        ▼    │
//!      Cancelled ◀────abort──── AwaitingName
//! ```
//!
//! There is no way back from `AwaitingName` to `AwaitingTemplate`; the user
//! re-runs the tool to pick another template.

use std::mem;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, Prompter},
    domain::{ScaffoldRequest, TemplateDescriptor, TemplateRegistry},
    error::{ScaffoldError, ScaffoldResult},
};

/// Placeholder offered at the name prompt unless configured otherwise.
pub const DEFAULT_DESTINATION: &str = "my-workspace";

/// Re-prompt budget for the destination name unless configured otherwise.
pub const DEFAULT_MAX_NAME_ATTEMPTS: u32 = 5;

const TEMPLATE_PROMPT: &str = "Select a template";
const NAME_PROMPT: &str = "Destination directory";

/// Where the exchange currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingTemplate,
    AwaitingName {
        template: TemplateDescriptor,
        /// Invalid names rejected so far.
        attempts: u32,
    },
    Ready(ScaffoldRequest),
    Cancelled,
}

impl SelectionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Cancelled)
    }
}

/// Terminal result of [`SelectionController::collect_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Ready(ScaffoldRequest),
    Cancelled,
}

/// Drives the template and destination-name questions.
pub struct SelectionController<'a> {
    registry: &'a TemplateRegistry,
    prompter: &'a dyn Prompter,
    filesystem: &'a dyn Filesystem,
    cwd: PathBuf,
    default_name: String,
    max_name_attempts: u32,
    preset_name: Option<String>,
    state: SelectionState,
}

impl<'a> SelectionController<'a> {
    /// Start a fresh exchange in `AwaitingTemplate`.
    ///
    /// `cwd` is the directory destination names are resolved against.
    pub fn new(
        registry: &'a TemplateRegistry,
        prompter: &'a dyn Prompter,
        filesystem: &'a dyn Filesystem,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            prompter,
            filesystem,
            cwd: cwd.into(),
            default_name: DEFAULT_DESTINATION.to_owned(),
            max_name_attempts: DEFAULT_MAX_NAME_ATTEMPTS,
            preset_name: None,
            state: SelectionState::AwaitingTemplate,
        }
    }

    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Clamped to at least one attempt.
    pub fn max_name_attempts(mut self, attempts: u32) -> Self {
        self.max_name_attempts = attempts.max(1);
        self
    }

    /// Skip the template question by naming the template up front.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::TemplateNotFound`] if `id` is not registered. No
    /// prompt has been shown at that point.
    pub fn preselect_template(mut self, id: &str) -> ScaffoldResult<Self> {
        let template = self.registry.resolve(id)?.clone();
        debug!(template = %template.id(), "template preselected");
        self.state = SelectionState::AwaitingName {
            template,
            attempts: 0,
        };
        Ok(self)
    }

    /// Use `name` as the first destination-name answer.
    ///
    /// If it turns out invalid the controller falls back to prompting.
    pub fn preset_name(mut self, name: impl Into<String>) -> Self {
        self.preset_name = Some(name.into());
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Run the exchange to a terminal state.
    #[instrument(skip_all, fields(cwd = %self.cwd.display()))]
    pub fn collect_request(mut self) -> ScaffoldResult<Selection> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(match self.state {
            SelectionState::Ready(request) => Selection::Ready(request),
            _ => Selection::Cancelled,
        })
    }

    /// Perform exactly one transition. A no-op in a terminal state.
    ///
    /// On error the exchange is over and the state is left at `Cancelled`.
    pub fn step(&mut self) -> ScaffoldResult<()> {
        let current = mem::replace(&mut self.state, SelectionState::Cancelled);
        self.state = match current {
            SelectionState::AwaitingTemplate => self.ask_template()?,
            SelectionState::AwaitingName { template, attempts } => {
                self.ask_name(template, attempts)?
            }
            terminal => terminal,
        };
        debug!(state = ?self.state, "selection state");
        Ok(())
    }

    fn ask_template(&self) -> ScaffoldResult<SelectionState> {
        let templates = self.registry.list_templates();
        if templates.is_empty() {
            return Err(ScaffoldError::NoTemplates);
        }
        let labels: Vec<String> = templates
            .iter()
            .map(|t| t.display_label().to_owned())
            .collect();

        let Some(index) = self.prompter.select(TEMPLATE_PROMPT, &labels, 0)? else {
            return Ok(SelectionState::Cancelled);
        };

        let template = templates
            .get(index)
            .ok_or_else(|| ScaffoldError::TemplateNotFound {
                id: format!("#{index}"),
                available: self.registry.ids().map(str::to_owned).collect(),
            })?
            .clone();

        Ok(SelectionState::AwaitingName {
            template,
            attempts: 0,
        })
    }

    fn ask_name(
        &mut self,
        template: TemplateDescriptor,
        attempts: u32,
    ) -> ScaffoldResult<SelectionState> {
        let raw = match self.preset_name.take() {
            Some(name) => name,
            None => match self.prompter.input(NAME_PROMPT, &self.default_name)? {
                Some(answer) => answer,
                None => return Ok(SelectionState::Cancelled),
            },
        };

        match ScaffoldRequest::resolve(template.clone(), &raw, &self.cwd) {
            Ok(request) => {
                let target = request.resolved_target_path();
                if self.filesystem.exists(target) {
                    return Err(ScaffoldError::TargetExists {
                        path: target.to_path_buf(),
                    });
                }
                Ok(SelectionState::Ready(request))
            }
            Err(e) if e.is_recoverable() => {
                let attempts = attempts + 1;
                debug!(attempts, error = %e, "destination name rejected");
                if attempts >= self.max_name_attempts {
                    return Err(ScaffoldError::NameAttemptsExhausted { attempts });
                }
                self.prompter.notice(&e.to_string());
                Ok(SelectionState::AwaitingName { template, attempts })
            }
            Err(e) => Err(e),
        }
    }
}
