//! Application state and the single function allowed to change it.
//!
//! Views read an `AppState` and send `Action`s; `update` returns the next
//! state. Network work happens outside (see `session`) and reports back
//! through actions as well.

use crate::design::DEFAULT_DESIGN_ID;
use crate::extract::extract_files;
use crate::preview::assemble_preview;
use crate::project::GeneratedProject;
use crate::prompt::{MODIFICATIONS_SEPARATOR, follow_up_messages, generation_messages};
use crate::types::{ChatMessage, Model};
use std::path::PathBuf;

pub const GENERATION_FAILED: &str = "Error generating code. Please try again.";
pub const FOLLOW_UP_FAILED: &str = "Error applying modifications. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    FollowingUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    Design,
    Preview,
    Files,
}

/// Everything one streamed request needs, captured when it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub prompt: String,
    pub design: String,
    /// Display text the follow-up output is appended to.
    pub base: String,
    pub response: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub models: Vec<Model>,
    pub models_loading: bool,
    pub selected_model: String,
    pub selected_design: String,
    pub prompt: String,
    pub follow_up_prompt: String,
    pub phase: Phase,
    pub generated_code: String,
    pub current_project: Option<GeneratedProject>,
    pub request: Option<PendingRequest>,
    pub modal: Option<Modal>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            models_loading: true,
            selected_model: String::new(),
            selected_design: DEFAULT_DESIGN_ID.to_string(),
            prompt: String::new(),
            follow_up_prompt: String::new(),
            phase: Phase::Idle,
            generated_code: String::new(),
            current_project: None,
            request: None,
            modal: None,
            error: None,
            notice: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ModelsLoaded(Vec<Model>),
    SelectModel(String),
    SelectDesign(String),
    SetPrompt(String),
    SetFollowUpPrompt(String),
    StartGeneration,
    StartFollowUp,
    Fragment(String),
    StreamFinished,
    StreamFailed(String),
    OpenModal(Modal),
    CloseModal,
    ExportFinished(PathBuf),
    ExportFailed(String),
    DismissNotice,
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn can_generate(&self) -> bool {
        !self.is_busy() && !self.prompt.trim().is_empty() && !self.selected_model.is_empty()
    }

    pub fn can_follow_up(&self) -> bool {
        !self.is_busy()
            && self.current_project.is_some()
            && !self.follow_up_prompt.trim().is_empty()
            && !self.selected_model.is_empty()
    }

    /// The assembled preview document, when there is a project to show.
    pub fn preview_html(&self) -> Option<String> {
        self.current_project
            .as_ref()
            .map(|project| assemble_preview(&project.files))
    }
}

/// Compute the next state.
pub fn update(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::ModelsLoaded(models) => {
            if state.selected_model.is_empty()
                && let Some(first) = models.first()
            {
                state.selected_model = first.id.clone();
            }
            state.models = models;
            state.models_loading = false;
        }
        Action::SelectModel(id) if !state.is_busy() => state.selected_model = id,
        Action::SelectDesign(id) if !state.is_busy() => {
            state.selected_design = id;
            if state.modal == Some(Modal::Design) {
                state.modal = None;
            }
        }
        Action::SetPrompt(text) if !state.is_busy() => state.prompt = text,
        Action::SetFollowUpPrompt(text) if !state.is_busy() => state.follow_up_prompt = text,
        Action::StartGeneration if state.can_generate() => {
            state.request = Some(PendingRequest {
                model: state.selected_model.clone(),
                messages: generation_messages(&state.prompt, &state.selected_design),
                prompt: state.prompt.clone(),
                design: state.selected_design.clone(),
                base: String::new(),
                response: String::new(),
            });
            state.phase = Phase::Generating;
            state.generated_code.clear();
            state.current_project = None;
            state.error = None;
            state.notice = None;
        }
        Action::StartFollowUp if state.can_follow_up() => {
            state.request = Some(PendingRequest {
                model: state.selected_model.clone(),
                messages: follow_up_messages(
                    &state.generated_code,
                    &state.follow_up_prompt,
                    &state.selected_design,
                ),
                prompt: state.follow_up_prompt.clone(),
                design: state.selected_design.clone(),
                base: state.generated_code.clone(),
                response: String::new(),
            });
            state.phase = Phase::FollowingUp;
            state.error = None;
            state.notice = None;
        }
        Action::Fragment(piece) => {
            let phase = state.phase;
            if let Some(request) = state.request.as_mut() {
                request.response.push_str(&piece);
                state.generated_code = match phase {
                    Phase::FollowingUp => {
                        format!("{}{MODIFICATIONS_SEPARATOR}{}", request.base, request.response)
                    }
                    _ => request.response.clone(),
                };
            }
        }
        Action::StreamFinished => {
            if let Some(request) = state.request.take() {
                let files = extract_files(&request.response);
                match state.phase {
                    Phase::Generating if !files.is_empty() => {
                        state.current_project = Some(GeneratedProject::new(
                            files,
                            request.prompt,
                            request.model,
                            request.design,
                        ));
                    }
                    Phase::FollowingUp if !files.is_empty() => {
                        if let Some(project) = state.current_project.as_mut() {
                            project.merge(files);
                        }
                    }
                    _ => {}
                }
                if state.phase == Phase::FollowingUp {
                    state.follow_up_prompt.clear();
                }
                state.phase = Phase::Idle;
            }
        }
        Action::StreamFailed(message) => {
            if state.request.take().is_some() {
                tracing::error!("stream failed: {message}");
                let summary = match state.phase {
                    Phase::FollowingUp => {
                        state.follow_up_prompt.clear();
                        FOLLOW_UP_FAILED
                    }
                    _ => GENERATION_FAILED,
                };
                state.error = Some(summary.to_string());
                state.phase = Phase::Idle;
            }
        }
        Action::OpenModal(modal) => state.modal = Some(modal),
        Action::CloseModal => state.modal = None,
        Action::ExportFinished(path) => {
            state.notice = Some(format!("Saved {}", path.display()));
        }
        Action::ExportFailed(message) => state.error = Some(message),
        Action::DismissNotice => state.notice = None,
        // Edits and starts that are not allowed right now.
        _ => {}
    }
    state
}

/// Apply a start action and hand back the request to stream.
///
/// The request is returned only when this action opened it; a start that
/// arrives while another request is in flight yields `None`.
pub fn begin(state: AppState, action: Action) -> (AppState, Option<PendingRequest>) {
    let accepted = match action {
        Action::StartGeneration => state.can_generate(),
        Action::StartFollowUp => state.can_follow_up(),
        _ => false,
    };
    let state = update(state, action);
    let request = if accepted { state.request.clone() } else { None };
    (state, request)
}
