//! Integration tests for request streaming
//!
//! Drives `run_request` against scripted backends and folds the dispatched
//! actions through `update`, the same way the UI does.

use async_trait::async_trait;
use futures::StreamExt;
use genify::ai::{ChatBackend, ClientError, ClientResult, FragmentStream};
use genify::prompt::MODIFICATIONS_SEPARATOR;
use genify::session::run_request;
use genify::state::{
    Action, AppState, FOLLOW_UP_FAILED, GENERATION_FAILED, Phase, begin, update,
};
use genify::types::{ChatMessage, Model};
use reqwest::StatusCode;
use std::sync::Mutex;

enum Script {
    Fragments(Vec<&'static str>),
    FailAfter(Vec<&'static str>),
    Reject,
}

struct ScriptedBackend {
    script: Script,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBackend {
    fn new(script: Script) -> Self {
        Self {
            script,
            seen: Mutex::new(Vec::new()),
        }
    }
}

fn status_error() -> ClientError {
    ClientError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "upstream unavailable".to_string(),
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn list_models(&self) -> Vec<Model> {
        vec![Model {
            id: "longcat-chat".to_string(),
            object: "model".to_string(),
            created: 0,
            owned_by: "longcat".to_string(),
        }]
    }

    async fn stream_completion(
        &self,
        _model: &str,
        messages: &[ChatMessage],
    ) -> ClientResult<FragmentStream> {
        self.seen.lock().unwrap().push(messages.to_vec());
        let items: Vec<ClientResult<String>> = match &self.script {
            Script::Fragments(pieces) => pieces.iter().map(|p| Ok(p.to_string())).collect(),
            Script::FailAfter(pieces) => pieces
                .iter()
                .map(|p| Ok(p.to_string()))
                .chain(std::iter::once(Err(status_error())))
                .collect(),
            Script::Reject => return Err(status_error()),
        };
        Ok(futures::stream::iter(items).boxed())
    }
}

async fn ready_state(backend: &ScriptedBackend, prompt: &str) -> AppState {
    let models = backend.list_models().await;
    let state = update(AppState::default(), Action::ModelsLoaded(models));
    update(state, Action::SetPrompt(prompt.to_string()))
}

async fn drive(backend: &ScriptedBackend, state: AppState) -> (AppState, Vec<Action>) {
    let request = state.request.clone().expect("request should be pending");
    let mut actions = Vec::new();
    run_request(backend, &request, |action| actions.push(action)).await;
    let state = actions
        .iter()
        .cloned()
        .fold(state, |state, action| update(state, action));
    (state, actions)
}

mod generation_tests {
    use super::*;

    #[tokio::test]
    async fn test_fragments_accumulate_in_order() {
        let backend = ScriptedBackend::new(Script::Fragments(vec!["Hel", "lo"]));
        let state = ready_state(&backend, "hello page").await;
        let state = update(state, Action::StartGeneration);
        assert_eq!(state.phase, Phase::Generating);

        let (state, actions) = drive(&backend, state).await;

        assert!(matches!(actions.last(), Some(Action::StreamFinished)));
        assert_eq!(state.generated_code, "Hello");
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.current_project.is_none());
    }

    #[tokio::test]
    async fn test_generation_builds_project() {
        let backend = ScriptedBackend::new(Script::Fragments(vec![
            "Here you go:\n```html\n<html><head></head>",
            "<body>hi</body></html>\n```\n",
            "```css\n// styles.css\nbody { color: red; }\n```",
        ]));
        let state = ready_state(&backend, "a red page").await;
        let state = update(state, Action::StartGeneration);

        let (state, _) = drive(&backend, state).await;

        let project = state.current_project.expect("project should exist");
        let names: Vec<&str> = project.files.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["index.html", "styles.css"]);
        assert_eq!(project.original_prompt, "a red page");
        assert_eq!(project.selected_model, "longcat-chat");
        assert_eq!(project.selected_design, "minimalistic");

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][1].content, "a red page");
    }

    #[tokio::test]
    async fn test_repeated_start_streams_once() {
        let backend = ScriptedBackend::new(Script::Fragments(vec!["He", "llo"]));
        let state = ready_state(&backend, "hello page").await;

        let (state, first) = begin(state, Action::StartGeneration);
        let (mut state, second) = begin(state, Action::StartGeneration);
        assert!(second.is_none());

        for request in [first, second].into_iter().flatten() {
            let mut actions = Vec::new();
            run_request(&backend, &request, |action| actions.push(action)).await;
            for action in actions {
                state = update(state, action);
            }
        }

        assert_eq!(backend.seen.lock().unwrap().len(), 1);
        assert_eq!(state.generated_code, "Hello");
    }

    #[tokio::test]
    async fn test_rejected_request_reports_failure() {
        let backend = ScriptedBackend::new(Script::Reject);
        let state = ready_state(&backend, "anything").await;
        let state = update(state, Action::StartGeneration);

        let (state, actions) = drive(&backend, state).await;

        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::StreamFailed(_)));
        assert_eq!(state.error.as_deref(), Some(GENERATION_FAILED));
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.generated_code.is_empty());
    }

    #[tokio::test]
    async fn test_mid_stream_failure_keeps_partial_text() {
        let backend = ScriptedBackend::new(Script::FailAfter(vec!["```html\n<p>par", "tial"]));
        let state = ready_state(&backend, "anything").await;
        let state = update(state, Action::StartGeneration);

        let (state, actions) = drive(&backend, state).await;

        let failures = actions
            .iter()
            .filter(|a| matches!(a, Action::StreamFailed(_)))
            .count();
        assert_eq!(failures, 1);
        assert!(!actions.iter().any(|a| matches!(a, Action::StreamFinished)));
        assert_eq!(state.generated_code, "```html\n<p>partial");
        assert!(state.current_project.is_none());
        assert_eq!(state.error.as_deref(), Some(GENERATION_FAILED));
    }
}

mod follow_up_tests {
    use super::*;

    async fn with_project() -> AppState {
        let backend = ScriptedBackend::new(Script::Fragments(vec![
            "```html\n<html><body>v1</body></html>\n```\n",
            "```javascript\nconsole.log(1);\n```",
        ]));
        let state = ready_state(&backend, "start").await;
        let state = update(state, Action::StartGeneration);
        drive(&backend, state).await.0
    }

    #[tokio::test]
    async fn test_follow_up_merges_files() {
        let state = with_project().await;
        let original = state.generated_code.clone();

        let backend = ScriptedBackend::new(Script::Fragments(vec![
            "```html\n<html><body>v2</body></html>\n```\n",
            "```css\nbody { margin: 0; }\n```",
        ]));
        let state = update(state, Action::SetFollowUpPrompt("make it v2".to_string()));
        let state = update(state, Action::StartFollowUp);
        assert_eq!(state.phase, Phase::FollowingUp);

        let (state, _) = drive(&backend, state).await;

        assert!(state.generated_code.starts_with(&original));
        assert!(state.generated_code.contains(MODIFICATIONS_SEPARATOR));
        assert!(state.follow_up_prompt.is_empty());

        let project = state.current_project.expect("project should survive");
        let names: Vec<&str> = project.files.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["index.html", "script.js", "styles.css"]);
        assert!(project.files[0].content().contains("v2"));

        let seen = backend.seen.lock().unwrap();
        assert!(seen[0][0].content.contains(&original));
        assert_eq!(seen[0][1].content, "make it v2");
    }

    #[tokio::test]
    async fn test_failed_follow_up_leaves_project() {
        let state = with_project().await;
        let before = state.current_project.clone();

        let backend = ScriptedBackend::new(Script::Reject);
        let state = update(state, Action::SetFollowUpPrompt("break it".to_string()));
        let state = update(state, Action::StartFollowUp);
        let (state, _) = drive(&backend, state).await;

        assert_eq!(state.current_project, before);
        assert_eq!(state.error.as_deref(), Some(FOLLOW_UP_FAILED));
        assert_eq!(state.phase, Phase::Idle);
    }
}
