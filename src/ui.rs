use crate::ai::{ChatBackend, GenifyClient};
use crate::export::{DEFAULT_PROJECT_NAME, export_zip};
use crate::session::run_request;
use crate::state::{Action, AppState, begin, update};
use crate::views::{DesignModal, FilesModal, GeneratorForm, OutputPanel, PreviewModal};
use dioxus::prelude::*;

const GENIFY_CSS: Asset = asset!("/assets/genify.css");

/// Apply one action to the shared state.
pub fn dispatch(mut state: Signal<AppState>, action: Action) {
    state.with_mut(|current| {
        let previous = std::mem::take(current);
        *current = update(previous, action);
    });
}

/// Dispatch a start action and, if it was accepted, stream the request.
pub fn start_request(mut state: Signal<AppState>, client: GenifyClient, action: Action) {
    let started = state.with_mut(|current| {
        let (next, request) = begin(std::mem::take(current), action);
        *current = next;
        request
    });
    let Some(request) = started else {
        return;
    };
    spawn(async move {
        run_request(&client, &request, |action| dispatch(state, action)).await;
    });
}

pub fn export_project(state: Signal<AppState>, client: GenifyClient) {
    let Some(files) = state
        .peek()
        .current_project
        .as_ref()
        .map(|project| project.files.clone())
    else {
        return;
    };
    let dir = client.config().export_dir.clone();
    spawn(async move {
        match export_zip(files, &dir, DEFAULT_PROJECT_NAME).await {
            Ok(path) => dispatch(state, Action::ExportFinished(path)),
            Err(err) => {
                tracing::error!("Error creating ZIP file: {err}");
                dispatch(state, Action::ExportFailed(err.to_string()));
            }
        }
    });
}

#[component]
pub fn App() -> Element {
    let client = use_context_provider(GenifyClient::from_env);
    let state = use_signal(AppState::default);

    use_future(move || {
        let client = client.clone();
        async move {
            let models = client.list_models().await;
            dispatch(state, Action::ModelsLoaded(models));
        }
    });

    if state.read().models_loading {
        return rsx! {
            document::Link { rel: "stylesheet", href: GENIFY_CSS }
            LoadingScreen {}
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: GENIFY_CSS }
        div { class: "page",
            div { class: "container",
                AppHeader {}
                StatusBanner { state }
                GeneratorForm { state }
                OutputPanel { state }
                DesignModal { state }
                PreviewModal { state }
                FilesModal { state }
            }
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "title", "Genify" }
            p { class: "subtitle", "AI-powered web application generator" }
        }
    }
}

#[component]
fn StatusBanner(state: Signal<AppState>) -> Element {
    let error = state.read().error.clone();
    let notice = state.read().notice.clone();

    rsx! {
        if let Some(message) = error {
            div { class: "banner banner-error", role: "alert", "{message}" }
        }
        if let Some(message) = notice {
            div { class: "banner banner-notice",
                span { "{message}" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| dispatch(state, Action::DismissNotice),
                    "Dismiss"
                }
            }
        }
    }
}

#[component]
fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            h2 { "Loading Genify" }
            p { class: "text-muted", "Initializing AI models..." }
        }
    }
}
