use crate::ai::GenifyClient;
use crate::export::DEPLOY_URL;
use crate::highlight::highlight_response;
use crate::state::{Action, AppState, Modal, Phase};
use crate::ui::{dispatch, export_project, start_request};
use dioxus::prelude::*;

#[component]
pub fn OutputPanel(state: Signal<AppState>) -> Element {
    let client = use_context::<GenifyClient>();
    let current = state.read();
    if current.generated_code.is_empty() {
        return rsx! {};
    }

    let has_project = current.current_project.is_some();
    let show_follow_up = has_project && current.phase != Phase::Generating;
    // Highlighting runs once the stream settles; while text is still arriving
    // it is shown raw.
    let streaming = current.is_busy();
    let response_html = if streaming {
        String::new()
    } else {
        highlight_response(&current.generated_code)
    };
    let raw = if streaming {
        current.generated_code.clone()
    } else {
        String::new()
    };
    drop(current);

    rsx! {
        div { class: "output",
            div { class: "panel",
                div { class: "panel-header",
                    h3 { class: "panel-title", "Generated Code" }
                    div { class: "panel-actions",
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: move |_| dispatch(state, Action::OpenModal(Modal::Files)),
                            "View Files"
                        }
                        if has_project {
                            button {
                                class: "btn btn-outline btn-sm",
                                onclick: move |_| dispatch(state, Action::OpenModal(Modal::Preview)),
                                "Preview"
                            }
                            button {
                                class: "btn btn-outline btn-sm",
                                onclick: move |_| export_project(state, client.clone()),
                                "Export ZIP"
                            }
                            a {
                                class: "btn btn-primary btn-sm",
                                href: DEPLOY_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Deploy"
                            }
                        }
                    }
                }
                div { class: "panel-body code-scroll",
                    if streaming {
                        pre { class: "code-stream", "{raw}" }
                    } else {
                        div { class: "code-view", dangerous_inner_html: "{response_html}" }
                    }
                }
            }
            if show_follow_up {
                FollowUpComposer { state }
            }
        }
    }
}

#[component]
fn FollowUpComposer(state: Signal<AppState>) -> Element {
    let client = use_context::<GenifyClient>();
    let current = state.read();
    let applying = current.phase == Phase::FollowingUp;
    let value = current.follow_up_prompt.clone();
    let can_follow_up = current.can_follow_up();
    drop(current);

    rsx! {
        div { class: "panel follow-up",
            h4 { class: "panel-title", "Make Changes" }
            textarea {
                class: "prompt-input prompt-input-small",
                placeholder: "e.g., Add a search feature, change the color scheme to blue, make the buttons larger...",
                value: "{value}",
                disabled: applying,
                oninput: move |ev| dispatch(state, Action::SetFollowUpPrompt(ev.value())),
            }
            button {
                class: "btn btn-primary btn-block",
                disabled: !can_follow_up,
                onclick: move |_| start_request(state, client.clone(), Action::StartFollowUp),
                if applying {
                    span { class: "spinner spinner-inline" }
                    "Applying Changes..."
                } else {
                    "Apply Changes"
                }
            }
        }
    }
}
