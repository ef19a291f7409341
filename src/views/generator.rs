use crate::ai::GenifyClient;
use crate::design::DESIGN_STYLES;
use crate::state::{Action, AppState, Modal, Phase};
use crate::ui::{dispatch, start_request};
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn GeneratorForm(state: Signal<AppState>) -> Element {
    let client = use_context::<GenifyClient>();
    let current = state.read().clone();
    let busy = current.is_busy();
    let generating = current.phase == Phase::Generating;
    let can_generate = current.can_generate();

    let submit = move || start_request(state, client.clone(), Action::StartGeneration);
    let submit_on_key = submit.clone();
    let submit_on_click = submit;

    rsx! {
        div { class: "generator",
            div { class: "selectors",
                div { class: "field",
                    label { class: "field-label", "AI Model ({current.models.len()} available)" }
                    select {
                        class: "select",
                        value: "{current.selected_model}",
                        disabled: busy,
                        onchange: move |ev| dispatch(state, Action::SelectModel(ev.value())),
                        if current.models.is_empty() {
                            option { value: "", "No models available" }
                        }
                        for model in current.models.iter() {
                            option {
                                key: "{model.id}",
                                value: "{model.id}",
                                selected: model.id == current.selected_model,
                                "{model.id} ({model.owned_by})"
                            }
                        }
                    }
                }
                div { class: "field",
                    label { class: "field-label", "Design Style" }
                    div { class: "field-row",
                        select {
                            class: "select",
                            value: "{current.selected_design}",
                            disabled: busy,
                            onchange: move |ev| dispatch(state, Action::SelectDesign(ev.value())),
                            for style in DESIGN_STYLES.iter() {
                                option {
                                    key: "{style.id}",
                                    value: "{style.id}",
                                    selected: style.id == current.selected_design,
                                    "{style.name}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            title: "Browse design styles",
                            disabled: busy,
                            onclick: move |_| dispatch(state, Action::OpenModal(Modal::Design)),
                            "Styles"
                        }
                    }
                }
            }
            div { class: "field",
                label { class: "field-label", "Describe your web application" }
                textarea {
                    class: "prompt-input",
                    placeholder: "e.g., Create a todo list app with dark theme, user authentication, and the ability to add, edit, and delete tasks...",
                    value: "{current.prompt}",
                    disabled: busy,
                    oninput: move |ev| dispatch(state, Action::SetPrompt(ev.value())),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && (ev.modifiers().meta() || ev.modifiers().ctrl()) {
                            ev.prevent_default();
                            submit_on_key();
                        }
                    },
                }
            }
            button {
                class: "btn btn-primary btn-block",
                disabled: !can_generate,
                onclick: move |_| submit_on_click(),
                if generating {
                    span { class: "spinner spinner-inline" }
                    "Generating..."
                } else {
                    "Generate Application"
                }
            }
        }
    }
}
