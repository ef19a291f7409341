use crate::design::DESIGN_STYLES;
use crate::highlight::highlight_file;
use crate::state::{Action, AppState, Modal};
use crate::ui::dispatch;
use dioxus::prelude::*;

#[component]
fn ModalFrame(state: Signal<AppState>, title: &'static str, wide: bool, children: Element) -> Element {
    let dialog_class = if wide { "modal-dialog modal-wide" } else { "modal-dialog" };
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| dispatch(state, Action::CloseModal),
            div { class: dialog_class,
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        aria_label: "Close",
                        onclick: move |_| dispatch(state, Action::CloseModal),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

#[component]
pub fn DesignModal(state: Signal<AppState>) -> Element {
    let current = state.read();
    if current.modal != Some(Modal::Design) {
        return rsx! {};
    }
    let selected = current.selected_design.clone();
    drop(current);

    rsx! {
        ModalFrame { state, title: "Choose Design Style", wide: false,
            div { class: "design-grid",
                for style in DESIGN_STYLES.iter() {
                    div {
                        key: "{style.id}",
                        class: if style.id == selected { "design-card active" } else { "design-card" },
                        onclick: move |_| dispatch(state, Action::SelectDesign(style.id.to_string())),
                        h3 { "{style.name}" }
                        p { class: "text-muted", "{style.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PreviewModal(state: Signal<AppState>) -> Element {
    let current = state.read();
    if current.modal != Some(Modal::Preview) {
        return rsx! {};
    }
    let preview = current.preview_html();
    drop(current);

    rsx! {
        ModalFrame { state, title: "Preview", wide: true,
            if let Some(html) = preview {
                iframe {
                    class: "preview-frame",
                    title: "Preview",
                    sandbox: "allow-scripts allow-forms allow-modals",
                    srcdoc: "{html}",
                }
            }
        }
    }
}

#[component]
pub fn FilesModal(state: Signal<AppState>) -> Element {
    let current = state.read();
    if current.modal != Some(Modal::Files) {
        return rsx! {};
    }
    let files = current
        .current_project
        .as_ref()
        .map(|project| project.files.clone())
        .unwrap_or_default();
    drop(current);

    rsx! {
        ModalFrame { state, title: "Project Files", wide: true,
            if files.is_empty() {
                p { class: "text-muted", "No files extracted yet." }
            }
            for (index, file) in files.into_iter().enumerate() {
                div { key: "{index}", class: "file-card",
                    div { class: "file-header",
                        h4 { "{file.name()}" }
                        CopyButton { content: file.content().to_string() }
                    }
                    div { class: "code-view file-code", dangerous_inner_html: highlight_file(&file) }
                }
            }
        }
    }
}

#[component]
fn CopyButton(content: String) -> Element {
    let mut copied = use_signal(|| false);
    rsx! {
        button {
            class: "btn btn-ghost btn-sm",
            onclick: move |_| {
                let raw = content.clone();
                spawn(async move {
                    #[cfg(any(feature = "desktop", feature = "mobile"))]
                    {
                        if let Ok(mut cb) = arboard::Clipboard::new() {
                            let _ = cb.set_text(raw);
                        }
                    }
                    #[cfg(not(any(feature = "desktop", feature = "mobile")))]
                    let _ = raw;
                    copied.set(true);
                });
            },
            if copied() { "Copied" } else { "Copy" }
        }
    }
}
