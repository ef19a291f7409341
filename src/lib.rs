pub mod ai;
pub mod config;
pub mod design;
pub mod export;
pub mod extract;
pub mod highlight;
pub mod preview;
pub mod project;
pub mod prompt;
pub mod session;
pub mod state;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
