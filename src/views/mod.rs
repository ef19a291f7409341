pub mod generator;
pub mod modals;
pub mod output;

pub use generator::GeneratorForm;
pub use modals::{DesignModal, FilesModal, PreviewModal};
pub use output::OutputPanel;
