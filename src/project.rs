use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Html,
    Css,
    Js,
    Json,
    Md,
    Other,
}

impl FileType {
    /// Derive the type from the text after the last `.` of a file name.
    /// A name without a dot is treated as if it were all extension.
    pub fn from_name(name: &str) -> Self {
        let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
        match extension.as_str() {
            "html" => FileType::Html,
            "css" => FileType::Css,
            "js" | "jsx" | "ts" | "tsx" => FileType::Js,
            "json" => FileType::Json,
            "md" => FileType::Md,
            _ => FileType::Other,
        }
    }

    /// Language tag used when highlighting a file of this type.
    pub fn language(self) -> &'static str {
        match self {
            FileType::Html => "html",
            FileType::Css => "css",
            FileType::Js => "javascript",
            FileType::Json => "json",
            FileType::Md => "markdown",
            FileType::Other => "text",
        }
    }
}

/// One generated file. The type is always computed from the name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectFile {
    name: String,
    content: String,
    #[serde(rename = "type")]
    file_type: FileType,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let file_type = FileType::from_name(&name);
        Self {
            name,
            content: content.into(),
            file_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedProject {
    pub files: Vec<ProjectFile>,
    pub original_prompt: String,
    pub selected_model: String,
    pub selected_design: String,
}

impl GeneratedProject {
    pub fn new(
        files: Vec<ProjectFile>,
        original_prompt: impl Into<String>,
        selected_model: impl Into<String>,
        selected_design: impl Into<String>,
    ) -> Self {
        Self {
            files,
            original_prompt: original_prompt.into(),
            selected_model: selected_model.into(),
            selected_design: selected_design.into(),
        }
    }

    /// Apply a follow-up file list by name.
    pub fn merge(&mut self, incoming: Vec<ProjectFile>) {
        merge_files(&mut self.files, incoming);
    }
}

/// Replace entries with a matching name in place, append the rest.
pub fn merge_files(files: &mut Vec<ProjectFile>, incoming: Vec<ProjectFile>) {
    for file in incoming {
        match files.iter_mut().find(|existing| existing.name == file.name) {
            Some(existing) => *existing = file,
            None => files.push(file),
        }
    }
}
