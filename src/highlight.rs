use crate::project::ProjectFile;
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

const CODE_THEME: &str = "InspiredGitHub";

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options
});

// Loading the syntax and theme sets is the expensive part; do it once.
static ADAPTER: Lazy<SyntectAdapter> = Lazy::new(|| SyntectAdapter::new(Some(CODE_THEME)));

fn render(md: &str) -> String {
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&*ADAPTER);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// A fence longer than any backtick run inside `content`.
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for ch in content.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Highlight `source` as a single code block in `language`.
pub fn highlight_source(source: &str, language: &str) -> String {
    let fence = fence_for(source);
    render(&format!("{fence}{language}\n{source}\n{fence}\n"))
}

/// Highlighted HTML for one project file.
pub fn highlight_file(file: &ProjectFile) -> String {
    highlight_source(file.content(), file.file_type().language())
}

/// The raw model response, highlighted as markdown source.
pub fn highlight_response(text: &str) -> String {
    highlight_source(text, "markdown")
}
