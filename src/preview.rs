use crate::project::{FileType, ProjectFile};

pub const NO_HTML_PLACEHOLDER: &str =
    "<html><body><p>No HTML file found in the generated project.</p></body></html>";

/// Build one self-contained document for a sandboxed frame.
///
/// The first HTML file is the base. Stylesheets go in front of `</head>` and
/// scripts in front of `</body>`; when the base lacks the tag they are dropped.
pub fn assemble_preview(files: &[ProjectFile]) -> String {
    let Some(base) = files.iter().find(|f| f.file_type() == FileType::Html) else {
        return NO_HTML_PLACEHOLDER.to_string();
    };

    let mut html = base.content().to_string();

    let styles = wrap_all(files, FileType::Css, "style");
    if !styles.is_empty() {
        html = html.replacen("</head>", &format!("{styles}\n</head>"), 1);
    }

    let scripts = wrap_all(files, FileType::Js, "script");
    if !scripts.is_empty() {
        html = html.replacen("</body>", &format!("{scripts}\n</body>"), 1);
    }

    html
}

fn wrap_all(files: &[ProjectFile], file_type: FileType, tag: &str) -> String {
    files
        .iter()
        .filter(|f| f.file_type() == file_type)
        .map(|f| format!("<{tag}>{}</{tag}>", f.content()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injects_css_before_head_close() {
        let files = vec![
            ProjectFile::new("index.html", "<head></head><body></body>"),
            ProjectFile::new("styles.css", "body{color:red}"),
        ];
        let html = assemble_preview(&files);

        assert_eq!(
            html,
            "<head><style>body{color:red}</style>\n</head><body></body>"
        );
    }

    #[test]
    fn test_injects_scripts_in_list_order() {
        let files = vec![
            ProjectFile::new("a.js", "one()"),
            ProjectFile::new("index.html", "<html><head></head><body><p>x</p></body></html>"),
            ProjectFile::new("b.ts", "two()"),
        ];
        let html = assemble_preview(&files);

        assert_eq!(
            html,
            "<html><head></head><body><p>x</p><script>one()</script>\n<script>two()</script>\n</body></html>"
        );
    }

    #[test]
    fn test_first_html_file_is_the_base() {
        let files = vec![
            ProjectFile::new("index.html", "<body>first</body>"),
            ProjectFile::new("about.html", "<body>second</body>"),
        ];
        assert_eq!(assemble_preview(&files), "<body>first</body>");
    }

    #[test]
    fn test_missing_tags_drop_injection() {
        let files = vec![
            ProjectFile::new("index.html", "<p>bare</p>"),
            ProjectFile::new("styles.css", "p{}"),
            ProjectFile::new("script.js", "go()"),
        ];
        assert_eq!(assemble_preview(&files), "<p>bare</p>");
    }

    #[test]
    fn test_placeholder_without_html() {
        let files = vec![
            ProjectFile::new("styles.css", "p{}"),
            ProjectFile::new("script.js", "go()"),
        ];
        assert_eq!(assemble_preview(&files), NO_HTML_PLACEHOLDER);
        assert_eq!(assemble_preview(&[]), NO_HTML_PLACEHOLDER);
    }

    #[test]
    fn test_replacement_is_literal() {
        let files = vec![
            ProjectFile::new("index.html", "<head></head>"),
            ProjectFile::new("styles.css", "a::after{content:'$&'}"),
        ];
        assert!(assemble_preview(&files).contains("content:'$&'"));
    }
}
