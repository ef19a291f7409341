//! Split a model response into project files.
//!
//! Fenced blocks look like
//!
//! ````text
//! ```css
//! // styles.css
//! body { margin: 0; }
//! ```
//! ````
//!
//! The `// name` comment may sit on the fence line or on the next line.

use crate::project::ProjectFile;
use once_cell::sync::Lazy;
use regex::Regex;

static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```([A-Za-z0-9_]+)?\s*(?://\s*(.+?)\s*)?\n([\s\S]*?)```")
        .expect("code block pattern is valid")
});

pub const FALLBACK_FILE_NAME: &str = "index.html";

/// Filename used for a block that carries a language tag but no explicit name.
pub fn infer_file_name(language: Option<&str>) -> &'static str {
    match language {
        Some("css") => "styles.css",
        Some("javascript") | Some("js") => "script.js",
        Some("json") => "package.json",
        _ => FALLBACK_FILE_NAME,
    }
}

/// Extract every non-empty fenced block, in document order.
///
/// When nothing could be parsed, non-blank input becomes a single
/// `index.html` holding the whole trimmed text.
pub fn extract_files(content: &str) -> Vec<ProjectFile> {
    let mut files = Vec::new();

    for caps in CODE_BLOCK.captures_iter(content) {
        let language = caps.get(1).map(|m| m.as_str());
        let filename = caps.get(2).map(|m| m.as_str().trim());
        let code = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();

        if code.is_empty() {
            continue;
        }

        match filename {
            Some(name) if !name.is_empty() => files.push(ProjectFile::new(name, code)),
            _ => files.push(ProjectFile::new(infer_file_name(language), code)),
        }
    }

    let trimmed = content.trim();
    if files.is_empty() && !trimmed.is_empty() {
        files.push(ProjectFile::new(FALLBACK_FILE_NAME, trimmed));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FileType;

    #[test]
    fn test_named_blocks_in_order() {
        let text = "Here you go:\n\n```html\n// index.html\n<h1>Hi</h1>\n```\n\nand\n\n```css // styles.css\nh1 { color: red; }\n```\n";
        let files = extract_files(text);

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name(), "index.html");
        assert_eq!(files[0].content(), "<h1>Hi</h1>");
        assert_eq!(files[0].file_type(), FileType::Html);
        assert_eq!(files[1].name(), "styles.css");
        assert_eq!(files[1].content(), "h1 { color: red; }");
        assert_eq!(files[1].file_type(), FileType::Css);
    }

    #[test]
    fn test_infers_names_from_language() {
        let text = "```javascript\nconsole.log(1);\n```\n```json\n{}\n```\n```\n<p>x</p>\n```\n```python\nprint(1)\n```";
        let names: Vec<String> = extract_files(text)
            .iter()
            .map(|f| f.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec!["script.js", "package.json", "index.html", "index.html"]
        );
    }

    #[test]
    fn test_empty_blocks_are_dropped() {
        let text = "```css\n// styles.css\n   \n```\n```js\nlet a = 1;\n```";
        let files = extract_files(text);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "script.js");
    }

    #[test]
    fn test_fallback_when_nothing_parsed() {
        let files = extract_files("  <html><body>plain</body></html>\n");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "index.html");
        assert_eq!(files[0].file_type(), FileType::Html);
        assert_eq!(files[0].content(), "<html><body>plain</body></html>");
    }

    #[test]
    fn test_fallback_when_every_block_is_empty() {
        let text = "```html\n\n```";
        let files = extract_files(text);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content(), "```html\n\n```");
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(extract_files("").is_empty());
        assert!(extract_files(" \n\t ").is_empty());
    }

    #[test]
    fn test_unterminated_fence_contributes_nothing() {
        let text = "```css\n// a.css\na{}\n```\n```js\n// b.js\nlet b;";
        let files = extract_files(text);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "a.css");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let text = "```css\na{}\n```\n```css\nb{}\n```";
        let files = extract_files(text);

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.name() == "styles.css"));
    }
}
