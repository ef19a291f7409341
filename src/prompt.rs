use crate::design::design_style;
use crate::types::ChatMessage;

const FALLBACK_GENERATION_STYLE: &str = "Create a clean, minimalistic design.";
const FALLBACK_FOLLOW_UP_STYLE: &str = "Maintain a clean, minimalistic design.";

pub const MODIFICATIONS_SEPARATOR: &str = "\n\n--- MODIFICATIONS ---\n\n";

fn style_prompt(design_id: &str, fallback: &'static str) -> &'static str {
    design_style(design_id)
        .map(|style| style.system_prompt)
        .unwrap_or(fallback)
}

pub fn generation_system_prompt(prompt: &str, design_id: &str) -> String {
    let style = style_prompt(design_id, FALLBACK_GENERATION_STYLE);
    format!(
        r#"You are an expert web developer. Generate complete, production-ready web applications based on user requirements.

{style}

Requirements:
1. Generate complete HTML, CSS, and JavaScript files
2. Make the code mobile-responsive
3. Use modern web standards and best practices
4. Include proper file structure with clear file names
5. Format code blocks with proper language tags and file names like this:
   ```html
   // index.html
   [HTML code here]
   ```

   ```css
   // styles.css
   [CSS code here]
   ```

   ```javascript
   // script.js
   [JavaScript code here]
   ```

6. Make sure all files work together seamlessly
7. Add comments in the code for clarity
8. Ensure the application is fully functional

Generate a complete web application for: {prompt}"#
    )
}

pub fn follow_up_system_prompt(previous_code: &str, request: &str, design_id: &str) -> String {
    let style = style_prompt(design_id, FALLBACK_FOLLOW_UP_STYLE);
    format!(
        r#"You are an expert web developer. The user has requested modifications to an existing web application.

{style}

IMPORTANT: You must modify the existing code based on the user's request. Here's the current project:

{previous_code}

Requirements for modifications:
1. Make the requested changes while maintaining the existing functionality
2. Keep the same file structure unless specifically asked to change it
3. Ensure all files still work together after modifications
4. Format code blocks with proper language tags and file names
5. Only show the complete updated files that were changed
6. Maintain mobile responsiveness
7. Use modern web standards and best practices

User's modification request: {request}"#
    )
}

pub fn generation_messages(prompt: &str, design_id: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(generation_system_prompt(prompt, design_id)),
        ChatMessage::user(prompt),
    ]
}

pub fn follow_up_messages(previous_code: &str, request: &str, design_id: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(follow_up_system_prompt(previous_code, request, design_id)),
        ChatMessage::user(request),
    ]
}
