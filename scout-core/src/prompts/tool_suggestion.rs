//! Tool discovery prompt for a single domain.

/// Prompt name used in logs.
pub const TOOL_SUGGESTION_PROMPT_NAME: &str = "suggest_tech_options";

/// Render the prompt asking for 5-10 commonly used tools in `purpose`.
pub fn render_tool_suggestion_prompt(purpose: &str) -> String {
    format!(
        r#"You're an expert in {purpose} technologies.

List 5 to 10 specific tools, platforms, or libraries that are commonly used in this area.

Return only tool names, one per line."#,
        purpose = purpose
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_tool_suggestion_prompt("container orchestration");
        assert!(prompt.contains("expert in container orchestration technologies"));
        assert!(prompt.contains("5 to 10"));
        assert!(prompt.contains("one per line"));
    }
}
