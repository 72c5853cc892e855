//! Prompt templates.
//!
//! Every template is a pure string transform. Empty optional values render as
//! the literal "None" so the model never sees a dangling label.

pub mod combined_report;
pub mod report;
pub mod suggestion;
pub mod tool_suggestion;

pub use combined_report::{render_combined_report_prompt, COMBINED_REPORT_PROMPT_NAME};
pub use report::{render_report_prompt, REPORT_PROMPT_NAME};
pub use suggestion::{render_suggestion_prompt, SUGGESTION_PROMPT_NAME};
pub use tool_suggestion::{render_tool_suggestion_prompt, TOOL_SUGGESTION_PROMPT_NAME};

const NONE: &str = "None";

/// Comma-join a list, or "None" when it is empty.
pub(crate) fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE.to_string()
    } else {
        values.join(", ")
    }
}

/// The value itself, or "None" when it is blank.
pub(crate) fn or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        NONE
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "None");
        assert_eq!(
            join_or_none(&["cost".to_string(), "security".to_string()]),
            "cost, security"
        );
    }

    #[test]
    fn test_or_none() {
        assert_eq!(or_none(""), "None");
        assert_eq!(or_none("  "), "None");
        assert_eq!(or_none("SOC 2"), "SOC 2");
    }
}
