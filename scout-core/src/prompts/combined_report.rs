//! Report prompt built from web search candidates rather than a user selection.

use crate::profile::FlatPreferencePayload;
use crate::prompts::join_or_none;
use crate::prompts::report::numbered;

/// Prompt name used in logs.
pub const COMBINED_REPORT_PROMPT_NAME: &str = "combined_report";

/// Sections of the search-backed report. Same as the detailed report minus references.
pub const COMBINED_REPORT_SECTIONS: [&str; 7] = [
    "Stability",
    "Scalability",
    "Security",
    "Technical Dependencies",
    "Public Opinion",
    "Cost",
    "Long-term Benefits",
];

/// Render the report prompt for a flat profile and the discovered candidates.
pub fn render_combined_report_prompt(
    profile: &FlatPreferencePayload,
    candidates: &[String],
) -> String {
    let candidate_list = if candidates.is_empty() {
        "None".to_string()
    } else {
        candidates.join("\n")
    };

    format!(
        r#"You are a technical analyst helping a user choose software.

User Preferences:
- Purpose: {purpose}
- Priority Factors: {factors}
- Deployment Type: {deployment_type}
- Report Type: {report_type}

Candidate Products:
{candidates}

Write a {report_type} report on these candidates that covers:
{sections}

End with a final recommendation of the best fit for this user."#,
        purpose = profile.purpose,
        factors = join_or_none(&profile.priority_factors),
        deployment_type = profile.deployment_type,
        report_type = profile.report_type,
        candidates = candidate_list,
        sections = numbered(&COMBINED_REPORT_SECTIONS),
    )
}
