//! Detailed report prompt for products the user already picked.

use crate::profile::ReportPayload;
use crate::prompts::{join_or_none, or_none};

/// Prompt name used in logs.
pub const REPORT_PROMPT_NAME: &str = "generate_report";

/// Sections every report must cover, in order.
pub const REPORT_SECTIONS: [&str; 8] = [
    "Stability",
    "Scalability",
    "Security",
    "Technical Dependencies",
    "Public Opinion",
    "Cost",
    "Long-term Benefits",
    "References",
];

/// Render selected products as a bulleted list, one per line.
pub(crate) fn bulleted(products: &[String]) -> String {
    products
        .iter()
        .map(|p| format!("- {}", p))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render numbered section headings, one per line.
pub(crate) fn numbered(sections: &[&str]) -> String {
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the report prompt for the given profile and product selection.
pub fn render_report_prompt(report: &ReportPayload) -> String {
    let profile = &report.profile;
    let report_kind = report.kind().label();

    format!(
        r#"You are a technical analyst creating a {report_kind}.

Selected Product(s):
{products}

User Profile:
- Purpose: {purpose}
- Deployment: {deployment}
- Industry: {industry}
- Organization Size: {organization_size}
- Priority Factors: {factors}
- Budget Model: {budget_model}
- Reliability Requirement: {reliability_needs}
- Disaster Tolerance: {disaster_tolerance}
- Tech Dependencies: {tech_dependencies}
- Additional Notes: {drilldown}

Generate a detailed {report_kind} that covers:
{sections}

Conclude with a recommendation."#,
        report_kind = report_kind,
        products = bulleted(&report.selected_products),
        purpose = profile.purpose,
        deployment = profile.deployment,
        industry = profile.industry,
        organization_size = profile.organization_size,
        factors = join_or_none(&profile.factors),
        budget_model = profile.budget_model,
        reliability_needs = profile.reliability_needs,
        disaster_tolerance = profile.disaster_tolerance,
        tech_dependencies = join_or_none(&profile.tech_dependencies),
        drilldown = or_none(&profile.drilldown),
        sections = numbered(&REPORT_SECTIONS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PreferencePayload;

    fn report(report_type: &str) -> ReportPayload {
        ReportPayload {
            profile: PreferencePayload {
                purpose: "Observability".to_string(),
                deployment: "hybrid".to_string(),
                factors: vec!["scalability".to_string()],
                industry: "retail".to_string(),
                organization_size: "1000+".to_string(),
                tech_dependencies: vec!["AWS".to_string()],
                budget_model: "usage-based".to_string(),
                reliability_needs: "99.99%".to_string(),
                disaster_tolerance: "low".to_string(),
                drilldown: String::new(),
            },
            report_type: report_type.to_string(),
            selected_products: vec!["Datadog".to_string(), "Grafana Cloud".to_string()],
        }
    }

    #[test]
    fn test_individual_label() {
        let prompt = render_report_prompt(&report("individual"));
        assert!(prompt.contains("creating a comprehensive individual report."));
        assert!(prompt.contains("Generate a detailed comprehensive individual report"));
        assert!(!prompt.contains("technical comparison report"));
    }

    #[test]
    fn test_comparison_label() {
        for report_type in ["comparison", "something-else"] {
            let prompt = render_report_prompt(&report(report_type));
            assert!(prompt.contains("creating a technical comparison report."));
            assert!(!prompt.contains("comprehensive individual report"));
        }
    }

    #[test]
    fn test_products_bulleted() {
        let prompt = render_report_prompt(&report("comparison"));
        assert!(prompt.contains("Selected Product(s):\n- Datadog\n- Grafana Cloud\n"));
    }

    #[test]
    fn test_profile_and_sections() {
        let prompt = render_report_prompt(&report("individual"));
        assert!(prompt.contains("- Purpose: Observability"));
        assert!(prompt.contains("- Reliability Requirement: 99.99%"));
        assert!(prompt.contains("- Tech Dependencies: AWS"));
        assert!(prompt.contains("- Additional Notes: None"));
        assert!(prompt.contains("1. Stability\n"));
        assert!(prompt.contains("8. References\n"));
        assert!(prompt.ends_with("Conclude with a recommendation."));
    }
}
