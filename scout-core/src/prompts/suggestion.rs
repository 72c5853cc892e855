//! Product shortlist prompt.

use crate::profile::PreferencePayload;
use crate::prompts::{join_or_none, or_none};

/// Prompt name used in logs.
pub const SUGGESTION_PROMPT_NAME: &str = "suggest_products";

/// Render the prompt asking for 3-5 product names matching the profile.
pub fn render_suggestion_prompt(profile: &PreferencePayload) -> String {
    format!(
        r#"You're a smart tech recommender.

User's Context:
- Domain: {purpose}
- Deployment: {deployment}
- Priority Factors: {factors}
- Industry: {industry}
- Organization Size: {organization_size}
- Budget Model: {budget_model}
- Reliability Requirement: {reliability_needs}
- Disaster Tolerance: {disaster_tolerance}
- Tech Dependencies: {tech_dependencies}
- Additional Requirements: {drilldown}

Please recommend 3–5 software products or platforms that meet these criteria.

Return ONLY the product names — one per line, no extra text."#,
        purpose = profile.purpose,
        deployment = profile.deployment,
        factors = join_or_none(&profile.factors),
        industry = profile.industry,
        organization_size = profile.organization_size,
        budget_model = profile.budget_model,
        reliability_needs = profile.reliability_needs,
        disaster_tolerance = profile.disaster_tolerance,
        tech_dependencies = join_or_none(&profile.tech_dependencies),
        drilldown = or_none(&profile.drilldown),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> PreferencePayload {
        PreferencePayload {
            purpose: "CI/CD".to_string(),
            deployment: "cloud".to_string(),
            factors: vec!["cost".to_string(), "security".to_string()],
            industry: "fintech".to_string(),
            organization_size: "50-200".to_string(),
            tech_dependencies: vec![],
            budget_model: "subscription".to_string(),
            reliability_needs: "high".to_string(),
            disaster_tolerance: "medium".to_string(),
            drilldown: String::new(),
        }
    }

    #[test]
    fn test_render_prompt() {
        let prompt = render_suggestion_prompt(&profile());

        assert!(prompt.contains("- Domain: CI/CD"));
        assert!(prompt.contains("- Deployment: cloud"));
        assert!(prompt.contains("- Priority Factors: cost, security"));
        assert!(prompt.contains("- Industry: fintech"));
        assert!(prompt.contains("- Organization Size: 50-200"));
        assert!(prompt.contains("- Budget Model: subscription"));
        assert!(prompt.contains("- Reliability Requirement: high"));
        assert!(prompt.contains("- Disaster Tolerance: medium"));
        assert!(prompt.contains("- Tech Dependencies: None"));
        assert!(prompt.contains("- Additional Requirements: None"));
        assert!(prompt.contains("3–5 software products"));
        assert!(prompt.contains("one per line"));
    }

    #[test]
    fn test_optional_fields_rendered_when_present() {
        let prompt = render_suggestion_prompt(&PreferencePayload {
            tech_dependencies: vec!["Kubernetes".to_string(), "PostgreSQL".to_string()],
            drilldown: "Must support SAML SSO".to_string(),
            ..profile()
        });

        assert!(prompt.contains("- Tech Dependencies: Kubernetes, PostgreSQL"));
        assert!(prompt.contains("- Additional Requirements: Must support SAML SSO"));
        assert!(!prompt.contains("None"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            render_suggestion_prompt(&profile()),
            render_suggestion_prompt(&profile())
        );
    }
}
