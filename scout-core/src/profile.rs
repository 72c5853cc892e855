//! Preference profiles submitted by callers.
//!
//! These are plain data holders. Shape errors (missing fields, wrong types) are
//! caught by serde at the transport boundary; [`Validate`] then checks the
//! content rules serde cannot express, such as required strings being non-blank.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field problem found in a payload, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid request: ")?;
        for (i, e) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Content validation for request payloads.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates field errors so callers see all problems at once.
#[derive(Default)]
struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    fn fail(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "must not be empty");
        }
        self
    }

    fn non_empty_list(&mut self, field: &str, values: &[String]) -> &mut Self {
        if values.is_empty() {
            self.fail(field, "must contain at least one entry");
        } else if values.iter().any(|v| v.trim().is_empty()) {
            self.fail(field, "must not contain blank entries");
        }
        self
    }

    fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: std::mem::take(&mut self.errors),
            })
        }
    }
}

/// The full questionnaire profile used by the suggestion and report endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PreferencePayload {
    /// Problem domain, e.g. "CI/CD"
    pub purpose: String,
    /// Deployment model, e.g. "cloud" or "on-premise"
    pub deployment: String,
    /// Priority factors in the order the user ranked them
    pub factors: Vec<String>,
    pub industry: String,
    pub organization_size: String,
    #[serde(default)]
    pub tech_dependencies: Vec<String>,
    pub budget_model: String,
    pub reliability_needs: String,
    pub disaster_tolerance: String,
    /// Free-form additional requirements
    #[serde(default)]
    pub drilldown: String,
}

impl PreferencePayload {
    fn check(&self, checks: &mut FieldChecks) {
        checks
            .required("purpose", &self.purpose)
            .required("deployment", &self.deployment)
            .required("industry", &self.industry)
            .required("organization_size", &self.organization_size)
            .required("budget_model", &self.budget_model)
            .required("reliability_needs", &self.reliability_needs)
            .required("disaster_tolerance", &self.disaster_tolerance);
    }
}

impl Validate for PreferencePayload {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = FieldChecks::default();
        self.check(&mut checks);
        checks.finish()
    }
}

/// Which report the model is asked to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Individual,
    Comparison,
}

impl ReportKind {
    /// Only the exact value "individual" selects an individual report.
    pub fn from_report_type(report_type: &str) -> Self {
        if report_type == "individual" {
            ReportKind::Individual
        } else {
            ReportKind::Comparison
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Individual => "comprehensive individual report",
            ReportKind::Comparison => "technical comparison report",
        }
    }
}

/// A profile plus the products the user picked for a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportPayload {
    #[serde(flatten)]
    pub profile: PreferencePayload,
    /// "individual" or "comparison"
    pub report_type: String,
    pub selected_products: Vec<String>,
}

impl ReportPayload {
    pub fn kind(&self) -> ReportKind {
        ReportKind::from_report_type(&self.report_type)
    }
}

impl Validate for ReportPayload {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = FieldChecks::default();
        self.profile.check(&mut checks);
        checks
            .required("report_type", &self.report_type)
            .non_empty_list("selected_products", &self.selected_products);
        checks.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ToolSuggestionRequest {
    pub purpose: String,
}

impl Validate for ToolSuggestionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::default()
            .required("purpose", &self.purpose)
            .finish()
    }
}

/// The reduced profile accepted by the search-backed report endpoint.
///
/// Deliberately a separate type: its field names do not line up with
/// [`PreferencePayload`] and the two are never converted into each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FlatPreferencePayload {
    pub purpose: String,
    pub deployment_type: String,
    pub priority_factors: Vec<String>,
    pub report_type: String,
}

impl Validate for FlatPreferencePayload {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::default()
            .required("purpose", &self.purpose)
            .required("deployment_type", &self.deployment_type)
            .required("report_type", &self.report_type)
            .finish()
    }
}
