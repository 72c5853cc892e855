//! One operation per endpoint: validate, (discover), prompt, invoke, normalize.

use thiserror::Error;

use crate::discovery::{discover_candidates, CandidateSource};
use crate::llm::{LlmError, LlmProvider};
use crate::normalize::{normalize_list, passthrough, NormalizedList, NO_SUGGESTIONS, NO_TOOLS};
use crate::profile::{
    FlatPreferencePayload, PreferencePayload, ReportPayload, ToolSuggestionRequest, Validate,
    ValidationError,
};
use crate::prompts::{
    render_combined_report_prompt, render_report_prompt, render_suggestion_prompt,
    render_tool_suggestion_prompt, COMBINED_REPORT_PROMPT_NAME, REPORT_PROMPT_NAME,
    SUGGESTION_PROMPT_NAME, TOOL_SUGGESTION_PROMPT_NAME,
};

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Products suggested for a profile.
#[derive(Debug, Clone)]
pub struct ProductSuggestions {
    pub products: NormalizedList,
    pub prompt: String,
}

/// A free-text report, exactly as the model wrote it.
#[derive(Debug, Clone)]
pub struct Report {
    pub report: String,
    pub prompt: String,
}

/// Tools commonly used in a domain.
#[derive(Debug, Clone)]
pub struct ToolSuggestions {
    pub tools: NormalizedList,
    pub prompt: String,
}

/// A report written about search-discovered candidates.
#[derive(Debug, Clone)]
pub struct CombinedReport {
    pub report: String,
    pub products: NormalizedList,
    pub prompt: String,
}

async fn invoke(
    llm: &dyn LlmProvider,
    prompt_name: &str,
    prompt: &str,
) -> Result<String, LlmError> {
    tracing::debug!(
        prompt_name = prompt_name,
        provider = llm.provider_name(),
        model = llm.model_name(),
        prompt = %prompt,
        "Sending prompt"
    );

    let completion = llm.complete(prompt).await.inspect_err(|e| {
        tracing::warn!(prompt_name = prompt_name, error = %e, "LLM call failed");
    })?;

    tracing::debug!(
        prompt_name = prompt_name,
        completion_chars = completion.len(),
        "Received completion"
    );
    Ok(completion)
}

/// Ask the model for 3-5 products matching the profile.
pub async fn suggest_products(
    llm: &dyn LlmProvider,
    profile: &PreferencePayload,
) -> Result<ProductSuggestions, ResearchError> {
    profile.validate()?;

    let prompt = render_suggestion_prompt(profile);
    let completion = invoke(llm, SUGGESTION_PROMPT_NAME, &prompt).await?;

    Ok(ProductSuggestions {
        products: normalize_list(&completion, NO_SUGGESTIONS),
        prompt,
    })
}

/// Ask the model for an individual or comparison report on the selected products.
pub async fn generate_report(
    llm: &dyn LlmProvider,
    request: &ReportPayload,
) -> Result<Report, ResearchError> {
    request.validate()?;

    let prompt = render_report_prompt(request);
    let completion = invoke(llm, REPORT_PROMPT_NAME, &prompt).await?;

    Ok(Report {
        report: passthrough(completion),
        prompt,
    })
}

/// Ask the model for 5-10 tools used in the requested domain.
pub async fn suggest_tech_options(
    llm: &dyn LlmProvider,
    request: &ToolSuggestionRequest,
) -> Result<ToolSuggestions, ResearchError> {
    request.validate()?;

    let prompt = render_tool_suggestion_prompt(&request.purpose);
    let completion = invoke(llm, TOOL_SUGGESTION_PROMPT_NAME, &prompt).await?;

    Ok(ToolSuggestions {
        tools: normalize_list(&completion, NO_TOOLS),
        prompt,
    })
}

/// Discover candidates by web search, then ask the model to report on them.
///
/// When discovery finds nothing (or fails), the prompt lists no candidates and
/// the model works from the profile alone.
pub async fn generate_combined_report(
    llm: &dyn LlmProvider,
    source: &dyn CandidateSource,
    profile: &FlatPreferencePayload,
) -> Result<CombinedReport, ResearchError> {
    profile.validate()?;

    let products = discover_candidates(source, profile).await;
    let candidates: &[String] = if products.empty { &[] } else { &products.items };

    let prompt = render_combined_report_prompt(profile, candidates);
    let completion = invoke(llm, COMBINED_REPORT_PROMPT_NAME, &prompt).await?;

    Ok(CombinedReport {
        report: passthrough(completion),
        products,
        prompt,
    })
}
