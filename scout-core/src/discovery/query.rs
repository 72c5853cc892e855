//! Search query construction.

use url::Url;

use crate::error::FetchError;
use crate::profile::FlatPreferencePayload;

/// Default HTML search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://html.duckduckgo.com/html/";

/// Free-text query: purpose, report type and deployment type, then "tools".
pub fn build_query(profile: &FlatPreferencePayload) -> String {
    format!(
        "{} {} {} tools",
        profile.purpose.trim(),
        profile.report_type.trim(),
        profile.deployment_type.trim()
    )
}

/// Form-encode `query` (spaces become `+`) onto the search endpoint as `q`.
///
/// Query parameters already present on `base_url` are kept.
pub fn search_url(base_url: &str, query: &str) -> Result<String, FetchError> {
    let mut url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query() {
        let profile = FlatPreferencePayload {
            purpose: "log management".to_string(),
            deployment_type: "self-hosted".to_string(),
            priority_factors: vec!["cost".to_string()],
            report_type: "comparison".to_string(),
        };
        assert_eq!(
            build_query(&profile),
            "log management comparison self-hosted tools"
        );
    }

    #[test]
    fn test_search_url_encodes_spaces_as_plus() {
        assert_eq!(
            search_url(DEFAULT_SEARCH_URL, "log management comparison cloud tools").unwrap(),
            "https://html.duckduckgo.com/html/?q=log+management+comparison+cloud+tools"
        );
    }

    #[test]
    fn test_search_url_escapes_reserved_characters() {
        assert_eq!(
            search_url("https://search.test/", "CI/CD & more").unwrap(),
            "https://search.test/?q=CI%2FCD+%26+more"
        );
    }

    #[test]
    fn test_search_url_keeps_existing_parameters() {
        assert_eq!(
            search_url("https://html.duckduckgo.com/html/?kl=us-en", "ci tools").unwrap(),
            "https://html.duckduckgo.com/html/?kl=us-en&q=ci+tools"
        );
    }

    #[test]
    fn test_search_url_rejects_relative_base() {
        let err = search_url("/html/", "ci tools").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
