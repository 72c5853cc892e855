pub mod discovery;
pub mod error;
pub mod http;
pub mod llm;
pub mod normalize;
pub mod profile;
pub mod prompts;
pub mod research;

pub use error::{DiscoveryError, FetchError};
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient};
pub use normalize::NormalizedList;
pub use profile::{
    FieldError, FlatPreferencePayload, PreferencePayload, ReportKind, ReportPayload,
    ToolSuggestionRequest, Validate, ValidationError,
};
pub use research::{
    generate_combined_report, generate_report, suggest_products, suggest_tech_options,
    CombinedReport, ProductSuggestions, Report, ResearchError, ToolSuggestions,
};
