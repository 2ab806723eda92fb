/// Correlates an [`crate::Effect`] with the message that settles it.
pub type RequestId = u64;

/// A backend-produced record describing one ingested source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    /// `"url"` or `"text"`, shown verbatim.
    pub source_type: String,
    pub url: Option<String>,
    pub summary: Option<String>,
}

/// One hop of the backend's multi-agent answering pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStep {
    pub agent: String,
    pub action: String,
    pub snippets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AskResult {
    pub answer: String,
    pub steps: Vec<AgentStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestKind {
    Url,
    Text,
}
