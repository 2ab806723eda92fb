use serde::{Deserialize, Deserializer, Serialize};

pub type RequestId = u64;

/// The four backend operations the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    IngestUrl,
    IngestText,
    ListDocuments,
    Ask,
}

impl Operation {
    pub fn method(self) -> reqwest::Method {
        match self {
            Operation::ListDocuments => reqwest::Method::GET,
            Operation::IngestUrl | Operation::IngestText | Operation::Ask => reqwest::Method::POST,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::IngestUrl => "/api/ingest/url",
            Operation::IngestText => "/api/ingest/text",
            Operation::ListDocuments => "/api/documents",
            Operation::Ask => "/api/ask",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Operation { status: u16, message: String },
    /// The call could not complete or its body was not JSON.
    #[error("{message}")]
    Transport { message: String },
    #[error("invalid backend url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl GatewayError {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IngestUrlBody<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct IngestTextBody<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AskBody<'a> {
    pub question: &'a str,
}

/// Success body of either ingestion operation. Its content is backend-defined
/// and only logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestReceipt {
    pub message: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentRecord {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentStepRecord {
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub snippets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AskReply {
    pub answer: String,
    pub steps: Vec<AgentStepRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestSource {
    Url,
    Text,
}

/// Settlement of one backend call, emitted in the order calls complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Ingested {
        request_id: RequestId,
        source: IngestSource,
        result: Result<IngestReceipt, GatewayError>,
    },
    DocumentsListed {
        request_id: RequestId,
        result: Result<Vec<DocumentRecord>, GatewayError>,
    },
    Answered {
        request_id: RequestId,
        result: Result<AskReply, GatewayError>,
    },
}

/// Document ids are opaque: strings pass through, anything else is rendered as JSON.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(id) => id,
        other => other.to_string(),
    })
}
