use crate::{AskResult, Document, IngestKind, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was shown for the first time.
    Started,
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// User edited the pasted-text box.
    TextInputChanged(String),
    /// User edited the question box.
    QuestionChanged(String),
    /// User clicked "Add URL".
    UrlSubmitted,
    /// User clicked "Add Text".
    TextSubmitted,
    /// User clicked "Ask".
    AskSubmitted,
    /// User clicked "Refresh" on the document list.
    RefreshClicked,
    /// An ingestion call settled. Failures carry their display message.
    IngestSettled {
        request_id: RequestId,
        kind: IngestKind,
        result: Result<(), String>,
    },
    /// A document listing call settled.
    DocumentsSettled {
        request_id: RequestId,
        result: Result<Vec<Document>, String>,
    },
    /// An ask call settled.
    AnswerSettled {
        request_id: RequestId,
        result: Result<AskResult, String>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
