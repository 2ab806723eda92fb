use crate::{AgentStep, AppState, Document, Notice, RequestState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub ingest: IngestView,
    pub documents: DocumentsView,
    pub qa: QaView,
    pub change_version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestView {
    pub url_input: String,
    pub text_input: String,
    pub submit_enabled: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentsView {
    Loading,
    Empty,
    Listed(Vec<Document>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaView {
    pub question: String,
    pub steps: Vec<AgentStep>,
    pub answer: AnswerView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerView {
    /// Nothing asked yet.
    Placeholder,
    Thinking,
    /// The backend's answer, or `"Error: <message>"` after a failed ask.
    Text(String),
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let ingest = state.ingest();
        let roster = state.roster();
        let qa = state.qa();

        let documents = if roster.is_loading() {
            DocumentsView::Loading
        } else if roster.items().is_empty() {
            DocumentsView::Empty
        } else {
            DocumentsView::Listed(roster.items().to_vec())
        };

        let (steps, answer) = match qa.answer() {
            RequestState::Idle => (Vec::new(), AnswerView::Placeholder),
            RequestState::Pending => (Vec::new(), AnswerView::Thinking),
            RequestState::Succeeded(result) => {
                (result.steps.clone(), AnswerView::Text(result.answer.clone()))
            }
            RequestState::Failed(message) => {
                (Vec::new(), AnswerView::Text(format!("Error: {message}")))
            }
        };

        Self {
            ingest: IngestView {
                url_input: ingest.url_input().to_string(),
                text_input: ingest.text_input().to_string(),
                submit_enabled: !ingest.is_busy(),
                notice: ingest.notice().cloned(),
            },
            documents,
            qa: QaView {
                question: qa.question().to_string(),
                steps,
                answer,
            },
            change_version: state.signal().version(),
        }
    }
}
