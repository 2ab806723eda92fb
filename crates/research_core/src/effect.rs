use crate::RequestId;

/// Backend work requested by [`crate::update`]; executed outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    IngestUrl { request_id: RequestId, url: String },
    IngestText { request_id: RequestId, content: String },
    LoadDocuments { request_id: RequestId },
    Ask { request_id: RequestId, question: String },
}

impl Effect {
    pub fn request_id(&self) -> RequestId {
        match self {
            Effect::IngestUrl { request_id, .. }
            | Effect::IngestText { request_id, .. }
            | Effect::LoadDocuments { request_id }
            | Effect::Ask { request_id, .. } => *request_id,
        }
    }
}
