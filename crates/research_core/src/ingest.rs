use crate::{IngestKind, RequestState};

pub const URL_INGESTED: &str = "URL ingested successfully";
pub const TEXT_INGESTED: &str = "Text ingested successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// The single outcome message shown under the ingestion form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Ingestion form: two independent flows, each with its own input buffer.
///
/// Both submit actions are gated while either flow is pending. Only the most
/// recently written notice is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestPanel {
    url_input: String,
    text_input: String,
    url_flow: RequestState<()>,
    text_flow: RequestState<()>,
    notice: Option<Notice>,
}

impl IngestPanel {
    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn flow(&self, kind: IngestKind) -> &RequestState<()> {
        match kind {
            IngestKind::Url => &self.url_flow,
            IngestKind::Text => &self.text_flow,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.url_flow.is_pending() || self.text_flow.is_pending()
    }

    pub(crate) fn set_input(&mut self, kind: IngestKind, value: String) {
        match kind {
            IngestKind::Url => self.url_input = value,
            IngestKind::Text => self.text_input = value,
        }
    }

    /// Starts a submission and returns the payload to send, or `None` when the
    /// submission is a no-op (blank input or another flow in flight).
    pub(crate) fn begin(&mut self, kind: IngestKind) -> Option<String> {
        if self.is_busy() {
            return None;
        }
        let payload = match kind {
            IngestKind::Url => {
                let url = self.url_input.trim();
                (!url.is_empty()).then(|| url.to_owned())
            }
            // Pasted text is sent as typed; only the emptiness check trims.
            IngestKind::Text => {
                (!self.text_input.trim().is_empty()).then(|| self.text_input.clone())
            }
        }?;
        self.notice = None;
        *self.flow_mut(kind) = RequestState::Pending;
        Some(payload)
    }

    /// Applies a settlement. Returns `true` when content was added.
    pub(crate) fn settle(&mut self, kind: IngestKind, result: Result<(), String>) -> bool {
        let added = result.is_ok();
        self.notice = Some(match &result {
            Ok(()) => {
                self.set_input(kind, String::new());
                Notice {
                    kind: NoticeKind::Success,
                    text: success_text(kind).to_string(),
                }
            }
            Err(message) => Notice {
                kind: NoticeKind::Failure,
                text: message.clone(),
            },
        });
        self.flow_mut(kind).settle(result);
        added
    }

    fn flow_mut(&mut self, kind: IngestKind) -> &mut RequestState<()> {
        match kind {
            IngestKind::Url => &mut self.url_flow,
            IngestKind::Text => &mut self.text_flow,
        }
    }
}

fn success_text(kind: IngestKind) -> &'static str {
    match kind {
        IngestKind::Url => URL_INGESTED,
        IngestKind::Text => TEXT_INGESTED,
    }
}
