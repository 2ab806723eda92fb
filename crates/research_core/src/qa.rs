use crate::{AskResult, RequestState};

pub const DEFAULT_QUESTION: &str = "What are the key points from the collected sources?";

/// Question box plus the answer and agent trace of the last settled ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPanel {
    question: String,
    answer: RequestState<AskResult>,
}

impl Default for QaPanel {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION.to_string(),
            answer: RequestState::Idle,
        }
    }
}

impl QaPanel {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &RequestState<AskResult> {
        &self.answer
    }

    pub(crate) fn set_question(&mut self, question: String) {
        self.question = question;
    }

    /// Discards the previous answer and trace, returning the trimmed question
    /// to send. Blank questions are a no-op. A pending ask never blocks.
    pub(crate) fn begin(&mut self) -> Option<String> {
        let question = self.question.trim();
        if question.is_empty() {
            return None;
        }
        let question = question.to_owned();
        self.answer = RequestState::Pending;
        Some(question)
    }

    pub(crate) fn settle(&mut self, result: Result<AskResult, String>) {
        self.answer.settle(result);
    }
}
