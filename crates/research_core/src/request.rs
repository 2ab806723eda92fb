/// Lifecycle of a single request flow owned by one panel.
///
/// A flow re-enters `Pending` on every new submission; the settlement that
/// arrives last decides the final variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub(crate) fn settle(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(value) => RequestState::Succeeded(value),
            Err(message) => RequestState::Failed(message),
        };
    }
}
