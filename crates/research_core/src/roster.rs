use crate::{ChangeSignal, Document, RequestState, SignalWatcher};

/// The list of ingested documents, refreshed best-effort.
///
/// Failed loads keep the previous list; the failure is recorded but never
/// shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentRoster {
    items: Vec<Document>,
    load: RequestState<()>,
    watcher: SignalWatcher,
}

impl DocumentRoster {
    pub fn items(&self) -> &[Document] {
        &self.items
    }

    pub fn load_state(&self) -> &RequestState<()> {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_pending()
    }

    /// Returns `true` when `signal` changed since the roster last looked.
    pub(crate) fn observe(&mut self, signal: &ChangeSignal) -> bool {
        self.watcher.observe(signal)
    }

    pub(crate) fn begin_load(&mut self) {
        self.load = RequestState::Pending;
    }

    pub(crate) fn settle(&mut self, result: Result<Vec<Document>, String>) {
        let result = result.map(|items| {
            self.items = items;
        });
        self.load.settle(result);
    }
}
