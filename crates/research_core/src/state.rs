use crate::view_model::AppViewModel;
use crate::{ChangeSignal, DocumentRoster, Effect, IngestPanel, QaPanel, RequestId};

/// View root: owns the three panels and the change signal linking ingestion
/// to the document roster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    signal: ChangeSignal,
    ingest: IngestPanel,
    roster: DocumentRoster,
    qa: QaPanel,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self)
    }

    pub fn signal(&self) -> &ChangeSignal {
        &self.signal
    }

    pub fn ingest(&self) -> &IngestPanel {
        &self.ingest
    }

    pub fn roster(&self) -> &DocumentRoster {
        &self.roster
    }

    pub fn qa(&self) -> &QaPanel {
        &self.qa
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn ingest_mut(&mut self) -> &mut IngestPanel {
        &mut self.ingest
    }

    pub(crate) fn roster_mut(&mut self) -> &mut DocumentRoster {
        &mut self.roster
    }

    pub(crate) fn qa_mut(&mut self) -> &mut QaPanel {
        &mut self.qa
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    pub(crate) fn publish_change(&mut self) {
        self.signal.publish();
    }

    /// Lets the roster react to the change signal; yields a load when it moved.
    pub(crate) fn sync_roster(&mut self) -> Option<Effect> {
        let signal = self.signal;
        if self.roster.observe(&signal) {
            Some(self.start_load())
        } else {
            None
        }
    }

    pub(crate) fn start_load(&mut self) -> Effect {
        let request_id = self.next_request_id();
        self.roster.begin_load();
        self.mark_dirty();
        Effect::LoadDocuments { request_id }
    }
}
