//! Research desk core: pure state machine and view-model helpers.
mod effect;
mod ingest;
mod model;
mod msg;
mod qa;
mod request;
mod roster;
mod signal;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use ingest::{IngestPanel, Notice, NoticeKind, TEXT_INGESTED, URL_INGESTED};
pub use model::{AgentStep, AskResult, Document, IngestKind, RequestId};
pub use msg::Msg;
pub use qa::{QaPanel, DEFAULT_QUESTION};
pub use request::RequestState;
pub use roster::DocumentRoster;
pub use signal::{ChangeSignal, SignalWatcher};
pub use state::AppState;
pub use update::update;
pub use view_model::{AnswerView, AppViewModel, DocumentsView, IngestView, QaView};
