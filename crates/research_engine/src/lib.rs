//! Research engine: request gateway to the research-agents backend and
//! background execution of backend calls.
mod decode;
mod engine;
mod gateway;
mod operations;
mod types;

pub use decode::{ask_reply_from, decode_body, documents_from, receipt_from, FALLBACK_FAILURE};
pub use engine::{BackendCall, EngineError, EngineHandle, EventSink};
pub use gateway::{Gateway, GatewaySettings, ReqwestGateway, DEFAULT_BACKEND_URL};
pub use operations::{ask, ingest_text, ingest_url, list_documents};
pub use types::{
    AgentStepRecord, AskReply, DocumentRecord, EngineEvent, GatewayError, IngestReceipt,
    IngestSource, Operation, RequestId,
};
