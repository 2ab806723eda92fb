use std::sync::{mpsc, Arc};
use std::thread;

use research_logging::{clip_for_log, research_debug, research_info, research_warn};

use crate::gateway::{Gateway, GatewaySettings, ReqwestGateway};
use crate::{operations, EngineEvent, GatewayError, IngestSource, RequestId};

/// A backend call queued on the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    IngestUrl { url: String },
    IngestText { content: String },
    ListDocuments,
    Ask { question: String },
}

impl BackendCall {
    fn label(&self) -> &'static str {
        match self {
            BackendCall::IngestUrl { .. } => "ingest_url",
            BackendCall::IngestText { .. } => "ingest_text",
            BackendCall::ListDocuments => "list_documents",
            BackendCall::Ask { .. } => "ask",
        }
    }
}

/// Receives one [`EngineEvent`] per dispatched call, from the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

impl EventSink for mpsc::Sender<EngineEvent> {
    fn emit(&self, event: EngineEvent) {
        let _ = self.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Dispatch {
        request_id: RequestId,
        call: BackendCall,
    },
}

/// Runs backend calls on a background tokio runtime.
///
/// Calls run concurrently and are never cancelled; each settlement is emitted
/// as soon as it lands. Dropping the handle stops the engine thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: GatewaySettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let gateway = ReqwestGateway::new(settings)?;
        Self::with_gateway(Arc::new(gateway), sink)
    }

    pub fn with_gateway(
        gateway: Arc<dyn Gateway>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(gateway.as_ref(), command, sink.as_ref()).await;
                });
            }
            research_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    /// Queues a call. Returns `false` if the engine thread is gone.
    pub fn dispatch(&self, request_id: RequestId, call: BackendCall) -> bool {
        research_info!("Dispatch request_id={} op={}", request_id, call.label());
        self.cmd_tx
            .send(EngineCommand::Dispatch { request_id, call })
            .is_ok()
    }
}

async fn handle_command(gateway: &dyn Gateway, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Dispatch { request_id, call } => {
            let event = run_call(gateway, request_id, call).await;
            log_settlement(&event);
            sink.emit(event);
        }
    }
}

async fn run_call(gateway: &dyn Gateway, request_id: RequestId, call: BackendCall) -> EngineEvent {
    match call {
        BackendCall::IngestUrl { url } => {
            research_debug!("ingest_url request_id={} url={}", request_id, clip_for_log(&url));
            EngineEvent::Ingested {
                request_id,
                source: IngestSource::Url,
                result: operations::ingest_url(gateway, &url).await,
            }
        }
        BackendCall::IngestText { content } => {
            research_debug!(
                "ingest_text request_id={} content_len={}",
                request_id,
                content.len()
            );
            EngineEvent::Ingested {
                request_id,
                source: IngestSource::Text,
                result: operations::ingest_text(gateway, &content).await,
            }
        }
        BackendCall::ListDocuments => EngineEvent::DocumentsListed {
            request_id,
            result: operations::list_documents(gateway).await,
        },
        BackendCall::Ask { question } => {
            research_debug!("ask request_id={} question={}", request_id, clip_for_log(&question));
            EngineEvent::Answered {
                request_id,
                result: operations::ask(gateway, &question).await,
            }
        }
    }
}

fn log_settlement(event: &EngineEvent) {
    let (request_id, failure) = match event {
        EngineEvent::Ingested {
            request_id, result, ..
        } => (request_id, result.as_ref().err()),
        EngineEvent::DocumentsListed { request_id, result } => (request_id, result.as_ref().err()),
        EngineEvent::Answered { request_id, result } => (request_id, result.as_ref().err()),
    };
    match failure {
        Some(err) => research_warn!("Request {} failed: {:?}", request_id, err),
        None => research_info!("Request {} settled", request_id),
    }
}
