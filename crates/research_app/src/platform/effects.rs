use std::sync::{mpsc, Arc};

use research_core::{AgentStep, AskResult, Document, Effect, IngestKind, Msg};
use research_engine::{
    AgentStepRecord, AskReply, BackendCall, DocumentRecord, EngineError, EngineEvent,
    EngineHandle, EventSink, GatewaySettings, IngestSource,
};
use research_logging::{clip_for_log, research_error, research_info};

use super::app::Inbound;

const ENGINE_STOPPED: &str = "Request could not be sent: engine stopped";

/// Executes core effects on the engine and feeds settlements back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    inbox: mpsc::Sender<Inbound>,
}

impl EffectRunner {
    pub fn new(
        settings: GatewaySettings,
        inbox: mpsc::Sender<Inbound>,
    ) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink {
            inbox: inbox.clone(),
        });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self { engine, inbox })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let request_id = effect.request_id();
            match &effect {
                Effect::IngestUrl { url, .. } => {
                    research_info!(
                        "IngestUrl request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        clip_for_log(url)
                    );
                }
                Effect::IngestText { content, .. } => {
                    research_info!(
                        "IngestText request_id={} content_len={}",
                        request_id,
                        content.len()
                    );
                }
                Effect::LoadDocuments { .. } => {
                    research_info!("LoadDocuments request_id={}", request_id);
                }
                Effect::Ask { question, .. } => {
                    research_info!(
                        "Ask request_id={} question={}",
                        request_id,
                        clip_for_log(question)
                    );
                }
            }
            if !self.engine.dispatch(request_id, to_call(&effect)) {
                research_error!("Engine stopped; failing request {}", request_id);
                let _ = self
                    .inbox
                    .send(Inbound::Msg(undeliverable(&effect, ENGINE_STOPPED)));
            }
        }
    }
}

struct MsgSink {
    inbox: mpsc::Sender<Inbound>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.inbox.send(Inbound::Msg(to_msg(event)));
    }
}

fn to_call(effect: &Effect) -> BackendCall {
    match effect {
        Effect::IngestUrl { url, .. } => BackendCall::IngestUrl { url: url.clone() },
        Effect::IngestText { content, .. } => BackendCall::IngestText {
            content: content.clone(),
        },
        Effect::LoadDocuments { .. } => BackendCall::ListDocuments,
        Effect::Ask { question, .. } => BackendCall::Ask {
            question: question.clone(),
        },
    }
}

/// The settlement reported when an effect never reached the backend.
fn undeliverable(effect: &Effect, message: &str) -> Msg {
    let request_id = effect.request_id();
    let result = Err(message.to_string());
    match effect {
        Effect::IngestUrl { .. } => Msg::IngestSettled {
            request_id,
            kind: IngestKind::Url,
            result,
        },
        Effect::IngestText { .. } => Msg::IngestSettled {
            request_id,
            kind: IngestKind::Text,
            result,
        },
        Effect::LoadDocuments { .. } => Msg::DocumentsSettled {
            request_id,
            result: Err(message.to_string()),
        },
        Effect::Ask { .. } => Msg::AnswerSettled {
            request_id,
            result: Err(message.to_string()),
        },
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Ingested {
            request_id,
            source,
            result,
        } => Msg::IngestSettled {
            request_id,
            kind: map_source(source),
            result: result.map(|_receipt| ()).map_err(|err| err.to_string()),
        },
        EngineEvent::DocumentsListed { request_id, result } => Msg::DocumentsSettled {
            request_id,
            result: result
                .map(|records| records.into_iter().map(to_document).collect())
                .map_err(|err| err.to_string()),
        },
        EngineEvent::Answered { request_id, result } => Msg::AnswerSettled {
            request_id,
            result: result.map(to_ask_result).map_err(|err| err.to_string()),
        },
    }
}

fn map_source(source: IngestSource) -> IngestKind {
    match source {
        IngestSource::Url => IngestKind::Url,
        IngestSource::Text => IngestKind::Text,
    }
}

fn to_document(record: DocumentRecord) -> Document {
    Document {
        id: record.id,
        source_type: record.source_type,
        url: record.url,
        summary: record.summary,
    }
}

fn to_ask_result(reply: AskReply) -> AskResult {
    AskResult {
        answer: reply.answer,
        steps: reply.steps.into_iter().map(to_step).collect(),
    }
}

fn to_step(record: AgentStepRecord) -> AgentStep {
    AgentStep {
        agent: record.agent,
        action: record.action,
        snippets: record.snippets,
    }
}
