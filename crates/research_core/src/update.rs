use crate::{AppState, Effect, IngestKind, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => state.sync_roster().into_iter().collect(),
        Msg::UrlInputChanged(value) => {
            edit(&mut state, |s| s.ingest_mut().set_input(IngestKind::Url, value));
            Vec::new()
        }
        Msg::TextInputChanged(value) => {
            edit(&mut state, |s| s.ingest_mut().set_input(IngestKind::Text, value));
            Vec::new()
        }
        Msg::QuestionChanged(value) => {
            edit(&mut state, |s| s.qa_mut().set_question(value));
            Vec::new()
        }
        Msg::UrlSubmitted => submit_ingest(&mut state, IngestKind::Url),
        Msg::TextSubmitted => submit_ingest(&mut state, IngestKind::Text),
        Msg::IngestSettled { kind, result, .. } => {
            let added = state.ingest_mut().settle(kind, result);
            state.mark_dirty();
            if added {
                state.publish_change();
            }
            state.sync_roster().into_iter().collect()
        }
        Msg::RefreshClicked => vec![state.start_load()],
        Msg::DocumentsSettled { result, .. } => {
            state.roster_mut().settle(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::AskSubmitted => match state.qa_mut().begin() {
            Some(question) => {
                let request_id = state.next_request_id();
                state.mark_dirty();
                vec![Effect::Ask {
                    request_id,
                    question,
                }]
            }
            None => Vec::new(),
        },
        Msg::AnswerSettled { result, .. } => {
            state.qa_mut().settle(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn edit(state: &mut AppState, apply: impl FnOnce(&mut AppState)) {
    apply(state);
    state.mark_dirty();
}

fn submit_ingest(state: &mut AppState, kind: IngestKind) -> Vec<Effect> {
    let Some(payload) = state.ingest_mut().begin(kind) else {
        return Vec::new();
    };
    let request_id = state.next_request_id();
    state.mark_dirty();
    let effect = match kind {
        IngestKind::Url => Effect::IngestUrl {
            request_id,
            url: payload,
        },
        IngestKind::Text => Effect::IngestText {
            request_id,
            content: payload,
        },
    };
    vec![effect]
}
