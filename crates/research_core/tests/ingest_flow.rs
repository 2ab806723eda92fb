use std::sync::Once;

use pretty_assertions::assert_eq;
use research_core::{
    update, AppState, DocumentsView, Effect, IngestKind, Msg, NoticeKind, RequestState,
    TEXT_INGESTED, URL_INGESTED,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(research_logging::initialize_for_tests);
}

/// A started view with the initial roster load already settled.
fn started() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let request_id = effects[0].request_id();
    let (mut state, _) = update(
        state,
        Msg::DocumentsSettled {
            request_id,
            result: Ok(Vec::new()),
        },
    );
    state.consume_dirty();
    state
}

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlInputChanged(input.to_string()));
    update(state, Msg::UrlSubmitted)
}

fn submit_text(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::TextInputChanged(input.to_string()));
    update(state, Msg::TextSubmitted)
}

fn settle(
    state: AppState,
    effect: &Effect,
    kind: IngestKind,
    result: Result<(), String>,
) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::IngestSettled {
            request_id: effect.request_id(),
            kind,
            result,
        },
    )
}

#[test]
fn url_submission_sends_trimmed_url_and_gates_both_flows() {
    init_logging();
    let (state, effects) = submit_url(started(), "  https://example.com \n");

    assert_eq!(
        effects,
        vec![Effect::IngestUrl {
            request_id: 2,
            url: "https://example.com".to_string(),
        }]
    );
    assert!(state.ingest().flow(IngestKind::Url).is_pending());
    assert!(!state.view().ingest.submit_enabled);

    let (state, effects) = submit_text(state, "some pasted notes");
    assert!(effects.is_empty());
    assert_eq!(state.ingest().flow(IngestKind::Text), &RequestState::Idle);
}

#[test]
fn successful_url_ingest_clears_input_and_refreshes_roster_once() {
    init_logging();
    let state = started();
    let version_before = state.signal().version();
    let (state, effects) = submit_url(state, "https://example.com");
    let (mut state, effects) = settle(state, &effects[0], IngestKind::Url, Ok(()));

    let view = state.view();
    assert_eq!(view.ingest.url_input, "");
    assert_eq!(view.ingest.notice.as_ref().unwrap().text, URL_INGESTED);
    assert_eq!(view.ingest.notice.as_ref().unwrap().kind, NoticeKind::Success);
    assert!(view.ingest.submit_enabled);
    assert_eq!(view.change_version, version_before + 1);
    assert_eq!(view.documents, DocumentsView::Loading);
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::LoadDocuments { .. }));
    assert!(state.consume_dirty());

    // Nothing further happens until the signal moves again.
    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert_eq!(state.signal().version(), version_before + 1);
}

#[test]
fn successful_text_ingest_publishes_change() {
    init_logging();
    let (state, effects) = submit_text(started(), "  line one\nline two  ");
    assert_eq!(
        effects,
        vec![Effect::IngestText {
            request_id: 2,
            content: "  line one\nline two  ".to_string(),
        }]
    );

    let (state, effects) = settle(state, &effects[0], IngestKind::Text, Ok(()));
    assert_eq!(state.view().ingest.text_input, "");
    assert_eq!(state.view().ingest.notice.unwrap().text, TEXT_INGESTED);
    assert_eq!(state.signal().version(), 1);
    assert_eq!(effects, vec![Effect::LoadDocuments { request_id: 3 }]);
}

#[test]
fn failed_ingest_keeps_input_and_shows_message() {
    init_logging();
    let (state, effects) = submit_url(started(), "https://bad.example");
    let (state, follow_up) = settle(
        state,
        &effects[0],
        IngestKind::Url,
        Err("could not fetch page".to_string()),
    );

    let view = state.view();
    assert_eq!(view.ingest.url_input, "https://bad.example");
    let notice = view.ingest.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.text, "could not fetch page");
    assert!(view.ingest.submit_enabled);
    assert_eq!(state.signal().version(), 0);
    assert!(follow_up.is_empty());

    // The preserved buffer can be resubmitted as-is.
    let (state, effects) = update(state, Msg::UrlSubmitted);
    assert_eq!(effects.len(), 1);
    assert!(state.view().ingest.notice.is_none());
}

#[test]
fn blank_submissions_change_nothing() {
    init_logging();
    for input in ["", "   ", "\n\t "] {
        let (state, _) = update(started(), Msg::UrlInputChanged(input.to_string()));
        let (mut state, _) = update(state, Msg::TextInputChanged(input.to_string()));
        state.consume_dirty();
        let before = state.clone();

        let (state, url_effects) = update(state, Msg::UrlSubmitted);
        let (mut state, text_effects) = update(state, Msg::TextSubmitted);

        assert!(url_effects.is_empty());
        assert!(text_effects.is_empty());
        assert!(!state.consume_dirty());
        assert_eq!(state, before);
    }
}

#[test]
fn latest_outcome_message_wins() {
    init_logging();
    let (state, effects) = submit_url(started(), "https://a.example");
    let (state, _) = settle(state, &effects[0], IngestKind::Url, Err("Failed".to_string()));
    assert_eq!(state.view().ingest.notice.unwrap().text, "Failed");

    let (state, effects) = submit_text(state, "notes");
    let (state, _) = settle(state, &effects[0], IngestKind::Text, Ok(()));
    let notice = state.view().ingest.notice.unwrap();
    assert_eq!(notice.text, TEXT_INGESTED);
    // The URL buffer from the failed attempt is untouched by the text flow.
    assert_eq!(state.view().ingest.url_input, "https://a.example");
}

#[test]
fn change_signal_counts_every_success_exactly_once() {
    init_logging();
    let mut state = started();
    for (i, url) in ["https://one.example", "https://two.example", "https://three.example"]
        .into_iter()
        .enumerate()
    {
        let (next, effects) = submit_url(state, url);
        let (next, loads) = settle(next, &effects[0], IngestKind::Url, Ok(()));
        assert_eq!(next.signal().version(), i as u64 + 1);
        assert_eq!(loads.len(), 1);
        state = next;
    }
}
