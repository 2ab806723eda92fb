use research_core::{AnswerView, AppViewModel, DocumentsView, IngestView, NoticeKind, QaView};

use super::constants::SUMMARY_PREVIEW_CHARS;

/// Renders the whole view as shell lines, panel by panel.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    render_ingest(&mut lines, &view.ingest);
    lines.push(String::new());
    render_documents(&mut lines, &view.documents);
    lines.push(String::new());
    render_qa(&mut lines, &view.qa);
    lines
}

fn render_ingest(lines: &mut Vec<String>, ingest: &IngestView) {
    lines.push("== Collect Sources ==".to_string());
    lines.push("Add web pages or paste text. We'll summarize them for later use.".to_string());
    lines.push(format!("  URL:  {}", or_dash(&ingest.url_input)));
    let text = match ingest.text_input.chars().count() {
        0 => "-".to_string(),
        count => format!("{count} chars ready"),
    };
    lines.push(format!("  Text: {text}"));
    if !ingest.submit_enabled {
        lines.push("  Submitting... (Add URL / Add Text unavailable)".to_string());
    }
    if let Some(notice) = &ingest.notice {
        let marker = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Failure => "!!",
        };
        lines.push(format!("  [{marker}] {}", notice.text));
    }
}

fn render_documents(lines: &mut Vec<String>, documents: &DocumentsView) {
    lines.push("== Collected Documents ==".to_string());
    match documents {
        DocumentsView::Loading => lines.push("Loading...".to_string()),
        DocumentsView::Empty => lines.push("No documents yet.".to_string()),
        DocumentsView::Listed(items) => {
            for doc in items {
                match &doc.url {
                    Some(url) => lines.push(format!("- {} • {}", doc.source_type, url)),
                    None => lines.push(format!("- {}", doc.source_type)),
                }
                if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
                    lines.push(format!("    {}", summary_preview(summary, SUMMARY_PREVIEW_CHARS)));
                }
            }
        }
    }
}

fn render_qa(lines: &mut Vec<String>, qa: &QaView) {
    lines.push("== Ask the Agents ==".to_string());
    lines.push(
        "Questions are answered by a small team: collector → rephraser → answerer.".to_string(),
    );
    lines.push(format!("  Question: {}", or_dash(&qa.question)));

    lines.push("-- Agents Conversation --".to_string());
    if qa.steps.is_empty() {
        lines.push("No steps yet.".to_string());
    }
    for (i, step) in qa.steps.iter().enumerate() {
        lines.push(format!("{}. [{}] {}", i + 1, step.agent, step.action));
        for snippet in step.snippets.iter().flatten() {
            lines.push(format!("     • {snippet}"));
        }
    }

    lines.push("-- Answer --".to_string());
    match &qa.answer {
        AnswerView::Thinking => lines.push("Thinking…".to_string()),
        AnswerView::Text(text) if !text.is_empty() => {
            lines.extend(text.lines().map(str::to_string));
        }
        AnswerView::Placeholder | AnswerView::Text(_) => {
            lines.push("Ask a question to see the answer here.".to_string());
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Collapses whitespace and clamps to `max_chars`, marking the cut with `…`.
fn summary_preview(summary: &str, max_chars: usize) -> String {
    let collapsed = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", collapsed[..cut].trim_end()),
        None => collapsed,
    }
}
