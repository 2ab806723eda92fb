pub const PROMPT: &str = "> ";
pub const TEXT_BLOCK_PROMPT: &str = ".. ";
/// A line holding only this ends a multi-line `text` block.
pub const TEXT_BLOCK_END: &str = ".";

pub const HEALTH_CHECK_PATH: &str = "/test";
pub const DOCS_URL: &str = "https://google.com";

/// Summaries are clamped to this many chars in the document list.
pub const SUMMARY_PREVIEW_CHARS: usize = 240;

pub const HELP: &str = "\
Commands:
  url <address>     add a web page (plain `url` resubmits the current input)
  text <content>    add pasted text; plain `text` starts a block ended by a lone `.`
  ask <question>    ask the agents (plain `ask` asks the current question)
  refresh           reload the document list
  links             show navigation links
  help              show this help
  quit              leave";
