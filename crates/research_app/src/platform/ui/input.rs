use research_core::Msg;

use super::constants::TEXT_BLOCK_END;

/// What a line typed into the shell asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Links,
    Quit,
    /// Nothing to do yet (blank line, or a line inside a text block).
    Continue,
    Unknown(String),
}

/// Turns shell lines into core messages. Holds the open multi-line text block, if any.
#[derive(Debug, Default)]
pub struct InputReader {
    text_block: Option<Vec<String>>,
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_text_block(&self) -> bool {
        self.text_block.is_some()
    }

    pub fn feed(&mut self, line: &str) -> Command {
        let line = line.trim_end_matches(['\r', '\n']);
        match self.text_block.as_mut() {
            Some(block) if line.trim() != TEXT_BLOCK_END => {
                block.push(line.to_string());
                return Command::Continue;
            }
            Some(_) => {}
            None => return self.parse_command(line),
        }

        let lines = self.text_block.take().unwrap_or_default();
        if lines.is_empty() {
            Command::Dispatch(vec![Msg::TextSubmitted])
        } else {
            Command::Dispatch(vec![
                Msg::TextInputChanged(lines.join("\n")),
                Msg::TextSubmitted,
            ])
        }
    }

    fn parse_command(&mut self, line: &str) -> Command {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Command::Continue,
            "url" => submit(rest, Msg::UrlInputChanged, Msg::UrlSubmitted),
            "text" if rest.is_empty() => {
                self.text_block = Some(Vec::new());
                Command::Continue
            }
            "text" => submit(rest, Msg::TextInputChanged, Msg::TextSubmitted),
            "ask" => submit(rest, Msg::QuestionChanged, Msg::AskSubmitted),
            "refresh" => Command::Dispatch(vec![Msg::RefreshClicked]),
            "links" => Command::Links,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// With an argument: replace the input, then submit. Without: submit what is there.
fn submit(rest: &str, edit: fn(String) -> Msg, submitted: Msg) -> Command {
    if rest.is_empty() {
        Command::Dispatch(vec![submitted])
    } else {
        Command::Dispatch(vec![edit(rest.to_string()), submitted])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn url_with_argument_sets_and_submits() {
        let mut reader = InputReader::new();
        assert_eq!(
            reader.feed("url https://example.com\n"),
            Command::Dispatch(vec![
                Msg::UrlInputChanged("https://example.com".to_string()),
                Msg::UrlSubmitted,
            ])
        );
    }

    #[test]
    fn bare_commands_resubmit_current_input() {
        let mut reader = InputReader::new();
        assert_eq!(reader.feed("url"), Command::Dispatch(vec![Msg::UrlSubmitted]));
        assert_eq!(reader.feed("ASK"), Command::Dispatch(vec![Msg::AskSubmitted]));
    }

    #[test]
    fn ask_keeps_the_whole_question() {
        let mut reader = InputReader::new();
        assert_eq!(
            reader.feed("ask What are the key points?"),
            Command::Dispatch(vec![
                Msg::QuestionChanged("What are the key points?".to_string()),
                Msg::AskSubmitted,
            ])
        );
    }

    #[test]
    fn text_block_collects_lines_until_terminator() {
        let mut reader = InputReader::new();
        assert_eq!(reader.feed("text"), Command::Continue);
        assert!(reader.in_text_block());
        assert_eq!(reader.feed("first line"), Command::Continue);
        assert_eq!(reader.feed("  indented"), Command::Continue);
        assert_eq!(
            reader.feed(".\r\n"),
            Command::Dispatch(vec![
                Msg::TextInputChanged("first line\n  indented".to_string()),
                Msg::TextSubmitted,
            ])
        );
        assert!(!reader.in_text_block());
    }

    #[test]
    fn commands_are_not_parsed_inside_a_text_block() {
        let mut reader = InputReader::new();
        reader.feed("text");
        assert_eq!(reader.feed("quit"), Command::Continue);
        assert_eq!(
            reader.feed("."),
            Command::Dispatch(vec![
                Msg::TextInputChanged("quit".to_string()),
                Msg::TextSubmitted,
            ])
        );
    }

    #[test]
    fn misc_commands() {
        let mut reader = InputReader::new();
        assert_eq!(reader.feed("   "), Command::Continue);
        assert_eq!(reader.feed("refresh"), Command::Dispatch(vec![Msg::RefreshClicked]));
        assert_eq!(reader.feed("links"), Command::Links);
        assert_eq!(reader.feed("help"), Command::Help);
        assert_eq!(reader.feed("exit"), Command::Quit);
        assert_eq!(reader.feed("delete 3"), Command::Unknown("delete".to_string()));
    }
}
