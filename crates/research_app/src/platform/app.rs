use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use research_core::{update, AppState, Effect, Msg};
use research_logging::{research_debug, research_info};
use url::Url;

use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::constants::{DOCS_URL, HEALTH_CHECK_PATH, HELP, PROMPT, TEXT_BLOCK_PROMPT};
use super::ui::input::{Command, InputReader};
use crate::config::AppConfig;

/// Everything the shell loop reacts to, in arrival order.
#[derive(Debug)]
pub enum Inbound {
    /// A core message, usually a backend settlement.
    Msg(Msg),
    /// A line typed by the user.
    Line(String),
    /// Standard input closed.
    Eof,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log_destination, config.log_level);
    research_info!("Starting research desk against {}", config.backend_url);

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbound>();
    let runner = EffectRunner::new(config.gateway_settings(), inbox_tx.clone())
        .context("failed to start the backend engine")?;
    spawn_stdin_reader(inbox_tx);

    let stdout = io::stdout();
    let mut shell = Shell::new(runner, stdout.lock(), config.backend_url);
    shell.greet()?;
    shell.dispatch_all(vec![Msg::Started])?;
    shell.prompt()?;

    // Single consumer: every state change happens on this thread, one inbound at a time.
    for inbound in inbox_rx {
        let flow = match inbound {
            Inbound::Msg(msg) => {
                if shell.dispatch_all(vec![msg])? {
                    shell.prompt()?;
                }
                Flow::Continue
            }
            Inbound::Line(line) => shell.handle_line(&line)?,
            Inbound::Eof => Flow::Quit,
        };
        if flow == Flow::Quit {
            break;
        }
    }

    research_info!("Research desk closed");
    Ok(())
}

fn spawn_stdin_reader(inbox: mpsc::Sender<Inbound>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if inbox.send(Inbound::Line(line)).is_err() {
                return;
            }
        }
        let _ = inbox.send(Inbound::Eof);
    });
}

/// Runs the effects produced by `update`.
pub trait EffectExecutor {
    fn execute(&self, effects: Vec<Effect>);
}

impl EffectExecutor for EffectRunner {
    fn execute(&self, effects: Vec<Effect>) {
        self.run(effects);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// View root host: feeds messages through `update`, runs effects, and
/// re-renders when the state is dirty.
pub struct Shell<E: EffectExecutor, W: Write> {
    state: AppState,
    executor: E,
    out: W,
    input: InputReader,
    backend_url: Url,
}

impl<E: EffectExecutor, W: Write> Shell<E, W> {
    pub fn new(executor: E, out: W, backend_url: Url) -> Self {
        Self {
            state: AppState::new(),
            executor,
            out,
            input: InputReader::new(),
            backend_url,
        }
    }

    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Research Agents")?;
        writeln!(self.out, "{HELP}")?;
        writeln!(self.out)
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match self.input.feed(line) {
            Command::Dispatch(msgs) => {
                self.dispatch_all(msgs)?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Links => {
                let health = health_check_url(&self.backend_url);
                writeln!(self.out, "Health Check: {health}")?;
                writeln!(self.out, "Docs: {DOCS_URL}")?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Continue => {}
            Command::Unknown(word) => {
                writeln!(self.out, "Unknown command {word:?}; type `help` for commands.")?;
            }
        }
        self.prompt()?;
        Ok(Flow::Continue)
    }

    /// Applies each message in order, then renders once if anything changed.
    /// Returns whether it rendered; the caller owns the prompt.
    pub fn dispatch_all(&mut self, msgs: Vec<Msg>) -> io::Result<bool> {
        for msg in msgs {
            research_debug!("Dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            self.executor.execute(effects);
        }
        if !self.state.consume_dirty() {
            return Ok(false);
        }
        writeln!(self.out)?;
        for line in ui::render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        Ok(true)
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        let prompt = if self.input.in_text_block() {
            TEXT_BLOCK_PROMPT
        } else {
            PROMPT
        };
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }
}

/// The health check page sits under the backend base path, like the API routes.
fn health_check_url(backend_url: &Url) -> String {
    format!("{}{}", backend_url.as_str().trim_end_matches('/'), HEALTH_CHECK_PATH)
}
