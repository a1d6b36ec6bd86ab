use std::sync::Arc;

use lab_console_rs::{DispatchError, Dispatcher, Page};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::CLIConfig;
use crate::models::Exchange;
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub page: Arc<Page>,
    pub dispatcher: Dispatcher,
    pub history: Vec<Exchange>,
}

impl REPL {
    pub fn new(config: CLIConfig, page: Arc<Page>) -> Self {
        let dispatcher = Dispatcher::new(&config.base_url, page.clone());
        Self {
            config,
            page,
            dispatcher,
            history: Vec::new(),
        }
    }

    pub async fn run(&mut self) {
        render::banner(&self.config);
        let mut lines = BufReader::new(io::stdin()).lines();
        loop {
            render::prompt();
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) | Err(_) => break,
            };
            match parse_command(&line) {
                Some((cmd, rest)) => {
                    if self.handle_command(cmd, rest).await {
                        break;
                    }
                }
                None => self.page.src.push_line(line.trim_end()),
            }
        }
    }

    async fn handle_command(&mut self, cmd: &str, rest: &str) -> bool {
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "act" => {
                if rest.is_empty() {
                    render::error("usage: /act <kind>");
                } else if self.act(rest).await.is_ok() {
                    render::field(&self.page.out);
                    render::field(&self.page.log);
                }
            }
            "actions" => match self.dispatcher.list_actions().await {
                Ok(items) => render::actions(&items),
                Err(err) => render::error(&err.to_string()),
            },
            "src" => render::field(&self.page.src),
            "out" => render::field(&self.page.out),
            "log" => render::field(&self.page.log),
            "clear" => {
                self.page.src.set_text("");
                render::info("src cleared");
            }
            "load" => {
                if rest.is_empty() {
                    render::error("usage: /load <path>");
                } else {
                    match tokio::fs::read_to_string(rest).await {
                        Ok(text) => {
                            self.page.src.set_text(text);
                            render::info("src loaded");
                        }
                        Err(err) => render::error(&format!("{}: {}", rest, err)),
                    }
                }
            }
            "history" => render::history(&self.history),
            "config" => render::config(&self.config),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    self.config.base_url = rest.to_string();
                    self.dispatcher = Dispatcher::new(&self.config.base_url, self.page.clone());
                    render::info("base url updated");
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    /// Runs one exchange and records it. Fields are left as they were on failure.
    pub async fn act(&mut self, kind: &str) -> Result<(), DispatchError> {
        debug!(kind = kind, "act");
        let result = self.dispatcher.act(kind).await;
        let outcome = match &result {
            Ok(_) => Ok(()),
            Err(err) => {
                render::error(&err.to_string());
                Err(err.to_string())
            }
        };
        self.history.push(Exchange::new(kind, outcome));
        result.map(|_| ())
    }
}

const COMMANDS: &[&str] = &[
    "exit", "quit", "help", "act", "actions", "src", "out", "log", "clear", "load", "history",
    "config", "base",
];

/// Splits `/<command> <rest>`. Anything else, `// comments` included, is source text.
fn parse_command(line: &str) -> Option<(&str, &str)> {
    let body = line.trim().strip_prefix('/')?;
    let (cmd, rest) = match body.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (body, ""),
    };
    if COMMANDS.contains(&cmd) {
        Some((cmd, rest))
    } else {
        None
    }
}
