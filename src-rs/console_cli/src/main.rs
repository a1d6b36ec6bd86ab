mod cli;
mod models;
mod render;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use lab_console_rs::{logging, Page};
use repl::REPL;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> ExitCode {
    let config = cli::parse_config();
    logging::init(if config.debug { "debug" } else { "warn" });

    let page = Arc::new(Page::new());
    if let Some(path) = &config.src_file {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => page.src.set_text(text),
            Err(err) => {
                render::error(&format!("{}: {}", path.display(), err));
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(kind) = config.act.clone() else {
        let mut repl = REPL::new(config, page);
        repl.run().await;
        return ExitCode::SUCCESS;
    };

    // One-shot without --src reads the payload from stdin.
    if config.src_file.is_none() {
        let mut text = String::new();
        if let Err(err) = tokio::io::stdin().read_to_string(&mut text).await {
            render::error(&err.to_string());
            return ExitCode::FAILURE;
        }
        page.src.set_text(text);
    }

    let mut repl = REPL::new(config, page.clone());
    if repl.act(&kind).await.is_err() {
        return ExitCode::FAILURE;
    }
    println!("{}", page.out.text());
    let log = page.log.text();
    if !log.is_empty() {
        eprintln!("{}", log);
    }
    ExitCode::SUCCESS
}
