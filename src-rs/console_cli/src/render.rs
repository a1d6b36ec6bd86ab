use std::io::{self, Write};

use lab_console_rs::actions::ActionSchema;
use lab_console_rs::dispatch::Field;

use crate::cli::CLIConfig;
use crate::models::Exchange;

pub fn banner(cfg: &CLIConfig) {
    println!("Lab Console");
    println!("API: {}", cfg.base_url);
    println!("Type source lines, then /act <kind>. /help for commands.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                 Show commands");
    println!("  /exit | /quit         Exit");
    println!("  /act <kind>           Send src to /api/<kind>");
    println!("  /actions              List server actions");
    println!("  /src                  Show the src field");
    println!("  /out                  Show the out field");
    println!("  /log                  Show the log field");
    println!("  /clear                Empty the src field");
    println!("  /load <path>          Replace src with a file");
    println!("  /history              Show past exchanges");
    println!("  /base <url>           Update base URL");
    println!("  /config               Show current config");
}

pub fn field(field: &Field) {
    println!("[{}]", field.name());
    let text = field.text();
    if !text.is_empty() {
        println!("{}", text);
    }
}

pub fn actions(items: &[ActionSchema]) {
    if items.is_empty() {
        println!("no actions");
        return;
    }
    for item in items {
        println!("  {:<10} {}", item.name, item.description);
    }
}

pub fn history(items: &[Exchange]) {
    if items.is_empty() {
        println!("no history");
        return;
    }
    for item in items {
        let outcome = match &item.outcome {
            Ok(()) => "ok".to_string(),
            Err(err) => format!("failed: {}", err),
        };
        println!("{} {} {}", item.at.format("%H:%M:%S"), item.kind, outcome);
    }
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  debug: {}", cfg.debug);
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
