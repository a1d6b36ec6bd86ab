use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "lab-console-cli", version, about = "Console for the lab action server")]
pub struct CLIConfig {
    /// Server base URL
    #[arg(long = "base", env = "LAB_CONSOLE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// File to preload into the src field
    #[arg(long = "src")]
    pub src_file: Option<PathBuf>,

    /// Run a single action and exit
    #[arg(long = "act", value_name = "KIND")]
    pub act: Option<String>,

    #[arg(long, env = "LAB_CONSOLE_DEBUG", default_value_t = false)]
    pub debug: bool,
}

pub fn parse_config() -> CLIConfig {
    CLIConfig::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_flags() {
        let cfg = CLIConfig::try_parse_from([
            "lab-console-cli",
            "--base",
            "http://127.0.0.1:9000",
            "--src",
            "prog.txt",
            "--act",
            "memi",
        ])
        .unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.src_file, Some(PathBuf::from("prog.txt")));
        assert_eq!(cfg.act.as_deref(), Some("memi"));
    }
}
