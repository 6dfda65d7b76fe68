//! `chat-url`: turn an agent chat window input document into a widget URL.
//!
//! Reads JSON from a file or standard input, re-serializes it compactly, and
//! prints `<base-url>?encoded=<base64>` (or `?data=<json>`). Hints go to
//! stderr so the URL alone can be piped.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use payload::{AgentChatWindowInput, QueryParam};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to read standard input: {0}")]
    Stdin(io::Error),
    #[error("input is empty")]
    EmptyInput,
    #[error("invalid JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("JSON does not match the widget input schema: {0}")]
    Schema(serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chat-url", about = "Generate agent chat window URLs from JSON input")]
struct Cli {
    /// JSON file to encode, or `-` for standard input.
    #[arg(default_value = "-")]
    input: String,

    #[arg(long, env = "COMPONENT_URL", default_value = "https://your-deployment-url.com")]
    base_url: String,

    /// Query parameter to carry the payload in.
    #[arg(long, value_enum, default_value_t = Mode::Encoded)]
    mode: Mode,

    /// Also validate the document against the widget input schema.
    #[arg(long, default_value_t = false)]
    check: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Base64 JSON in `?encoded=`.
    Encoded,
    /// Percent-encoded JSON in `?data=`.
    Data,
}

impl From<Mode> for QueryParam {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encoded => Self::Encoded,
            Mode::Data => Self::Data,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(url) => {
            println!("{url}");
            eprintln!("Use this URL to render the chat window with the supplied data.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let raw = read_input(&cli.input)?;
    build_url(cli, &raw)
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(CliError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_owned(),
        source,
    })
}

fn build_url(cli: &Cli, raw: &str) -> Result<String, CliError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CliError::EmptyInput);
    }
    let value: Value = serde_json::from_str(raw).map_err(CliError::InvalidJson)?;
    if cli.check {
        serde_json::from_value::<AgentChatWindowInput>(value.clone()).map_err(CliError::Schema)?;
    }
    Ok(payload::widget_url(&cli.base_url, cli.mode.into(), &value.to_string()))
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
