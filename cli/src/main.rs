use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use votes::view::{Role, test_id};
use votes::{Aspect, Direction, VoteError};

mod script;
mod session;

use crate::script::ScriptError;
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("line {line}: {source}")]
    Script { line: usize, source: ScriptError },
    #[error("line {line}: {source}")]
    Vote { line: usize, source: VoteError },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed with HTTP {0}")]
    Unhealthy(u16),
}

#[derive(Parser, Debug)]
#[command(name = "crf-cli", about = "Headless driver for the code-review feedback board")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a vote script against a fresh board on a virtual clock.
    Run {
        /// Script file, or `-` for stdin.
        #[arg(long, default_value = "-")]
        script: PathBuf,
        /// Print the final board as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List aspects with their indices and element identifiers.
    Aspects,
    /// Check that a running host answers its health check.
    Ping {
        #[arg(long, env = "CRF_BASE_URL", default_value = "http://127.0.0.1:3000")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    match Cli::parse().command {
        Command::Run { script, json } => run_script(&script, json),
        Command::Aspects => {
            list_aspects();
            Ok(())
        }
        Command::Ping { base_url } => run_ping(&base_url).await,
    }
}

fn run_script(path: &Path, json: bool) -> Result<(), CliError> {
    let source = read_script(path)?;
    let lines = script::parse(&source).map_err(|(line, source)| CliError::Script { line, source })?;

    let mut session = Session::new();
    let shown = session
        .run(&lines)
        .map_err(|(line, source)| CliError::Vote { line, source })?;
    print!("{shown}");

    if json {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
    } else {
        print!("{}", session.render());
    }
    session.close();
    Ok(())
}

fn read_script(path: &Path) -> Result<String, CliError> {
    let display = path.display().to_string();
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Read { path: display, source })?;
        return Ok(source);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read { path: display, source })
}

fn list_aspects() {
    for aspect in Aspect::ALL {
        let index = aspect.index();
        let ids = Direction::ALL
            .into_iter()
            .flat_map(|d| [test_id(d, Role::Button, index), test_id(d, Role::Count, index)])
            .collect::<Vec<_>>()
            .join(" ");
        println!("{index}  {:<13} {ids}", aspect.label());
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let status = reqwest::get(url).await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}
