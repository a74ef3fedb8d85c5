use std::env;
use std::process::ExitCode;

use anyhow::Context;
use dotenvy::dotenv;
use thiserror::Error;
use tracing::debug;

mod classify;
mod config;
mod detect;
mod logging;
mod record;

use config::{default_config_path, read_config};
use record::build_record;

#[derive(Debug, Error)]
#[error("missing prompt")]
struct MissingPromptArgument;

fn run() -> anyhow::Result<()> {
    let prompt = env::args().nth(1).ok_or(MissingPromptArgument)?;
    let original_prompt = env::var("ORIGINAL_PROMPT").unwrap_or_default();
    let used_prompt = env::var("USED_PROMPT").unwrap_or_default();

    let config_path = default_config_path();
    let cfg = read_config(&config_path);
    debug!(
        "Loaded {} config entries from {}",
        cfg.len(),
        config_path.display()
    );

    let record = build_record(&prompt, &original_prompt, &used_prompt, &cfg);
    let line = serde_json::to_string(&record).context("serialize request record")?;
    println!("{line}");
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    logging::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
