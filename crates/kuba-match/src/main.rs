//! Kuba scripted match runner.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod runner;
mod script;

use script::{MatchScript, RunnerConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunnerConfig::from_env()?;
    info!(script = %config.script.display(), "Loading match script...");

    let script = MatchScript::load(&config.script)?;
    let report = runner::run_match(&script, config.stop_on_reject)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
