//! Match script format and runner configuration.

use anyhow::Context;
use kuba_core::PlayerSetup;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A complete scripted match: who plays, and every move in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScript {
    /// First entry takes the top-left/bottom-right corners
    pub players: [PlayerSetup; 2],
    pub moves: Vec<ScriptedMove>,
}

/// One move as written in a script.
///
/// The direction stays as text so a malformed one is reported by the game
/// like any other illegal move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedMove {
    pub player: String,
    pub row: i32,
    pub col: i32,
    pub direction: String,
}

impl MatchScript {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and parse a script file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read match script {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("failed to parse match script {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no match script given (pass a path or set KUBA_SCRIPT)")]
    MissingScript,

    #[error("KUBA_STOP_ON_REJECT must be true or false, got {0:?}")]
    InvalidFlag(String),
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub script: PathBuf,
    /// Abort the match at the first rejected move
    pub stop_on_reject: bool,
}

impl RunnerConfig {
    /// Build from the process arguments and environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var("KUBA_SCRIPT").ok(),
            std::env::var("KUBA_STOP_ON_REJECT").ok(),
        )
    }

    /// A positional argument wins over `KUBA_SCRIPT`
    fn resolve(
        arg: Option<String>,
        script_var: Option<String>,
        stop_var: Option<String>,
    ) -> Result<Self, ConfigError> {
        let script = arg
            .or(script_var)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingScript)?;

        let stop_on_reject = match stop_var.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            Some(v) => return Err(ConfigError::InvalidFlag(v.to_string())),
        };

        Ok(Self {
            script,
            stop_on_reject,
        })
    }
}
