use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub diag: DiagConfig,
}

/// Counter defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Initial counter value when `--initial` is not given.
    #[serde(default)]
    pub initial: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { initial: 0 }
    }
}

/// Event-loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

/// Diagnostic side-channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagConfig {
    /// Highest verbosity written: 0 silences the channel, 1 keeps render
    /// events, 2 keeps computation detail as well.
    #[serde(default = "default_diag_level")]
    pub level: u8,
    /// Line format for the sink.
    #[serde(default)]
    pub format: DiagFormat,
    /// Sink file, created fresh each run. When unset, lines go to
    /// stderr, and only if stderr is redirected away from the terminal.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            level: default_diag_level(),
            format: DiagFormat::default(),
            file: None,
        }
    }
}

/// Diagnostic sink line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagFormat {
    #[default]
    Text,
    Json,
}

fn default_tick_ms() -> u64 {
    250
}

fn default_diag_level() -> u8 {
    2
}
