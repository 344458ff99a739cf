//! Background writer for the diagnostic channel.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

use crate::config::{DiagConfig, DiagFormat};
use crate::diag::{stderr_is_safe_sink, DiagEvent};

enum Sink {
    File(File),
    Stderr(io::Stderr),
    Disabled,
}

pub(super) fn writer_loop(receiver: Receiver<DiagEvent>, config: DiagConfig) {
    let mut sink = open_sink(&config);

    while let Ok(event) = receiver.recv() {
        let line = match config.format {
            DiagFormat::Text => format_text(&event),
            DiagFormat::Json => format_json(&event),
        };
        match &mut sink {
            Sink::File(file) => {
                let _ = writeln!(file, "{}", line);
            }
            Sink::Stderr(stderr) => {
                let _ = writeln!(stderr, "{}", line);
            }
            Sink::Disabled => {}
        }
    }

    if let Sink::File(file) = &mut sink {
        let _ = file.flush();
    }
}

/// Opens the configured sink once; the config never changes afterwards.
///
/// A file path wins over stderr. Without a file, stderr is used only when
/// it is not a terminal. A file that cannot be created disables the sink
/// rather than failing the thread.
fn open_sink(config: &DiagConfig) -> Sink {
    if let Some(path) = &config.file {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        return match File::create(&path) {
            Ok(file) => Sink::File(file),
            Err(_) => Sink::Disabled,
        };
    }

    if stderr_is_safe_sink() {
        Sink::Stderr(io::stderr())
    } else {
        Sink::Disabled
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn format_text(event: &DiagEvent) -> String {
    format!(
        "{} v{} [{}] {}",
        format_timestamp(event.timestamp),
        event.verbosity,
        event.category.as_str(),
        event.message
    )
}

fn format_json(event: &DiagEvent) -> String {
    let value = json!({
        "ts": format_timestamp(event.timestamp),
        "verbosity": event.verbosity,
        "category": event.category.as_str(),
        "message": event.message,
    });
    value.to_string()
}

fn format_timestamp(timestamp: SystemTime) -> String {
    let duration = timestamp.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}
