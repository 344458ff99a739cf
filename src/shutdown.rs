use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Process-wide shutdown flag.
///
/// Set by SIGTERM/SIGINT handlers or by the UI's quit path; the event
/// thread polls it and converts it into a quit event.
#[derive(Clone)]
pub struct ShutdownFlag {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Registers SIGTERM and SIGINT handlers that set the flag.
    pub fn register_signals(&self) -> std::io::Result<()> {
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.shutdown))?;
        signal_hook::flag::register(SIGINT, Arc::clone(&self.shutdown))?;
        Ok(())
    }

    pub fn signal(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

impl Default for ShutdownFlag {
    fn default() -> Self {
        Self::new()
    }
}
