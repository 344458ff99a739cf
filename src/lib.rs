//! Terminal counter with a one-time primality check on its initial value.
//!
//! The UI is a ratatui application structured around MVI features: pure
//! reducers move state, the shell dispatches intents and owns the side
//! effects (diag lines, redraw scheduling, the counter remount).

pub mod cli;
pub mod config;
pub mod diag;
pub mod primes;
pub mod shutdown;
pub mod trace;
pub mod ui;
