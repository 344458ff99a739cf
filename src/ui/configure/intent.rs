//! Intents for the configure dialog.

use crate::ui::mvi::Intent;

/// User actions while choosing a new initial counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureIntent {
    /// Open the dialog with an empty buffer.
    Open,
    /// A character typed into the buffer. Non-digits are ignored except
    /// a leading minus.
    Input(char),
    /// Delete the last buffered character.
    Backspace,
    /// Parse the buffer and submit it as the new initial value.
    Submit,
    /// Close the dialog without touching the counter.
    Cancel,
}

impl Intent for ConfigureIntent {}
