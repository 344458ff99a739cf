//! Reducer for the configure dialog.

use std::num::IntErrorKind;

use crate::ui::mvi::Reducer;

use super::intent::ConfigureIntent;
use super::state::{ConfigureDialogState, MAX_INPUT_LEN};

pub struct ConfigureReducer;

impl Reducer for ConfigureReducer {
    type State = ConfigureDialogState;
    type Intent = ConfigureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfigureIntent::Open => ConfigureDialogState::Visible {
                buffer: String::new(),
                error: None,
            },
            ConfigureIntent::Cancel => ConfigureDialogState::Hidden,
            ConfigureIntent::Input(ch) => match state {
                ConfigureDialogState::Visible { mut buffer, error } => {
                    if accepts(&buffer, ch) {
                        buffer.push(ch);
                        ConfigureDialogState::Visible {
                            buffer,
                            error: None,
                        }
                    } else {
                        // Rejected input leaves the state untouched, so
                        // it never schedules a redraw.
                        ConfigureDialogState::Visible { buffer, error }
                    }
                }
                other => other,
            },
            ConfigureIntent::Backspace => match state {
                ConfigureDialogState::Visible { mut buffer, error } => {
                    if buffer.pop().is_some() {
                        ConfigureDialogState::Visible {
                            buffer,
                            error: None,
                        }
                    } else {
                        ConfigureDialogState::Visible { buffer, error }
                    }
                }
                other => other,
            },
            ConfigureIntent::Submit => match state {
                ConfigureDialogState::Visible { buffer, .. } => match buffer.parse::<i64>() {
                    Ok(initial) => ConfigureDialogState::Submitted { initial },
                    Err(err) => {
                        let message = match err.kind() {
                            IntErrorKind::Empty => "enter a number",
                            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                "number is out of range"
                            }
                            _ => "not a valid integer",
                        };
                        ConfigureDialogState::Visible {
                            buffer,
                            error: Some(message.to_string()),
                        }
                    }
                },
                other => other,
            },
        }
    }
}

/// A character enters the buffer if it keeps the buffer a plausible
/// integer prefix: digits anywhere, a minus only in front, and never
/// past the length cap.
fn accepts(buffer: &str, ch: char) -> bool {
    if buffer.len() >= MAX_INPUT_LEN {
        return false;
    }
    ch.is_ascii_digit() || (ch == '-' && buffer.is_empty())
}
