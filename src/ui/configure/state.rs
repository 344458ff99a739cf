//! State for the configure dialog.

use crate::ui::mvi::UiState;

/// Maximum characters accepted into the input buffer: an optional sign
/// plus the longest `i64` digit run.
pub const MAX_INPUT_LEN: usize = 20;

/// Modal dialog for choosing a new initial counter value.
///
/// `Submitted` is transient: the app consumes it immediately by
/// remounting the counter and hiding the dialog, so the render path
/// only ever sees `Hidden` or `Visible`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigureDialogState {
    #[default]
    Hidden,
    Visible {
        /// Digits (and an optional leading minus) typed so far.
        buffer: String,
        /// Message from the last rejected submit, cleared on edit.
        error: Option<String>,
    },
    Submitted {
        initial: i64,
    },
}

impl UiState for ConfigureDialogState {}

impl ConfigureDialogState {
    /// True while the dialog is on screen capturing input.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}
