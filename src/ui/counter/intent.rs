//! Intents for the counter feature.

use crate::ui::mvi::Intent;

/// User actions on the counter controls.
///
/// These are the values the two buttons are bound to; keyboard and
/// mouse activation dispatch the same intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Move the value up by one.
    Increment,
    /// Move the value down by one.
    Decrement,
}

impl Intent for CounterIntent {}
