//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (button activations, key presses) and
/// system events. Intents are plain values: a control that dispatches an
/// intent carries the same value on every frame, so handler identity is
/// stable across renders by construction.
pub trait Intent: Send + 'static {}
