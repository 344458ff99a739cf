//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! States are `PartialEq` so the app can compare the state a reducer
//! produced against the state it replaced: when the two are equal, no
//! redraw is scheduled.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
