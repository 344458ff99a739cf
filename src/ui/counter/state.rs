//! State for the counter feature.

use crate::primes::is_prime;
use crate::ui::mvi::UiState;

/// Counter state: the live value plus a primality flag computed once
/// from the value the counter mounted with.
///
/// `initial_is_prime` refers to `initial` and is never recomputed while
/// the counter lives; increments and decrements move `value` only. The
/// flag changes only when the counter is remounted with a new initial
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    /// Value the counter mounted with.
    pub initial: i64,
    /// Live counter value, unbounded in both directions.
    pub value: i64,
    /// Primality of `initial`, computed at mount.
    pub initial_is_prime: bool,
}

impl UiState for CounterState {}

impl CounterState {
    /// State for a freshly mounted counter.
    ///
    /// The primality of `initial` is computed here, once. Reducers carry
    /// the flag through unchanged, so the computation stays out of the
    /// transition path. The diag line accompanying the computation is
    /// emitted by the shell that mounts the counter, keeping this
    /// constructor pure.
    pub fn mount(initial: i64) -> Self {
        Self {
            initial,
            value: initial,
            initial_is_prime: is_prime(initial),
        }
    }
}
