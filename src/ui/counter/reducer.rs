//! Reducer for the counter feature.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Pure counter transitions.
///
/// Only `value` moves; `initial` and `initial_is_prime` pass through
/// untouched, which is what keeps the primality label frozen to the
/// mount-time value.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                value: state.value + 1,
                ..state
            },
            CounterIntent::Decrement => CounterState {
                value: state.value - 1,
                ..state
            },
        }
    }
}
