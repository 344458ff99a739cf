use std::sync::Arc;

use crate::diag::{Category, DiagLogger};
use crate::ui::configure::{ConfigureDialogState, ConfigureIntent, ConfigureReducer};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
///
/// The dirty bit is the redraw gate: a dispatch that leaves the state
/// equal to what it was schedules no redraw.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        let previous = $self.$field.clone();
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        if $self.$field != previous {
            $self.dirty = true;
        }
    };
}

pub struct App {
    should_quit: bool,
    /// Set when the next frame differs from the last drawn one.
    dirty: bool,
    /// Counter state (MVI pattern).
    counter: CounterState,
    /// State of the configure dialog (MVI pattern).
    configure: ConfigureDialogState,
    diag: Arc<DiagLogger>,
}

impl App {
    pub fn new(initial: i64, diag: Arc<DiagLogger>) -> Self {
        diag.log(
            "calculating initial-value primality",
            2,
            Some(Category::Other),
        );
        Self {
            should_quit: false,
            dirty: true,
            counter: CounterState::mount(initial),
            configure: ConfigureDialogState::default(),
            diag,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn configure(&self) -> &ConfigureDialogState {
        &self.configure
    }

    pub fn configure_open(&self) -> bool {
        self.configure.is_visible()
    }

    pub fn diag(&self) -> &DiagLogger {
        &self.diag
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears and returns the dirty bit; the runtime draws when it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Ticks carry no state change, so they never schedule a redraw.
    pub fn on_tick(&mut self) {}

    /// A resized terminal invalidates the previous frame's geometry.
    pub fn on_resize(&mut self) {
        self.dirty = true;
    }

    /// Dispatch an intent to the counter reducer.
    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
    }

    /// Dispatch an intent to the configure dialog reducer.
    ///
    /// A `Submitted` result is consumed here: the counter remounts with
    /// the chosen value and the dialog closes.
    pub fn dispatch_configure(&mut self, intent: ConfigureIntent) {
        dispatch_mvi!(self, configure, ConfigureReducer, intent);
        if let ConfigureDialogState::Submitted { initial } = self.configure {
            self.remount_counter(initial);
            self.configure = ConfigureDialogState::Hidden;
        }
    }

    /// Replaces the counter wholesale, recomputing the one-time
    /// primality flag. The only path on which the "is prime" label can
    /// change.
    fn remount_counter(&mut self, initial: i64) {
        self.diag.log(
            "calculating initial-value primality",
            2,
            Some(Category::Other),
        );
        self.counter = CounterState::mount(initial);
        self.dirty = true;
    }
}
