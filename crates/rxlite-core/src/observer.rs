//! The three-callback consumer contract and its per-subscription lifecycle.
//!
//! An `Observer` is created fresh for every `subscribe` call. Its delivery
//! methods own the terminal-state machine: once `Completed` or `Errored` is
//! reached, every further delivery is a silent no-op, even if a naive
//! producer keeps calling `next` after `complete`.

use crate::error::StreamError;

/// Per-subscription delivery state.
///
/// `Active -> {Active (next)*, Completed, Errored}`; the two terminal states
/// admit no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    Active,
    Completed,
    Errored,
}

impl DeliveryState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeliveryState::Active)
    }
}

/// A consumer: three callbacks plus the state that guards them.
///
/// Supply one per `subscribe` call; there is no identity or equality and no
/// other state. The callbacks are `FnMut` so a consumer can accumulate into
/// captured state (counters, buffers) across deliveries.
pub struct Observer<T> {
    on_next: Box<dyn FnMut(T)>,
    on_error: Box<dyn FnMut(StreamError)>,
    on_complete: Box<dyn FnMut()>,
    state: DeliveryState,
}

impl<T> Observer<T> {
    pub fn new(
        on_next: impl FnMut(T) + 'static,
        on_error: impl FnMut(StreamError) + 'static,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        Self {
            on_next: Box::new(on_next),
            on_error: Box::new(on_error),
            on_complete: Box::new(on_complete),
            state: DeliveryState::Active,
        }
    }

    /// Observer that only cares about values. Errors are logged, completion
    /// is ignored.
    pub fn on_next(on_next: impl FnMut(T) + 'static) -> Self {
        Self::new(
            on_next,
            |err| tracing::warn!(error = %err, "unhandled stream error"),
            || {},
        )
    }

    pub fn state(&self) -> DeliveryState {
        self.state
    }

    /// Deliver one value. No-op once terminal.
    pub fn next(&mut self, value: T) {
        if self.state.is_terminal() {
            return;
        }
        (self.on_next)(value);
    }

    /// Deliver the fault and transition to `Errored`. No-op once terminal.
    pub fn error(&mut self, err: StreamError) {
        if self.state.is_terminal() {
            return;
        }
        self.state = DeliveryState::Errored;
        (self.on_error)(err);
    }

    /// Deliver completion and transition to `Completed`. No-op once terminal.
    pub fn complete(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        self.state = DeliveryState::Completed;
        (self.on_complete)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn terminal_state_suppresses_further_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let done = Rc::new(RefCell::new(0));
        let done_sink = Rc::clone(&done);

        let mut obs = Observer::new(
            move |v: i32| sink.borrow_mut().push(v),
            |_| panic!("no error expected"),
            move || *done_sink.borrow_mut() += 1,
        );

        obs.next(1);
        obs.complete();
        obs.next(2);
        obs.complete();
        obs.error(StreamError::Source("late".into()));

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(*done.borrow(), 1);
        assert_eq!(obs.state(), DeliveryState::Completed);
    }

    #[test]
    fn error_wins_over_later_complete() {
        let errs = Rc::new(RefCell::new(0));
        let errs_sink = Rc::clone(&errs);
        let mut obs = Observer::new(
            |_: i32| {},
            move |_| *errs_sink.borrow_mut() += 1,
            || panic!("complete after error must not fire"),
        );

        obs.error(StreamError::Source("boom".into()));
        obs.complete();
        obs.error(StreamError::Source("again".into()));

        assert_eq!(*errs.borrow(), 1);
        assert_eq!(obs.state(), DeliveryState::Errored);
    }
}
