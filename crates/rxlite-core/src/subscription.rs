//! Subscription handle: an optional one-shot teardown.
//!
//! Teardown is opt-in. Dropping a `Subscription` without calling
//! `unsubscribe` is valid and runs nothing; sources that hold no resources
//! return `Subscription::empty()`.

/// Handle returned by `Observable::subscribe`.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// A subscription with nothing to tear down.
    pub fn empty() -> Self {
        Self { teardown: None }
    }

    pub fn with_teardown(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn has_teardown(&self) -> bool {
        self.teardown.is_some()
    }

    /// Run the teardown, if any. Consumes the handle, so teardown can run
    /// at most once.
    pub fn unsubscribe(mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn unsubscribe_runs_teardown_once() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let sub = Subscription::with_teardown(move || counter.set(counter.get() + 1));
        assert!(sub.has_teardown());
        sub.unsubscribe();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn dropping_without_unsubscribe_runs_nothing() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        {
            let _sub = Subscription::with_teardown(move || counter.set(counter.get() + 1));
        }
        assert_eq!(runs.get(), 0);
    }
}
