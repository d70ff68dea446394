//! Observable core: a stored subscribe procedure plus the terminal
//! `subscribe` entry point, and the producer-side `Emitter` handle.
//!
//! Construction stores the procedure and does nothing else; work happens
//! only inside a `subscribe` call. A producer fault (the procedure returning
//! `Err`) is intercepted here and routed down the observer's error channel,
//! never raised to the caller of `subscribe`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Result, StreamError};
use crate::observer::{DeliveryState, Observer};
use crate::subscription::Subscription;

/// Producer-side handle to one subscription's observer.
///
/// A subscribe procedure may clone this into several callbacks (timer ticks,
/// reader loops); all clones share the same delivery state, so the terminal
/// guard holds across them.
pub struct Emitter<T> {
    inner: Rc<RefCell<Observer<T>>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Emitter<T> {
    fn new(observer: Observer<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(observer)),
        }
    }

    /// Push one value downstream. No-op once the subscription is terminal.
    ///
    /// The observer callback runs while the emitter is borrowed; a callback
    /// must not re-enter the same subscription's emitter.
    pub fn next(&self, value: T) {
        self.inner.borrow_mut().next(value);
    }

    /// Push the fault downstream and make the subscription terminal.
    pub fn error(&self, err: StreamError) {
        self.inner.borrow_mut().error(err);
    }

    /// Signal completion and make the subscription terminal.
    pub fn complete(&self) {
        self.inner.borrow_mut().complete();
    }

    pub fn state(&self) -> DeliveryState {
        self.inner.borrow().state()
    }

    /// True once `complete` or `error` has been delivered. Producers can use
    /// this to stop emitting early instead of pushing into a closed stream.
    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }
}

/// A lazy, re-subscribable producer of a value sequence.
///
/// Wraps exactly one subscribe procedure. `Clone` copies the handle, not the
/// procedure; operators capture a clone of their source, so a chain never
/// mutates or consumes the observable it was built from. Each `subscribe`
/// call re-runs the procedure independently: no caching, no replay.
pub struct Observable<T> {
    subscribe_fn: Rc<dyn Fn(Emitter<T>) -> Result<Subscription>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe_fn: Rc::clone(&self.subscribe_fn),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Store `subscribe_fn` without invoking it.
    ///
    /// The procedure receives the subscription's `Emitter` and may emit
    /// synchronously before returning, or stash clones of the emitter for
    /// later delivery. Returning `Err` is the producer-fault path: the core
    /// converts it into an `error` delivery.
    pub fn new(subscribe_fn: impl Fn(Emitter<T>) -> Result<Subscription> + 'static) -> Self {
        Self {
            subscribe_fn: Rc::new(subscribe_fn),
        }
    }

    /// Terminal operation: run the stored procedure against `observer`.
    ///
    /// Never raises a producer fault to the caller; an `Err` from the
    /// procedure is delivered through `observer.error` and an empty
    /// subscription is returned.
    pub fn subscribe(&self, observer: Observer<T>) -> Subscription {
        let emitter = Emitter::new(observer);
        match (self.subscribe_fn)(emitter.clone()) {
            Ok(subscription) => subscription,
            Err(err) => {
                tracing::debug!(error = %err, "producer fault during subscribe");
                emitter.error(err);
                Subscription::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn construction_is_lazy() {
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        let _source = Observable::new(move |emitter: Emitter<i32>| {
            *flag.borrow_mut() = true;
            emitter.complete();
            Ok(Subscription::empty())
        });
        assert!(!*ran.borrow());
    }

    #[test]
    fn producer_fault_goes_to_error_channel() {
        let source: Observable<i32> =
            Observable::new(|_| Err(StreamError::Source("no data".into())));

        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);
        source.subscribe(Observer::new(
            |_| panic!("no value expected"),
            move |err| sink.borrow_mut().push(err.to_string()),
            || panic!("no completion expected"),
        ));

        assert_eq!(errors.borrow().as_slice(), ["source error: no data"]);
    }

    #[test]
    fn each_subscription_reruns_the_procedure() {
        let runs = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&runs);
        let source = Observable::new(move |emitter: Emitter<i32>| {
            *counter.borrow_mut() += 1;
            emitter.next(7);
            emitter.complete();
            Ok(Subscription::empty())
        });

        source.subscribe(Observer::on_next(|_| {}));
        source.subscribe(Observer::on_next(|_| {}));
        assert_eq!(*runs.borrow(), 2);
    }
}
