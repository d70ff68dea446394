//! Time-spread sources.
//!
//! The core is single-threaded, so these deliver on the subscribing thread:
//! the subscribe procedure sleeps between emissions and returns once the
//! sequence has completed. Operators sit between the sleeps untouched; they
//! only see the usual `next`/`complete` calls.

use std::thread;
use std::time::Duration;

use rxlite_core::prelude::{Emitter, Observable, Subscription};

/// Emit a single value after `delay`, then complete.
pub fn deferred<T>(value: T, delay: Duration) -> Observable<T>
where
    T: Clone + 'static,
{
    Observable::new(move |emitter: Emitter<T>| {
        thread::sleep(delay);
        emitter.next(value.clone());
        emitter.complete();
        Ok(Subscription::empty())
    })
}

/// Emit each value in order with `interval` between emissions, then
/// complete. The first value is emitted after one interval.
pub fn ticker<T>(values: Vec<T>, interval: Duration) -> Observable<T>
where
    T: Clone + 'static,
{
    Observable::new(move |emitter: Emitter<T>| {
        for value in values.iter().cloned() {
            if emitter.is_terminal() {
                break;
            }
            thread::sleep(interval);
            emitter.next(value);
        }
        emitter.complete();
        Ok(Subscription::empty())
    })
}
