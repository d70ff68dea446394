//! Iterator-backed source: emit every element, then complete.

use rxlite_core::prelude::{Emitter, Observable, Subscription};

/// Observable over any cloneable iterable.
///
/// The iterable is cloned per subscription, so subscribing twice produces
/// two full, independent runs of the sequence. Emission is synchronous: all
/// values and the completion are delivered before `subscribe` returns.
pub fn from_iter<I>(items: I) -> Observable<I::Item>
where
    I: IntoIterator + Clone + 'static,
    I::Item: 'static,
{
    Observable::new(move |emitter: Emitter<I::Item>| {
        for value in items.clone() {
            // A downstream operator may have gone terminal (e.g. a failing
            // transform); stop pushing into a closed stream.
            if emitter.is_terminal() {
                break;
            }
            emitter.next(value);
        }
        emitter.complete();
        Ok(Subscription::empty())
    })
}
