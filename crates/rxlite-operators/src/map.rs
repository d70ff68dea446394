//! Map operator: transform every upstream value.

use std::rc::Rc;

use rxlite_core::prelude::{Emitter, Observable, Observer, Result};

/// New observable emitting `transform(x)` for each upstream `x`.
///
/// Emission order is the upstream order; delivery is push-through inside the
/// upstream `next` call. A failing transform routes its error downstream and
/// leaves the subscription terminal, so later upstream values are dropped
/// without invoking `transform` again.
pub fn map<T, U>(
    source: &Observable<T>,
    transform: impl Fn(T) -> Result<U> + 'static,
) -> Observable<U>
where
    T: 'static,
    U: 'static,
{
    let source = source.clone();
    let transform = Rc::new(transform);
    Observable::new(move |output: Emitter<U>| {
        let on_next = {
            let transform = Rc::clone(&transform);
            let output = output.clone();
            move |x: T| {
                if output.is_terminal() {
                    return;
                }
                match transform(x) {
                    Ok(y) => output.next(y),
                    Err(err) => output.error(err),
                }
            }
        };
        let on_error = {
            let output = output.clone();
            move |err| output.error(err)
        };
        let on_complete = move || output.complete();

        Ok(source.subscribe(Observer::new(on_next, on_error, on_complete)))
    })
}
