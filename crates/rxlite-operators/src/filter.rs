//! Filter operator: forward only the values a predicate accepts.

use std::rc::Rc;

use rxlite_core::prelude::{Emitter, Observable, Observer, Result};

/// New observable forwarding the upstream values for which `predicate`
/// returns `Ok(true)`.
///
/// `error` and `complete` pass through unchanged. A failing predicate has
/// the same fault policy as a failing transform: the error goes downstream
/// and the subscription becomes terminal.
pub fn filter<T>(
    source: &Observable<T>,
    predicate: impl Fn(&T) -> Result<bool> + 'static,
) -> Observable<T>
where
    T: 'static,
{
    let source = source.clone();
    let predicate = Rc::new(predicate);
    Observable::new(move |output: Emitter<T>| {
        let on_next = {
            let predicate = Rc::clone(&predicate);
            let output = output.clone();
            move |x: T| {
                if output.is_terminal() {
                    return;
                }
                match predicate(&x) {
                    Ok(true) => output.next(x),
                    Ok(false) => {}
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
