//! `Pipeline`: the chaining surface that puts `.map()`/`.filter()` on any
//! observable, so `source.map(f).filter(g).map(h).subscribe(obs)` reads the
//! way the pipeline executes.

use rxlite_core::prelude::{Observable, Result};

use crate::filter::filter;
use crate::map::map;

/// Chainable operator methods.
///
/// Both operators are lazy: nothing runs, and no operator function is
/// invoked, until `subscribe` is called on the end of the chain.
pub trait Pipeline<T: 'static> {
    /// See [`crate::map::map`].
    fn map<U, F>(&self, transform: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static;

    /// See [`crate::filter::filter`].
    fn filter<P>(&self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> Result<bool> + 'static;
}

impl<T: 'static> Pipeline<T> for Observable<T> {
    fn map<U, F>(&self, transform: F) -> Observable<U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static,
    {
        map(self, transform)
    }

    fn filter<P>(&self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> Result<bool> + 'static,
    {
        filter(self, predicate)
    }
}
