#![forbid(unsafe_code)]
//! rxlite-io: concrete producers for the pipeline.
//!
//! Every source here is just a subscribe procedure handed to
//! `Observable::new`: it drives the emitter with `next`/`complete` under the
//! same contract any operator expects, and reports faults by returning
//! `Err` so the core routes them down the error channel. Each `subscribe`
//! call re-runs the source from scratch (re-opens the file, restarts the
//! iterator), so observables built here are freely reusable.

pub mod iter;
pub mod readers;
pub mod timer;

pub use iter::from_iter;
pub use readers::{json_records, lines};
pub use timer::{deferred, ticker};
