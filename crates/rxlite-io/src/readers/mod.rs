//! File-backed streaming sources.
//!
//! Files are opened inside the subscribe procedure, not when the observable
//! is built; a missing file therefore surfaces as a producer fault on the
//! error channel of whichever subscription hits it.

pub mod jsonl;
pub mod lines;

pub use jsonl::json_records;
pub use lines::lines;
