//! Streaming NDJSON source: one decoded record per non-empty line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use rxlite_core::prelude::{Emitter, Observable, Subscription};

/// Observable decoding each non-empty line of `path` as one JSON record.
///
/// The first undecodable line terminates that subscription through the
/// error channel; records decoded before it stand.
pub fn json_records<T>(path: impl Into<PathBuf>) -> Observable<T>
where
    T: DeserializeOwned + 'static,
{
    let path: PathBuf = path.into();
    Observable::new(move |emitter: Emitter<T>| {
        tracing::trace!(path = %path.display(), "opening jsonl source");
        let file = File::open(&path)?;
        for line in BufReader::new(file).lines() {
            if emitter.is_terminal() {
                break;
            }
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: T = serde_json::from_str(&line)?;
            emitter.next(record);
        }
        emitter.complete();
        Ok(Subscription::empty())
    })
}
