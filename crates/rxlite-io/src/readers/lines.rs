//! Line-by-line file source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use rxlite_core::prelude::{Emitter, Observable, Subscription};

/// Observable over the lines of a text file, one `String` per line
/// (terminators stripped), completing at end of file.
///
/// I/O errors, including failure to open the file, travel down the error
/// channel; lines already emitted before a mid-file error stand.
pub fn lines(path: impl Into<PathBuf>) -> Observable<String> {
    let path: PathBuf = path.into();
    Observable::new(move |emitter: Emitter<String>| {
        tracing::trace!(path = %path.display(), "opening line source");
        let file = File::open(&path)?;
        for line in BufReader::new(file).lines() {
            if emitter.is_terminal() {
                break;
            }
            emitter.next(line?);
        }
        emitter.complete();
        Ok(Subscription::empty())
    })
}
