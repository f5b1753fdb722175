//! Record input for the CLI: JSON lines from a file or stdin, decoded on a
//! producer thread so rendering can start before the input ends.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

use anyhow::{anyhow, Context};
use noderenderlib::{spawn_reader, DEFAULT_CHANNEL_CAPACITY};
use serde::de::DeserializeOwned;

/// Path meaning "read from standard input"
pub const STDIN: &str = "-";

/// A running producer: records to drain, plus the thread to join afterwards.
pub struct RecordSource<T> {
    pub records: Receiver<T>,
    reader: JoinHandle<noderenderlib::Result<usize>>,
    path: String,
}

impl<T> RecordSource<T> {
    /// Wait for the producer and surface its first error, if any.
    ///
    /// Call after the records have been drained.
    pub fn finish(self) -> anyhow::Result<usize> {
        let read = self
            .reader
            .join()
            .map_err(|_| anyhow!("input reader for '{}' panicked", self.path))?
            .with_context(|| format!("failed to read records from '{}'", self.path))?;
        tracing::debug!(read, path = %self.path, "input drained");
        Ok(read)
    }
}

fn open(path: &str) -> anyhow::Result<Box<dyn BufRead + Send>> {
    if path == STDIN {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("failed to open input '{}'", path))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Start decoding records of type `T` from `path` (`-` for stdin).
pub fn read_records<T>(path: &str) -> anyhow::Result<RecordSource<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    let reader = open(path)?;
    let (records, reader) = spawn_reader(reader, DEFAULT_CHANNEL_CAPACITY);
    Ok(RecordSource {
        records,
        reader,
        path: path.to_string(),
    })
}
