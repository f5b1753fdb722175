//! Incremental record input.
//!
//! Records can arrive one at a time, for example one per cluster round trip.
//! The `describe_*` functions take any iterator, so a `Vec`, a channel
//! `Receiver`, or a [`JsonLines`] reader all work. Pulling the next record is
//! the only point where rendering blocks.

use std::io::BufRead;
use std::marker::PhantomData;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread::{self, JoinHandle};

use serde::de::DeserializeOwned;

use crate::error::RenderError;
use crate::Result;

/// Default number of decoded records buffered between producer and consumer
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Decodes one JSON record per line from a reader.
///
/// Blank lines are skipped. Errors carry the 1-based line number.
pub struct JsonLines<R, T> {
    reader: R,
    line: usize,
    buf: String,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DeserializeOwned> JsonLines<R, T> {
    pub fn new(reader: R) -> Self {
        JsonLines {
            reader,
            line: 0,
            buf: String::new(),
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for JsonLines<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line += 1;

            let trimmed = self.buf.trim();
            if trimmed.is_empty() {
                continue;
            }
            return Some(
                serde_json::from_str(trimmed).map_err(|source| RenderError::Decode {
                    line: self.line,
                    source,
                }),
            );
        }
    }
}

/// Decode records from `reader` on a producer thread.
///
/// Records are sent through a bounded channel of `capacity` slots as soon as
/// they are decoded. The producer stops at the first read or decode error,
/// which closes the channel; the error is returned when joining the handle.
/// Dropping the receiver also stops the producer.
pub fn spawn_reader<R, T>(reader: R, capacity: usize) -> (Receiver<T>, JoinHandle<Result<usize>>)
where
    R: BufRead + Send + 'static,
    T: DeserializeOwned + Send + 'static,
{
    let (tx, rx) = sync_channel(capacity);
    let handle = thread::spawn(move || -> Result<usize> {
        let mut sent = 0;
        for record in JsonLines::<R, T>::new(reader) {
            let record = record?;
            if tx.send(record).is_err() {
                tracing::debug!(sent, "record consumer went away, stopping reader");
                break;
            }
            sent += 1;
        }
        Ok(sent)
    });
    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NodeRecord, StatusEvent};
    use std::io::{Cursor, Write};

    #[test]
    fn test_json_lines_skips_blank_lines() {
        let input = "{\"name\":\"n1\"}\n\n   \n{\"name\":\"n2\"}\n";
        let names: Vec<String> = JsonLines::<_, NodeRecord>::new(Cursor::new(input))
            .map(|r| r.unwrap().name)
            .collect();
        assert_eq!(names, vec!["n1", "n2"]);
    }

    #[test]
    fn test_json_lines_without_trailing_newline() {
        let mut lines = JsonLines::<_, NodeRecord>::new(Cursor::new("{\"name\":\"n1\"}"));
        assert_eq!(lines.next().unwrap().unwrap().name, "n1");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_json_lines_reports_line_number() {
        let input = "{\"name\":\"n1\"}\n\nnot json\n";
        let results: Vec<Result<NodeRecord>> = JsonLines::new(Cursor::new(input)).collect();
        assert!(results[0].is_ok());
        match &results[1] {
            Err(RenderError::Decode { line, .. }) => assert_eq!(*line, 3),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_reader_delivers_in_order() {
        let input = "{\"nodename\":\"a\"}\n{\"nodename\":\"b\"}\n{\"nodename\":\"c\"}\n";
        let (rx, handle) = spawn_reader::<_, StatusEvent>(Cursor::new(input), 1);
        let names: Vec<String> = rx.into_iter().map(|e| e.nodename).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(handle.join().unwrap().unwrap(), 3);
    }

    #[test]
    fn test_spawn_reader_stops_at_first_error() {
        let input = "{\"name\":\"n1\"}\n{broken\n{\"name\":\"n3\"}\n";
        let (rx, handle) = spawn_reader::<_, NodeRecord>(Cursor::new(input), 4);
        let names: Vec<String> = rx.into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["n1"]);
        assert!(matches!(
            handle.join().unwrap(),
            Err(RenderError::Decode { line: 2, .. })
        ));
    }

    #[test]
    fn test_spawn_reader_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"name\":\"n1\",\"available\":true}}").unwrap();
        writeln!(file, "{{\"name\":\"n2\"}}").unwrap();
        let reader = std::io::BufReader::new(file.reopen().unwrap());

        let (rx, handle) = spawn_reader::<_, NodeRecord>(reader, DEFAULT_CHANNEL_CAPACITY);
        let nodes: Vec<NodeRecord> = rx.into_iter().collect();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].available);
        assert_eq!(handle.join().unwrap().unwrap(), 2);
    }
}
