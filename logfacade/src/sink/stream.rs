//! Newline-delimited JSON writer sink.

use std::io::{self, Write};

use parking_lot::Mutex;

use super::Sink;
use crate::error::Result;
use crate::log::Fields;

/// Serializes each record as one JSON object per line.
///
/// # Example
///
/// ```
/// use logfacade::sink::{Sink, StreamSink};
/// use serde_json::json;
///
/// let sink = StreamSink::new(Vec::new());
/// let record = json!({ "level": 30, "msg": "hello" });
/// sink.write(record.as_object().unwrap()).unwrap();
///
/// let out = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(out, "{\"level\":30,\"msg\":\"hello\"}\n");
/// ```
pub struct StreamSink<W> {
    writer: Mutex<W>,
}

impl StreamSink<io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamSink<io::Stderr> {
    /// Sink writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> StreamSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn write(&self, record: &Fields) -> Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        // One lock per line keeps lines from interleaving
        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}
