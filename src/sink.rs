use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::GaugeError;

/// A consumer of ordered text lines: a screen region, a log file, a pipe.
///
/// Append-only; the core never reads back. Implementations flush each
/// batch so a dropped sink loses nothing.
pub trait LineSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), GaugeError>;
}

/// Sink backed by any writer.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), GaugeError> {
        for line in lines {
            writeln!(self.writer, "{line}").map_err(GaugeError::Sink)?;
        }
        self.writer.flush().map_err(GaugeError::Sink)
    }
}

/// File-backed sink. The file handle is acquired on construction and owned
/// for the sink's lifetime; buffered output is flushed per batch and the
/// handle is closed when the sink is dropped, on every exit path.
pub struct FileSink {
    inner: WriterSink<BufWriter<File>>,
}

impl FileSink {
    /// Open the file fresh, truncating previous contents.
    pub fn create(path: &Path) -> Result<Self, GaugeError> {
        let file = File::create(path).map_err(GaugeError::Sink)?;
        Ok(Self {
            inner: WriterSink::new(BufWriter::new(file)),
        })
    }

    /// Open the file for appending, creating it if missing. Safe for
    /// several sinks feeding the same file from one thread.
    pub fn append(path: &Path) -> Result<Self, GaugeError> {
        let file = File::options()
            .append(true)
            .create(true)
            .open(path)
            .map_err(GaugeError::Sink)?;
        Ok(Self {
            inner: WriterSink::new(BufWriter::new(file)),
        })
    }
}

impl LineSink for FileSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), GaugeError> {
        self.inner.write_lines(lines)
    }
}

/// In-memory sink for tests and capture.
#[derive(Default)]
pub struct MemSink {
    pub lines: Vec<String>,
}

impl LineSink for MemSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<(), GaugeError> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }
}
