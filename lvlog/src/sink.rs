//! Output sinks.
//!
//! A sink receives fully rendered lines. Every method takes `&self` so a
//! logger can be shared read-only; sinks that wrap a plain [`Write`] get
//! their interior mutability from a [`Mutex`].

use std::io::{self, Stderr, Stdout, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for rendered log lines.
pub trait Sink {
    /// Append one complete line (newline included) to the sink.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl Sink for Stderr {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lock().write_all(line.as_bytes())
    }
}

impl Sink for Stdout {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self.lock();
        handle.write_all(line.as_bytes())?;
        handle.flush()
    }
}

impl<W: Write> Sink for Mutex<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lock().write_all(line.as_bytes())
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// In-memory sink whose clones share one buffer.
///
/// Hand one clone to a [`Logger`](crate::Logger) and keep another to read
/// back what was written.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written lines without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.buf.lock().extend_from_slice(line.as_bytes());
        Ok(())
    }
}
