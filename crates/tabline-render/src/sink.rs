#![forbid(unsafe_code)]

//! Byte-counting output sink with a latched first error.
//!
//! Wraps any [`Write`] implementation by composition. Every accepted byte is
//! counted, including the accepted prefix of a write that later fails. The
//! first error is latched: from then on nothing more is written.
//!
//! # Usage
//!
//! ```
//! use tabline_render::sink::CountingSink;
//!
//! let mut sink = CountingSink::new(Vec::new());
//! assert!(sink.write_str("Hello, world!"));
//! assert_eq!(sink.bytes_written(), 13);
//! assert!(!sink.has_failed());
//! assert_eq!(sink.into_inner(), b"Hello, world!");
//! ```

use std::io::{self, Write};

/// A write wrapper that counts bytes and remembers the first failure.
#[derive(Debug)]
pub struct CountingSink<W> {
    /// The underlying writer.
    inner: W,
    /// Total bytes accepted by `inner`.
    bytes_written: u64,
    /// Set on the first failure and never cleared.
    failed: bool,
    /// The first failure, until taken.
    error: Option<io::Error>,
}

impl<W> CountingSink<W> {
    /// Create a new counting sink wrapping the given writer.
    #[inline]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
            failed: false,
            error: None,
        }
    }

    /// Bytes accepted by the underlying writer so far.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Whether a write or flush has failed.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Take the latched error.
    ///
    /// The sink stays failed; a second call returns `None`.
    #[inline]
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Get a reference to the underlying writer.
    #[inline]
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Consume the sink and return the inner writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn latch(&mut self, error: io::Error) {
        self.failed = true;
        self.error = Some(error);
    }
}

impl<W: Write> CountingSink<W> {
    /// Write all of `bytes`, unless an earlier write failed.
    ///
    /// Returns `false` when nothing (or only a prefix) was written.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.failed {
            return false;
        }
        let mut rest = bytes;
        while !rest.is_empty() {
            match self.inner.write(rest) {
                Ok(0) => {
                    self.latch(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ));
                    return false;
                }
                Ok(n) => {
                    self.bytes_written += n as u64;
                    rest = &rest[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.latch(e);
                    return false;
                }
            }
        }
        true
    }

    /// Write UTF-8 text.
    #[inline]
    pub fn write_str(&mut self, text: &str) -> bool {
        self.write_bytes(text.as_bytes())
    }

    /// Flush the underlying writer, unless an earlier write failed.
    pub fn flush(&mut self) -> bool {
        if self.failed {
            return false;
        }
        match self.inner.flush() {
            Ok(()) => true,
            Err(e) => {
                self.latch(e);
                false
            }
        }
    }
}
