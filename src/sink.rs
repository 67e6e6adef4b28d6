//! Byte-sink contract between an external serializer and the hash state
//!
//! The sink is a pure consumer: it accepts bytes pushed by the serializer in
//! whatever granularity the serializer chooses, delegates each write to the
//! bound state, and buffers nothing beyond the current write request.

use std::io;

use thiserror::Error;

use crate::streaming::StreamState;

/// Failures a sink write can surface to the serializer.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The bound hash state rejected an update; never retried
    #[error("hash state update failed: {0}")]
    UpdateFailed(String),

    /// The serializer itself failed, independent of hashing
    #[error("serializer error: {0}")]
    Serializer(String),
}

/// Push-only byte consumer fed by an external serializer.
///
/// Implementations must accept `write_byte` and `write_block` calls in any
/// interleaving and any block sizes, and must feed bytes onward in exactly
/// the order received.
pub trait ByteSink {
    /// Accept a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::UpdateFailed`] if the underlying state rejects
    /// the update.
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError>;

    /// Accept a contiguous block of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::UpdateFailed`] if the underlying state rejects
    /// the update.
    fn write_block(&mut self, block: &[u8]) -> Result<(), SinkError>;
}

/// Sink bound to exactly one live hash state for the duration of one
/// hashing operation.
pub struct HashSink<'a, S: StreamState> {
    state: &'a mut S,
}

impl<'a, S: StreamState> HashSink<'a, S> {
    pub(crate) fn new(state: &'a mut S) -> Self {
        Self { state }
    }
}

impl<S: StreamState> ByteSink for HashSink<'_, S> {
    fn write_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        self.state.update(&[byte])
    }

    fn write_block(&mut self, block: &[u8]) -> Result<(), SinkError> {
        // the whole block goes down in one update call, never split
        self.state.update(block)
    }
}

/// Adapts a [`ByteSink`] to [`std::io::Write`] so writer-based serializers
/// can stream straight into the hash state.
///
/// A failed sink write is recorded and can be recovered with
/// [`SinkWriter::take_failure`], which lets callers tell sink failures apart
/// from the serializer's own failures after the write call returns.
pub struct SinkWriter<'a> {
    sink: &'a mut dyn ByteSink,
    failure: Option<SinkError>,
}

impl<'a> SinkWriter<'a> {
    /// Wrap a sink in a writer.
    #[must_use]
    pub fn new(sink: &'a mut dyn ByteSink) -> Self {
        Self {
            sink,
            failure: None,
        }
    }

    /// Take the sink failure recorded by the last failed write, if any.
    pub fn take_failure(&mut self) -> Option<SinkError> {
        self.failure.take()
    }
}

impl io::Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.sink.write_block(buf) {
            Ok(()) => Ok(buf.len()),
            Err(err) => {
                let message = err.to_string();
                self.failure = Some(err);
                Err(io::Error::new(io::ErrorKind::Other, message))
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
