//! Canonical serde encoding streamed into a byte sink
//!
//! The value is encoded with bincode's fixed standard configuration and
//! written straight into the sink through [`SinkWriter`], so the serialized
//! form is never collected into an intermediate buffer.

use serde::Serialize;

use crate::sink::{ByteSink, SinkError, SinkWriter};

/// Serialize `value` into `sink` as a canonical byte stream.
///
/// Byte order and chunking are chosen by the encoder; the stream is
/// deterministic for a given value, which is what makes the resulting digest
/// stable across calls.
///
/// # Errors
///
/// Returns [`SinkError::UpdateFailed`] when a sink write fails during
/// encoding, and [`SinkError::Serializer`] when the encoder itself fails.
pub fn serialize_value<T: Serialize>(
    value: &T,
    sink: &mut dyn ByteSink,
) -> Result<(), SinkError> {
    let mut writer = SinkWriter::new(sink);
    match bincode::serde::encode_into_std_write(value, &mut writer, bincode::config::standard()) {
        Ok(_written) => Ok(()),
        // a recorded sink failure takes precedence over the encoder's wrapper error
        Err(err) => Err(writer
            .take_failure()
            .unwrap_or_else(|| SinkError::Serializer(err.to_string()))),
    }
}
