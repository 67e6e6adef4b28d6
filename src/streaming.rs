//! Streaming adapter: owns the hash state for one operation and drives an
//! external serializer against it
//!
//! The state is moved into the adapter, so release on every exit path is
//! structural: it is either consumed by `digest` on success or dropped when
//! the error propagates.

use std::hash::Hasher as _;

use tracing::{debug, trace};
use twox_hash::{XxHash32, XxHash3_128, XxHash3_64, XxHash64};

use crate::algorithm::HashAlgorithm;
use crate::digest::DigestValue;
use crate::error::{HashError, Result};
use crate::sink::{ByteSink, HashSink, SinkError};

/// One live incremental hash state.
///
/// Lifecycle: create, zero or more updates, one consuming `digest`. The
/// consuming finalizer makes update-after-digest unrepresentable.
pub trait StreamState {
    /// Feed `bytes` into the accumulator, preserving order.
    ///
    /// Must be chunk-invariant: the same logical byte sequence produces the
    /// same digest regardless of how it is split across calls.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::UpdateFailed`] if the accumulator rejects the
    /// update.
    fn update(&mut self, bytes: &[u8]) -> std::result::Result<(), SinkError>;

    /// Finalize the accumulated state into a digest, consuming the state.
    fn digest(self) -> DigestValue;
}

/// Incremental xxHash state, one variant per registered algorithm.
///
/// All variants are seeded with zero; for the XXH3 family a zero seed is
/// defined by the reference implementation to equal the unseeded form.
pub enum XxState {
    /// Live xxhash32 accumulator
    XxHash32(XxHash32),
    /// Live xxhash64 accumulator
    XxHash64(XxHash64),
    /// Live 128-bit XXH3 accumulator
    XxHash128(XxHash3_128),
    /// Live 64-bit XXH3 accumulator
    Xxh3_64(XxHash3_64),
}

impl XxState {
    pub(crate) fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::XxHash32 => Self::XxHash32(XxHash32::with_seed(0)),
            HashAlgorithm::XxHash64 => Self::XxHash64(XxHash64::with_seed(0)),
            HashAlgorithm::XxHash128 => Self::XxHash128(XxHash3_128::with_seed(0)),
            HashAlgorithm::Xxh3_64 => Self::Xxh3_64(XxHash3_64::with_seed(0)),
        }
    }
}

impl StreamState for XxState {
    fn update(&mut self, bytes: &[u8]) -> std::result::Result<(), SinkError> {
        match self {
            Self::XxHash32(hasher) => hasher.write(bytes),
            Self::XxHash64(hasher) => hasher.write(bytes),
            Self::XxHash128(hasher) => hasher.write(bytes),
            Self::Xxh3_64(hasher) => hasher.write(bytes),
        }
        Ok(())
    }

    fn digest(self) -> DigestValue {
        match self {
            Self::XxHash32(hasher) => DigestValue::U32(hasher.finish_32()),
            Self::XxHash64(hasher) => DigestValue::U64(hasher.finish()),
            Self::XxHash128(hasher) => {
                let wide = hasher.finish_128();
                DigestValue::U128 {
                    high: (wide >> 64) as u64,
                    low: wide as u64,
                }
            }
            Self::Xxh3_64(hasher) => DigestValue::U64(hasher.finish()),
        }
    }
}

/// Hash whatever byte stream `serialize` pushes into the sink, using a fresh
/// zero-seeded state for `algorithm`.
///
/// The serializer receives a sink bound to the state and may call
/// `write_byte` and `write_block` in any interleaving; bytes are hashed in
/// exactly the order pushed. Any write failure aborts the whole operation
/// with no partial digest.
///
/// # Errors
///
/// Returns [`HashError::Update`] when a sink write fails and
/// [`HashError::Serializer`] when the serializer fails on its own; state
/// creation errors propagate from [`HashAlgorithm::create_state`].
pub fn hash_stream<F>(algorithm: HashAlgorithm, serialize: F) -> Result<DigestValue>
where
    F: FnOnce(&mut dyn ByteSink) -> std::result::Result<(), SinkError>,
{
    let state = algorithm.create_state()?;
    trace!(algorithm = algorithm.name(), "hash state created");
    drive(state, serialize)
}

/// Drive `serialize` against a sink bound to `state`, then finalize.
///
/// Generic over [`StreamState`] so tests can substitute an instrumented
/// state and observe the create/drop discipline.
pub fn drive<S, F>(mut state: S, serialize: F) -> Result<DigestValue>
where
    S: StreamState,
    F: FnOnce(&mut dyn ByteSink) -> std::result::Result<(), SinkError>,
{
    let outcome = {
        let mut sink = HashSink::new(&mut state);
        serialize(&mut sink)
    };
    match outcome {
        Ok(()) => {
            let digest = state.digest();
            debug!(digest = %digest, "hash stream finalized");
            Ok(digest)
        }
        // state drops here before the error propagates
        Err(SinkError::UpdateFailed(message)) => Err(HashError::Update(message)),
        Err(SinkError::Serializer(message)) => Err(HashError::Serializer(message)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Fake state that counts drops and can be made to fail mid-stream.
    struct CountingState {
        drops: Arc<AtomicUsize>,
        fail_after: Option<usize>,
        seen: usize,
    }

    impl CountingState {
        fn new(drops: Arc<AtomicUsize>, fail_after: Option<usize>) -> Self {
            Self {
                drops,
                fail_after,
                seen: 0,
            }
        }
    }

    impl StreamState for CountingState {
        fn update(&mut self, bytes: &[u8]) -> std::result::Result<(), SinkError> {
            self.seen += bytes.len();
            match self.fail_after {
                Some(limit) if self.seen > limit => {
                    Err(SinkError::UpdateFailed("instrumented update failure".into()))
                }
                _ => Ok(()),
            }
        }

        fn digest(self) -> DigestValue {
            DigestValue::U64(self.seen as u64)
        }
    }

    impl Drop for CountingState {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn successful_stream_releases_state_exactly_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let state = CountingState::new(Arc::clone(&drops), None);
        let digest = drive(state, |sink| {
            sink.write_block(b"hello")?;
            sink.write_byte(b'!')
        })
        .expect("stream should succeed");
        assert_eq!(digest, DigestValue::U64(6));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn update_failure_mid_stream_still_releases_state_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let state = CountingState::new(Arc::clone(&drops), Some(4));
        let err = drive(state, |sink| {
            for byte in 0..10u8 {
                sink.write_byte(byte)?;
            }
            Ok(())
        })
        .expect_err("stream should fail");
        assert!(matches!(err, HashError::Update(_)));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn serializer_failure_is_propagated_not_reinterpreted() {
        let drops = Arc::new(AtomicUsize::new(0));
        let state = CountingState::new(Arc::clone(&drops), None);
        let err = drive(state, |sink| {
            sink.write_block(b"partial")?;
            Err(SinkError::Serializer("traversal broke".into()))
        })
        .expect_err("stream should fail");
        assert!(matches!(err, HashError::Serializer(_)));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_stream_finalizes() {
        let digest = hash_stream(HashAlgorithm::XxHash64, |_sink| Ok(()))
            .expect("empty stream should hash");
        assert_eq!(digest.hex_len(), 16);
    }

    #[test]
    fn byte_and_block_writes_interleave_freely() {
        let data = b"interleaved write pattern";
        let mixed = hash_stream(HashAlgorithm::Xxh3_64, |sink| {
            sink.write_byte(data[0])?;
            sink.write_block(&data[1..10])?;
            sink.write_byte(data[10])?;
            sink.write_block(&data[11..])
        })
        .expect("mixed writes should hash");
        let single = hash_stream(HashAlgorithm::Xxh3_64, |sink| sink.write_block(data))
            .expect("block write should hash");
        assert_eq!(mixed, single);
    }
}
