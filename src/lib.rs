//! Deterministic streaming xxHash digests of serialized structured values
//!
//! A value is turned into a canonical byte stream by a serializer and fed
//! incrementally into one of four xxHash algorithms, selected by name. The
//! serialized form is never materialized: the serializer pushes bytes into a
//! sink bound to the live hash state, one write request at a time. The same
//! logical byte sequence produces the same digest no matter how the
//! serializer chunks its writes, and all algorithms are seeded with zero so
//! digests are reproducible across processes.
//!
//! Hash any serializable value:
//!
//! ```
//! let digest = xxhash_stream::compute_digest(&("user", 42u32), "xxh3")?;
//! assert_eq!(digest.len(), 16);
//! # Ok::<(), xxhash_stream::HashError>(())
//! ```
//!
//! Or supply your own serializer against the sink contract:
//!
//! ```
//! let digest = xxhash_stream::compute_digest_with("xxhash64", |sink| {
//!     sink.write_block(b"hello ")?;
//!     sink.write_byte(b'w')?;
//!     sink.write_block(b"orld")
//! })?;
//! assert_eq!(digest.len(), 16);
//! # Ok::<(), xxhash_stream::HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod serialize;
pub mod sink;
pub mod streaming;

pub use algorithm::{HashAlgorithm, ALGORITHM_NAMES};
pub use digest::DigestValue;
pub use error::{HashError, Result};
pub use sink::{ByteSink, HashSink, SinkError, SinkWriter};
pub use streaming::{hash_stream, StreamState, XxState};

use serde::Serialize;
use tracing::debug;

/// Compute the hex digest of a serializable value.
///
/// The value is encoded through the canonical serde encoder and streamed
/// into a fresh zero-seeded state for the named algorithm. Accepted names:
/// `"xxhash32"`, `"xxhash64"`, `"xxhash128"`, `"xxh3_64bits"` / `"xxh3"`.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] for names outside the accepted
/// set, [`HashError::Update`] if a hash state write fails, and
/// [`HashError::Serializer`] if encoding fails.
pub fn compute_digest<T: Serialize>(value: &T, algorithm: &str) -> Result<String> {
    compute_digest_with(algorithm, |sink| serialize::serialize_value(value, sink))
}

/// Compute the hex digest of whatever byte stream `serialize` pushes into
/// the sink.
///
/// The algorithm name is validated before any hash state is created; the
/// returned string is lowercase hex, zero-padded to exactly the algorithm's
/// documented width (8, 16, or 32 characters).
///
/// # Errors
///
/// Same taxonomy as [`compute_digest`]; each error names the stage that
/// failed and no partial digest is ever returned.
pub fn compute_digest_with<F>(algorithm: &str, serialize: F) -> Result<String>
where
    F: FnOnce(&mut dyn ByteSink) -> std::result::Result<(), SinkError>,
{
    let algorithm = HashAlgorithm::resolve(algorithm)?;
    let digest = streaming::hash_stream(algorithm, serialize)?;
    let rendered = digest.to_hex();
    debug!(algorithm = algorithm.name(), digest = %rendered, "digest computed");
    Ok(rendered)
}
