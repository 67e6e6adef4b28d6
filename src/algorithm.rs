//! Closed registry of supported xxHash algorithms
//!
//! Resolution is a pure lookup over a fixed identifier set; an unrecognized
//! name is a terminal error, never a silent default. Adding an algorithm
//! means adding one enum variant and its match arms here.

use std::fmt;
use std::str::FromStr;

use crate::error::{HashError, Result};
use crate::streaming::XxState;

/// Identifiers accepted by [`HashAlgorithm::resolve`], exact and case-sensitive.
pub const ALGORITHM_NAMES: [&str; 5] = ["xxhash32", "xxhash64", "xxhash128", "xxh3_64bits", "xxh3"];

/// The closed set of supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// Classic 32-bit xxHash
    XxHash32,
    /// Classic 64-bit xxHash
    XxHash64,
    /// XXH3 with a 128-bit digest
    XxHash128,
    /// XXH3 with a 64-bit digest
    Xxh3_64,
}

impl HashAlgorithm {
    /// Resolve a user-supplied identifier against the registry.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::UnknownAlgorithm`] echoing the offending string
    /// when `name` is not one of [`ALGORITHM_NAMES`].
    pub fn resolve(name: &str) -> Result<Self> {
        match name {
            "xxhash32" => Ok(Self::XxHash32),
            "xxhash64" => Ok(Self::XxHash64),
            "xxhash128" => Ok(Self::XxHash128),
            "xxh3_64bits" | "xxh3" => Ok(Self::Xxh3_64),
            other => Err(HashError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// Canonical identifier for this algorithm
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::XxHash32 => "xxhash32",
            Self::XxHash64 => "xxhash64",
            Self::XxHash128 => "xxhash128",
            Self::Xxh3_64 => "xxh3_64bits",
        }
    }

    /// Digest width in bytes
    #[must_use]
    pub fn digest_bytes(self) -> usize {
        match self {
            Self::XxHash32 => 4,
            Self::XxHash64 | Self::Xxh3_64 => 8,
            Self::XxHash128 => 16,
        }
    }

    /// Length of the rendered hex digest: two characters per digest byte
    #[must_use]
    pub fn hex_len(self) -> usize {
        self.digest_bytes() * 2
    }

    /// Create a fresh incremental state seeded with zero.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::StateAllocation`] or [`HashError::Init`] if the
    /// backend cannot produce a usable state. The `twox-hash` constructors
    /// are infallible, so this cannot fail today; the signature is part of
    /// the state-lifecycle contract.
    pub fn create_state(self) -> Result<XxState> {
        Ok(XxState::new(self))
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_accepted_identifier() {
        assert_eq!(
            HashAlgorithm::resolve("xxhash32").expect("xxhash32 should resolve"),
            HashAlgorithm::XxHash32
        );
        assert_eq!(
            HashAlgorithm::resolve("xxhash64").expect("xxhash64 should resolve"),
            HashAlgorithm::XxHash64
        );
        assert_eq!(
            HashAlgorithm::resolve("xxhash128").expect("xxhash128 should resolve"),
            HashAlgorithm::XxHash128
        );
        assert_eq!(
            HashAlgorithm::resolve("xxh3_64bits").expect("xxh3_64bits should resolve"),
            HashAlgorithm::Xxh3_64
        );
        assert_eq!(
            HashAlgorithm::resolve("xxh3").expect("xxh3 alias should resolve"),
            HashAlgorithm::Xxh3_64
        );
    }

    #[test]
    fn rejects_unknown_and_near_miss_identifiers() {
        for name in ["", "XXHASH32", "xxhash", "xxhash256", "md5", " xxhash64"] {
            let err = HashAlgorithm::resolve(name).expect_err("should be rejected");
            match err {
                HashError::UnknownAlgorithm(echoed) => assert_eq!(echoed, name),
                other => panic!("expected UnknownAlgorithm, got {other:?}"),
            }
        }
    }

    #[test]
    fn widths_match_the_documented_contract() {
        assert_eq!(HashAlgorithm::XxHash32.hex_len(), 8);
        assert_eq!(HashAlgorithm::XxHash64.hex_len(), 16);
        assert_eq!(HashAlgorithm::Xxh3_64.hex_len(), 16);
        assert_eq!(HashAlgorithm::XxHash128.hex_len(), 32);
    }
}
