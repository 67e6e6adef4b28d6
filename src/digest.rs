//! Digest values and fixed-width hex rendering

use std::fmt;

/// Finalized digest of one hashing operation.
///
/// Read-only once produced; the variant carries its own width, so a value
/// can never be rendered at the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestValue {
    /// 32-bit digest (xxhash32)
    U32(u32),
    /// 64-bit digest (xxhash64, xxh3_64bits)
    U64(u64),
    /// 128-bit digest as two 64-bit halves (xxhash128)
    U128 {
        /// Upper 64 bits, rendered first
        high: u64,
        /// Lower 64 bits, rendered second
        low: u64,
    },
}

impl DigestValue {
    /// Render the digest as lowercase hex, zero-padded to exactly two
    /// characters per digest byte, no prefix or separator.
    ///
    /// The 128-bit variant renders the high half first, then the low half,
    /// each padded to 16 digits. This ordering is an external contract.
    #[must_use]
    pub fn to_hex(&self) -> String {
        match *self {
            Self::U32(value) => hex::encode(value.to_be_bytes()),
            Self::U64(value) => hex::encode(value.to_be_bytes()),
            Self::U128 { high, low } => {
                let mut bytes = [0u8; 16];
                bytes[..8].copy_from_slice(&high.to_be_bytes());
                bytes[8..].copy_from_slice(&low.to_be_bytes());
                hex::encode(bytes)
            }
        }
    }

    /// Length of the hex rendering for this digest
    #[must_use]
    pub fn hex_len(&self) -> usize {
        match self {
            Self::U32(_) => 8,
            Self::U64(_) => 16,
            Self::U128 { .. } => 32,
        }
    }
}

impl fmt::Display for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
