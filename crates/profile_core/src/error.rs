use std::error::Error;
use std::fmt;

use crate::layout::{DIGEST_LENGTH, TOTAL_LENGTH};
use crate::profile::digest_hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileErrorKind {
    LengthMismatch,
    DigestMismatch,
}

/// Validation failure for a profile.bin image. Carries structured
/// fields so callers branch on kind rather than message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    LengthMismatch {
        found: usize,
    },
    /// `expected` is the digest computed over the body, `found` is the
    /// digest stored in the file.
    DigestMismatch {
        expected: [u8; DIGEST_LENGTH],
        found: [u8; DIGEST_LENGTH],
    },
}

impl ProfileError {
    pub fn kind(&self) -> ProfileErrorKind {
        match self {
            ProfileError::LengthMismatch { .. } => ProfileErrorKind::LengthMismatch,
            ProfileError::DigestMismatch { .. } => ProfileErrorKind::DigestMismatch,
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::LengthMismatch { found } => write!(
                f,
                "incorrect file length: expected {TOTAL_LENGTH} bytes, found {found}"
            ),
            ProfileError::DigestMismatch { expected, found } => write!(
                f,
                "expected SHA-1 digest {}, found {}",
                digest_hex(expected),
                digest_hex(found)
            ),
        }
    }
}

impl Error for ProfileError {}
