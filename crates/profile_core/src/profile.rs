use sha1::{Digest, Sha1};

use crate::error::ProfileError;
use crate::layout::{BODY, DIGEST, DIGEST_LENGTH, SENSITIVITY_OFFSET, TOTAL_LENGTH};

/// The validated in-memory image of a Borderlands profile.bin file.
///
/// A value of this type always satisfies the format invariants: the
/// buffer is exactly [`TOTAL_LENGTH`] bytes and the stored digest
/// equals the SHA-1 of the body. Validation happens once, at
/// construction; mutation goes through [`set_sensitivity`], which
/// restores the digest before returning.
///
/// [`set_sensitivity`]: ProfileData::set_sensitivity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    data: Vec<u8>,
}

impl ProfileData {
    /// Validate `bytes` and take an exclusively owned copy.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProfileError> {
        if bytes.len() != TOTAL_LENGTH {
            return Err(ProfileError::LengthMismatch { found: bytes.len() });
        }

        let computed = body_digest(bytes);
        let mut stored = [0u8; DIGEST_LENGTH];
        stored.copy_from_slice(&bytes[DIGEST.start..DIGEST.end]);
        if stored != computed {
            return Err(ProfileError::DigestMismatch {
                expected: computed,
                found: stored,
            });
        }

        Ok(Self {
            data: bytes.to_vec(),
        })
    }

    /// The mouse sensitivity byte. Any value 0x00-0xff is meaningful
    /// to the game.
    pub fn sensitivity(&self) -> u8 {
        self.data[SENSITIVITY_OFFSET]
    }

    /// Write the sensitivity byte and re-derive the stored digest over
    /// the updated body. No intermediate stale-digest state is ever
    /// observable through the public API.
    pub fn set_sensitivity(&mut self, value: u8) {
        self.data[SENSITIVITY_OFFSET] = value;
        let digest = body_digest(&self.data);
        self.data[DIGEST.start..DIGEST.end].copy_from_slice(&digest);
    }

    /// The stored digest, always current for the body that follows it.
    pub fn digest(&self) -> [u8; DIGEST_LENGTH] {
        let mut out = [0u8; DIGEST_LENGTH];
        out.copy_from_slice(&self.data[DIGEST.start..DIGEST.end]);
        out
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

fn body_digest(bytes: &[u8]) -> [u8; DIGEST_LENGTH] {
    Sha1::digest(&bytes[BODY.start..BODY.end]).into()
}

/// Lowercase hex rendering used for diagnostics and snapshots.
pub fn digest_hex(digest: &[u8]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
