use crate::error::ProfileError;
use crate::profile::{ProfileData, digest_hex};

use super::types::Snapshot;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug)]
pub struct Session {
    snapshot: Snapshot,
    profile: ProfileData,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw profile bytes and open an editing session over
    /// them. Validation failure leaves nothing constructed; there is
    /// no partially valid session.
    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, ProfileError> {
        let profile = ProfileData::from_bytes(bytes.as_ref())?;
        let snapshot = snapshot_of(&profile);
        Ok(Session { snapshot, profile })
    }
}

impl Session {
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn sensitivity(&self) -> u8 {
        self.profile.sensitivity()
    }

    pub fn set_sensitivity(&mut self, value: u8) {
        self.profile.set_sensitivity(value);
        self.snapshot = snapshot_of(&self.profile);
    }

    /// The current 197-byte image, digest included, for persistence.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.profile.as_bytes().to_vec()
    }
}

fn snapshot_of(profile: &ProfileData) -> Snapshot {
    Snapshot {
        sensitivity: profile.sensitivity(),
        digest: digest_hex(&profile.digest()),
    }
}
