/// Access point key hashing.
///
/// The raw BSSID never leaves the device. Each access point is reported
/// under the SHA-1 of its BSSID and SSID concatenated (no separator),
/// rendered as 40 uppercase hex digits.
use core::fmt::Write;

use sha1::{Digest, Sha1};

/// Length of a rendered hash key (20 digest bytes, two hex digits each)
pub const HASH_KEY_LEN: usize = 40;

/// Uppercase hex SHA-1 key
pub type HashKey = heapless::String<HASH_KEY_LEN>;

/// Reusable SHA-1 state for key hashing.
///
/// Hashing takes `&mut self`, so one hasher cannot be shared by overlapping
/// calls; give each builder its own.
#[derive(Default)]
pub struct KeyHasher {
    sha1: Sha1,
}

impl KeyHasher {
    pub fn new() -> Self {
        Self { sha1: Sha1::new() }
    }

    /// Hash a BSSID/SSID pair into its report key.
    pub fn hash_key(&mut self, bssid: &str, ssid: &str) -> HashKey {
        self.sha1.update(bssid.as_bytes());
        self.sha1.update(ssid.as_bytes());
        let digest = self.sha1.finalize_reset();

        let mut key = HashKey::new();
        for b in digest.iter() {
            let _ = write!(key, "{:02X}", b);
        }
        key
    }
}

/// One-shot [`KeyHasher::hash_key`] with a fresh hasher.
pub fn hash_key(bssid: &str, ssid: &str) -> HashKey {
    KeyHasher::new().hash_key(bssid, ssid)
}
