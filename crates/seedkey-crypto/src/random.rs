use rand::rngs::OsRng;
use rand::RngCore;

/// Source of cryptographically random bytes.
pub trait RandomBytes: Send + Sync {
    /// Fill `dest` with random bytes.
    fn fill(&self, dest: &mut [u8]);

    /// 32 random bytes.
    fn random_32(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.fill(&mut bytes);
        bytes
    }
}

/// Operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomBytes for OsRandom {
    fn fill(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}
