use core::hash::{BuildHasherDefault, Hasher};

/// Karp-Rabin style rolling hash. Cubes feed it one slot at a time, so a
/// state hashes in 24 multiply-adds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotHasher(u64);

pub type SlotBuildHasher = BuildHasherDefault<SlotHasher>;

const BASE: u64 = 0xFFF;

impl SlotHasher {
    fn roll(&mut self, value: u64) {
        self.0 = self.0.wrapping_mul(BASE).wrapping_add(value);
    }
}

impl Hasher for SlotHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.roll(u64::from(b));
        }
    }

    fn write_u16(&mut self, value: u16) {
        self.roll(u64::from(value));
    }
}
