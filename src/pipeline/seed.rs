use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive a reproducible RNG for one selection (day, district, strategy, ...).
pub fn selection_rng(base_seed: u64, parts: &[&str]) -> ChaCha8Rng {
    let mut hasher = Fnv64::new();
    hasher.update(&base_seed.to_le_bytes());
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(&[0x1f]);
    }
    ChaCha8Rng::seed_from_u64(hasher.finish())
}

struct Fnv64 {
    hash: u64,
}

impl Fnv64 {
    fn new() -> Self {
        Self {
            hash: 0xcbf29ce484222325,
        }
    }

    fn update(&mut self, data: &[u8]) {
        let mut h = self.hash;
        for &b in data {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.hash = h;
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}
