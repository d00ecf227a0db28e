//! RngSeed — доменный seed для выбора победителя.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8; 32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || old || round_id)
//!   - создавать HashRng (любая платформа, в т.ч. wasm) или DeterministicRng из seed
//!
//! Хост передаёт базовый seed, а леджер получает свой RNG на каждый раунд.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::RoundId;
use crate::engine::RandomSource;
#[cfg(not(target_arch = "wasm32"))]
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда.
    pub fn derive(&self, round_id: RoundId) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"LOTTERY_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(round_id.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }

    /// RNG только на sha2, работает и внутри wasm-контракта.
    pub fn to_hash_rng(&self) -> HashRng {
        HashRng::new(self.clone())
    }
}

/// RNG на SHA-256 со счётчиком:
///     value_i = H(domain || seed || i),  index = value_i mod len
///
/// Без rand/getrandom, поэтому годится для Linera-контракта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashRng {
    seed: RngSeed,
    counter: u64,
}

impl HashRng {
    pub fn new(seed: RngSeed) -> Self {
        Self { seed, counter: 0 }
    }

    /// Сколько индексов уже выдано.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    fn next_u128(&mut self) -> u128 {
        let mut hasher = Sha256::new();

        hasher.update(b"LOTTERY_ENGINE_PICK_V1");
        hasher.update(self.seed.bytes);
        hasher.update(self.counter.to_le_bytes());

        self.counter = self.counter.wrapping_add(1);

        let hash = hasher.finalize();
        let mut b = [0u8; 16];
        b.copy_from_slice(&hash[..16]);
        u128::from_le_bytes(b)
    }
}

impl RandomSource for HashRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // 128 бит против len: смещение от mod пренебрежимо мало.
        (self.next_u128() % len as u128) as usize
    }
}
