//! RNG seed derivation for round outcomes.
//!
//! Each round draws from its own RNG, derived from the engine's base seed
//! and the round id: same base seed + round id = same pocket, and no round
//! shares a stream with another. Production seeds the base from OS entropy;
//! tests pin it.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

const ROUND_SEED_CONTEXT: &str = "wheelhouse v1 round outcome";

/// Derive the 32-byte seed for one round's outcome RNG.
pub fn derive_round_seed(base_seed: u64, round_id: u64) -> [u8; 32] {
    let mut material = [0u8; 16];
    material[..8].copy_from_slice(&base_seed.to_le_bytes());
    material[8..].copy_from_slice(&round_id.to_le_bytes());
    blake3::derive_key(ROUND_SEED_CONTEXT, &material)
}

/// RNG for one round's draw.
pub fn round_rng(base_seed: u64, round_id: u64) -> ChaCha12Rng {
    ChaCha12Rng::from_seed(derive_round_seed(base_seed, round_id))
}
