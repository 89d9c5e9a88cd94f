use sha2::{Digest, Sha256};

use crate::constants::{
    BOX_COUNT, BOX_WINNER_COUNT, BPS_DENOM, CRASH_EDGE_BPS, INSTANT_BUST_MOD, MAX_MULTIPLIER_BPS,
    MULTIPLIER_START_BPS, WINGO_WEIGHTS_BPS,
};

/// Public commitment published at round open: sha256 of the server seed.
/// Players verify fairness by re-hashing the seed revealed at resolution.
pub fn seed_commitment(server_seed: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(server_seed);
    hasher.finalize().into()
}

/// Per-round derivation digest: sha256(seed || nonce_le). Every outcome is a
/// pure function of this digest, so identical (seed, nonce) always produce
/// identical results.
pub fn outcome_digest(server_seed: &[u8; 32], nonce: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(server_seed);
    hasher.update(nonce.to_le_bytes());
    hasher.finalize().into()
}

/// Crash multiplier in bps. Draws a 32-bit uniform from the digest;
/// 1 in INSTANT_BUST_MOD rounds bust instantly at exactly 1.00x, the rest
/// follow the inverse-uniform curve `(2^32 * (1 - edge)) / (2^32 - r)`,
/// floored at 1.00x and capped at the ramp ceiling.
pub fn derive_crash_point_bps(server_seed: &[u8; 32], nonce: u64) -> u64 {
    let digest = outcome_digest(server_seed, nonce);
    let r = u32::from_le_bytes(digest[0..4].try_into().unwrap()) as u64;

    if r % INSTANT_BUST_MOD == 0 {
        return MULTIPLIER_START_BPS;
    }

    let two_pow_32: u128 = 1u128 << 32;
    let numerator = two_pow_32 * (BPS_DENOM - CRASH_EDGE_BPS) as u128;
    let denominator = two_pow_32 - r as u128;

    let point = (numerator / denominator) as u64;
    point.clamp(MULTIPLIER_START_BPS, MAX_MULTIPLIER_BPS)
}

/// Winning boxes in multiplier order (5x, 3x, 2x). `preset` entries (an
/// admin override, already deduplicated and range-checked) come first; the
/// remaining winners are drawn from the digest stream, skipping anything
/// already chosen. The digest is re-hashed if a stream runs out of bytes.
pub fn derive_box_winners(
    server_seed: &[u8; 32],
    nonce: u64,
    preset: &[u8],
) -> [u8; BOX_WINNER_COUNT] {
    debug_assert!(preset.len() <= BOX_WINNER_COUNT);

    let mut winners = [0u8; BOX_WINNER_COUNT];
    let mut count = preset.len().min(BOX_WINNER_COUNT);
    winners[..count].copy_from_slice(&preset[..count]);

    let mut digest = outcome_digest(server_seed, nonce);
    let mut pos = 0usize;

    while count < BOX_WINNER_COUNT {
        if pos == digest.len() {
            // Extend the stream deterministically.
            let mut hasher = Sha256::new();
            hasher.update(digest);
            digest = hasher.finalize().into();
            pos = 0;
        }

        let candidate = digest[pos] % BOX_COUNT;
        pos += 1;

        if !winners[..count].contains(&candidate) {
            winners[count] = candidate;
            count += 1;
        }
    }

    winners
}

/// Wingo color (0=GREEN, 1=PURPLE, 2=RED), weighted inversely to payout so
/// every color carries the same expected value below 1.
pub fn derive_wingo_color(server_seed: &[u8; 32], nonce: u64) -> u8 {
    let digest = outcome_digest(server_seed, nonce);
    let roll = u64::from_le_bytes(digest[0..8].try_into().unwrap()) % BPS_DENOM;

    let mut cumulative = 0u64;
    for (color, weight) in WINGO_WEIGHTS_BPS.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return color as u8;
        }
    }
    // Weights sum to BPS_DENOM, so the loop always returns; RED is the tail.
    (WINGO_WEIGHTS_BPS.len() - 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: [u8; 32] = [7u8; 32];

    #[test]
    fn commitment_matches_revealed_seed() {
        let hash = seed_commitment(&SEED);
        assert_eq!(hash, seed_commitment(&SEED));
        assert_ne!(hash, seed_commitment(&[8u8; 32]));
    }

    #[test]
    fn crash_derivation_is_deterministic() {
        for nonce in 0..64 {
            assert_eq!(
                derive_crash_point_bps(&SEED, nonce),
                derive_crash_point_bps(&SEED, nonce)
            );
        }
    }

    #[test]
    fn crash_point_never_drops_below_one() {
        for nonce in 0..512 {
            let point = derive_crash_point_bps(&SEED, nonce);
            assert!(point >= MULTIPLIER_START_BPS);
            assert!(point <= MAX_MULTIPLIER_BPS);
        }
    }

    #[test]
    fn box_winners_are_distinct_and_in_range() {
        for nonce in 0..128 {
            let winners = derive_box_winners(&SEED, nonce, &[]);
            for (i, w) in winners.iter().enumerate() {
                assert!(*w < BOX_COUNT);
                assert!(!winners[..i].contains(w));
            }
        }
    }

    #[test]
    fn box_preset_comes_first_and_is_never_redrawn() {
        let winners = derive_box_winners(&SEED, 3, &[3, 6]);
        assert_eq!(winners[0], 3);
        assert_eq!(winners[1], 6);
        assert!(winners[2] != 3 && winners[2] != 6);
        assert!(winners[2] < BOX_COUNT);

        let full = derive_box_winners(&SEED, 3, &[3, 6, 0]);
        assert_eq!(full, [3, 6, 0]);
    }

    #[test]
    fn wingo_color_is_deterministic_and_in_range() {
        for nonce in 0..128 {
            let color = derive_wingo_color(&SEED, nonce);
            assert!(color <= 2);
            assert_eq!(color, derive_wingo_color(&SEED, nonce));
        }
    }

    #[test]
    fn wingo_weights_cover_the_whole_roll_space() {
        assert_eq!(WINGO_WEIGHTS_BPS.iter().sum::<u64>(), BPS_DENOM);
    }
}
