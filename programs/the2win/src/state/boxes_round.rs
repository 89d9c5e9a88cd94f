use anchor_lang::prelude::*;

use crate::constants::BOX_WINNER_COUNT;

#[repr(u8)]
pub enum BoxesPhase {
    Waiting = 0,
    Locked = 1,
    Revealed = 2,
}

impl BoxesPhase {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One cycle of the Boxes state machine. Winners are computed at the
/// `Locked → Revealed` transition; multipliers 5x/3x/2x are assigned by
/// derivation (or override) order. Seed and winners stay zeroed until
/// reveal, which is the public redaction.
#[account]
pub struct BoxesRound {
    pub round_id: u64,
    pub nonce: u64,

    /// Current `BoxesPhase` as u8.
    pub phase: u8,

    pub created_at: i64,
    pub waiting_ends_at: i64,
    pub locked_ends_at: i64,
    pub revealed_at: i64,
    pub next_round_starts_at: i64,

    // ─────────────────────────────
    // Fairness commitment
    // ─────────────────────────────
    pub seed_hash: [u8; 32],
    pub server_seed: [u8; 32],
    pub seed_revealed: u8,

    /// Winning box indexes in multiplier order (5x, 3x, 2x).
    pub winners: [u8; BOX_WINNER_COUNT],
    pub outcome_source: u8,

    // ─────────────────────────────
    // Accounting
    // ─────────────────────────────
    pub total_bets: u32,
    pub settled_bets: u32,
    pub total_staked: u64,
    pub total_paid_out: u64,

    /// Unix timestamp when the last bet settled (0 while pending).
    pub settlement_completed_at: i64,

    pub bump: u8,
    pub _reserved: [u8; 16],
}

impl BoxesRound {
    pub const SEED_PREFIX: &'static [u8] = b"boxes_round";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // round_id
            + 8  // nonce
            + 1  // phase
            + 8  // created_at
            + 8  // waiting_ends_at
            + 8  // locked_ends_at
            + 8  // revealed_at
            + 8  // next_round_starts_at
            + 32 // seed_hash
            + 32 // server_seed
            + 1  // seed_revealed
            + BOX_WINNER_COUNT // winners
            + 1  // outcome_source
            + 4  // total_bets
            + 4  // settled_bets
            + 8  // total_staked
            + 8  // total_paid_out
            + 8  // settlement_completed_at
            + 1  // bump
            + 16; // reserved

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.phase == BoxesPhase::Waiting.as_u8()
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.phase == BoxesPhase::Revealed.as_u8()
    }

    /// Feed-history encoding: winner indexes packed into the low bytes,
    /// derivation order preserved.
    pub fn encoded_outcome(&self) -> u64 {
        (self.winners[0] as u64)
            | ((self.winners[1] as u64) << 8)
            | ((self.winners[2] as u64) << 16)
    }

    /// Multiplier for a box, or None if it lost.
    pub fn winner_multiplier_bps(&self, box_index: u8) -> Option<u64> {
        use crate::constants::BOX_WINNER_MULTIPLIERS_BPS;
        self.winners
            .iter()
            .position(|w| *w == box_index)
            .map(|i| BOX_WINNER_MULTIPLIERS_BPS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn revealed_round() -> BoxesRound {
        BoxesRound {
            round_id: 9,
            nonce: 9,
            phase: BoxesPhase::Revealed.as_u8(),
            created_at: 0,
            waiting_ends_at: 0,
            locked_ends_at: 0,
            revealed_at: 0,
            next_round_starts_at: 0,
            seed_hash: [0u8; 32],
            server_seed: [0u8; 32],
            seed_revealed: 1,
            winners: [3, 6, 0],
            outcome_source: 0,
            total_bets: 0,
            settled_bets: 0,
            total_staked: 0,
            total_paid_out: 0,
            settlement_completed_at: 0,
            bump: 0,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn test_boxes_round_size() {
        let bytes = revealed_round().try_to_vec().unwrap();
        assert_eq!(bytes.len(), BoxesRound::SIZE);
    }

    #[test]
    fn winner_multipliers_follow_derivation_order() {
        let round = revealed_round();
        assert_eq!(round.winner_multiplier_bps(3), Some(50_000));
        assert_eq!(round.winner_multiplier_bps(6), Some(30_000));
        assert_eq!(round.winner_multiplier_bps(0), Some(20_000));
        assert_eq!(round.winner_multiplier_bps(5), None);
    }

    #[test]
    fn outcome_encoding_packs_winners() {
        let round = revealed_round();
        assert_eq!(round.encoded_outcome(), 3 | (6 << 8));
    }
}
