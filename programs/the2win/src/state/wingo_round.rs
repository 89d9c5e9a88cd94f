use anchor_lang::prelude::*;

use crate::constants::WINGO_MULTIPLIERS_BPS;

#[repr(u8)]
pub enum WingoPhase {
    Betting = 0,
    Revealing = 1,
}

impl WingoPhase {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One cycle of the Wingo state machine: a betting window followed by a
/// reveal. The color result and seed are written at the
/// `Betting → Revealing` transition.
#[account]
pub struct WingoRound {
    pub round_id: u64,
    pub nonce: u64,

    /// Current `WingoPhase` as u8.
    pub phase: u8,

    pub created_at: i64,
    pub betting_ends_at: i64,
    pub reveal_at: i64,
    pub revealed_at: i64,

    // ─────────────────────────────
    // Fairness commitment
    // ─────────────────────────────
    pub seed_hash: [u8; 32],
    pub server_seed: [u8; 32],
    pub seed_revealed: u8,

    /// Winning color (WINGO_GREEN / WINGO_PURPLE / WINGO_RED).
    pub result_color: u8,
    pub result_multiplier_bps: u64,

    // ─────────────────────────────
    // Accounting
    // ─────────────────────────────
    pub total_bets: u32,
    pub settled_bets: u32,
    pub total_staked: u64,
    pub total_paid_out: u64,

    pub bump: u8,
    pub _reserved: [u8; 16],
}

impl WingoRound {
    pub const SEED_PREFIX: &'static [u8] = b"wingo_round";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // round_id
            + 8  // nonce
            + 1  // phase
            + 8  // created_at
            + 8  // betting_ends_at
            + 8  // reveal_at
            + 8  // revealed_at
            + 32 // seed_hash
            + 32 // server_seed
            + 1  // seed_revealed
            + 1  // result_color
            + 8  // result_multiplier_bps
            + 4  // total_bets
            + 4  // settled_bets
            + 8  // total_staked
            + 8  // total_paid_out
            + 1  // bump
            + 16; // reserved

    #[inline]
    pub fn is_betting(&self) -> bool {
        self.phase == WingoPhase::Betting.as_u8()
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.phase == WingoPhase::Revealing.as_u8()
    }

    /// Feed-history encoding: the color id.
    #[inline]
    pub fn encoded_outcome(&self) -> u64 {
        self.result_color as u64
    }

    pub fn multiplier_for(color: u8) -> u64 {
        WINGO_MULTIPLIERS_BPS[color as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn test_wingo_round_size() {
        let round = WingoRound {
            round_id: 0,
            nonce: 0,
            phase: 0,
            created_at: 0,
            betting_ends_at: 0,
            reveal_at: 0,
            revealed_at: 0,
            seed_hash: [0u8; 32],
            server_seed: [0u8; 32],
            seed_revealed: 0,
            result_color: 0,
            result_multiplier_bps: 0,
            total_bets: 0,
            settled_bets: 0,
            total_staked: 0,
            total_paid_out: 0,
            bump: 0,
            _reserved: [0u8; 16],
        };

        let bytes = round.try_to_vec().unwrap();
        assert_eq!(bytes.len(), WingoRound::SIZE);
    }

    #[test]
    fn color_multipliers_match_payout_table() {
        assert_eq!(WingoRound::multiplier_for(0), 20_000);
        assert_eq!(WingoRound::multiplier_for(1), 30_000);
        assert_eq!(WingoRound::multiplier_for(2), 50_000);
    }
}
