use anchor_lang::prelude::*;

/// ---------------------------------------------------------------------------
/// CrashBet
/// ---------------------------------------------------------------------------
/// A single stake on one Crash round slot. A player may hold at most one bet
/// per slot (A and B) per round — the PDA seeds enforce uniqueness, and the
/// handler rejects re-initialization explicitly.
///
/// Mutated exactly twice after creation: once by cash-out (captures the
/// multiplier at the tick of the request) and once by settlement. Never
/// deleted before settlement; afterwards the account may be closed back to
/// the player for rent.
#[account]
pub struct CrashBet {
    pub round_id: u64,
    pub player: Pubkey,

    /// SLOT_A or SLOT_B.
    pub slot: u8,

    /// Stake in minor currency units (already debited from the wallet).
    pub amount: u64,

    pub placed_at: i64,
    pub placed_slot: u64,

    // ─────────────────────────────
    // Cash-out
    // ─────────────────────────────
    pub cashed_out: u8,

    /// Multiplier captured at the cash-out tick (0 if never cashed out).
    pub cashout_multiplier_bps: u64,

    /// Tick index (slots since ramp start) of the cash-out.
    pub cashout_tick: u64,

    // ─────────────────────────────
    // Settlement
    // ─────────────────────────────
    pub settled: u8,
    pub won: u8,
    pub payout: u64,
    pub settled_at: i64,

    pub bump: u8,
    pub _reserved: [u8; 8],
}

impl CrashBet {
    pub const SEED_PREFIX: &'static [u8] = b"crash_bet";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // round_id
            + 32 // player
            + 1  // slot
            + 8  // amount
            + 8  // placed_at
            + 8  // placed_slot
            + 1  // cashed_out
            + 8  // cashout_multiplier_bps
            + 8  // cashout_tick
            + 1  // settled
            + 1  // won
            + 8  // payout
            + 8  // settled_at
            + 1  // bump
            + 8; // reserved

    /// A cashed-out bet wins iff it left strictly before the crash tick.
    #[inline]
    pub fn wins_against(&self, crash_tick: u64) -> bool {
        self.cashed_out != 0 && self.cashout_tick < crash_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn bet() -> CrashBet {
        CrashBet {
            round_id: 1,
            player: Pubkey::default(),
            slot: 0,
            amount: 20,
            placed_at: 0,
            placed_slot: 0,
            cashed_out: 0,
            cashout_multiplier_bps: 0,
            cashout_tick: 0,
            settled: 0,
            won: 0,
            payout: 0,
            settled_at: 0,
            bump: 0,
            _reserved: [0u8; 8],
        }
    }

    #[test]
    fn test_crash_bet_size() {
        let bytes = bet().try_to_vec().unwrap();
        assert_eq!(bytes.len(), CrashBet::SIZE);
    }

    #[test]
    fn cashout_on_the_crash_tick_loses() {
        let mut b = bet();
        b.cashed_out = 1;
        b.cashout_tick = 12;

        assert!(b.wins_against(13));
        assert!(!b.wins_against(12));

        b.cashed_out = 0;
        assert!(!b.wins_against(13));
    }
}
