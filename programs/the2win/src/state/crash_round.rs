use anchor_lang::prelude::*;

#[repr(u8)]
pub enum CrashPhase {
    Waiting = 0, // accepting bets
    Locked = 1,  // bets closed, reveal preparation
    Running = 2, // multiplier ramping, cash-outs allowed
    Crashed = 3, // terminal; settlement in progress
}

impl CrashPhase {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Where a round's outcome came from. Recorded on the round so the audit
/// trail distinguishes forced outcomes from fair derivation.
#[repr(u8)]
pub enum OutcomeSource {
    Rng = 0,
    Override = 1,
    Pattern = 2,
}

impl OutcomeSource {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// ---------------------------------------------------------------------------
/// CrashRound
/// ---------------------------------------------------------------------------
///
/// One cycle of the Crash state machine. Created at `crash_round_open` with
/// the seed commitment already published; immutable after resolution except
/// for the settlement counter.
///
/// `server_seed` and `crash_point_bps` stay zeroed until the round resolves,
/// so a pre-resolution account read is the redacted public view by
/// construction — no projection logic needed.
#[account]
pub struct CrashRound {
    pub round_id: u64,

    /// Fairness nonce captured from the feed at open.
    pub nonce: u64,

    /// Current `CrashPhase` as u8.
    pub phase: u8,

    pub created_at: i64,
    pub waiting_ends_at: i64,
    pub locked_ends_at: i64,

    /// Slot of the first Running tick (0 until the ramp starts).
    pub started_slot: u64,

    /// Tick index at which the multiplier froze (0 until resolved).
    pub crash_tick: u64,

    pub crashed_at: i64,
    pub next_round_starts_at: i64,

    // ─────────────────────────────
    // Fairness commitment
    // ─────────────────────────────
    pub seed_hash: [u8; 32],
    pub server_seed: [u8; 32],
    pub seed_revealed: u8,
    pub crash_point_bps: u64,
    pub outcome_source: u8,

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

impl CrashRound {
    pub const SEED_PREFIX: &'static [u8] = b"crash_round";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // round_id
            + 8  // nonce
            + 1  // phase
            + 8  // created_at
            + 8  // waiting_ends_at
            + 8  // locked_ends_at
            + 8  // started_slot
            + 8  // crash_tick
            + 8  // crashed_at
            + 8  // next_round_starts_at
            + 32 // seed_hash
            + 32 // server_seed
            + 1  // seed_revealed
            + 8  // crash_point_bps
            + 1  // outcome_source
            + 4  // total_bets
            + 4  // settled_bets
            + 8  // total_staked
            + 8  // total_paid_out
            + 1  // bump
            + 16; // reserved

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.phase == CrashPhase::Waiting.as_u8()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == CrashPhase::Running.as_u8()
    }

    #[inline]
    pub fn is_crashed(&self) -> bool {
        self.phase == CrashPhase::Crashed.as_u8()
    }

    /// Feed-history encoding: the crash point itself.
    #[inline]
    pub fn encoded_outcome(&self) -> u64 {
        self.crash_point_bps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn test_crash_round_size() {
        let round = CrashRound {
            round_id: 0,
            nonce: 0,
            phase: 0,
            created_at: 0,
            waiting_ends_at: 0,
            locked_ends_at: 0,
            started_slot: 0,
            crash_tick: 0,
            crashed_at: 0,
            next_round_starts_at: 0,
            seed_hash: [0u8; 32],
            server_seed: [0u8; 32],
            seed_revealed: 0,
            crash_point_bps: 0,
            outcome_source: 0,
            total_bets: 0,
            settled_bets: 0,
            total_staked: 0,
            total_paid_out: 0,
            bump: 0,
            _reserved: [0u8; 16],
        };

        let bytes = round.try_to_vec().unwrap();
        assert_eq!(bytes.len(), CrashRound::SIZE);
    }
}
