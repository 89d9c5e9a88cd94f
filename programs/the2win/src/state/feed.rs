use anchor_lang::prelude::*;

use crate::constants::HISTORY_CAP;

/// Per-game head state. Single writer: only the owning game's lifecycle
/// instructions mutate it. Everything a reconnecting client needs to
/// resynchronize (current round pointer, recent outcomes) lives here.
#[account]
pub struct GameFeed {
    /// Game this feed drives (GAME_CRASH / GAME_BOXES / GAME_WINGO).
    pub game: u8,

    /// Id of the most recently opened round (0 = no round yet).
    pub current_round_id: u64,

    /// Fairness nonce; increments once per round.
    pub nonce: u64,

    /// 1 while the current round has not reached its terminal phase.
    pub round_open: u8,

    /// Bets in the current round that still await settlement. The next
    /// round cannot open until this returns to zero.
    pub pending_settlements: u32,

    /// Earliest unix timestamp at which the next round may open.
    pub next_round_not_before: i64,

    // ─────────────────────────────
    // Lifetime stats
    // ─────────────────────────────
    pub total_rounds: u64,
    pub total_bets: u64,
    pub total_staked: u64,
    pub total_paid_out: u64,

    // ─────────────────────────────
    // Recent outcome ring (newest at `history_head - 1`)
    // ─────────────────────────────
    /// Round ids matching `recent_outcomes`.
    pub recent_round_ids: [u64; HISTORY_CAP],

    /// Outcome per round, encoded by the game: Crash stores the crash
    /// point in bps, Boxes packs the three winner indexes into the low
    /// bytes, Wingo stores the color id.
    pub recent_outcomes: [u64; HISTORY_CAP],

    pub history_len: u8,
    pub history_head: u8,

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 32],
}

impl GameFeed {
    pub const SEED_PREFIX: &'static [u8] = b"game_feed";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        1  // game
            + 8  // current_round_id
            + 8  // nonce
            + 1  // round_open
            + 4  // pending_settlements
            + 8  // next_round_not_before
            + 8  // total_rounds
            + 8  // total_bets
            + 8  // total_staked
            + 8  // total_paid_out
            + (8 * HISTORY_CAP) // recent_round_ids
            + (8 * HISTORY_CAP) // recent_outcomes
            + 1  // history_len
            + 1  // history_head
            + 1  // bump
            + 32; // reserved

    pub fn init_new(&mut self, game: u8, bump: u8) {
        self.game = game;
        self.current_round_id = 0;
        self.nonce = 0;
        self.round_open = 0;
        self.pending_settlements = 0;
        self.next_round_not_before = 0;

        self.total_rounds = 0;
        self.total_bets = 0;
        self.total_staked = 0;
        self.total_paid_out = 0;

        self.recent_round_ids = [0u64; HISTORY_CAP];
        self.recent_outcomes = [0u64; HISTORY_CAP];
        self.history_len = 0;
        self.history_head = 0;

        self.bump = bump;
        self._reserved = [0u8; 32];
    }

    /// Advances the feed to a fresh round. Returns `(round_id, nonce)` for
    /// the new round. The caller is responsible for the open-gating checks
    /// (`round_open == 0`, `pending_settlements == 0`, intermission).
    pub fn begin_round(&mut self) -> (u64, u64) {
        self.current_round_id = self.current_round_id.saturating_add(1);
        self.nonce = self.nonce.saturating_add(1);
        self.total_rounds = self.total_rounds.saturating_add(1);
        self.round_open = 1;
        (self.current_round_id, self.nonce)
    }

    /// Marks the current round terminal and records its outcome in the ring.
    pub fn finish_round(&mut self, round_id: u64, encoded_outcome: u64, next_not_before: i64) {
        let idx = self.history_head as usize % HISTORY_CAP;
        self.recent_round_ids[idx] = round_id;
        self.recent_outcomes[idx] = encoded_outcome;

        self.history_head = ((idx + 1) % HISTORY_CAP) as u8;
        if (self.history_len as usize) < HISTORY_CAP {
            self.history_len += 1;
        }

        self.round_open = 0;
        self.next_round_not_before = next_not_before;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn fresh_feed() -> GameFeed {
        let mut feed = GameFeed {
            game: 0,
            current_round_id: 0,
            nonce: 0,
            round_open: 0,
            pending_settlements: 0,
            next_round_not_before: 0,
            total_rounds: 0,
            total_bets: 0,
            total_staked: 0,
            total_paid_out: 0,
            recent_round_ids: [0u64; HISTORY_CAP],
            recent_outcomes: [0u64; HISTORY_CAP],
            history_len: 0,
            history_head: 0,
            bump: 0,
            _reserved: [0u8; 32],
        };
        feed.init_new(0, 255);
        feed
    }

    #[test]
    fn test_game_feed_size() {
        let feed = fresh_feed();
        let bytes = feed.try_to_vec().unwrap();
        assert_eq!(bytes.len(), GameFeed::SIZE);
    }

    #[test]
    fn round_ids_and_nonce_advance_together() {
        let mut feed = fresh_feed();

        let (r1, n1) = feed.begin_round();
        assert_eq!((r1, n1), (1, 1));
        assert_eq!(feed.round_open, 1);

        feed.finish_round(r1, 15_000, 100);
        assert_eq!(feed.round_open, 0);
        assert_eq!(feed.next_round_not_before, 100);

        let (r2, n2) = feed.begin_round();
        assert_eq!((r2, n2), (2, 2));
    }

    #[test]
    fn history_ring_wraps_and_keeps_newest() {
        let mut feed = fresh_feed();

        for i in 0..(HISTORY_CAP as u64 + 3) {
            let (id, _) = feed.begin_round();
            feed.finish_round(id, 10_000 + i, 0);
        }

        assert_eq!(feed.history_len as usize, HISTORY_CAP);
        // The slot just behind the head holds the newest outcome.
        let newest = (feed.history_head as usize + HISTORY_CAP - 1) % HISTORY_CAP;
        assert_eq!(feed.recent_outcomes[newest], 10_000 + HISTORY_CAP as u64 + 2);
        assert_eq!(feed.recent_round_ids[newest], HISTORY_CAP as u64 + 3);
    }
}
