use anchor_lang::prelude::*;

// Every state-machine transition and ledger action emits one event, in
// transaction order. Subscribers replay these as the realtime stream; a
// reconnecting client resynchronizes from the feed/round accounts instead.

// ─────────────────────────────
// Crash
// ─────────────────────────────

#[event]
pub struct CrashRoundOpened {
    pub round_id: u64,
    pub nonce: u64,
    pub seed_hash: [u8; 32],
    pub waiting_ends_at: i64,
    pub locked_ends_at: i64,
}

#[event]
pub struct CrashRoundLocked {
    pub round_id: u64,
    pub locked_ends_at: i64,
    pub total_bets: u32,
    pub total_staked: u64,
}

#[event]
pub struct CrashRoundStarted {
    pub round_id: u64,
    pub started_slot: u64,
}

#[event]
pub struct CrashRoundCrashed {
    pub round_id: u64,
    pub crash_point_bps: u64,
    pub crash_tick: u64,
    pub server_seed: [u8; 32],
    pub outcome_source: u8,
    pub next_round_starts_at: i64,
}

#[event]
pub struct CrashBetPlaced {
    pub round_id: u64,
    pub player: Pubkey,
    pub slot: u8,
    pub amount: u64,
    pub balance_after: u64,
}

#[event]
pub struct CrashCashedOut {
    pub round_id: u64,
    pub player: Pubkey,
    pub slot: u8,
    pub multiplier_bps: u64,
    pub tick: u64,
}

// ─────────────────────────────
// Boxes
// ─────────────────────────────

#[event]
pub struct BoxesRoundOpened {
    pub round_id: u64,
    pub nonce: u64,
    pub seed_hash: [u8; 32],
    pub waiting_ends_at: i64,
    pub locked_ends_at: i64,
}

#[event]
pub struct BoxesRoundLocked {
    pub round_id: u64,
    pub locked_ends_at: i64,
    pub total_bets: u32,
}

#[event]
pub struct BoxesRoundRevealed {
    pub round_id: u64,
    pub winners: [u8; 3],
    pub server_seed: [u8; 32],
    pub outcome_source: u8,
    pub next_round_starts_at: i64,
}

#[event]
pub struct BoxesBetPlaced {
    pub round_id: u64,
    pub player: Pubkey,
    pub box_index: u8,
    pub amount: u64,
    pub balance_after: u64,
}

// ─────────────────────────────
// Wingo
// ─────────────────────────────

#[event]
pub struct WingoRoundOpened {
    pub round_id: u64,
    pub nonce: u64,
    pub seed_hash: [u8; 32],
    pub betting_ends_at: i64,
}

#[event]
pub struct WingoRoundRevealed {
    pub round_id: u64,
    pub color: u8,
    pub multiplier_bps: u64,
    pub server_seed: [u8; 32],
    pub next_round_starts_at: i64,
}

#[event]
pub struct WingoBetPlaced {
    pub round_id: u64,
    pub player: Pubkey,
    pub color: u8,
    pub amount: u64,
    pub balance_after: u64,
}

// ─────────────────────────────
// Settlement (all games)
// ─────────────────────────────

#[event]
pub struct BetSettled {
    pub game: u8,
    pub round_id: u64,
    pub player: Pubkey,
    pub won: bool,
    pub payout: u64,
    pub balance_after: u64,
}

// ─────────────────────────────
// Wallet ledger
// ─────────────────────────────

/// Append-only transaction journal entry. `kind` is one of the
/// `TX_*` constants on `PlayerWallet`.
#[event]
pub struct TransactionRecorded {
    pub user: Pubkey,
    pub kind: u8,
    pub amount: u64,
    pub balance_after: u64,
    pub seq: u64,
}

#[event]
pub struct DepositRequested {
    pub request_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub method: u8,
}

#[event]
pub struct DepositReviewed {
    pub request_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub approved: bool,
}

#[event]
pub struct WithdrawRequested {
    pub request_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub method: u8,
}

#[event]
pub struct WithdrawReviewed {
    pub request_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub approved: bool,
}

// ─────────────────────────────
// Admin overrides / patterns
// ─────────────────────────────

#[event]
pub struct CrashOverrideQueued {
    pub crash_point_bps: u64,
}

#[event]
pub struct BoxesOverrideQueued {
    pub indexes: [u8; 3],
    pub count: u8,
}

#[event]
pub struct PatternCreated {
    pub pattern_id: u64,
    pub steps: u8,
}

#[event]
pub struct PatternUpdated {
    pub pattern_id: u64,
    pub steps: u8,
}

#[event]
pub struct PatternActivated {
    pub pattern_id: u64,
}

#[event]
pub struct PatternDeactivated {
    pub pattern_id: u64,
}
