pub const BPS_DENOM: u64 = 10_000;

// ─────────────────────────────
// Game identifiers
// ─────────────────────────────
pub const GAME_CRASH: u8 = 0;
pub const GAME_BOXES: u8 = 1;
pub const GAME_WINGO: u8 = 2;
pub const GAME_COUNT: usize = 3;

// Crash bet slots (a player may hold both in one round)
pub const SLOT_A: u8 = 0;
pub const SLOT_B: u8 = 1;

// ─────────────────────────────
// Bet bounds (minor currency units)
// ─────────────────────────────
pub const DEFAULT_MIN_BET_UNITS: u64 = 20;
pub const DEFAULT_MAX_BET_UNITS: u64 = 100_000;

// ─────────────────────────────
// Crash multiplier ramp
// ─────────────────────────────
// One tick per slot while the round is Running. The multiplier compounds by
// GROWTH_BPS_PER_TICK each tick starting from exactly 1.00x.
pub const MULTIPLIER_START_BPS: u64 = 10_000;
pub const GROWTH_BPS_PER_TICK: u64 = 300;
pub const MAX_MULTIPLIER_BPS: u64 = 10_000_000; // 1000.00x hard ceiling

// Crash point distribution: ~1 in 33 rounds bust instantly at 1.00x, the
// rest follow an inverse-uniform curve with the house edge below.
pub const CRASH_EDGE_BPS: u64 = 400;
pub const INSTANT_BUST_MOD: u64 = 33;

// ─────────────────────────────
// Boxes
// ─────────────────────────────
pub const BOX_COUNT: u8 = 10;
pub const BOX_WINNER_COUNT: usize = 3;
// Assigned by derivation (or override) order.
pub const BOX_WINNER_MULTIPLIERS_BPS: [u64; BOX_WINNER_COUNT] = [50_000, 30_000, 20_000];

// ─────────────────────────────
// Wingo
// ─────────────────────────────
pub const WINGO_GREEN: u8 = 0;
pub const WINGO_PURPLE: u8 = 1;
pub const WINGO_RED: u8 = 2;
pub const WINGO_MULTIPLIERS_BPS: [u64; 3] = [20_000, 30_000, 50_000];
// Weights are inverse to payout so every color carries the same expected
// value (~0.968); they must sum to BPS_DENOM.
pub const WINGO_WEIGHTS_BPS: [u64; 3] = [4_839, 3_226, 1_935];

// ─────────────────────────────
// Default phase timings (seconds)
// ─────────────────────────────
pub const CRASH_BETTING_SECS: u32 = 5;
pub const CRASH_LOCKED_SECS: u32 = 3;
pub const CRASH_INTERMISSION_SECS: u32 = 4;

pub const BOXES_BETTING_SECS: u32 = 10;
pub const BOXES_LOCKED_SECS: u32 = 3;
pub const BOXES_INTERMISSION_SECS: u32 = 5;

pub const WINGO_BETTING_SECS: u32 = 30;
pub const WINGO_INTERMISSION_SECS: u32 = 5;

// ─────────────────────────────
// History / archival
// ─────────────────────────────
/// Recent outcomes kept on each feed for client resynchronization.
pub const HISTORY_CAP: usize = 16;

/// Rounds younger than this (relative to the feed head) cannot be closed.
pub const HISTORY_WINDOW_ROUNDS: u64 = 64;

// ─────────────────────────────
// Patterns / requests
// ─────────────────────────────
pub const MAX_PATTERN_STEPS: usize = 32;
pub const PATTERN_NAME_LEN: usize = 32;

/// Withdraw destination (bank account / exchange address), UTF-8 padded.
pub const DEST_LEN: usize = 64;

pub const DEPOSIT_METHOD_CASH_AGENT: u8 = 0;
pub const DEPOSIT_METHOD_BINANCE: u8 = 1;

pub const WITHDRAW_METHOD_BANK_IN: u8 = 0;
pub const WITHDRAW_METHOD_BINANCE: u8 = 1;
pub const WITHDRAW_METHOD_CASH_AGENT: u8 = 2;
