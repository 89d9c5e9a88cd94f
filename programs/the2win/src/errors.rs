use anchor_lang::prelude::*;

#[error_code]
pub enum The2WinErrorCode {
    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,

    InvalidGame,
    InvalidTimings,
    InvalidBetBounds,
    InvalidAuthorityTarget,

    // ─────────────────────────────
    // Pause flags
    // ─────────────────────────────
    #[msg("Betting paused")]
    BettingPaused,

    #[msg("Withdrawals paused")]
    WithdrawalsPaused,

    // ─────────────────────────────
    // Bet placement
    // ─────────────────────────────
    #[msg("Invalid amount")]
    InvalidBetAmount,

    BetOutOfRange,

    #[msg("Betting closed")]
    BettingClosed,

    #[msg("Already bet on this slot")]
    DuplicateSlot,

    InvalidSlot,

    #[msg("Invalid box selection")]
    InvalidBoxIndex,

    #[msg("Invalid color selection")]
    InvalidColorSelection,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    // ─────────────────────────────
    // Cash-out
    // ─────────────────────────────
    #[msg("Round is not running")]
    NotRunning,

    #[msg("Already cashed out")]
    AlreadyCashedOut,

    #[msg("No such bet")]
    NoSuchBet,

    // ─────────────────────────────
    // Round lifecycle
    // ─────────────────────────────
    WrongPhase,
    PhaseDeadlineNotReached,
    RoundMismatch,

    #[msg("Previous round still live")]
    RoundStillLive,

    #[msg("Previous round has unsettled bets")]
    SettlementPending,

    IntermissionNotElapsed,

    #[msg("Round not resolved")]
    RoundNotResolved,

    #[msg("Bet already settled")]
    AlreadySettled,

    BetNotSettled,

    // ─────────────────────────────
    // Fairness / reveal
    // ─────────────────────────────
    #[msg("Server seed does not match commitment")]
    SeedHashMismatch,

    // ─────────────────────────────
    // Overrides / patterns
    // ─────────────────────────────
    #[msg("Invalid crash point")]
    InvalidCrashPoint,

    InvalidOverrideIndexes,

    #[msg("Invalid pattern sequence")]
    InvalidPatternSequence,

    InvalidPatternName,

    #[msg("Pattern is active")]
    PatternIsActive,

    PatternMismatch,
    PatternNotActive,

    // ─────────────────────────────
    // Wallet / requests
    // ─────────────────────────────
    InvalidMethod,
    InvalidDest,

    #[msg("Request already reviewed")]
    RequestNotPending,

    RequestMismatch,
    AssertInvariantFailed,

    // ─────────────────────────────
    // Archival
    // ─────────────────────────────
    HistoryWindowNotElapsed,
}
