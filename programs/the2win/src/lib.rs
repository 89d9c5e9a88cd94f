use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("9DK7L2UFtEmkrMPpvwFZs4B63RvVPwJR34NGWm9NEbVy");

security_txt! {
    name: "The2Win",
    project_url: "https://www.the2win.com",
    source_code: "https://github.com/the2win/the2win-engine",
    contacts: "mailto:security@the2win.com",
    policy: "https://github.com/the2win/the2win-engine/blob/main/SECURITY.md",
    preferred_languages: "en"
}

// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod the2win {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        pause_bet: Option<u8>,
        pause_withdraw: Option<u8>,
        new_authority: Option<Pubkey>,
        new_min_bet_units: Option<u64>,
        new_max_bet_units: Option<u64>,
        timing_updates: Vec<TimingUpdateArgs>,
    ) -> Result<()> {
        update_config_handler(
            ctx,
            pause_bet,
            pause_withdraw,
            new_authority,
            new_min_bet_units,
            new_max_bet_units,
            timing_updates,
        )
    }

    // -------------------------------------------------------------------------
    // emergency_pause_all
    // -------------------------------------------------------------------------
    pub fn emergency_pause_all(ctx: Context<UpdateConfig>) -> Result<()> {
        update_config_handler(ctx, Some(1), Some(1), None, None, None, vec![])
    }

    // =====================================================================
    // WALLET / REQUEST LIFECYCLE
    // =====================================================================

    pub fn create_deposit_request(
        ctx: Context<CreateDepositRequest>,
        request_id: u32,
        amount: u64,
        method: u8,
        receipt_hash: [u8; 32],
    ) -> Result<()> {
        create_deposit_request_handler(ctx, request_id, amount, method, receipt_hash)
    }

    pub fn review_deposit_request(
        ctx: Context<ReviewDepositRequest>,
        approve: bool,
    ) -> Result<()> {
        review_deposit_request_handler(ctx, approve)
    }

    pub fn create_withdraw_request(
        ctx: Context<CreateWithdrawRequest>,
        request_id: u32,
        amount: u64,
        method: u8,
        dest: Vec<u8>,
    ) -> Result<()> {
        create_withdraw_request_handler(ctx, request_id, amount, method, dest)
    }

    pub fn review_withdraw_request(
        ctx: Context<ReviewWithdrawRequest>,
        approve: bool,
    ) -> Result<()> {
        review_withdraw_request_handler(ctx, approve)
    }

    // =====================================================================
    // CRASH
    // =====================================================================

    pub fn open_crash_round(
        ctx: Context<OpenCrashRound>,
        round_id: u64,
        seed_hash: [u8; 32],
    ) -> Result<()> {
        open_crash_round_handler(ctx, round_id, seed_hash)
    }

    pub fn lock_crash_round(ctx: Context<LockCrashRound>, round_id: u64) -> Result<()> {
        lock_crash_round_handler(ctx, round_id)
    }

    pub fn start_crash_round(ctx: Context<StartCrashRound>, round_id: u64) -> Result<()> {
        start_crash_round_handler(ctx, round_id)
    }

    pub fn place_crash_bet(
        ctx: Context<PlaceCrashBet>,
        round_id: u64,
        amount: u64,
        slot: u8,
    ) -> Result<()> {
        place_crash_bet_handler(ctx, round_id, amount, slot)
    }

    pub fn cash_out_crash(ctx: Context<CashOutCrash>, round_id: u64, slot: u8) -> Result<()> {
        cash_out_crash_handler(ctx, round_id, slot)
    }

    pub fn resolve_crash_round(
        ctx: Context<ResolveCrashRound>,
        round_id: u64,
        server_seed: [u8; 32],
    ) -> Result<()> {
        resolve_crash_round_handler(ctx, round_id, server_seed)
    }

    pub fn settle_crash_bet(ctx: Context<SettleCrashBet>, round_id: u64) -> Result<()> {
        settle_crash_bet_handler(ctx, round_id)
    }

    // =====================================================================
    // BOXES
    // =====================================================================

    pub fn open_boxes_round(
        ctx: Context<OpenBoxesRound>,
        round_id: u64,
        seed_hash: [u8; 32],
    ) -> Result<()> {
        open_boxes_round_handler(ctx, round_id, seed_hash)
    }

    pub fn lock_boxes_round(ctx: Context<LockBoxesRound>, round_id: u64) -> Result<()> {
        lock_boxes_round_handler(ctx, round_id)
    }

    pub fn place_boxes_bet(
        ctx: Context<PlaceBoxesBet>,
        round_id: u64,
        amount: u64,
        box_index: u8,
    ) -> Result<()> {
        place_boxes_bet_handler(ctx, round_id, amount, box_index)
    }

    pub fn reveal_boxes_round(
        ctx: Context<RevealBoxesRound>,
        round_id: u64,
        server_seed: [u8; 32],
    ) -> Result<()> {
        reveal_boxes_round_handler(ctx, round_id, server_seed)
    }

    pub fn settle_boxes_bet(ctx: Context<SettleBoxesBet>, round_id: u64) -> Result<()> {
        settle_boxes_bet_handler(ctx, round_id)
    }

    // =====================================================================
    // WINGO
    // =====================================================================

    pub fn open_wingo_round(
        ctx: Context<OpenWingoRound>,
        round_id: u64,
        seed_hash: [u8; 32],
    ) -> Result<()> {
        open_wingo_round_handler(ctx, round_id, seed_hash)
    }

    pub fn place_wingo_bet(
        ctx: Context<PlaceWingoBet>,
        round_id: u64,
        amount: u64,
        color: u8,
    ) -> Result<()> {
        place_wingo_bet_handler(ctx, round_id, amount, color)
    }

    pub fn reveal_wingo_round(
        ctx: Context<RevealWingoRound>,
        round_id: u64,
        server_seed: [u8; 32],
    ) -> Result<()> {
        reveal_wingo_round_handler(ctx, round_id, server_seed)
    }

    pub fn settle_wingo_bet(ctx: Context<SettleWingoBet>, round_id: u64) -> Result<()> {
        settle_wingo_bet_handler(ctx, round_id)
    }

    // =====================================================================
    // ADMIN OVERRIDES / PATTERNS
    // =====================================================================

    pub fn queue_crash_override(ctx: Context<QueueOverride>, crash_point_bps: u64) -> Result<()> {
        queue_crash_override_handler(ctx, crash_point_bps)
    }

    pub fn queue_boxes_override(ctx: Context<QueueOverride>, indexes: Vec<u8>) -> Result<()> {
        queue_boxes_override_handler(ctx, indexes)
    }

    pub fn create_crash_pattern(
        ctx: Context<CreateCrashPattern>,
        pattern_id: u64,
        name: Vec<u8>,
        sequence: Vec<u64>,
    ) -> Result<()> {
        create_crash_pattern_handler(ctx, pattern_id, name, sequence)
    }

    pub fn update_crash_pattern(
        ctx: Context<UpdateCrashPattern>,
        name: Option<Vec<u8>>,
        sequence: Option<Vec<u64>>,
    ) -> Result<()> {
        update_crash_pattern_handler(ctx, name, sequence)
    }

    pub fn activate_crash_pattern(ctx: Context<SwitchCrashPattern>) -> Result<()> {
        activate_crash_pattern_handler(ctx)
    }

    pub fn deactivate_crash_pattern(ctx: Context<SwitchCrashPattern>) -> Result<()> {
        deactivate_crash_pattern_handler(ctx)
    }

    // =====================================================================
    // ARCHIVAL
    // =====================================================================

    pub fn close_crash_round(ctx: Context<CloseCrashRound>, round_id: u64) -> Result<()> {
        close_crash_round_handler(ctx, round_id)
    }

    pub fn close_boxes_round(ctx: Context<CloseBoxesRound>, round_id: u64) -> Result<()> {
        close_boxes_round_handler(ctx, round_id)
    }

    pub fn close_wingo_round(ctx: Context<CloseWingoRound>, round_id: u64) -> Result<()> {
        close_wingo_round_handler(ctx, round_id)
    }

    pub fn close_crash_bet(ctx: Context<CloseCrashBet>) -> Result<()> {
        close_crash_bet_handler(ctx)
    }

    pub fn close_boxes_bet(ctx: Context<CloseBoxesBet>) -> Result<()> {
        close_boxes_bet_handler(ctx)
    }

    pub fn close_wingo_bet(ctx: Context<CloseWingoBet>) -> Result<()> {
        close_wingo_bet_handler(ctx)
    }
}
