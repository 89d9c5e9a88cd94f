use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::house::House;
use crate::state::timings::PhaseTimings;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Aggregate accounting PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + House::SIZE,
        seeds = [House::SEED],
        bump
    )]
    pub house: Account<'info, House>,

    /// One-shot forced-outcome queue.
    #[account(
        init,
        payer = authority,
        space = 8 + OverrideQueue::SIZE,
        seeds = [OverrideQueue::SEED],
        bump
    )]
    pub override_queue: Account<'info, OverrideQueue>,

    /// Head state for the Crash game.
    #[account(
        init,
        payer = authority,
        space = 8 + GameFeed::SIZE,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_CRASH]],
        bump
    )]
    pub crash_feed: Account<'info, GameFeed>,

    /// Head state for the Boxes game.
    #[account(
        init,
        payer = authority,
        space = 8 + GameFeed::SIZE,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_BOXES]],
        bump
    )]
    pub boxes_feed: Account<'info, GameFeed>,

    /// Head state for the Wingo game.
    #[account(
        init,
        payer = authority,
        space = 8 + GameFeed::SIZE,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_WINGO]],
        bump
    )]
    pub wingo_feed: Account<'info, GameFeed>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let authority_key = ctx.accounts.authority.key();
    let cfg = &mut ctx.accounts.config;

    let clock = Clock::get()?;

    // ────────────────────────────────────────────────
    // Initialize config
    // ────────────────────────────────────────────────
    cfg.pause_bet = 0;
    cfg.pause_withdraw = 0;

    cfg.authority = authority_key;
    cfg.min_bet_units = DEFAULT_MIN_BET_UNITS;
    cfg.max_bet_units = DEFAULT_MAX_BET_UNITS;
    cfg.started_at = clock.unix_timestamp;

    cfg.active_pattern_id = 0;
    cfg.next_pattern_id = 1;

    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0; 16];

    cfg.timings = [
        PhaseTimings {
            game: GAME_CRASH,
            betting_secs: CRASH_BETTING_SECS,
            locked_secs: CRASH_LOCKED_SECS,
            intermission_secs: CRASH_INTERMISSION_SECS,
            _reserved: [0; 3],
        },
        PhaseTimings {
            game: GAME_BOXES,
            betting_secs: BOXES_BETTING_SECS,
            locked_secs: BOXES_LOCKED_SECS,
            intermission_secs: BOXES_INTERMISSION_SECS,
            _reserved: [0; 3],
        },
        // Wingo has no locked phase; the intermission is its reveal window.
        PhaseTimings {
            game: GAME_WINGO,
            betting_secs: WINGO_BETTING_SECS,
            locked_secs: 0,
            intermission_secs: WINGO_INTERMISSION_SECS,
            _reserved: [0; 3],
        },
    ];

    // ────────────────────────────────────────────────
    // Initialize house accounting
    // ────────────────────────────────────────────────
    let house = &mut ctx.accounts.house;
    house.authority = authority_key;
    house.bump = ctx.bumps.house;
    house.total_deposits_approved = 0;
    house.total_withdrawals_approved = 0;
    house.total_wagered = 0;
    house.total_paid_out = 0;
    house.version = 1;
    house._reserved = [0; 32];

    // ────────────────────────────────────────────────
    // Initialize override queue
    // ────────────────────────────────────────────────
    let overrides = &mut ctx.accounts.override_queue;
    overrides.crash_point_bps = 0;
    overrides.boxes = [0; BOX_WINNER_COUNT];
    overrides.boxes_len = 0;
    overrides.bump = ctx.bumps.override_queue;
    overrides._reserved = [0; 16];

    // ────────────────────────────────────────────────
    // Initialize game feeds
    // ────────────────────────────────────────────────
    ctx.accounts
        .crash_feed
        .init_new(GAME_CRASH, ctx.bumps.crash_feed);
    ctx.accounts
        .boxes_feed
        .init_new(GAME_BOXES, ctx.bumps.boxes_feed);
    ctx.accounts
        .wingo_feed
        .init_new(GAME_WINGO, ctx.bumps.wingo_feed);

    Ok(())
}
