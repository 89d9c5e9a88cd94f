use anchor_lang::prelude::*;

use crate::constants::GAME_CRASH;
use crate::errors::The2WinErrorCode;
use crate::events::CrashRoundOpened;
use crate::state::config::Config;
use crate::state::crash_round::{CrashPhase, CrashRound};
use crate::state::feed::GameFeed;

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct OpenCrashRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_CRASH]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        init,
        payer = authority,
        space = 8 + CrashRound::SIZE,
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Account<'info, CrashRound>,

    /// Operator: only the authority knows the seed behind the commitment.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens the next Crash round with its fairness commitment already
/// published. Gated on three edges: the previous round must be terminal,
/// every one of its bets settled, and the intermission elapsed — settlement
/// strictly happens-before the next betting window.
pub fn open_crash_round_handler(
    ctx: Context<OpenCrashRound>,
    round_id: u64,
    seed_hash: [u8; 32],
) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let config = &ctx.accounts.config;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(feed.round_open == 0, The2WinErrorCode::RoundStillLive);
    require!(
        feed.pending_settlements == 0,
        The2WinErrorCode::SettlementPending
    );
    require!(
        now >= feed.next_round_not_before,
        The2WinErrorCode::IntermissionNotElapsed
    );

    let (next_id, nonce) = feed.begin_round();
    require_eq!(round_id, next_id, The2WinErrorCode::RoundMismatch);

    let timings = config.get_timings(GAME_CRASH)?;
    let waiting_ends_at = now + timings.betting();
    let locked_ends_at = waiting_ends_at + timings.locked();

    round.round_id = round_id;
    round.nonce = nonce;
    round.phase = CrashPhase::Waiting.as_u8();

    round.created_at = now;
    round.waiting_ends_at = waiting_ends_at;
    round.locked_ends_at = locked_ends_at;
    round.started_slot = 0;
    round.crash_tick = 0;
    round.crashed_at = 0;
    round.next_round_starts_at = 0;

    round.seed_hash = seed_hash;
    round.server_seed = [0u8; 32];
    round.seed_revealed = 0;
    round.crash_point_bps = 0;
    round.outcome_source = 0;

    round.total_bets = 0;
    round.settled_bets = 0;
    round.total_staked = 0;
    round.total_paid_out = 0;

    round.bump = ctx.bumps.round;
    round._reserved = [0u8; 16];

    emit!(CrashRoundOpened {
        round_id,
        nonce,
        seed_hash,
        waiting_ends_at,
        locked_ends_at,
    });

    Ok(())
}
