use anchor_lang::prelude::*;

use crate::constants::GAME_WINGO;
use crate::errors::The2WinErrorCode;
use crate::events::WingoRoundOpened;
use crate::state::config::Config;
use crate::state::feed::GameFeed;
use crate::state::wingo_round::{WingoPhase, WingoRound};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct OpenWingoRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_WINGO]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        init,
        payer = authority,
        space = 8 + WingoRound::SIZE,
        seeds = [WingoRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Account<'info, WingoRound>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens the next Wingo round. `reveal_at` (the end of the reveal window,
/// when the following round may open) is fixed up front so clients can
/// render both countdowns from one snapshot.
pub fn open_wingo_round_handler(
    ctx: Context<OpenWingoRound>,
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

    let timings = config.get_timings(GAME_WINGO)?;
    let betting_ends_at = now + timings.betting();
    let reveal_at = betting_ends_at + timings.intermission();

    round.round_id = round_id;
    round.nonce = nonce;
    round.phase = WingoPhase::Betting.as_u8();

    round.created_at = now;
    round.betting_ends_at = betting_ends_at;
    round.reveal_at = reveal_at;
    round.revealed_at = 0;

    round.seed_hash = seed_hash;
    round.server_seed = [0u8; 32];
    round.seed_revealed = 0;
    round.result_color = 0;
    round.result_multiplier_bps = 0;

    round.total_bets = 0;
    round.settled_bets = 0;
    round.total_staked = 0;
    round.total_paid_out = 0;

    round.bump = ctx.bumps.round;
    round._reserved = [0u8; 16];

    emit!(WingoRoundOpened {
        round_id,
        nonce,
        seed_hash,
        betting_ends_at,
    });

    Ok(())
}
