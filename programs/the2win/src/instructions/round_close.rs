use anchor_lang::prelude::*;

use crate::constants::{GAME_BOXES, GAME_CRASH, GAME_WINGO, HISTORY_WINDOW_ROUNDS};
use crate::errors::The2WinErrorCode;
use crate::state::boxes_round::BoxesRound;
use crate::state::config::Config;
use crate::state::crash_round::CrashRound;
use crate::state::feed::GameFeed;
use crate::state::wingo_round::WingoRound;

// Archival: resolved, fully settled rounds older than the history window
// are closed and their rent reclaimed. The feed ring already carries the
// recent outcomes clients need.

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CloseCrashRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [GameFeed::SEED_PREFIX, &[GAME_CRASH]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        mut,
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
        close = authority
    )]
    pub round: Account<'info, CrashRound>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn close_crash_round_handler(ctx: Context<CloseCrashRound>, round_id: u64) -> Result<()> {
    let round = &ctx.accounts.round;
    let feed = &ctx.accounts.feed;

    require!(round.is_crashed(), The2WinErrorCode::RoundStillLive);
    require_eq!(
        round.settled_bets,
        round.total_bets,
        The2WinErrorCode::SettlementPending
    );
    require!(
        feed.current_round_id >= round_id.saturating_add(HISTORY_WINDOW_ROUNDS),
        The2WinErrorCode::HistoryWindowNotElapsed
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CloseBoxesRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [GameFeed::SEED_PREFIX, &[GAME_BOXES]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        mut,
        seeds = [BoxesRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
        close = authority
    )]
    pub round: Account<'info, BoxesRound>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn close_boxes_round_handler(ctx: Context<CloseBoxesRound>, round_id: u64) -> Result<()> {
    let round = &ctx.accounts.round;
    let feed = &ctx.accounts.feed;

    require!(round.is_revealed(), The2WinErrorCode::RoundStillLive);
    require_eq!(
        round.settled_bets,
        round.total_bets,
        The2WinErrorCode::SettlementPending
    );
    require!(
        feed.current_round_id >= round_id.saturating_add(HISTORY_WINDOW_ROUNDS),
        The2WinErrorCode::HistoryWindowNotElapsed
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CloseWingoRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [GameFeed::SEED_PREFIX, &[GAME_WINGO]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        mut,
        seeds = [WingoRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
        close = authority
    )]
    pub round: Account<'info, WingoRound>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn close_wingo_round_handler(ctx: Context<CloseWingoRound>, round_id: u64) -> Result<()> {
    let round = &ctx.accounts.round;
    let feed = &ctx.accounts.feed;

    require!(round.is_revealed(), The2WinErrorCode::RoundStillLive);
    require_eq!(
        round.settled_bets,
        round.total_bets,
        The2WinErrorCode::SettlementPending
    );
    require!(
        feed.current_round_id >= round_id.saturating_add(HISTORY_WINDOW_ROUNDS),
        The2WinErrorCode::HistoryWindowNotElapsed
    );

    Ok(())
}
