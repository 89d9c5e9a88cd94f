use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::state::boxes_bet::BoxesBet;
use crate::state::crash_bet::CrashBet;
use crate::state::wingo_bet::WingoBet;

// A settled bet is pure history; the player can reclaim its rent. The
// settlement outcome already lives in the transaction journal events.

#[derive(Accounts)]
pub struct CloseCrashBet<'info> {
    #[account(
        mut,
        has_one = player @ The2WinErrorCode::Unauthorized,
        close = player
    )]
    pub bet: Account<'info, CrashBet>,

    #[account(mut)]
    pub player: Signer<'info>,
}

pub fn close_crash_bet_handler(ctx: Context<CloseCrashBet>) -> Result<()> {
    require!(
        ctx.accounts.bet.settled == 1,
        The2WinErrorCode::BetNotSettled
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CloseBoxesBet<'info> {
    #[account(
        mut,
        has_one = player @ The2WinErrorCode::Unauthorized,
        close = player
    )]
    pub bet: Account<'info, BoxesBet>,

    #[account(mut)]
    pub player: Signer<'info>,
}

pub fn close_boxes_bet_handler(ctx: Context<CloseBoxesBet>) -> Result<()> {
    require!(
        ctx.accounts.bet.settled == 1,
        The2WinErrorCode::BetNotSettled
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CloseWingoBet<'info> {
    #[account(
        mut,
        has_one = player @ The2WinErrorCode::Unauthorized,
        close = player
    )]
    pub bet: Account<'info, WingoBet>,

    #[account(mut)]
    pub player: Signer<'info>,
}

pub fn close_wingo_bet_handler(ctx: Context<CloseWingoBet>) -> Result<()> {
    require!(
        ctx.accounts.bet.settled == 1,
        The2WinErrorCode::BetNotSettled
    );
    Ok(())
}
