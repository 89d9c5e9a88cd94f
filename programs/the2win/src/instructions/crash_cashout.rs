use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::CrashCashedOut;
use crate::state::crash_bet::CrashBet;
use crate::state::crash_round::CrashRound;
use crate::utils::multiplier::multiplier_after_ticks;

#[derive(Accounts)]
#[instruction(round_id: u64, slot: u8)]
pub struct CashOutCrash<'info> {
    pub player: Signer<'info>,

    #[account(
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, CrashRound>,

    #[account(
        mut,
        seeds = [
            CrashBet::SEED_PREFIX,
            round_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
            &[slot],
        ],
        bump = bet.bump,
        constraint = bet.player == player.key() @ The2WinErrorCode::NoSuchBet,
    )]
    pub bet: Account<'info, CrashBet>,
}

/// Captures the multiplier at the tick this instruction executes. The
/// payout itself is credited at settlement, after the seed reveal proves
/// whether the cash-out tick beat the crash tick — a cash-out that lands at
/// or past the crash tick settles as a loss no matter when it was sent.
pub fn cash_out_crash_handler(ctx: Context<CashOutCrash>, round_id: u64, slot: u8) -> Result<()> {
    let round = &ctx.accounts.round;
    let bet = &mut ctx.accounts.bet;

    let clock = Clock::get()?;

    require!(round.is_running(), The2WinErrorCode::NotRunning);
    require!(bet.cashed_out == 0, The2WinErrorCode::AlreadyCashedOut);
    require!(bet.settled == 0, The2WinErrorCode::AlreadySettled);

    let tick = clock.slot.saturating_sub(round.started_slot);
    let multiplier_bps = multiplier_after_ticks(tick);

    bet.cashed_out = 1;
    bet.cashout_tick = tick;
    bet.cashout_multiplier_bps = multiplier_bps;

    emit!(CrashCashedOut {
        round_id,
        player: bet.player,
        slot,
        multiplier_bps,
        tick,
    });

    Ok(())
}
