use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::CrashRoundLocked;
use crate::state::crash_round::{CrashPhase, CrashRound};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct LockCrashRound<'info> {
    #[account(
        mut,
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, CrashRound>,

    /// Permissionless crank; the deadline check is what gates the
    /// transition, not the caller.
    pub cranker: Signer<'info>,
}

pub fn lock_crash_round_handler(ctx: Context<LockCrashRound>, round_id: u64) -> Result<()> {
    let round = &mut ctx.accounts.round;

    let clock = Clock::get()?;

    require!(round.is_waiting(), The2WinErrorCode::WrongPhase);
    require!(
        clock.unix_timestamp >= round.waiting_ends_at,
        The2WinErrorCode::PhaseDeadlineNotReached
    );

    round.phase = CrashPhase::Locked.as_u8();

    emit!(CrashRoundLocked {
        round_id,
        locked_ends_at: round.locked_ends_at,
        total_bets: round.total_bets,
        total_staked: round.total_staked,
    });

    Ok(())
}
