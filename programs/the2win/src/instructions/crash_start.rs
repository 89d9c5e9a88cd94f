use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::CrashRoundStarted;
use crate::state::crash_round::{CrashPhase, CrashRound};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct StartCrashRound<'info> {
    #[account(
        mut,
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, CrashRound>,

    /// Permissionless crank.
    pub cranker: Signer<'info>,
}

/// `Locked → Running`. From the recorded start slot onward the multiplier is
/// a pure function of elapsed slots, so every observer computes the same
/// ramp without further writes.
pub fn start_crash_round_handler(ctx: Context<StartCrashRound>, round_id: u64) -> Result<()> {
    let round = &mut ctx.accounts.round;

    let clock = Clock::get()?;

    require!(
        round.phase == CrashPhase::Locked.as_u8(),
        The2WinErrorCode::WrongPhase
    );
    require!(
        clock.unix_timestamp >= round.locked_ends_at,
        The2WinErrorCode::PhaseDeadlineNotReached
    );

    round.phase = CrashPhase::Running.as_u8();
    round.started_slot = clock.slot;

    emit!(CrashRoundStarted {
        round_id,
        started_slot: clock.slot,
    });

    Ok(())
}
