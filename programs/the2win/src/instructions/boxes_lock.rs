use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::BoxesRoundLocked;
use crate::state::boxes_round::{BoxesPhase, BoxesRound};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct LockBoxesRound<'info> {
    #[account(
        mut,
        seeds = [BoxesRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, BoxesRound>,

    /// Permissionless crank.
    pub cranker: Signer<'info>,
}

pub fn lock_boxes_round_handler(ctx: Context<LockBoxesRound>, round_id: u64) -> Result<()> {
    let round = &mut ctx.accounts.round;

    let clock = Clock::get()?;

    require!(round.is_waiting(), The2WinErrorCode::WrongPhase);
    require!(
        clock.unix_timestamp >= round.waiting_ends_at,
        The2WinErrorCode::PhaseDeadlineNotReached
    );

    round.phase = BoxesPhase::Locked.as_u8();

    emit!(BoxesRoundLocked {
        round_id,
        locked_ends_at: round.locked_ends_at,
        total_bets: round.total_bets,
    });

    Ok(())
}
