use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::{PatternActivated, PatternDeactivated};
use crate::state::config::Config;
use crate::state::pattern::CrashPattern;

#[derive(Accounts)]
pub struct SwitchCrashPattern<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    pub pattern: Account<'info, CrashPattern>,

    pub authority: Signer<'info>,
}

/// Makes this pattern the active one. `Config.active_pattern_id` is the
/// single source of truth, so switching from another pattern is implicit —
/// at most one pattern is ever active.
pub fn activate_crash_pattern_handler(ctx: Context<SwitchCrashPattern>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let pattern = &ctx.accounts.pattern;

    require!(pattern.steps > 0, The2WinErrorCode::InvalidPatternSequence);

    config.active_pattern_id = pattern.id;

    emit!(PatternActivated {
        pattern_id: pattern.id,
    });

    Ok(())
}

/// Returns Crash resolution to fair RNG. The pattern account is required so
/// the deactivation names exactly what was switched off.
pub fn deactivate_crash_pattern_handler(ctx: Context<SwitchCrashPattern>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let pattern = &ctx.accounts.pattern;

    require_eq!(
        config.active_pattern_id,
        pattern.id,
        The2WinErrorCode::PatternNotActive
    );

    config.active_pattern_id = 0;

    emit!(PatternDeactivated {
        pattern_id: pattern.id,
    });

    Ok(())
}
