use anchor_lang::prelude::*;

use crate::constants::PATTERN_NAME_LEN;
use crate::errors::The2WinErrorCode;
use crate::events::PatternUpdated;
use crate::state::config::Config;
use crate::state::pattern::CrashPattern;

#[derive(Accounts)]
pub struct UpdateCrashPattern<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub pattern: Account<'info, CrashPattern>,

    pub authority: Signer<'info>,
}

/// Edits a pattern's name and/or sequence. Only allowed while the pattern
/// is inactive; replacing the sequence resets the round-robin cursor.
pub fn update_crash_pattern_handler(
    ctx: Context<UpdateCrashPattern>,
    name: Option<Vec<u8>>,
    sequence: Option<Vec<u64>>,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let pattern = &mut ctx.accounts.pattern;

    require!(
        config.active_pattern_id != pattern.id,
        The2WinErrorCode::PatternIsActive
    );

    if let Some(name) = name {
        require!(
            !name.is_empty() && name.len() <= PATTERN_NAME_LEN,
            The2WinErrorCode::InvalidPatternName
        );
        let mut padded = [0u8; PATTERN_NAME_LEN];
        padded[..name.len()].copy_from_slice(&name);
        pattern.name = padded;
    }

    if let Some(sequence) = sequence {
        pattern.set_sequence(&sequence)?;
    }

    emit!(PatternUpdated {
        pattern_id: pattern.id,
        steps: pattern.steps,
    });

    Ok(())
}
