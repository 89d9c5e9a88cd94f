use anchor_lang::prelude::*;

use crate::constants::PATTERN_NAME_LEN;
use crate::errors::The2WinErrorCode;
use crate::events::PatternCreated;
use crate::state::config::Config;
use crate::state::pattern::CrashPattern;

#[derive(Accounts)]
#[instruction(pattern_id: u64)]
pub struct CreateCrashPattern<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = 8 + CrashPattern::SIZE,
        seeds = [CrashPattern::SEED_PREFIX, pattern_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub pattern: Account<'info, CrashPattern>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn create_crash_pattern_handler(
    ctx: Context<CreateCrashPattern>,
    pattern_id: u64,
    name: Vec<u8>,
    sequence: Vec<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let pattern = &mut ctx.accounts.pattern;

    let clock = Clock::get()?;

    // Ids are a registry sequence so pattern PDAs stay enumerable.
    require_eq!(
        pattern_id,
        config.next_pattern_id,
        The2WinErrorCode::RequestMismatch
    );
    config.next_pattern_id = config
        .next_pattern_id
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    require!(
        !name.is_empty() && name.len() <= PATTERN_NAME_LEN,
        The2WinErrorCode::InvalidPatternName
    );

    let mut padded_name = [0u8; PATTERN_NAME_LEN];
    padded_name[..name.len()].copy_from_slice(&name);

    pattern.id = pattern_id;
    pattern.name = padded_name;
    pattern.set_sequence(&sequence)?;
    pattern.created_at = clock.unix_timestamp;
    pattern.bump = ctx.bumps.pattern;
    pattern._reserved = [0u8; 8];

    emit!(PatternCreated {
        pattern_id,
        steps: pattern.steps,
    });

    Ok(())
}
