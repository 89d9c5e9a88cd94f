use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program;

use crate::errors::The2WinErrorCode;
use crate::state::config::Config;
use crate::state::timings::PhaseTimings;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global Config PDA.
    /// Only the `authority` stored in Config is allowed to update it.
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Current program authority.
    pub authority: Signer<'info>,
}

/// Arguments for updating one game's phase timings.
///
/// All duration fields are optional:
/// - If a field is `None`, the existing value is left unchanged.
/// - `game` locates the entry inside `Config.timings`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TimingUpdateArgs {
    /// Game id of the entry to update (GAME_CRASH / GAME_BOXES / GAME_WINGO).
    pub game: u8,

    /// New betting window in seconds (optional, must stay > 0).
    pub betting_secs: Option<u32>,

    /// New locked window in seconds (optional).
    pub locked_secs: Option<u32>,

    /// New intermission in seconds (optional).
    pub intermission_secs: Option<u32>,
}

/// Updates one or more global configuration parameters.
///
/// - Only callable by the `authority` stored in `Config`.
/// - Any argument set to `None` is left unchanged.
/// - `timing_updates` may be an empty vector (no timing changes).
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    pause_bet: Option<u8>,
    pause_withdraw: Option<u8>,
    new_authority: Option<Pubkey>,
    new_min_bet_units: Option<u64>,
    new_max_bet_units: Option<u64>,
    timing_updates: Vec<TimingUpdateArgs>,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    // ─────────────────────────────────────────────
    // Pause flags
    // ─────────────────────────────────────────────
    if let Some(pause) = pause_bet {
        cfg.pause_bet = if pause == 1 { 1 } else { 0 };
    }
    if let Some(pause) = pause_withdraw {
        cfg.pause_withdraw = if pause == 1 { 1 } else { 0 };
    }

    // ─────────────────────────────────────────────
    // Authority rotation
    // ─────────────────────────────────────────────
    if let Some(new_auth) = new_authority {
        require!(
            new_auth != Pubkey::default(),
            The2WinErrorCode::InvalidAuthorityTarget
        );
        require!(
            new_auth != system_program::ID,
            The2WinErrorCode::InvalidAuthorityTarget
        );
        require!(
            new_auth != *ctx.program_id,
            The2WinErrorCode::InvalidAuthorityTarget
        );
        require!(new_auth != cfg.key(), The2WinErrorCode::InvalidAuthorityTarget);
        cfg.authority = new_auth;
    }

    // ─────────────────────────────────────────────
    // Bet bounds
    // ─────────────────────────────────────────────
    if let Some(min_bet) = new_min_bet_units {
        require!(min_bet > 0, The2WinErrorCode::InvalidBetBounds);
        cfg.min_bet_units = min_bet;
    }
    if let Some(max_bet) = new_max_bet_units {
        cfg.max_bet_units = max_bet;
    }
    require!(
        cfg.min_bet_units <= cfg.max_bet_units,
        The2WinErrorCode::InvalidBetBounds
    );

    // ─────────────────────────────────────────────
    // Phase timings
    // ─────────────────────────────────────────────
    for update in timing_updates {
        let mut entry = cfg.get_timings(update.game)?;

        if let Some(betting) = update.betting_secs {
            entry.betting_secs = betting;
        }
        if let Some(locked) = update.locked_secs {
            entry.locked_secs = locked;
        }
        if let Some(intermission) = update.intermission_secs {
            entry.intermission_secs = intermission;
        }

        cfg.set_timings(entry)?;
    }

    Ok(())
}
