use anchor_lang::prelude::*;

use crate::constants::GAME_CRASH;
use crate::errors::The2WinErrorCode;
use crate::events::CrashRoundCrashed;
use crate::state::config::Config;
use crate::state::crash_round::{CrashPhase, CrashRound, OutcomeSource};
use crate::state::feed::GameFeed;
use crate::state::overrides::OverrideQueue;
use crate::state::pattern::CrashPattern;
use crate::utils::fair::{derive_crash_point_bps, seed_commitment};
use crate::utils::multiplier::ticks_to_reach;

/// Cannot resolve the same round twice: the phase must be Running and this
/// instruction moves it to Crashed.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct ResolveCrashRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_CRASH]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        mut,
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, CrashRound>,

    #[account(
        mut,
        seeds = [OverrideQueue::SEED],
        bump = override_queue.bump,
    )]
    pub override_queue: Account<'info, OverrideQueue>,

    /// The active pattern; required whenever `config.active_pattern_id`
    /// is set and no one-shot override is queued.
    #[account(mut)]
    pub pattern: Option<Account<'info, CrashPattern>>,

    /// Operator revealing the committed seed.
    pub authority: Signer<'info>,
}

/// ---------------------------------------------------------------------------
/// resolve_crash_round_handler
///
/// `Running → Crashed`. The operator reveals the server seed; the program
/// verifies it against the published commitment, picks the crash point
/// (one-shot override, then active pattern, then fair derivation) and
/// freezes the round at the tick the ramp reached that point.
///
/// The crash tick is recomputed on-chain from the crash point, so the
/// recorded crash instant is the ramp deadline — not whenever this
/// transaction happened to land. Cash-outs are judged against that tick at
/// settlement.
/// ---------------------------------------------------------------------------
pub fn resolve_crash_round_handler(
    ctx: Context<ResolveCrashRound>,
    round_id: u64,
    server_seed: [u8; 32],
) -> Result<()> {
    let config = &ctx.accounts.config;
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let overrides = &mut ctx.accounts.override_queue;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(round.is_running(), The2WinErrorCode::WrongPhase);
    require!(
        seed_commitment(&server_seed) == round.seed_hash,
        The2WinErrorCode::SeedHashMismatch
    );

    // ─────────────────────────────
    // Pick the crash point: override > pattern > fair RNG
    // ─────────────────────────────
    let (crash_point_bps, outcome_source) = if let Some(point) = overrides.take_crash() {
        (point, OutcomeSource::Override.as_u8())
    } else if config.active_pattern_id != 0 {
        let pattern = ctx
            .accounts
            .pattern
            .as_mut()
            .ok_or(The2WinErrorCode::PatternMismatch)?;
        require_eq!(
            pattern.id,
            config.active_pattern_id,
            The2WinErrorCode::PatternMismatch
        );
        (
            pattern.next_crash_point()?,
            OutcomeSource::Pattern.as_u8(),
        )
    } else {
        (
            derive_crash_point_bps(&server_seed, round.nonce),
            OutcomeSource::Rng.as_u8(),
        )
    };

    // The round crashes at the tick the ramp reaches the crash point; the
    // reveal may not land before that deadline.
    let crash_tick = ticks_to_reach(crash_point_bps);
    require!(
        clock.slot >= round.started_slot.saturating_add(crash_tick),
        The2WinErrorCode::PhaseDeadlineNotReached
    );

    let timings = config.get_timings(GAME_CRASH)?;
    let next_round_starts_at = now + timings.intermission();

    round.phase = CrashPhase::Crashed.as_u8();
    round.crash_tick = crash_tick;
    round.crashed_at = now;
    round.next_round_starts_at = next_round_starts_at;

    round.server_seed = server_seed;
    round.seed_revealed = 1;
    round.crash_point_bps = crash_point_bps;
    round.outcome_source = outcome_source;

    feed.finish_round(round_id, round.encoded_outcome(), next_round_starts_at);

    emit!(CrashRoundCrashed {
        round_id,
        crash_point_bps,
        crash_tick,
        server_seed,
        outcome_source,
        next_round_starts_at,
    });

    Ok(())
}
