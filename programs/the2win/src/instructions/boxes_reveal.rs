use anchor_lang::prelude::*;

use crate::constants::GAME_BOXES;
use crate::errors::The2WinErrorCode;
use crate::events::BoxesRoundRevealed;
use crate::state::boxes_round::{BoxesPhase, BoxesRound};
use crate::state::config::Config;
use crate::state::crash_round::OutcomeSource;
use crate::state::feed::GameFeed;
use crate::state::overrides::OverrideQueue;
use crate::utils::fair::{derive_box_winners, seed_commitment};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct RevealBoxesRound<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_BOXES]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        mut,
        seeds = [BoxesRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, BoxesRound>,

    #[account(
        mut,
        seeds = [OverrideQueue::SEED],
        bump = override_queue.bump,
    )]
    pub override_queue: Account<'info, OverrideQueue>,

    /// Operator revealing the committed seed.
    pub authority: Signer<'info>,
}

/// `Locked → Revealed`. Winners are computed at this transition: queued
/// override indexes come first (consumed once), the rest are drawn from the
/// fair derivation excluding them. Multipliers 5x/3x/2x follow that order.
pub fn reveal_boxes_round_handler(
    ctx: Context<RevealBoxesRound>,
    round_id: u64,
    server_seed: [u8; 32],
) -> Result<()> {
    let config = &ctx.accounts.config;
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let overrides = &mut ctx.accounts.override_queue;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        round.phase == BoxesPhase::Locked.as_u8(),
        The2WinErrorCode::WrongPhase
    );
    require!(
        now >= round.locked_ends_at,
        The2WinErrorCode::PhaseDeadlineNotReached
    );
    require!(
        seed_commitment(&server_seed) == round.seed_hash,
        The2WinErrorCode::SeedHashMismatch
    );

    let (winners, outcome_source) = match overrides.take_boxes() {
        Some((preset, len)) => (
            derive_box_winners(&server_seed, round.nonce, &preset[..len]),
            OutcomeSource::Override.as_u8(),
        ),
        None => (
            derive_box_winners(&server_seed, round.nonce, &[]),
            OutcomeSource::Rng.as_u8(),
        ),
    };

    let timings = config.get_timings(GAME_BOXES)?;
    let next_round_starts_at = now + timings.intermission();

    round.phase = BoxesPhase::Revealed.as_u8();
    round.revealed_at = now;
    round.next_round_starts_at = next_round_starts_at;

    round.server_seed = server_seed;
    round.seed_revealed = 1;
    round.winners = winners;
    round.outcome_source = outcome_source;

    feed.finish_round(round_id, round.encoded_outcome(), next_round_starts_at);

    emit!(BoxesRoundRevealed {
        round_id,
        winners,
        server_seed,
        outcome_source,
        next_round_starts_at,
    });

    Ok(())
}
