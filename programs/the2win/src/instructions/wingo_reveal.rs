use anchor_lang::prelude::*;

use crate::constants::GAME_WINGO;
use crate::errors::The2WinErrorCode;
use crate::events::WingoRoundRevealed;
use crate::state::feed::GameFeed;
use crate::state::wingo_round::{WingoPhase, WingoRound};
use crate::utils::fair::{derive_wingo_color, seed_commitment};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct RevealWingoRound<'info> {
    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_WINGO]],
        bump = feed.bump,
    )]
    pub feed: Account<'info, GameFeed>,

    #[account(
        mut,
        seeds = [WingoRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, WingoRound>,

    /// Operator revealing the committed seed. Wingo carries no admin
    /// override; the color always comes from the fair derivation.
    pub authority: Signer<'info>,
}

pub fn reveal_wingo_round_handler(
    ctx: Context<RevealWingoRound>,
    round_id: u64,
    server_seed: [u8; 32],
) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;

    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(round.is_betting(), The2WinErrorCode::WrongPhase);
    require!(
        now >= round.betting_ends_at,
        The2WinErrorCode::PhaseDeadlineNotReached
    );
    require!(
        seed_commitment(&server_seed) == round.seed_hash,
        The2WinErrorCode::SeedHashMismatch
    );

    let color = derive_wingo_color(&server_seed, round.nonce);
    let multiplier_bps = WingoRound::multiplier_for(color);

    round.phase = WingoPhase::Revealing.as_u8();
    round.revealed_at = now;

    round.server_seed = server_seed;
    round.seed_revealed = 1;
    round.result_color = color;
    round.result_multiplier_bps = multiplier_bps;

    // The next round opens once the pre-announced reveal window ends.
    feed.finish_round(round_id, round.encoded_outcome(), round.reveal_at);

    emit!(WingoRoundRevealed {
        round_id,
        color,
        multiplier_bps,
        server_seed,
        next_round_starts_at: round.reveal_at,
    });

    Ok(())
}
