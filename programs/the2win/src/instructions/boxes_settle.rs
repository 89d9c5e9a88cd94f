use anchor_lang::prelude::*;

use crate::constants::GAME_BOXES;
use crate::errors::The2WinErrorCode;
use crate::events::BetSettled;
use crate::state::boxes_bet::BoxesBet;
use crate::state::boxes_round::BoxesRound;
use crate::state::feed::GameFeed;
use crate::state::house::House;
use crate::state::wallet::PlayerWallet;
use crate::utils::multiplier::payout_for;

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct SettleBoxesBet<'info> {
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
        constraint = bet.round_id == round_id @ The2WinErrorCode::RoundMismatch,
    )]
    pub bet: Account<'info, BoxesBet>,

    /// Wallet of the bet owner.
    #[account(
        mut,
        seeds = [PlayerWallet::SEED_PREFIX, bet.player.as_ref()],
        bump = wallet.bump,
    )]
    pub wallet: Account<'info, PlayerWallet>,

    #[account(
        mut,
        seeds = [House::SEED],
        bump = house.bump,
    )]
    pub house: Account<'info, House>,

    /// Permissionless crank.
    pub cranker: Signer<'info>,
}

/// Settles one bet of a revealed round, exactly once. The bet wins its
/// stake times the winning box's multiplier iff its box is among the three
/// winners. The timestamp of the final settlement is recorded on the round.
pub fn settle_boxes_bet_handler(ctx: Context<SettleBoxesBet>, round_id: u64) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let bet = &mut ctx.accounts.bet;
    let wallet = &mut ctx.accounts.wallet;
    let house = &mut ctx.accounts.house;

    let clock = Clock::get()?;

    require!(round.is_revealed(), The2WinErrorCode::RoundNotResolved);
    require!(bet.settled == 0, The2WinErrorCode::AlreadySettled);

    let payout = match round.winner_multiplier_bps(bet.box_index) {
        Some(multiplier_bps) => payout_for(bet.amount, multiplier_bps),
        None => 0,
    };
    let won = payout > 0;

    let balance_after = if payout > 0 {
        wallet.apply_win(payout)?
    } else {
        wallet.balance
    };

    bet.settled = 1;
    bet.won = if won { 1 } else { 0 };
    bet.payout = payout;
    bet.settled_at = clock.unix_timestamp;

    round.settled_bets = round
        .settled_bets
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    round.total_paid_out = round
        .total_paid_out
        .checked_add(payout)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    if round.settled_bets == round.total_bets {
        round.settlement_completed_at = clock.unix_timestamp;
    }

    feed.pending_settlements = feed
        .pending_settlements
        .checked_sub(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    feed.total_paid_out = feed
        .total_paid_out
        .checked_add(payout)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    house.total_paid_out = house
        .total_paid_out
        .checked_add(payout)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    emit!(BetSettled {
        game: GAME_BOXES,
        round_id,
        player: bet.player,
        won,
        payout,
        balance_after,
    });

    Ok(())
}
