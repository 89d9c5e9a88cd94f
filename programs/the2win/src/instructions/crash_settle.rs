use anchor_lang::prelude::*;

use crate::constants::GAME_CRASH;
use crate::errors::The2WinErrorCode;
use crate::events::BetSettled;
use crate::state::crash_bet::CrashBet;
use crate::state::crash_round::CrashRound;
use crate::state::feed::GameFeed;
use crate::state::house::House;
use crate::state::wallet::PlayerWallet;
use crate::utils::multiplier::payout_for;

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct SettleCrashBet<'info> {
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
        constraint = bet.round_id == round_id @ The2WinErrorCode::RoundMismatch,
    )]
    pub bet: Account<'info, CrashBet>,

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

/// Settles one bet of a crashed round, exactly once. A cashed-out bet wins
/// its stake times the captured multiplier iff the cash-out tick beat the
/// crash tick; every other bet keeps its already-debited stake as the loss.
/// The feed's pending counter reaching zero is what releases the next round.
pub fn settle_crash_bet_handler(ctx: Context<SettleCrashBet>, round_id: u64) -> Result<()> {
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let bet = &mut ctx.accounts.bet;
    let wallet = &mut ctx.accounts.wallet;
    let house = &mut ctx.accounts.house;

    let clock = Clock::get()?;

    require!(round.is_crashed(), The2WinErrorCode::RoundNotResolved);
    require!(bet.settled == 0, The2WinErrorCode::AlreadySettled);

    let won = bet.wins_against(round.crash_tick);
    let payout = if won {
        payout_for(bet.amount, bet.cashout_multiplier_bps)
    } else {
        0
    };

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
        game: GAME_CRASH,
        round_id,
        player: bet.player,
        won,
        payout,
        balance_after,
    });

    Ok(())
}
