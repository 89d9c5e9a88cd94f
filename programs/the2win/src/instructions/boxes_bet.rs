use anchor_lang::prelude::*;

use crate::constants::{BOX_COUNT, GAME_BOXES};
use crate::errors::The2WinErrorCode;
use crate::events::BoxesBetPlaced;
use crate::state::boxes_bet::BoxesBet;
use crate::state::boxes_round::BoxesRound;
use crate::state::config::Config;
use crate::state::feed::GameFeed;
use crate::state::house::House;
use crate::state::wallet::PlayerWallet;

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct PlaceBoxesBet<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_BOXES]],
        bump = feed.bump,
    )]
    pub feed: Box<Account<'info, GameFeed>>,

    #[account(
        mut,
        seeds = [BoxesRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, BoxesRound>>,

    #[account(
        mut,
        seeds = [PlayerWallet::SEED_PREFIX, player.key().as_ref()],
        bump = wallet.bump,
        constraint = wallet.user == player.key() @ The2WinErrorCode::Unauthorized
    )]
    pub wallet: Box<Account<'info, PlayerWallet>>,

    #[account(
        mut,
        seeds = [House::SEED],
        bump = house.bump,
    )]
    pub house: Box<Account<'info, House>>,

    /// One bet per player per round.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + BoxesBet::SIZE,
        seeds = [
            BoxesBet::SEED_PREFIX,
            round_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
        ],
        bump,
    )]
    pub bet: Box<Account<'info, BoxesBet>>,

    pub system_program: Program<'info, System>,
}

pub fn place_boxes_bet_handler(
    ctx: Context<PlaceBoxesBet>,
    round_id: u64,
    amount: u64,
    box_index: u8,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let wallet = &mut ctx.accounts.wallet;
    let house = &mut ctx.accounts.house;
    let bet = &mut ctx.accounts.bet;
    let player = &ctx.accounts.player;

    let clock = Clock::get()?;

    require!(!config.is_betting_paused(), The2WinErrorCode::BettingPaused);
    require!(box_index < BOX_COUNT, The2WinErrorCode::InvalidBoxIndex);
    require!(
        config.is_valid_stake(amount),
        The2WinErrorCode::BetOutOfRange
    );
    require_eq!(
        round_id,
        feed.current_round_id,
        The2WinErrorCode::RoundMismatch
    );

    require!(round.is_waiting(), The2WinErrorCode::BettingClosed);
    require!(
        clock.unix_timestamp < round.waiting_ends_at,
        The2WinErrorCode::BettingClosed
    );

    require!(
        bet.player == Pubkey::default(),
        The2WinErrorCode::DuplicateSlot
    );

    let balance_after = wallet.apply_stake(amount)?;

    bet.round_id = round_id;
    bet.player = player.key();
    bet.box_index = box_index;
    bet.amount = amount;
    bet.placed_at = clock.unix_timestamp;
    bet.placed_slot = clock.slot;

    bet.settled = 0;
    bet.won = 0;
    bet.payout = 0;
    bet.settled_at = 0;

    bet.bump = ctx.bumps.bet;
    bet._reserved = [0u8; 8];

    round.total_bets = round
        .total_bets
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    round.total_staked = round
        .total_staked
        .checked_add(amount)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    feed.total_bets = feed
        .total_bets
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    feed.total_staked = feed
        .total_staked
        .checked_add(amount)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    feed.pending_settlements = feed
        .pending_settlements
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    house.total_wagered = house
        .total_wagered
        .checked_add(amount)
        .ok_or(The2WinErrorCode::MathOverflow)?;

    emit!(BoxesBetPlaced {
        round_id,
        player: player.key(),
        box_index,
        amount,
        balance_after,
    });

    Ok(())
}
