use anchor_lang::prelude::*;

use crate::constants::{GAME_CRASH, SLOT_B};
use crate::errors::The2WinErrorCode;
use crate::events::CrashBetPlaced;
use crate::state::config::Config;
use crate::state::crash_bet::CrashBet;
use crate::state::crash_round::CrashRound;
use crate::state::feed::GameFeed;
use crate::state::house::House;
use crate::state::wallet::PlayerWallet;

#[derive(Accounts)]
#[instruction(round_id: u64, amount: u64, slot: u8)]
pub struct PlaceCrashBet<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [GameFeed::SEED_PREFIX, &[GAME_CRASH]],
        bump = feed.bump,
    )]
    pub feed: Box<Account<'info, GameFeed>>,

    #[account(
        mut,
        seeds = [CrashRound::SEED_PREFIX, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, CrashRound>>,

    /// Ledger wallet; must already exist (funded via a deposit request).
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

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + CrashBet::SIZE,
        seeds = [
            CrashBet::SEED_PREFIX,
            round_id.to_le_bytes().as_ref(),
            player.key().as_ref(),
            &[slot],
        ],
        bump,
    )]
    pub bet: Box<Account<'info, CrashBet>>,

    pub system_program: Program<'info, System>,
}

pub fn place_crash_bet_handler(
    ctx: Context<PlaceCrashBet>,
    round_id: u64,
    amount: u64,
    slot: u8,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let feed = &mut ctx.accounts.feed;
    let round = &mut ctx.accounts.round;
    let wallet = &mut ctx.accounts.wallet;
    let house = &mut ctx.accounts.house;
    let bet = &mut ctx.accounts.bet;
    let player = &ctx.accounts.player;

    let clock = Clock::get()?;

    // ─────────────────────────────
    // Basic validations
    // ─────────────────────────────
    require!(!config.is_betting_paused(), The2WinErrorCode::BettingPaused);
    require!(slot <= SLOT_B, The2WinErrorCode::InvalidSlot);
    require!(
        config.is_valid_stake(amount),
        The2WinErrorCode::BetOutOfRange
    );
    require_eq!(
        round_id,
        feed.current_round_id,
        The2WinErrorCode::RoundMismatch
    );

    // The deadline gates the bet even if the lock crank has not fired yet —
    // phase state is judged by the chain clock, never by the sender.
    require!(round.is_waiting(), The2WinErrorCode::BettingClosed);
    require!(
        clock.unix_timestamp < round.waiting_ends_at,
        The2WinErrorCode::BettingClosed
    );

    // One bet per (player, round, slot).
    require!(
        bet.player == Pubkey::default(),
        The2WinErrorCode::DuplicateSlot
    );

    // ─────────────────────────────
    // Debit stake and create the bet as one unit
    // ─────────────────────────────
    let balance_after = wallet.apply_stake(amount)?;

    bet.round_id = round_id;
    bet.player = player.key();
    bet.slot = slot;
    bet.amount = amount;
    bet.placed_at = clock.unix_timestamp;
    bet.placed_slot = clock.slot;

    bet.cashed_out = 0;
    bet.cashout_multiplier_bps = 0;
    bet.cashout_tick = 0;

    bet.settled = 0;
    bet.won = 0;
    bet.payout = 0;
    bet.settled_at = 0;

    bet.bump = ctx.bumps.bet;
    bet._reserved = [0u8; 8];

    // ─────────────────────────────
    // Round / feed / house stats
    // ─────────────────────────────
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

    emit!(CrashBetPlaced {
        round_id,
        player: player.key(),
        slot,
        amount,
        balance_after,
    });

    Ok(())
}
