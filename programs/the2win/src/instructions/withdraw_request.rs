use anchor_lang::prelude::*;

use crate::constants::{DEST_LEN, WITHDRAW_METHOD_CASH_AGENT};
use crate::errors::The2WinErrorCode;
use crate::events::WithdrawRequested;
use crate::state::config::Config;
use crate::state::requests::{RequestStatus, WithdrawRequest};
use crate::state::wallet::PlayerWallet;

#[derive(Accounts)]
#[instruction(request_id: u32)]
pub struct CreateWithdrawRequest<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [PlayerWallet::SEED_PREFIX, user.key().as_ref()],
        bump = wallet.bump,
        constraint = wallet.user == user.key() @ The2WinErrorCode::Unauthorized
    )]
    pub wallet: Box<Account<'info, PlayerWallet>>,

    #[account(
        init,
        payer = user,
        space = 8 + WithdrawRequest::SIZE,
        seeds = [
            WithdrawRequest::SEED_PREFIX,
            user.key().as_ref(),
            &request_id.to_le_bytes(),
        ],
        bump,
    )]
    pub request: Box<Account<'info, WithdrawRequest>>,

    pub system_program: Program<'info, System>,
}

/// Creates a PENDING withdrawal. The balance is only checked here for
/// obvious over-asks; the actual debit happens at approval, which re-checks
/// the balance at that moment.
pub fn create_withdraw_request_handler(
    ctx: Context<CreateWithdrawRequest>,
    request_id: u32,
    amount: u64,
    method: u8,
    dest: Vec<u8>,
) -> Result<()> {
    let wallet = &mut ctx.accounts.wallet;
    let request = &mut ctx.accounts.request;
    let config = &ctx.accounts.config;
    let user = &ctx.accounts.user;

    let clock = Clock::get()?;

    require!(
        !config.is_withdraw_paused(),
        The2WinErrorCode::WithdrawalsPaused
    );
    require!(amount > 0, The2WinErrorCode::InvalidBetAmount);
    require!(
        method <= WITHDRAW_METHOD_CASH_AGENT,
        The2WinErrorCode::InvalidMethod
    );
    require!(
        !dest.is_empty() && dest.len() <= DEST_LEN,
        The2WinErrorCode::InvalidDest
    );
    require!(
        wallet.balance >= amount,
        The2WinErrorCode::InsufficientFunds
    );

    let next_id = wallet
        .withdraw_request_seq
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    require_eq!(request_id, next_id, The2WinErrorCode::RequestMismatch);
    wallet.withdraw_request_seq = next_id;

    let mut padded = [0u8; DEST_LEN];
    padded[..dest.len()].copy_from_slice(&dest);

    request.id = request_id;
    request.user = user.key();
    request.amount = amount;
    request.method = method;
    request.dest = padded;
    request.status = RequestStatus::Pending.as_u8();
    request.created_at = clock.unix_timestamp;
    request.reviewed_at = 0;
    request.reviewed_by = Pubkey::default();
    request.bump = ctx.bumps.request;
    request._reserved = [0u8; 8];

    emit!(WithdrawRequested {
        request_id: request_id as u64,
        user: user.key(),
        amount,
        method,
    });

    Ok(())
}
