use anchor_lang::prelude::*;

use crate::constants::DEPOSIT_METHOD_BINANCE;
use crate::errors::The2WinErrorCode;
use crate::events::DepositRequested;
use crate::state::requests::{DepositRequest, RequestStatus};
use crate::state::wallet::PlayerWallet;

#[derive(Accounts)]
#[instruction(request_id: u32)]
pub struct CreateDepositRequest<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Ledger wallet; created on the user's first request.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + PlayerWallet::SIZE,
        seeds = [PlayerWallet::SEED_PREFIX, user.key().as_ref()],
        bump,
        constraint = wallet.user == Pubkey::default()
            || wallet.user == user.key() @ The2WinErrorCode::Unauthorized
    )]
    pub wallet: Box<Account<'info, PlayerWallet>>,

    #[account(
        init,
        payer = user,
        space = 8 + DepositRequest::SIZE,
        seeds = [
            DepositRequest::SEED_PREFIX,
            user.key().as_ref(),
            &request_id.to_le_bytes(),
        ],
        bump,
    )]
    pub request: Box<Account<'info, DepositRequest>>,

    pub system_program: Program<'info, System>,
}

pub fn create_deposit_request_handler(
    ctx: Context<CreateDepositRequest>,
    request_id: u32,
    amount: u64,
    method: u8,
    receipt_hash: [u8; 32],
) -> Result<()> {
    let wallet = &mut ctx.accounts.wallet;
    let request = &mut ctx.accounts.request;
    let user = &ctx.accounts.user;

    let clock = Clock::get()?;

    require!(amount > 0, The2WinErrorCode::InvalidBetAmount);
    require!(
        method <= DEPOSIT_METHOD_BINANCE,
        The2WinErrorCode::InvalidMethod
    );

    // ─────────────────────────────
    // Initialize / hydrate wallet
    // ─────────────────────────────
    if wallet.user == Pubkey::default() {
        wallet.user = user.key();
        wallet.bump = ctx.bumps.wallet;

        wallet.balance = 0;
        wallet.total_deposited = 0;
        wallet.total_withdrawn = 0;
        wallet.total_wagered = 0;
        wallet.total_won = 0;
        wallet.tx_count = 0;

        wallet.deposit_request_seq = 0;
        wallet.withdraw_request_seq = 0;
        wallet.created_at = clock.unix_timestamp;
        wallet._reserved = [0u8; 16];
    }

    // Request ids are a per-user sequence so the PDA seeds stay predictable.
    let next_id = wallet
        .deposit_request_seq
        .checked_add(1)
        .ok_or(The2WinErrorCode::MathOverflow)?;
    require_eq!(request_id, next_id, The2WinErrorCode::RequestMismatch);
    wallet.deposit_request_seq = next_id;

    request.id = request_id;
    request.user = user.key();
    request.amount = amount;
    request.method = method;
    request.receipt_hash = receipt_hash;
    request.status = RequestStatus::Pending.as_u8();
    request.created_at = clock.unix_timestamp;
    request.reviewed_at = 0;
    request.reviewed_by = Pubkey::default();
    request.bump = ctx.bumps.request;
    request._reserved = [0u8; 8];

    emit!(DepositRequested {
        request_id: request_id as u64,
        user: user.key(),
        amount,
        method,
    });

    Ok(())
}
