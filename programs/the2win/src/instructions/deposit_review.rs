use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::DepositReviewed;
use crate::state::config::Config;
use crate::state::house::House;
use crate::state::requests::{DepositRequest, RequestStatus};
use crate::state::wallet::PlayerWallet;

#[derive(Accounts)]
pub struct ReviewDepositRequest<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [House::SEED],
        bump = house.bump,
    )]
    pub house: Account<'info, House>,

    #[account(mut)]
    pub request: Account<'info, DepositRequest>,

    /// Wallet of the requesting user.
    #[account(
        mut,
        seeds = [PlayerWallet::SEED_PREFIX, request.user.as_ref()],
        bump = wallet.bump,
    )]
    pub wallet: Account<'info, PlayerWallet>,

    pub authority: Signer<'info>,
}

/// Terminal admin review. APPROVED credits the wallet atomically with the
/// status flip; REJECTED never touches the balance. A reviewed request can
/// never be reviewed again.
pub fn review_deposit_request_handler(
    ctx: Context<ReviewDepositRequest>,
    approve: bool,
) -> Result<()> {
    let request = &mut ctx.accounts.request;
    let wallet = &mut ctx.accounts.wallet;
    let house = &mut ctx.accounts.house;

    let clock = Clock::get()?;

    require!(request.is_pending(), The2WinErrorCode::RequestNotPending);

    if approve {
        wallet.apply_deposit(request.amount)?;

        house.total_deposits_approved = house
            .total_deposits_approved
            .checked_add(request.amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;

        request.status = RequestStatus::Approved.as_u8();
    } else {
        request.status = RequestStatus::Rejected.as_u8();
    }

    request.reviewed_at = clock.unix_timestamp;
    request.reviewed_by = ctx.accounts.authority.key();

    emit!(DepositReviewed {
        request_id: request.id as u64,
        user: request.user,
        amount: request.amount,
        approved: approve,
    });

    Ok(())
}
