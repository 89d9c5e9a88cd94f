use anchor_lang::prelude::*;

use crate::constants::DEST_LEN;

#[repr(u8)]
pub enum RequestStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl RequestStatus {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A user's request to credit funds paid through an off-chain rail.
/// Created PENDING by the user; only an admin review moves it to a terminal
/// state. APPROVED credits the wallet; REJECTED has no balance effect.
#[account]
pub struct DepositRequest {
    /// Per-user sequence number (PDA seed component).
    pub id: u32,

    pub user: Pubkey,
    pub amount: u64,

    /// DEPOSIT_METHOD_* constant.
    pub method: u8,

    /// sha256 of the submitted payment receipt (zeroed if none).
    pub receipt_hash: [u8; 32],

    /// `RequestStatus` as u8.
    pub status: u8,

    pub created_at: i64,
    pub reviewed_at: i64,
    pub reviewed_by: Pubkey,

    pub bump: u8,
    pub _reserved: [u8; 8],
}

impl DepositRequest {
    pub const SEED_PREFIX: &'static [u8] = b"deposit_request";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        4  // id
            + 32 // user
            + 8  // amount
            + 1  // method
            + 32 // receipt_hash
            + 1  // status
            + 8  // created_at
            + 8  // reviewed_at
            + 32 // reviewed_by
            + 1  // bump
            + 8; // reserved

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending.as_u8()
    }
}

/// A user's request to pay out balance through an off-chain rail.
/// The debit happens at approval time, so an approval can still fail with
/// `InsufficientFunds` if the balance was spent in the meantime.
#[account]
pub struct WithdrawRequest {
    /// Per-user sequence number (PDA seed component).
    pub id: u32,

    pub user: Pubkey,
    pub amount: u64,

    /// WITHDRAW_METHOD_* constant.
    pub method: u8,

    /// Destination (bank account / exchange address), UTF-8, zero padded.
    pub dest: [u8; DEST_LEN],

    /// `RequestStatus` as u8.
    pub status: u8,

    pub created_at: i64,
    pub reviewed_at: i64,
    pub reviewed_by: Pubkey,

    pub bump: u8,
    pub _reserved: [u8; 8],
}

impl WithdrawRequest {
    pub const SEED_PREFIX: &'static [u8] = b"withdraw_request";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        4  // id
            + 32 // user
            + 8  // amount
            + 1  // method
            + DEST_LEN // dest
            + 1  // status
            + 8  // created_at
            + 8  // reviewed_at
            + 32 // reviewed_by
            + 1  // bump
            + 8; // reserved

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn test_deposit_request_size() {
        let r = DepositRequest {
            id: 0,
            user: Pubkey::default(),
            amount: 0,
            method: 0,
            receipt_hash: [0u8; 32],
            status: 0,
            created_at: 0,
            reviewed_at: 0,
            reviewed_by: Pubkey::default(),
            bump: 0,
            _reserved: [0u8; 8],
        };

        let bytes = r.try_to_vec().unwrap();
        assert_eq!(bytes.len(), DepositRequest::SIZE);
    }

    #[test]
    fn test_withdraw_request_size() {
        let r = WithdrawRequest {
            id: 0,
            user: Pubkey::default(),
            amount: 0,
            method: 0,
            dest: [0u8; DEST_LEN],
            status: 0,
            created_at: 0,
            reviewed_at: 0,
            reviewed_by: Pubkey::default(),
            bump: 0,
            _reserved: [0u8; 8],
        };

        let bytes = r.try_to_vec().unwrap();
        assert_eq!(bytes.len(), WithdrawRequest::SIZE);
    }
}
