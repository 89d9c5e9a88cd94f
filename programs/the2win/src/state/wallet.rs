use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::TransactionRecorded;

/// ---------------------------------------------------------------------------
/// PlayerWallet
/// ---------------------------------------------------------------------------
///
/// Per-user ledger account. The balance (minor currency units) is the single
/// source of truth for what a player can stake or withdraw, and it is only
/// ever mutated through the `apply_*` operations below — each one updates the
/// matching lifetime counter, bumps the journal sequence, re-checks the
/// reconciliation invariant and emits a `TransactionRecorded` event.
///
/// Invariant (checked after every mutation):
///   balance == total_deposited + total_won - total_withdrawn - total_wagered
#[account]
pub struct PlayerWallet {
    pub user: Pubkey,

    /// Spendable balance in minor currency units.
    pub balance: u64,

    // ─────────────────────────────
    // Lifetime counters (reconciliation)
    // ─────────────────────────────
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub total_wagered: u64,
    pub total_won: u64,

    /// Journal sequence; one entry per balance-affecting event.
    pub tx_count: u64,

    // ─────────────────────────────
    // Request sequences (PDA seeds for deposit/withdraw requests)
    // ─────────────────────────────
    pub deposit_request_seq: u32,
    pub withdraw_request_seq: u32,

    pub created_at: i64,
    pub bump: u8,
    pub _reserved: [u8; 16],
}

impl PlayerWallet {
    pub const SEED_PREFIX: &'static [u8] = b"wallet";

    pub const TX_DEPOSIT: u8 = 0;
    pub const TX_WITHDRAW: u8 = 1;
    pub const TX_BET: u8 = 2;
    pub const TX_WIN: u8 = 3;

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 // user
            + 8  // balance
            + 8  // total_deposited
            + 8  // total_withdrawn
            + 8  // total_wagered
            + 8  // total_won
            + 8  // tx_count
            + 4  // deposit_request_seq
            + 4  // withdraw_request_seq
            + 8  // created_at
            + 1  // bump
            + 16; // reserved

    /// Credits an approved deposit. Returns the new balance.
    pub fn apply_deposit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        self.record(Self::TX_DEPOSIT, amount)
    }

    /// Debits an approved withdrawal. Fails if the balance has since dropped
    /// below the requested amount; the wallet is left untouched in that case.
    pub fn apply_withdrawal(&mut self, amount: u64) -> Result<u64> {
        require!(self.balance >= amount, The2WinErrorCode::InsufficientFunds);

        self.balance -= amount;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        self.record(Self::TX_WITHDRAW, amount)
    }

    /// Debits a stake at bet placement.
    pub fn apply_stake(&mut self, amount: u64) -> Result<u64> {
        require!(self.balance >= amount, The2WinErrorCode::InsufficientFunds);

        self.balance -= amount;
        self.total_wagered = self
            .total_wagered
            .checked_add(amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        self.record(Self::TX_BET, amount)
    }

    /// Credits a settlement or cash-out payout.
    pub fn apply_win(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        self.total_won = self
            .total_won
            .checked_add(amount)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        self.record(Self::TX_WIN, amount)
    }

    fn record(&mut self, kind: u8, amount: u64) -> Result<u64> {
        self.tx_count = self
            .tx_count
            .checked_add(1)
            .ok_or(The2WinErrorCode::MathOverflow)?;

        self.assert_invariant()?;

        emit!(TransactionRecorded {
            user: self.user,
            kind,
            amount,
            balance_after: self.balance,
            seq: self.tx_count,
        });

        Ok(self.balance)
    }

    /// Reconciliation: the counters must always re-derive the balance.
    pub fn assert_invariant(&self) -> Result<()> {
        let credits = self
            .total_deposited
            .checked_add(self.total_won)
            .ok_or(The2WinErrorCode::MathOverflow)?;
        let debits = self
            .total_withdrawn
            .checked_add(self.total_wagered)
            .ok_or(The2WinErrorCode::MathOverflow)?;

        let expected = credits
            .checked_sub(debits)
            .ok_or(The2WinErrorCode::AssertInvariantFailed)?;

        require_eq!(
            self.balance,
            expected,
            The2WinErrorCode::AssertInvariantFailed
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn fresh_wallet() -> PlayerWallet {
        PlayerWallet {
            user: Pubkey::new_unique(),
            balance: 0,
            total_deposited: 0,
            total_withdrawn: 0,
            total_wagered: 0,
            total_won: 0,
            tx_count: 0,
            deposit_request_seq: 0,
            withdraw_request_seq: 0,
            created_at: 0,
            bump: 255,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn test_player_wallet_size() {
        let bytes = fresh_wallet().try_to_vec().unwrap();
        assert_eq!(bytes.len(), PlayerWallet::SIZE);
    }

    #[test]
    fn counters_reconcile_after_any_sequence() {
        let mut w = fresh_wallet();

        w.apply_deposit(100).unwrap();
        w.apply_stake(20).unwrap();
        w.apply_win(28).unwrap();
        w.apply_withdrawal(50).unwrap();

        assert_eq!(w.balance, 58);
        assert_eq!(w.tx_count, 4);
        w.assert_invariant().unwrap();
    }

    #[test]
    fn over_balance_stake_fails_and_leaves_wallet_unchanged() {
        let mut w = fresh_wallet();
        w.apply_deposit(100).unwrap();

        assert!(w.apply_stake(101).is_err());

        assert_eq!(w.balance, 100);
        assert_eq!(w.total_wagered, 0);
        assert_eq!(w.tx_count, 1);
        w.assert_invariant().unwrap();
    }

    #[test]
    fn lost_stake_stays_debited_without_a_win_entry() {
        // Balance 100, stake 20, round crashes with no cash-out.
        let mut w = fresh_wallet();
        w.apply_deposit(100).unwrap();
        w.apply_stake(20).unwrap();

        assert_eq!(w.balance, 80);
        assert_eq!(w.total_won, 0);
        assert_eq!(w.tx_count, 2);
    }

    #[test]
    fn cashout_payout_credits_exactly_once() {
        // Cash out 20 at 1.40x just before a 1.50x crash → +28.
        let mut w = fresh_wallet();
        w.apply_deposit(100).unwrap();
        w.apply_stake(20).unwrap();
        w.apply_win(28).unwrap();

        assert_eq!(w.balance, 108);
        assert_eq!(w.total_won, 28);
    }

    #[test]
    fn over_balance_withdrawal_fails() {
        let mut w = fresh_wallet();
        w.apply_deposit(40).unwrap();

        assert!(w.apply_withdrawal(41).is_err());
        assert_eq!(w.balance, 40);
        assert_eq!(w.total_withdrawn, 0);
    }
}
