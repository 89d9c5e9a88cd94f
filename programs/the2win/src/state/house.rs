use anchor_lang::prelude::*;

/// ---------------------------------------------------------------------------
/// House
/// ---------------------------------------------------------------------------
///
/// Program-wide aggregate accounting. Funds themselves settle off-chain
/// through the deposit/withdraw request rails; this account is the audit
/// counterpart: the sum of all approved inflows, outflows, stakes and
/// payouts across every game.
#[account]
pub struct House {
    /// Who controls configuration and request review.
    pub authority: Pubkey,

    /// PDA bump for deterministic re-derivation.
    pub bump: u8,

    // ─────────────────────────────
    // Accounting / stats
    // ─────────────────────────────

    /// Total units credited through approved deposits (monotonic).
    pub total_deposits_approved: u64,

    /// Total units debited through approved withdrawals (monotonic).
    pub total_withdrawals_approved: u64,

    /// Total units staked across all games.
    pub total_wagered: u64,

    /// Total units paid out to winners across all games.
    pub total_paid_out: u64,

    /// Versioning for future migrations.
    pub version: u8,

    /// Padding / reserved bytes for future use.
    pub _reserved: [u8; 32],
}

impl House {
    pub const SEED: &'static [u8] = b"house";

    pub const SIZE: usize =
        32 + // authority
            1  + // bump
            8  + // total_deposits_approved
            8  + // total_withdrawals_approved
            8  + // total_wagered
            8  + // total_paid_out
            1  + // version
            32;  // reserved
    // When allocating:
    // space = 8 (discriminator) + House::SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn test_house_size() {
        let h = House {
            authority: Pubkey::default(),
            bump: 0,
            total_deposits_approved: 0,
            total_withdrawals_approved: 0,
            total_wagered: 0,
            total_paid_out: 0,
            version: 0,
            _reserved: [0u8; 32],
        };

        let bytes = h.try_to_vec().unwrap();
        assert_eq!(bytes.len(), House::SIZE);
    }
}
