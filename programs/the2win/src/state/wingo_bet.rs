use anchor_lang::prelude::*;

/// A single stake on one Wingo color. One bet per player per round.
#[account]
pub struct WingoBet {
    pub round_id: u64,
    pub player: Pubkey,

    /// WINGO_GREEN / WINGO_PURPLE / WINGO_RED.
    pub color: u8,

    pub amount: u64,
    pub placed_at: i64,
    pub placed_slot: u64,

    pub settled: u8,
    pub won: u8,
    pub payout: u64,
    pub settled_at: i64,

    pub bump: u8,
    pub _reserved: [u8; 8],
}

impl WingoBet {
    pub const SEED_PREFIX: &'static [u8] = b"wingo_bet";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // round_id
            + 32 // player
            + 1  // color
            + 8  // amount
            + 8  // placed_at
            + 8  // placed_slot
            + 1  // settled
            + 1  // won
            + 8  // payout
            + 8  // settled_at
            + 1  // bump
            + 8; // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    #[test]
    fn test_wingo_bet_size() {
        let b = WingoBet {
            round_id: 0,
            player: Pubkey::default(),
            color: 0,
            amount: 0,
            placed_at: 0,
            placed_slot: 0,
            settled: 0,
            won: 0,
            payout: 0,
            settled_at: 0,
            bump: 0,
            _reserved: [0u8; 8],
        };

        let bytes = b.try_to_vec().unwrap();
        assert_eq!(bytes.len(), WingoBet::SIZE);
    }
}
