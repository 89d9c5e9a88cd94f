use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::state::timings::PhaseTimings;

/// Global configuration PDA.
///
/// Stores protocol-wide controls (authority, pause flags), bet bounds,
/// per-game phase timings, and the crash-pattern registry head. This
/// account holds no lamports beyond rent.
#[account]
pub struct Config {
    /// 1 = betting paused, 0 = enabled.
    pub pause_bet: u8,

    /// 1 = withdrawal requests/approvals paused, 0 = enabled.
    pub pause_withdraw: u8,

    /// Program admin authority (operator).
    pub authority: Pubkey,

    /// Minimum stake per bet, in minor currency units.
    pub min_bet_units: u64,

    /// Maximum stake per bet, in minor currency units.
    pub max_bet_units: u64,

    /// Unix timestamp when the engine was initialized.
    pub started_at: i64,

    /// Phase timings, one entry per game (fixed-size array).
    pub timings: [PhaseTimings; 3],

    /// Currently active crash pattern id (0 = none; fair RNG applies).
    pub active_pattern_id: u64,

    /// Next pattern id to assign on creation (starts at 1).
    pub next_pattern_id: u64,

    /// PDA bump for Config.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        1 +  // pause_bet
            1 +  // pause_withdraw
            32 + // authority
            8 +  // min_bet_units
            8 +  // max_bet_units
            8 +  // started_at
            (PhaseTimings::SIZE * 3) + // timings
            8 +  // active_pattern_id
            8 +  // next_pattern_id
            1 +  // bump
            16;  // reserved

    /// Returns phase timings by game id (0..=2).
    pub fn get_timings(&self, game: u8) -> Result<PhaseTimings> {
        self.timings
            .iter()
            .find(|t| t.game == game)
            .copied()
            .ok_or_else(|| error!(The2WinErrorCode::InvalidGame))
    }

    /// Replaces the timings entry for a game, keeping the array keyed by id.
    pub fn set_timings(&mut self, update: PhaseTimings) -> Result<()> {
        require!(update.betting_secs > 0, The2WinErrorCode::InvalidTimings);

        let slot = self
            .timings
            .iter_mut()
            .find(|t| t.game == update.game)
            .ok_or_else(|| error!(The2WinErrorCode::InvalidGame))?;

        *slot = update;
        Ok(())
    }

    pub fn is_betting_paused(&self) -> bool {
        self.pause_bet != 0
    }

    pub fn is_withdraw_paused(&self) -> bool {
        self.pause_withdraw != 0
    }

    #[inline]
    pub fn is_valid_stake(&self, amount: u64) -> bool {
        amount >= self.min_bet_units && amount <= self.max_bet_units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn default_timings(game: u8) -> PhaseTimings {
        PhaseTimings {
            game,
            betting_secs: 5,
            locked_secs: 3,
            intermission_secs: 4,
            _reserved: [0; 3],
        }
    }

    #[test]
    fn config_size_matches_serialization() {
        let cfg = Config {
            pause_bet: 0,
            pause_withdraw: 0,
            authority: Pubkey::default(),
            min_bet_units: 20,
            max_bet_units: 100_000,
            started_at: 0,
            timings: [default_timings(0), default_timings(1), default_timings(2)],
            active_pattern_id: 0,
            next_pattern_id: 1,
            bump: 0,
            _reserved: [0; 16],
        };

        let bytes = cfg.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Config::SIZE);
    }

    #[test]
    fn timings_lookup_is_keyed_by_game_id() {
        let mut cfg = Config {
            pause_bet: 0,
            pause_withdraw: 0,
            authority: Pubkey::default(),
            min_bet_units: 20,
            max_bet_units: 100_000,
            started_at: 0,
            timings: [default_timings(0), default_timings(1), default_timings(2)],
            active_pattern_id: 0,
            next_pattern_id: 1,
            bump: 0,
            _reserved: [0; 16],
        };

        let mut update = default_timings(2);
        update.betting_secs = 30;
        cfg.set_timings(update).unwrap();

        assert_eq!(cfg.get_timings(2).unwrap().betting_secs, 30);
        assert_eq!(cfg.get_timings(0).unwrap().betting_secs, 5);
        assert!(cfg.get_timings(7).is_err());
    }

    #[test]
    fn stake_bounds_are_inclusive() {
        let cfg = Config {
            pause_bet: 0,
            pause_withdraw: 0,
            authority: Pubkey::default(),
            min_bet_units: 20,
            max_bet_units: 100_000,
            started_at: 0,
            timings: [default_timings(0), default_timings(1), default_timings(2)],
            active_pattern_id: 0,
            next_pattern_id: 1,
            bump: 0,
            _reserved: [0; 16],
        };

        assert!(!cfg.is_valid_stake(19));
        assert!(cfg.is_valid_stake(20));
        assert!(cfg.is_valid_stake(100_000));
        assert!(!cfg.is_valid_stake(100_001));
    }
}
