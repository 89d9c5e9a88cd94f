use anchor_lang::prelude::*;

use crate::constants::{MAX_PATTERN_STEPS, MULTIPLIER_START_BPS, PATTERN_NAME_LEN};
use crate::errors::The2WinErrorCode;

/// ---------------------------------------------------------------------------
/// CrashPattern
/// ---------------------------------------------------------------------------
///
/// Named, ordered sequence of forced crash multipliers. While a pattern is
/// active (`Config.active_pattern_id == id`), Crash resolution consumes
/// `sequence[cursor]` and advances the cursor round-robin instead of
/// invoking fair derivation. Editable only while inactive. Whether a
/// pattern is active is not stored here — `Config.active_pattern_id` is the
/// single source of truth.
#[account]
pub struct CrashPattern {
    /// Registry id assigned at creation (PDA seed component).
    pub id: u64,

    /// Display name, UTF-8, zero padded.
    pub name: [u8; PATTERN_NAME_LEN],

    /// Forced multipliers in bps; every entry is strictly above 1.00x.
    /// Active entries are `sequence[0..steps]`.
    pub sequence: [u64; MAX_PATTERN_STEPS],
    pub steps: u8,

    /// Next entry to consume; wraps at `steps`.
    pub cursor: u8,

    pub created_at: i64,

    pub bump: u8,
    pub _reserved: [u8; 8],
}

impl CrashPattern {
    pub const SEED_PREFIX: &'static [u8] = b"crash_pattern";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // id
            + PATTERN_NAME_LEN // name
            + (8 * MAX_PATTERN_STEPS) // sequence
            + 1  // steps
            + 1  // cursor
            + 8  // created_at
            + 1  // bump
            + 8; // reserved

    /// Validates and installs a sequence, resetting the cursor.
    pub fn set_sequence(&mut self, entries: &[u64]) -> Result<()> {
        require!(
            !entries.is_empty() && entries.len() <= MAX_PATTERN_STEPS,
            The2WinErrorCode::InvalidPatternSequence
        );
        require!(
            entries.iter().all(|m| *m > MULTIPLIER_START_BPS),
            The2WinErrorCode::InvalidPatternSequence
        );

        self.sequence = [0u64; MAX_PATTERN_STEPS];
        self.sequence[..entries.len()].copy_from_slice(entries);
        self.steps = entries.len() as u8;
        self.cursor = 0;
        Ok(())
    }

    /// Consumes the next entry, advancing the cursor round-robin.
    pub fn next_crash_point(&mut self) -> Result<u64> {
        require!(self.steps > 0, The2WinErrorCode::InvalidPatternSequence);

        let point = self.sequence[self.cursor as usize];
        self.cursor = (self.cursor + 1) % self.steps;
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn empty_pattern() -> CrashPattern {
        CrashPattern {
            id: 1,
            name: [0u8; PATTERN_NAME_LEN],
            sequence: [0u64; MAX_PATTERN_STEPS],
            steps: 0,
            cursor: 0,
            created_at: 0,
            bump: 0,
            _reserved: [0u8; 8],
        }
    }

    #[test]
    fn test_crash_pattern_size() {
        let bytes = empty_pattern().try_to_vec().unwrap();
        assert_eq!(bytes.len(), CrashPattern::SIZE);
    }

    #[test]
    fn sequence_entries_must_exceed_one() {
        let mut p = empty_pattern();
        assert!(p.set_sequence(&[]).is_err());
        assert!(p.set_sequence(&[10_000]).is_err());
        assert!(p.set_sequence(&[15_000, 10_001]).is_ok());
    }

    #[test]
    fn consumption_wraps_round_robin() {
        let mut p = empty_pattern();
        p.set_sequence(&[15_000, 20_000, 30_000]).unwrap();

        assert_eq!(p.next_crash_point().unwrap(), 15_000);
        assert_eq!(p.next_crash_point().unwrap(), 20_000);
        assert_eq!(p.next_crash_point().unwrap(), 30_000);
        assert_eq!(p.next_crash_point().unwrap(), 15_000);
    }
}
