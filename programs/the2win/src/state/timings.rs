use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct PhaseTimings {
    /// Game this entry belongs to (GAME_CRASH / GAME_BOXES / GAME_WINGO).
    pub game: u8,

    /// Betting window length (Crash/Boxes `waiting`, Wingo `betting`).
    pub betting_secs: u32,

    /// Locked window length; 0 for games without a locked phase.
    pub locked_secs: u32,

    /// Delay between a round resolving and the next one opening.
    pub intermission_secs: u32,

    pub _reserved: [u8; 3],
}

impl PhaseTimings {
    pub const SIZE: usize =
        1  // game
            + 4  // betting_secs
            + 4  // locked_secs
            + 4  // intermission_secs
            + 3; // _reserved

    #[inline]
    pub fn betting(&self) -> i64 {
        self.betting_secs as i64
    }

    #[inline]
    pub fn locked(&self) -> i64 {
        self.locked_secs as i64
    }

    #[inline]
    pub fn intermission(&self) -> i64 {
        self.intermission_secs as i64
    }
}
