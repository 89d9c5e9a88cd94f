use anchor_lang::prelude::*;

use crate::constants::{BOX_COUNT, BOX_WINNER_COUNT, MAX_MULTIPLIER_BPS, MULTIPLIER_START_BPS};
use crate::errors::The2WinErrorCode;

/// One-shot forced outcomes, queued by an admin and consumed by exactly the
/// next resolution of the matching game, then cleared. Modelled as an
/// explicit queue account so consumption is a single take-and-clear,
/// not a flag scattered through the state machines.
#[account]
pub struct OverrideQueue {
    /// Forced crash point in bps (0 = nothing queued).
    pub crash_point_bps: u64,

    /// Forced winning boxes, multiplier order; active entries are
    /// `boxes[0..boxes_len]`.
    pub boxes: [u8; BOX_WINNER_COUNT],
    pub boxes_len: u8,

    pub bump: u8,
    pub _reserved: [u8; 16],
}

impl OverrideQueue {
    pub const SEED: &'static [u8] = b"override_queue";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // crash_point_bps
            + BOX_WINNER_COUNT // boxes
            + 1  // boxes_len
            + 1  // bump
            + 16; // reserved

    /// Queues a forced crash point; it must be at least an instant bust and
    /// within the ramp ceiling.
    pub fn queue_crash(&mut self, crash_point_bps: u64) -> Result<()> {
        require!(
            crash_point_bps >= MULTIPLIER_START_BPS && crash_point_bps <= MAX_MULTIPLIER_BPS,
            The2WinErrorCode::InvalidCrashPoint
        );
        self.crash_point_bps = crash_point_bps;
        Ok(())
    }

    /// Takes the queued crash point, clearing it (consume-once).
    pub fn take_crash(&mut self) -> Option<u64> {
        if self.crash_point_bps == 0 {
            return None;
        }
        let point = self.crash_point_bps;
        self.crash_point_bps = 0;
        Some(point)
    }

    /// Queues 1..=3 forced box indexes. Indexes are range-checked and
    /// deduplicated, preserving first-seen order.
    pub fn queue_boxes(&mut self, indexes: &[u8]) -> Result<()> {
        require!(
            !indexes.is_empty() && indexes.len() <= BOX_WINNER_COUNT,
            The2WinErrorCode::InvalidOverrideIndexes
        );

        let mut deduped = [0u8; BOX_WINNER_COUNT];
        let mut len = 0usize;
        for idx in indexes {
            require!(*idx < BOX_COUNT, The2WinErrorCode::InvalidBoxIndex);
            if !deduped[..len].contains(idx) {
                deduped[len] = *idx;
                len += 1;
            }
        }

        self.boxes = deduped;
        self.boxes_len = len as u8;
        Ok(())
    }

    /// Takes the queued box indexes, clearing them (consume-once).
    pub fn take_boxes(&mut self) -> Option<([u8; BOX_WINNER_COUNT], usize)> {
        if self.boxes_len == 0 {
            return None;
        }
        let taken = (self.boxes, self.boxes_len as usize);
        self.boxes = [0u8; BOX_WINNER_COUNT];
        self.boxes_len = 0;
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn empty_queue() -> OverrideQueue {
        OverrideQueue {
            crash_point_bps: 0,
            boxes: [0u8; BOX_WINNER_COUNT],
            boxes_len: 0,
            bump: 0,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn test_override_queue_size() {
        let bytes = empty_queue().try_to_vec().unwrap();
        assert_eq!(bytes.len(), OverrideQueue::SIZE);
    }

    #[test]
    fn crash_override_is_consumed_exactly_once() {
        let mut q = empty_queue();
        q.queue_crash(30_000).unwrap();

        assert_eq!(q.take_crash(), Some(30_000));
        assert_eq!(q.take_crash(), None);
    }

    #[test]
    fn crash_override_below_one_is_rejected() {
        let mut q = empty_queue();
        assert!(q.queue_crash(9_999).is_err());
        assert!(q.queue_crash(10_000).is_ok());
    }

    #[test]
    fn box_overrides_dedupe_and_preserve_order() {
        let mut q = empty_queue();
        q.queue_boxes(&[3, 6, 3]).unwrap();

        let (boxes, len) = q.take_boxes().unwrap();
        assert_eq!(len, 2);
        assert_eq!(&boxes[..len], &[3, 6]);
        assert_eq!(q.take_boxes(), None);
    }

    #[test]
    fn out_of_range_box_is_rejected() {
        let mut q = empty_queue();
        assert!(q.queue_boxes(&[10]).is_err());
        assert!(q.queue_boxes(&[]).is_err());
    }
}
