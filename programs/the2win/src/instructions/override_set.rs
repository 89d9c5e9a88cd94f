use anchor_lang::prelude::*;

use crate::errors::The2WinErrorCode;
use crate::events::{BoxesOverrideQueued, CrashOverrideQueued};
use crate::state::config::Config;
use crate::state::overrides::OverrideQueue;

#[derive(Accounts)]
pub struct QueueOverride<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ The2WinErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [OverrideQueue::SEED],
        bump = override_queue.bump,
    )]
    pub override_queue: Account<'info, OverrideQueue>,

    pub authority: Signer<'info>,
}

/// Queues a forced crash point for exactly the next Crash resolution.
/// Re-queuing before consumption replaces the previous value.
pub fn queue_crash_override_handler(
    ctx: Context<QueueOverride>,
    crash_point_bps: u64,
) -> Result<()> {
    let overrides = &mut ctx.accounts.override_queue;

    overrides.queue_crash(crash_point_bps)?;

    emit!(CrashOverrideQueued { crash_point_bps });

    Ok(())
}

/// Queues 1–3 forced winning boxes for exactly the next Boxes reveal.
/// Indexes are deduplicated preserving order; multipliers 5x/3x/2x follow
/// that order at reveal.
pub fn queue_boxes_override_handler(ctx: Context<QueueOverride>, indexes: Vec<u8>) -> Result<()> {
    let overrides = &mut ctx.accounts.override_queue;

    overrides.queue_boxes(&indexes)?;

    emit!(BoxesOverrideQueued {
        indexes: overrides.boxes,
        count: overrides.boxes_len,
    });

    Ok(())
}
