use crate::constants::{BPS_DENOM, GROWTH_BPS_PER_TICK, MAX_MULTIPLIER_BPS, MULTIPLIER_START_BPS};

/// Multiplier after `ticks` slots of Running, in bps. Compounds by
/// GROWTH_BPS_PER_TICK per tick from exactly 1.00x at tick 0, saturating at
/// the ceiling. Pure, so the chain, the operator and every client compute
/// the identical ramp from the round's start slot.
pub fn multiplier_after_ticks(ticks: u64) -> u64 {
    let mut m = MULTIPLIER_START_BPS;
    let mut i = 0u64;
    while i < ticks {
        if m >= MAX_MULTIPLIER_BPS {
            return MAX_MULTIPLIER_BPS;
        }
        m = m.saturating_mul(BPS_DENOM + GROWTH_BPS_PER_TICK) / BPS_DENOM;
        i += 1;
    }
    m.min(MAX_MULTIPLIER_BPS)
}

/// Smallest tick at which the ramp reaches `target_bps`. A target at or
/// below 1.00x (an instant bust) crashes at tick 0; a target above the
/// ceiling resolves at the tick the ceiling is hit.
pub fn ticks_to_reach(target_bps: u64) -> u64 {
    let mut m = MULTIPLIER_START_BPS;
    let mut ticks = 0u64;
    while m < target_bps {
        if m >= MAX_MULTIPLIER_BPS {
            break;
        }
        m = m.saturating_mul(BPS_DENOM + GROWTH_BPS_PER_TICK) / BPS_DENOM;
        ticks += 1;
    }
    ticks
}

/// Payout for a stake cashed out at `multiplier_bps`, floored to whole units.
pub fn payout_for(amount: u64, multiplier_bps: u64) -> u64 {
    ((amount as u128 * multiplier_bps as u128) / BPS_DENOM as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_starts_at_exactly_one() {
        assert_eq!(multiplier_after_ticks(0), MULTIPLIER_START_BPS);
    }

    #[test]
    fn ramp_is_monotone_and_capped() {
        let mut prev = 0u64;
        for t in 0..2_000 {
            let m = multiplier_after_ticks(t);
            assert!(m >= prev);
            assert!(m <= MAX_MULTIPLIER_BPS);
            prev = m;
        }
        assert_eq!(multiplier_after_ticks(2_000), MAX_MULTIPLIER_BPS);
    }

    #[test]
    fn first_tick_compounds_by_growth_rate() {
        assert_eq!(
            multiplier_after_ticks(1),
            MULTIPLIER_START_BPS * (BPS_DENOM + GROWTH_BPS_PER_TICK) / BPS_DENOM
        );
    }

    #[test]
    fn ticks_to_reach_inverts_the_ramp() {
        for t in 0..200 {
            let m = multiplier_after_ticks(t);
            let back = ticks_to_reach(m);
            assert!(back <= t);
            assert!(multiplier_after_ticks(back) >= m);
        }
    }

    #[test]
    fn instant_bust_crashes_at_tick_zero() {
        assert_eq!(ticks_to_reach(MULTIPLIER_START_BPS), 0);
        assert_eq!(ticks_to_reach(0), 0);
    }

    #[test]
    fn target_above_ceiling_terminates() {
        let ticks = ticks_to_reach(u64::MAX);
        assert_eq!(multiplier_after_ticks(ticks), MAX_MULTIPLIER_BPS);
    }

    #[test]
    fn payouts_floor_to_whole_units() {
        // 20 at 1.40x → 28, the reference cash-out scenario.
        assert_eq!(payout_for(20, 14_000), 28);
        assert_eq!(payout_for(20, 10_000), 20);
        // 3 at 1.50x floors 4.5 down to 4.
        assert_eq!(payout_for(3, 15_000), 4);
    }
}
