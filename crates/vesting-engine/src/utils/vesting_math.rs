//! Time-based entitlement math.
//!
//! All functions are pure: the caller supplies `now`, nothing here reads a
//! clock. Amounts ramp linearly from `start_time` (not from `cliff_time`)
//! to `end_time`, with integer truncation toward zero. Once a schedule is
//! revoked the ramp is evaluated at the freeze point forever.

use crate::error::{require, Result, VestingError};
use crate::state::BeneficiaryAccount;

/// Entitlement vested at `now`, in the grant mint's smallest unit.
///
/// Monotone non-decreasing in `now` while the schedule is unrevoked, and
/// constant afterwards.
pub fn vested_amount(schedule: &BeneficiaryAccount, now: i64) -> Result<u64> {
    let effective_time = schedule.revocation_time().unwrap_or(now);

    if effective_time < schedule.cliff_time {
        return Ok(0);
    }
    if effective_time >= schedule.end_time {
        return Ok(schedule.total_amount);
    }

    let elapsed = effective_time.saturating_sub(schedule.start_time).max(0);
    let duration = schedule.end_time.saturating_sub(schedule.start_time);

    let vested = (schedule.total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Vested entitlement minus what has already been claimed.
pub fn claimable_amount(schedule: &BeneficiaryAccount, now: i64) -> Result<u64> {
    Ok(vested_amount(schedule, now)?.saturating_sub(schedule.total_claimed))
}

/// Creation-time schedule validation.
///
/// The cliff must lie strictly inside the ramp: `start < cliff < end`.
pub fn validate_schedule(
    start_time: i64,
    end_time: i64,
    total_amount: u64,
    cliff_time: i64,
) -> Result<()> {
    require!(
        total_amount > 0,
        VestingError::VestingAmountShouldBePositive
    );
    require!(
        start_time < end_time && start_time < cliff_time && cliff_time < end_time,
        VestingError::InvalidVestingSchedule
    );
    Ok(())
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::address::Address;

    fn schedule_times() -> impl Strategy<Value = (i64, i64, i64)> {
        (0i64..1_000_000, 1i64..1_000_000, 1i64..1_000_000).prop_map(
            |(start, to_cliff, to_end)| {
                let cliff = start + to_cliff;
                (start, cliff, cliff + to_end)
            },
        )
    }

    fn build(start: i64, cliff: i64, end: i64, total: u64) -> BeneficiaryAccount {
        BeneficiaryAccount::new(
            Address::new([1u8; 32]),
            Address::new([2u8; 32]),
            start,
            end,
            total,
            cliff,
        )
    }

    proptest! {
        #[test]
        fn vested_is_monotone_and_bounded(
            (start, cliff, end) in schedule_times(),
            total in 1u64..=1_000_000_000_000,
            t1 in -1_000_000i64..4_000_000,
            advance in 0i64..4_000_000,
        ) {
            let s = build(start, cliff, end, total);
            let v1 = vested_amount(&s, t1).unwrap();
            let v2 = vested_amount(&s, t1 + advance).unwrap();
            prop_assert!(v1 <= v2);
            prop_assert!(v2 <= total);
        }

        #[test]
        fn vested_hits_exact_bounds(
            (start, cliff, end) in schedule_times(),
            total in 1u64..=1_000_000_000_000,
        ) {
            let s = build(start, cliff, end, total);
            prop_assert_eq!(vested_amount(&s, cliff - 1).unwrap(), 0);
            prop_assert_eq!(vested_amount(&s, end).unwrap(), total);
        }

        #[test]
        fn revocation_freezes_the_amount(
            (start, cliff, end) in schedule_times(),
            total in 1u64..=1_000_000_000_000,
            revoked_at in 0i64..3_000_000,
            later in 0i64..4_000_000,
        ) {
            let mut s = build(start, cliff, end, total);
            let at_freeze = vested_amount(&s, revoked_at).unwrap();
            s.set_revoked(revoked_at);
            prop_assert_eq!(vested_amount(&s, revoked_at + later).unwrap(), at_freeze);
        }
    }
}
