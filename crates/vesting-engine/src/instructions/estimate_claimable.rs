use crate::address::{beneficiary_account_address, Address};
use crate::error::Result;
use crate::state::{BeneficiaryAccount, VestingAccount};
use crate::store::{read_record, RecordStore};
use crate::utils::vesting_math::{claimable_amount, vested_amount};

/// Read-only quote of a schedule's position at `now`. Mutates nothing.
pub fn estimate_claimable(
    store: &dyn RecordStore,
    vesting_account: Address,
    beneficiary: Address,
    now: i64,
) -> Result<VestingQuote> {
    let _grant: VestingAccount = read_record(store, &vesting_account)?;

    let beneficiary_account = beneficiary_account_address(&vesting_account, &beneficiary);
    let schedule: BeneficiaryAccount = read_record(store, &beneficiary_account)?;

    Ok(VestingQuote {
        vesting_account,
        beneficiary,
        vested_amount: vested_amount(&schedule, now)?,
        total_claimed: schedule.total_claimed,
        claimable: claimable_amount(&schedule, now)?,
        timestamp: now,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingQuote {
    pub vesting_account: Address,
    pub beneficiary: Address,
    pub vested_amount: u64,
    pub total_claimed: u64,
    pub claimable: u64,
    pub timestamp: i64,
}
