use tracing::info;

use crate::address::{beneficiary_account_address, Address};
use crate::custody::TokenCustody;
use crate::error::{require, Result, VestingError};
use crate::state::{BeneficiaryAccount, VestingAccount};
use crate::store::{read_record, write_record, RecordStore};
use crate::utils::vesting_math::validate_schedule;

/// Create a beneficiary schedule under a grant.
///
/// Sufficiency is a point-in-time check against the treasury balance at
/// creation; the host serializes competing creations and fundings against
/// the same treasury.
#[allow(clippy::too_many_arguments)]
pub fn initialize_vesting_schedule(
    store: &mut dyn RecordStore,
    custody: &mut dyn TokenCustody,
    admin: Address,
    vesting_account: Address,
    beneficiary: Address,
    start_time: i64,
    end_time: i64,
    total_amount: u64,
    cliff_time: i64,
) -> Result<VestingScheduleInitialized> {
    let grant: VestingAccount = read_record(store, &vesting_account)?;
    require!(grant.admin == admin, VestingError::UnAuthorized);

    validate_schedule(start_time, end_time, total_amount, cliff_time)?;

    let beneficiary_account = beneficiary_account_address(&vesting_account, &beneficiary);
    require!(
        !store.contains(&beneficiary_account),
        VestingError::DuplicateRecord
    );

    require!(
        custody.balance_of(&grant.treasury)? >= total_amount,
        VestingError::NotEnoughTokensInTreasury
    );

    let record = BeneficiaryAccount::new(
        vesting_account,
        beneficiary,
        start_time,
        end_time,
        total_amount,
        cliff_time,
    );
    write_record(store, beneficiary_account, &record);

    info!(
        vesting_account = %vesting_account,
        beneficiary = %beneficiary,
        total_amount,
        "initialized vesting schedule"
    );

    Ok(VestingScheduleInitialized {
        vesting_account,
        beneficiary_account,
        beneficiary,
        start_time,
        end_time,
        cliff_time,
        total_amount,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingScheduleInitialized {
    pub vesting_account: Address,
    pub beneficiary_account: Address,
    pub beneficiary: Address,
    pub start_time: i64,
    pub end_time: i64,
    pub cliff_time: i64,
    pub total_amount: u64,
}
