use tracing::info;

use crate::address::{beneficiary_account_address, Address};
use crate::error::{require, Result, VestingError};
use crate::state::{BeneficiaryAccount, VestingAccount};
use crate::store::{read_record, write_record, RecordStore};
use crate::utils::vesting_math::vested_amount;

/// Freeze a schedule's accrual at `now`.
///
/// Whatever had vested by the freeze point stays claimable; revoking an
/// already-revoked schedule is rejected so the freeze point never moves.
pub fn revoke_beneficiary_account(
    store: &mut dyn RecordStore,
    admin: Address,
    vesting_account: Address,
    beneficiary: Address,
    now: i64,
) -> Result<BeneficiaryRevoked> {
    let grant: VestingAccount = read_record(store, &vesting_account)?;
    require!(grant.admin == admin, VestingError::UnAuthorized);

    let beneficiary_account = beneficiary_account_address(&vesting_account, &beneficiary);
    let mut schedule: BeneficiaryAccount = read_record(store, &beneficiary_account)?;
    require!(!schedule.is_revoked(), VestingError::AlreadyRevoked);

    schedule.set_revoked(now);
    let vested_at_revocation = vested_amount(&schedule, now)?;
    write_record(store, beneficiary_account, &schedule);

    info!(
        vesting_account = %vesting_account,
        beneficiary = %beneficiary,
        revoked_at = now,
        vested_at_revocation,
        "revoked beneficiary schedule"
    );

    Ok(BeneficiaryRevoked {
        vesting_account,
        beneficiary,
        revoked_at: now,
        vested_at_revocation,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryRevoked {
    pub vesting_account: Address,
    pub beneficiary: Address,
    pub revoked_at: i64,
    /// Ceiling the beneficiary can still claim up to.
    pub vested_at_revocation: u64,
}
